use std::fs;

use cinder::{
    config::{CoercionPolicy, Config},
    error::{CinderError, ParseError, RuntimeError, SemanticError},
    interpreter::evaluator::core::Interpreter,
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn program_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "cm"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match run(&source, Config::default()) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn assert_output(src: &str, expected: &str) {
    match run(src, Config::default()) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CinderError {
    match run(src, Config::default()) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
        Err(e) => e,
    }
}

fn widened() -> Config {
    Config { coercion: CoercionPolicy::WidenIntToFloat,
             ..Config::default() }
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_output("int x = 1 + 2;\nprint(x);", "3\n");
    assert_output("int x = 7 * 9;\nprint(x);", "63\n");
    assert_output("int x = 8 - 5 - 1;\nprint(x);", "2\n");
    assert_output("print(2 + 3 * 4);", "14\n");
    assert_output("print((2 + 3) * 4);", "20\n");
    assert_output("print(-3 + 1);", "-2\n");
}

#[test]
fn division_always_produces_a_float() {
    assert_output("print(10 / 2);", "5.0\n");
    assert_output("print(7 / 2);", "3.5\n");
    assert_output("float half = 1 / 2;\nprint(half);", "0.5\n");
}

#[test]
fn modulo_follows_the_sign_of_the_divisor() {
    assert_output("print(-7 % 3);", "2\n");
    assert_output("print(7 % -3);", "-2\n");
    assert_output("print(7 % 3);", "1\n");
    assert_output("print(-7.5 % 2.0);", "0.5\n");
}

#[test]
fn mixed_arithmetic_promotes_to_float() {
    assert_output("float x = 1 + 0.5;\nprint(x);", "1.5\n");
    assert_output("print(2 * 1.5);", "3.0\n");
}

#[test]
fn printing_each_type() {
    assert_output("print(42);\nprint(2.0);\nprint(true);\nprint('c');\nprint(\"hi there\");",
                  "42\n2.0\ntrue\nc\nhi there\n");
}

#[test]
fn string_concatenation() {
    assert_output("string s = \"ab\" + \"cd\";\nprint(s);", "abcd\n");
    assert_output("string s = \"ab\" + 'c';\nprint(s);", "abc\n");
}

#[test]
fn non_zero_integer_is_truthy() {
    assert_output("int a = 10; if (a) { print(1); } else { print(0); }", "1\n");
    assert_output("int a = 0; if (a) { print(1); } else { print(0); }", "0\n");
    assert_output("if (\"\") { print(1); } else { print(0); }", "0\n");
    assert_output("if ('a') { print(1); }", "1\n");
    assert_output("if (0.0) { print(1); } else { print(0); }", "0\n");
}

#[test]
fn integer_and_float_compare_by_value() {
    assert_output("print(1 == 1.0);", "true\n");
    assert_output("print(1 != 1.0);", "false\n");
    assert_output("print(2 < 2.5);", "true\n");
}

#[test]
fn comparing_incompatible_types_is_a_runtime_error() {
    let err = assert_failure("print(1 == \"1\");");
    assert!(matches!(err, CinderError::Runtime(RuntimeError::TypeError { line: 1, .. })));

    let err = assert_failure("print(true < 1);");
    assert!(matches!(err, CinderError::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn ordering_of_chars_and_strings() {
    assert_output("print('a' < 'b');\nprint(\"abc\" >= \"abd\");", "true\nfalse\n");
}

#[test]
fn logical_operators_use_truthiness() {
    assert_output("print(1 && 0);\nprint(0 || 2);\nprint(!0);\nprint(!\"x\");",
                  "false\ntrue\ntrue\nfalse\n");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let src = "int calls = 0;
int touch() {
    calls = calls + 1;
    return 1;
}
bool a = false && touch();
bool b = true || touch();
print(calls);";
    assert_output(src, "2\n");
}

#[test]
fn redeclaration_in_same_block_fails_at_second_line() {
    let err = assert_failure("int a = 1;\nint a = 2;");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::DuplicateDeclaration { name: "a".to_string(),
                                                                         line: 2 }));
}

#[test]
fn shadowing_in_inner_block_is_allowed() {
    let src = "int a = 1;
{
    int a = 2;
    print(a);
}
print(a);";
    assert_output(src, "2\n1\n");
}

#[test]
fn assignment_updates_the_nearest_binding() {
    let src = "int a = 1;
if (true) {
    a = 5;
}
print(a);";
    assert_output(src, "5\n");
}

#[test]
fn block_locals_do_not_leak() {
    let err = assert_failure("if (true) {\n    int inner = 1;\n}\nprint(inner);");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::UndeclaredVariable { name: "inner".to_string(),
                                                                       line: 4 }));
}

#[test]
fn undeclared_names_are_rejected_before_declaration() {
    let err = assert_failure("int a = a + 1;");
    assert!(matches!(err, CinderError::Semantic(SemanticError::UndeclaredVariable { .. })));

    let err = assert_failure("b = 1;");
    assert!(matches!(err, CinderError::Semantic(SemanticError::UndeclaredVariable { .. })));
}

#[test]
fn function_call_returns_value() {
    assert_output("int add(int a, int b) { return a + b; } int x = add(3, 4); print(x);",
                  "7\n");
}

#[test]
fn recursion() {
    let src = "int fact(int n) {
    if (n <= 1) {
        return 1;
    }
    return n * fact(n - 1);
}
print(fact(10));";
    assert_output(src, "3628800\n");
}

#[test]
fn void_function_as_statement() {
    let src = "void greet(string name) {
    print(\"hello \" + name);
    return;
}
greet(\"ada\");
greet(\"bob\");";
    assert_output(src, "hello ada\nhello bob\n");
}

#[test]
fn functions_see_globals_but_not_caller_locals() {
    let src = "int g = 10;
int read() {
    return g;
}
{
    int g = 99;
    print(read());
}";
    assert_output(src, "10\n");

    let err = assert_failure("void f() {\n    print(local);\n}\n{\n    int local = 1;\n    f();\n}");
    assert!(matches!(err, CinderError::Semantic(SemanticError::UndeclaredVariable { line: 2, .. })));
}

#[test]
fn functions_mutate_globals() {
    let src = "int counter = 0;
void bump() {
    counter = counter + 1;
}
bump();
bump();
print(counter);";
    assert_output(src, "2\n");
}

#[test]
fn calling_an_undeclared_function_fails() {
    let err = assert_failure("int x = 1;\nprint(missing(x));");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::UndefinedFunction { name: "missing".to_string(),
                                                                      line: 2 }));
}

#[test]
fn calling_before_declaration_fails() {
    let err = assert_failure("print(later());\nint later() { return 1; }");
    assert!(matches!(err, CinderError::Semantic(SemanticError::UndefinedFunction { line: 1, .. })));
}

#[test]
fn wrong_argument_count_fails() {
    let err = assert_failure("int add(int a, int b) { return a + b; }\nprint(add(1));");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::ArityMismatch { name:     "add".to_string(),
                                                                  expected: 2,
                                                                  found:    1,
                                                                  line:     2, }));
}

#[test]
fn duplicate_functions_and_parameters_fail() {
    let err = assert_failure("int f() { return 1; }\nint f() { return 2; }");
    assert!(matches!(err, CinderError::Semantic(SemanticError::DuplicateFunction { line: 2, .. })));

    let err = assert_failure("int f(int a, int a) { return a; }");
    assert!(matches!(err, CinderError::Semantic(SemanticError::DuplicateParameter { .. })));
}

#[test]
fn return_outside_function_fails() {
    let err = assert_failure("int a = 1;\nreturn a;");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::ReturnOutsideFunction { line: 2 }));
}

#[test]
fn loop_control_outside_loop_fails() {
    let err = assert_failure("break;");
    assert!(matches!(err,
                     CinderError::Semantic(SemanticError::LoopControlOutsideLoop { keyword: "break",
                                                                                   .. })));

    let src = "while (true) {\n    void f() {\n        continue;\n    }\n    break;\n}";
    let err = assert_failure(src);
    assert!(matches!(err,
                     CinderError::Semantic(SemanticError::LoopControlOutsideLoop { keyword:
                                                                                       "continue",
                                                                                   line: 3 })));
}

#[test]
fn while_loop_with_continue_and_break() {
    let src = "int i = 0;
while (i < 5) {
    if (i == 2) {
        i = i + 1;
        continue;
    }
    if (i == 4) {
        break;
    }
    print(i);
    i = i + 1;
}";
    assert_output(src, "0\n1\n3\n");
}

#[test]
fn continue_rechecks_the_condition() {
    let src = "int i = 0;
while (i < 5) {
    i = i + 1;
    if (i == 2) {
        continue;
    }
    if (i == 4) {
        break;
    }
    print(i);
}";
    assert_output(src, "1\n3\n");
}

#[test]
fn return_from_inside_a_loop() {
    let src = "int first_over(int limit) {
    int n = 0;
    while (true) {
        n = n + 1;
        if (n * n > limit) {
            return n;
        }
    }
    return 0;
}
print(first_over(50));";
    assert_output(src, "8\n");
}

#[test]
fn nested_loops_break_only_the_inner_one() {
    let src = "int i = 0;
while (i < 3) {
    int j = 0;
    while (true) {
        if (j == i) {
            break;
        }
        j = j + 1;
    }
    print(j);
    i = i + 1;
}";
    assert_output(src, "0\n1\n2\n");
}

#[test]
fn declared_types_are_checked() {
    let err = assert_failure("int a = \"text\";");
    assert_eq!(err,
               CinderError::Semantic(SemanticError::TypeMismatch { expected: cinder::ast::DataType::Int,
                                                                 found:    cinder::ast::DataType::String,
                                                                 line:     1, }));

    let err = assert_failure("bool flag = true;\nflag = 1;");
    assert!(matches!(err, CinderError::Semantic(SemanticError::TypeMismatch { line: 2, .. })));

    let err = assert_failure("int f() {\n    return 'c';\n}");
    assert!(matches!(err, CinderError::Semantic(SemanticError::TypeMismatch { line: 2, .. })));

    let err = assert_failure("void f() {\n    return 1;\n}");
    assert!(matches!(err, CinderError::Semantic(SemanticError::TypeMismatch { line: 2, .. })));
}

#[test]
fn strict_policy_rejects_int_to_float() {
    let err = assert_failure("float x = 1;");
    assert!(matches!(err, CinderError::Semantic(SemanticError::TypeMismatch { .. })));
}

#[test]
fn widening_policy_converts_int_to_float() {
    let src = "float scale(float x) {
    return x * 2;
}
float y = 3;
y = 4;
print(y);
print(scale(2));";
    assert_eq!(run(src, widened()).unwrap(), "4.0\n4.0\n");

    assert!(run("int x = 1.5;", widened()).is_err());
}

#[test]
fn void_result_used_as_value_fails_at_runtime() {
    let err = assert_failure("void nothing() {\n}\nint x = 1;\nprint(nothing());");
    assert_eq!(err,
               CinderError::Runtime(RuntimeError::MissingValue { name: "nothing".to_string(),
                                                                line: 4 }));
}

#[test]
fn division_by_zero_and_overflow() {
    let err = assert_failure("int zero = 0;\nprint(1 / zero);");
    assert_eq!(err, CinderError::Runtime(RuntimeError::DivisionByZero { line: 2 }));

    let err = assert_failure("print(5 % 0);");
    assert_eq!(err, CinderError::Runtime(RuntimeError::DivisionByZero { line: 1 }));

    let err = assert_failure("int big = 9223372036854775807;\nprint(big + 1);");
    assert_eq!(err, CinderError::Runtime(RuntimeError::Overflow { line: 2 }));
}

#[test]
fn arithmetic_on_bools_is_a_runtime_error() {
    let err = assert_failure("print(true + 1);");
    assert!(matches!(err, CinderError::Runtime(RuntimeError::TypeError { line: 1, .. })));
}

#[test]
fn deep_recursion_hits_the_call_limit() {
    let config = Config { max_call_depth: 32,
                          ..Config::default() };
    let src = "int down(int n) {\n    return down(n + 1);\n}\nprint(down(0));";
    let err = run(src, config).unwrap_err();
    assert_eq!(err,
               CinderError::Runtime(RuntimeError::RecursionLimit { name:  "down".to_string(),
                                                                 limit: 32,
                                                                 line:  2, }));
}

#[test]
fn output_before_a_runtime_error_is_kept_by_the_interpreter() {
    let program = cinder::parse("print(1);\nprint(1 / 0);\nprint(2);").unwrap();
    let mut interpreter = Interpreter::new(Config::default());

    assert!(interpreter.interpret(&program).is_err());
    assert_eq!(interpreter.output(), "1\n");
}

#[test]
fn execution_is_deterministic() {
    let src = "int i = 0;
int total = 0;
while (i < 10) {
    total = total + i * i;
    i = i + 1;
}
float avg = total / 10;";
    assert_eq!(run(src, Config::default()), run(src, Config::default()));
    assert_eq!(run(src, Config::default()).unwrap(), "");
}

#[test]
fn independent_runs_do_not_share_output() {
    let handles: Vec<_> = (0..4).map(|n| {
                                    std::thread::spawn(move || {
                                        run(&format!("print({n});\nprint({n} * 10);"),
                                            Config::default())
                                    })
                                })
                                .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), format!("{n}\n{}\n", n * 10));
    }
}

#[test]
fn syntax_errors() {
    let err = assert_failure("int a = 1\nprint(a);");
    assert!(matches!(err, CinderError::Syntax(ParseError::UnexpectedToken { line: 2, .. })));

    let err = assert_failure("int a = 1 @ 2;");
    assert_eq!(err,
               CinderError::Syntax(ParseError::IllegalCharacter { character: '@',
                                                                 line:      1, }));

    let err = assert_failure("string s = \"open;");
    assert_eq!(err, CinderError::Syntax(ParseError::UnterminatedLiteral { line: 1 }));

    let err = assert_failure("if (true) { print(1); } else if (false) { print(2); }");
    assert!(matches!(err, CinderError::Syntax(ParseError::UnexpectedToken { .. })));

    let err = assert_failure("void v = 1;");
    assert!(matches!(err, CinderError::Syntax(ParseError::UnexpectedToken { .. })));

    let err = assert_failure("int f(int a,) { return a; }");
    assert!(matches!(err, CinderError::Syntax(ParseError::UnexpectedToken { .. })));
}

#[test]
fn comments_and_blank_lines_keep_line_numbers() {
    let err = assert_failure("// header\n\nint a = 1;\n// note\nint a = 2;");
    assert!(matches!(err,
                     CinderError::Semantic(SemanticError::DuplicateDeclaration { line: 5, .. })));
}

#[test]
fn large_integers_promote_to_the_nearest_float() {
    assert_output("print(9007199254740993 / 1);", "9007199254740992.0\n");
    assert_output("int b = 9007199254740993;\nfloat f = 0.5;\nprint(b + f);",
                  "9007199254740992.0\n");
    assert_output("print(9007199254740993 == 1.0);", "false\n");
    assert_output("print(9223372036854775807 > 1.5);", "true\n");

    let src = "float big = 9007199254740993;\nprint(big);";
    assert_eq!(run(src, widened()).unwrap(), "9007199254740992.0\n");
}

#[test]
fn floats_print_in_shortest_round_trip_form() {
    assert_output("print(100000000000000000000.0);", "1e20\n");
    assert_output("print(0.1 + 0.2);", "0.30000000000000004\n");
    assert_output("print(2.0 * 3.0);", "6.0\n");
}

#[test]
fn nesting_limit_comes_from_the_config() {
    let config = Config { max_nesting_depth: 8,
                          ..Config::default() };

    let shallow = format!("{}print(1);{}", "{".repeat(4), "}".repeat(4));
    assert_eq!(run(&shallow, config).unwrap(), "1\n");

    let deep = format!("{}print(1);{}", "{".repeat(9), "}".repeat(9));
    assert_eq!(run(&deep, config).unwrap_err(),
               CinderError::Syntax(ParseError::NestingTooDeep { limit: 8,
                                                                line:  1, }));

    let parens = format!("print({}1{});", "(".repeat(50), ")".repeat(50));
    assert_output(&parens, "1\n");
}

#[test]
fn functions_declared_in_blocks_resolve_only_while_visible() {
    let src = "{
    int f(int n) {
        if (n == 0) {
            return 0;
        }
        return f(n - 1);
    }
    print(f(0));
    print(f(3));
}";
    let program = cinder::parse(src).unwrap();
    assert_eq!(cinder::analyze(&program), Ok(()));

    let mut interpreter = Interpreter::new(Config::default());
    assert_eq!(interpreter.interpret(&program).unwrap_err(),
               RuntimeError::UnknownFunction { name: "f".to_string(),
                                               line: 6, });
    assert_eq!(interpreter.output(), "0\n");

    let err = assert_failure("{\n    int g() {\n        return 1;\n    }\n}\nprint(g());");
    assert_eq!(err,
               CinderError::Runtime(RuntimeError::UnknownFunction { name: "g".to_string(),
                                                                  line: 6, }));
}
