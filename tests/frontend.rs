use cinder::{
    ast::{BinaryOperator, DataType, Expr, LiteralValue, Statement},
    config::{CoercionPolicy, Config},
    error::{ParseError, SemanticError},
    interpreter::{
        analyzer::core::SemanticAnalyzer,
        lexer::{Lexer, Token, TokenKind, tokenize},
    },
    report::format_diagnostic,
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap()
                    .into_iter()
                    .map(|t| t.kind)
                    .collect()
}

/// Writes a token back the way it could appear in source.
fn spell(kind: &TokenKind) -> String {
    match kind {
        TokenKind::IntLit(n) => n.to_string(),
        TokenKind::FloatLit(x) => format!("{x:?}"),
        TokenKind::CharLit(c) => format!("'{c}'"),
        TokenKind::StringLit(s) => format!("\"{s}\""),
        TokenKind::Identifier(name) => name.clone(),
        TokenKind::Type(t) => t.to_string(),
        TokenKind::Eof => String::new(),
        other => {
            let shown = other.to_string();
            shown.trim_matches('\'').to_string()
        },
    }
}

fn literals(tokens: &[Token]) -> Vec<String> {
    let mut values: Vec<String> = tokens.iter()
                                        .filter_map(Token::literal_value)
                                        .map(|v| format!("{v:?}"))
                                        .collect();
    values.sort();
    values
}

#[test]
fn keywords_types_and_operators() {
    assert_eq!(kinds("while (x <= 10) { x = x + 1; }"),
               vec![TokenKind::While,
                    TokenKind::LParen,
                    TokenKind::Identifier("x".into()),
                    TokenKind::LessEqual,
                    TokenKind::IntLit(10),
                    TokenKind::RParen,
                    TokenKind::LBrace,
                    TokenKind::Identifier("x".into()),
                    TokenKind::Assign,
                    TokenKind::Identifier("x".into()),
                    TokenKind::Plus,
                    TokenKind::IntLit(1),
                    TokenKind::Semicolon,
                    TokenKind::RBrace,
                    TokenKind::Eof]);

    assert_eq!(kinds("void string_len whiles"),
               vec![TokenKind::Type(DataType::Void),
                    TokenKind::Identifier("string_len".into()),
                    TokenKind::Identifier("whiles".into()),
                    TokenKind::Eof]);

    assert_eq!(kinds("a==b!=c&&!d||e"),
               vec![TokenKind::Identifier("a".into()),
                    TokenKind::EqualEqual,
                    TokenKind::Identifier("b".into()),
                    TokenKind::BangEqual,
                    TokenKind::Identifier("c".into()),
                    TokenKind::AndAnd,
                    TokenKind::Bang,
                    TokenKind::Identifier("d".into()),
                    TokenKind::OrOr,
                    TokenKind::Identifier("e".into()),
                    TokenKind::Eof]);
}

#[test]
fn literal_tokens() {
    assert_eq!(kinds("3.25 2. 7 'q' \"two words\" true false"),
               vec![TokenKind::FloatLit(3.25),
                    TokenKind::FloatLit(2.0),
                    TokenKind::IntLit(7),
                    TokenKind::CharLit('q'),
                    TokenKind::StringLit("two words".into()),
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Eof]);
}

#[test]
fn second_dot_ends_a_float_literal() {
    let scanned: Vec<_> = Lexer::new("1.2.3").map(|t| t.map(|t| t.kind)).collect();
    assert_eq!(scanned,
               vec![Ok(TokenKind::FloatLit(1.2)),
                    Err(ParseError::IllegalCharacter { character: '.',
                                                       line:      1, })]);

    let scanned: Vec<_> = Lexer::new("1..").map(|t| t.map(|t| t.kind)).collect();
    assert_eq!(scanned,
               vec![Ok(TokenKind::FloatLit(1.0)),
                    Err(ParseError::IllegalCharacter { character: '.',
                                                       line:      1, })]);
}

#[test]
fn token_lines_follow_newlines_comments_and_strings() {
    let tokens = tokenize("a\r\n// comment\n\"x\ny\" b\n\n  c").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 6, 6]);
}

#[test]
fn lexical_errors() {
    assert_eq!(tokenize("int a = 1;\nint b = #;").unwrap_err(),
               ParseError::IllegalCharacter { character: '#',
                                              line:      2, });
    assert_eq!(tokenize("\"never closed").unwrap_err(),
               ParseError::UnterminatedLiteral { line: 1 });
    assert_eq!(tokenize("'ab'").unwrap_err(),
               ParseError::InvalidCharLiteral { line: 1 });
    assert_eq!(tokenize("99999999999999999999").unwrap_err(),
               ParseError::LiteralTooLarge { line: 1 });
}

#[test]
fn lexer_stops_after_eof_or_first_error() {
    assert_eq!(Lexer::new("x y").count(), 3);
    assert_eq!(Lexer::new("x $ y").count(), 2);
}

#[test]
fn retokenizing_preserves_literal_multiset() {
    let sources = ["int a = 1; float b = 2.5; print(a + b);",
                   "string s = \"hi\"; char c = 'x'; bool t = true && !false;",
                   "while (i < 10) { if (i % 3 == 0) { print(\"fizz\"); } i = i + 1; }",
                   "int f(int n) { return n * 42 - 0; } print(f(7.0 / 2));"];

    for source in sources {
        let tokens = tokenize(source).unwrap();
        let respelled = tokens.iter()
                              .map(|t| spell(&t.kind))
                              .collect::<Vec<_>>()
                              .join(" ");
        let retokenized = tokenize(&respelled).unwrap();

        assert_eq!(literals(&tokens), literals(&retokenized), "source: {source}");
    }
}

#[test]
fn binary_operators_are_left_associative_with_precedence() {
    let program = cinder::parse("int x = 1 - 2 - 3 * 4;").unwrap();
    let Statement::VariableDeclaration { value, .. } = &program.statements[0] else {
        panic!("expected a declaration");
    };

    // (1 - 2) - (3 * 4)
    let Expr::BinaryOp { left, op, right, .. } = value else {
        panic!("expected a binary operation");
    };
    assert_eq!(*op, BinaryOperator::Sub);
    assert!(matches!(left.as_ref(),
                     Expr::BinaryOp { op: BinaryOperator::Sub,
                                      .. }));
    assert!(matches!(right.as_ref(),
                     Expr::BinaryOp { op: BinaryOperator::Mul,
                                      .. }));
}

#[test]
fn binary_operation_takes_the_line_of_its_left_operand() {
    let program = cinder::parse("int x = 1\n    +\n    2;").unwrap();
    let Statement::VariableDeclaration { value, line, .. } = &program.statements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(*line, 1);
    assert_eq!(value.line_number(), 1);
}

#[test]
fn statements_record_their_leading_line() {
    let source = "int a = 1;\n\nif (a) {\n    print(a);\n} else {\n    a = 2;\n}\nwhile (a) {\n    break;\n}";
    let program = cinder::parse(source).unwrap();
    let lines: Vec<usize> = program.statements
                                   .iter()
                                   .map(Statement::line_number)
                                   .collect();
    assert_eq!(lines, vec![1, 3, 8]);

    let Statement::If { else_block: Some(else_block), .. } = &program.statements[1] else {
        panic!("expected an if with an else block");
    };
    assert_eq!(else_block.statements[0].line_number(), 6);
}

#[test]
fn function_declarations() {
    let program = cinder::parse("float mix(int a, float b) {\n    return a + b;\n}\nmix(1, 2.0);")
        .unwrap();

    let Statement::Function(decl) = &program.statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(decl.name, "mix");
    assert_eq!(decl.return_type, DataType::Float);
    assert_eq!(decl.params.len(), 2);
    assert_eq!(decl.params[1].data_type, DataType::Float);
    assert_eq!(decl.body.statements.len(), 1);

    assert!(matches!(&program.statements[1],
                     Statement::Expression { expr: Expr::FunctionCall { arguments, .. },
                                             line: 4 } if arguments.len() == 2));
}

#[test]
fn literal_expressions() {
    let program = cinder::parse("print('a');").unwrap();
    assert!(matches!(&program.statements[0],
                     Statement::Print { expr: Expr::Literal { value: LiteralValue::Char('a'),
                                                              .. },
                                        .. }));
}

#[test]
fn syntax_error_messages_name_expected_and_found() {
    let err = cinder::parse("x + 1;").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1: Expected '=' or '(', found '+'.");

    let err = cinder::parse("print(1;").unwrap_err();
    assert_eq!(err.line(), Some(1));

    let err = cinder::parse("{ int a = 1;").unwrap_err();
    assert!(err.to_string().contains("end of input"), "{err}");
}

#[test]
fn analyzer_accepts_recursion_and_shadowed_parameters() {
    let program = cinder::parse("int count(int n) {\n    int n = 0;\n    if (n > 0) {\n        return count(n - 1);\n    }\n    return n;\n}")
        .unwrap();
    assert_eq!(cinder::analyze(&program), Ok(()));
}

#[test]
fn analyzer_checks_arguments_left_to_right() {
    let program = cinder::parse("int f(int a) { return a; }\nprint(f(g()));").unwrap();
    assert_eq!(cinder::analyze(&program),
               Err(SemanticError::UndefinedFunction { name: "g".to_string(),
                                                      line: 2 }));
}

#[test]
fn analyzer_coercion_policy() {
    let program = cinder::parse("float f(float x) { return 1; }\nfloat y = f(2);").unwrap();

    assert!(matches!(SemanticAnalyzer::new(Config::default()).analyze(&program),
                     Err(SemanticError::TypeMismatch { expected: DataType::Float,
                                                       found:    DataType::Int,
                                                       line:     1, })));

    let widen = Config { coercion: CoercionPolicy::WidenIntToFloat,
                         ..Config::default() };
    assert_eq!(SemanticAnalyzer::new(widen).analyze(&program), Ok(()));
}

#[test]
fn diagnostics_point_at_the_named_identifier() {
    let source = "int total = 0;\ntotal = totl + 1;";
    let program = cinder::parse(source).unwrap();
    let err = cinder::analyze(&program).unwrap_err();

    assert_eq!(format_diagnostic(source, &err.to_string(), err.line()),
               "Error on line 2: Variable 'totl' is not declared.\ntotal = totl + 1;\n        ^");
}

#[test]
fn deeply_nested_input_is_rejected_by_the_parser() {
    let parens = format!("print({}1{});", "(".repeat(200), ")".repeat(200));
    assert_eq!(cinder::parse(&parens).unwrap_err(),
               ParseError::NestingTooDeep { limit: 64,
                                            line:  1, });

    let negations = format!("print({}1);", "-".repeat(200));
    assert!(matches!(cinder::parse(&negations),
                     Err(ParseError::NestingTooDeep { limit: 64, .. })));

    let blocks = format!("{}\nprint(1);\n{}", "{".repeat(200), "}".repeat(200));
    assert_eq!(cinder::parse(&blocks).unwrap_err(),
               ParseError::NestingTooDeep { limit: 64,
                                            line:  1, });
}

#[test]
fn nesting_within_the_limit_parses() {
    let parens = format!("print({}1{});", "(".repeat(40), ")".repeat(40));
    assert_eq!(cinder::parse(&parens).unwrap().statements.len(), 1);

    let calls = format!("print({}0{});", "f(".repeat(30), ")".repeat(30));
    assert!(cinder::parse(&calls).is_ok());
}
