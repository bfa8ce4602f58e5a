//! # cinder
//!
//! cinder is a small, statically checked imperative language executed by a
//! tree-walking interpreter written in Rust.
//! Source text goes through four stages: a lexer, a recursive-descent parser,
//! a semantic analyzer that checks scopes, arity and declared types, and an
//! interpreter that runs the checked tree and captures everything the program
//! prints.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    config::Config,
    error::{CinderError, ParseError, RuntimeError, SemanticError},
    interpreter::{
        analyzer::core::SemanticAnalyzer, evaluator::core::Interpreter, parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types that
/// represent a program as a tree. The AST is built by the parser, checked by
/// the analyzer and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement, expression and type nodes for all language constructs.
/// - Attaches the line of each node's leading token for error reporting.
pub mod ast;
/// Execution options.
///
/// Holds the coercion policy shared by the analyzer and the evaluator, and the
/// limit on nested function calls.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or executing code. Every error carries the source line it refers
/// to and formats as `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines one error enum per stage and a wrapper for the whole pipeline.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Diagnostic formatting for hosts.
///
/// Renders an error message with the offending source line and a caret.
pub mod report;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Safely convert `i64` to `f64` without silent data loss.
/// - Provide the floor-modulo helpers used by the evaluator.
pub mod util;

/// Parses source text into a [`Program`] with the default nesting limit.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Example
/// ```
/// let program = cinder::parse("int a = 1;\nprint(a);").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(cinder::parse("int a = ;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source)?.parse()
}

/// Runs the semantic checks on a parsed program with the default
/// configuration.
///
/// # Errors
/// Returns the first violation found.
///
/// # Example
/// ```
/// use cinder::error::SemanticError;
///
/// let program = cinder::parse("print(add(1, 2));").unwrap();
///
/// assert_eq!(cinder::analyze(&program).unwrap_err(),
///            SemanticError::UndefinedFunction { name: "add".to_string(),
///                                               line: 1 });
/// ```
pub fn analyze(program: &Program) -> Result<(), SemanticError> {
    SemanticAnalyzer::new(Config::default()).analyze(program)
}

/// Executes a program with the default configuration and returns everything
/// it printed.
///
/// The program is not analyzed first; call [`analyze`] for that.
///
/// # Errors
/// Returns the first runtime error. Output printed before the error is
/// discarded; use [`Interpreter`] directly to keep it.
///
/// # Example
/// ```
/// let program = cinder::parse("print(-7 % 3);\nprint(7 % -3);").unwrap();
/// assert_eq!(cinder::interpret(&program).unwrap(), "2\n-2\n");
/// ```
pub fn interpret(program: &Program) -> Result<String, RuntimeError> {
    let mut interpreter = Interpreter::new(Config::default());
    interpreter.interpret(program)?;
    Ok(interpreter.into_output())
}

/// Parses, analyzes and executes `source` with `config`.
///
/// # Errors
/// Returns the first error of whichever stage failed, tagged by stage.
///
/// # Example
/// ```
/// use cinder::config::{CoercionPolicy, Config};
///
/// let source = "float x = 1;\nprint(x);";
///
/// assert!(cinder::run(source, Config::default()).is_err());
///
/// let widen = Config { coercion: CoercionPolicy::WidenIntToFloat,
///                      ..Config::default() };
/// assert_eq!(cinder::run(source, widen).unwrap(), "1.0\n");
/// ```
pub fn run(source: &str, config: Config) -> Result<String, CinderError> {
    let program = Parser::new(source)?.with_max_depth(config.max_nesting_depth)
                                      .parse()?;
    SemanticAnalyzer::new(config).analyze(&program)?;
    let mut interpreter = Interpreter::new(config);
    interpreter.interpret(&program)?;
    Ok(interpreter.into_output())
}
