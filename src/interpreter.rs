/// The analyzer module checks a parsed program before it runs.
///
/// The semantic analyzer walks the AST with a stack of scopes, mirroring the
/// block structure the evaluator will use, and a flat table of declared
/// functions.
///
/// # Responsibilities
/// - Rejects duplicate and undeclared names, and calls with the wrong arity.
/// - Checks declared types of variables and returns against their values.
/// - Rejects `return`, `break` and `continue` outside of their constructs.
pub mod analyzer;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the checked AST, evaluates expressions and
/// statements, manages the environment of scopes, and collects printed output.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Propagates `break`, `continue` and `return` as explicit signals.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// literals, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with a source line.
/// - Handles numeric, character and string literals, identifiers, and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs an AST that
/// represents the syntactic structure of statements and expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the scalar values produced during execution, along
/// with truthiness, numeric conversion and print formatting.
pub mod value;
