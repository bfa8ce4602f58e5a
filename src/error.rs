/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// syntax tree: illegal characters, malformed literals and unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a validated
/// program, such as division by zero, overflow or incompatible operands.
pub mod runtime_error;
/// Semantic errors.
///
/// Covers the scope, arity and declared-type violations found by the analyzer
/// before any statement runs.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Any failure of the full pipeline, tagged by the stage that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CinderError {
    /// The source could not be tokenized or parsed.
    Syntax(ParseError),
    /// The program violates a scope or type rule.
    Semantic(SemanticError),
    /// Execution aborted.
    Runtime(RuntimeError),
}

impl CinderError {
    /// Returns the source line the error refers to, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Semantic(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ParseError> for CinderError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for CinderError {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for CinderError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CinderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax {e}"),
            Self::Semantic(e) => write!(f, "Semantic {e}"),
            Self::Runtime(e) => write!(f, "Runtime {e}"),
        }
    }
}

impl std::error::Error for CinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
