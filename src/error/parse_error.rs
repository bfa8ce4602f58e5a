#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal that reaches the end of input before its closing quote.
    UnterminatedLiteral {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A character literal whose closing quote is not right after one
    /// character.
    InvalidCharLiteral {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal too large for a 64-bit signed integer.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Expressions or blocks nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured nesting limit.
        limit: usize,
        /// The source line where the limit was reached.
        line:  usize,
    },
    /// The parser expected one token and found another.
    UnexpectedToken {
        /// Description of what the grammar allowed here.
        expected: String,
        /// The token that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::IllegalCharacter { line, .. }
            | Self::UnterminatedLiteral { line }
            | Self::InvalidCharLiteral { line }
            | Self::LiteralTooLarge { line }
            | Self::NestingTooDeep { line, .. }
            | Self::UnexpectedToken { line, .. } => Some(*line),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::UnterminatedLiteral { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::InvalidCharLiteral { line } => write!(f,
                                                        "Error on line {line}: Invalid char literal, expected exactly one character between quotes."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Nesting exceeds the maximum depth of {limit}."),
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
