#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read or assign a variable that no scope holds.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that no scope holds.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator was applied to operands of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A call to a function that produced no value was used as a value.
    MissingValue {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `break` or `continue` reached a function or program boundary.
    UnexpectedControlFlow {
        /// The keyword that escaped.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// User-function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The function whose call exceeded the limit.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::TypeError { line, .. }
            | Self::MissingValue { line, .. }
            | Self::UnexpectedControlFlow { line, .. }
            | Self::RecursionLimit { line, .. }
            | Self::Overflow { line }
            | Self::DivisionByZero { line } => Some(*line),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' expects {expected} arguments, but {found} were given."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::MissingValue { name, line } => write!(f,
                                                        "Error on line {line}: Function '{name}' did not return a value."),
            Self::UnexpectedControlFlow { keyword, line } => {
                write!(f, "Error on line {line}: '{keyword}' escaped its loop.")
            },
            Self::RecursionLimit { name, limit, line } => write!(f,
                                                                 "Error on line {line}: Call to '{name}' exceeds the maximum call depth of {limit}."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
