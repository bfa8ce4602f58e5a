use crate::ast::DataType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the semantic analyzer can report.
///
/// Analysis stops at the first violation, so a program yields at most one of
/// these.
pub enum SemanticError {
    /// A variable declared twice in the same scope.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The line of the second declaration.
        line: usize,
    },
    /// A variable used or assigned without a visible declaration.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declared twice.
    DuplicateFunction {
        /// The name of the function.
        name: String,
        /// The line of the second declaration.
        line: usize,
    },
    /// Two parameters of one function share a name.
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The line of the function declaration.
        line: usize,
    },
    /// A call to a function that has not been declared yet.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The line of the call site.
        line: usize,
    },
    /// A call with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The line of the call site.
        line:     usize,
    },
    /// A value whose type does not match the declared type of its target.
    TypeMismatch {
        /// The declared type.
        expected: DataType,
        /// The type of the expression.
        found:    DataType,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `return` outside of any function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `break` or `continue` outside of any loop body.
    LoopControlOutsideLoop {
        /// The keyword that was misplaced.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl SemanticError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::DuplicateDeclaration { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::DuplicateFunction { line, .. }
            | Self::DuplicateParameter { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ReturnOutsideFunction { line }
            | Self::LoopControlOutsideLoop { line, .. } => Some(*line),
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line } => write!(f,
                                                                "Error on line {line}: Variable '{name}' is already declared in this scope."),
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not declared.")
            },
            Self::DuplicateFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is already defined.")
            },
            Self::DuplicateParameter { name, line } => {
                write!(f, "Error on line {line}: Duplicate parameter '{name}'.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is not defined.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' expects {expected} arguments, but {found} were given."),
            Self::TypeMismatch { expected,
                                 found,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch: expected {expected}, found {found}."),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
            Self::LoopControlOutsideLoop { keyword, line } => {
                write!(f, "Error on line {line}: '{keyword}' outside of a loop.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
