use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. It is stored in [`Expr::Literal`] and converted into a runtime
/// [`Value`](crate::interpreter::value::core::Value) during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A single character between single quotes.
    Char(char),
    /// A string between double quotes, without escape processing.
    Str(String),
}

impl LiteralValue {
    /// Returns the data type tag of the literal.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Integer(_) => DataType::Int,
            Self::Float(_) => DataType::Float,
            Self::Bool(_) => DataType::Bool,
            Self::Char(_) => DataType::Char,
            Self::Str(_) => DataType::String,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// A declared type, as written in source with one of the datatype keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `string`
    String,
    /// `void`, only valid as a function return type.
    Void,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::String => "string",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the line of its leading token. Lines are used for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, character, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use cinder::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// A brace-delimited sequence of statements. Every block opens a new lexical
/// scope, both in the analyzer and in the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

/// A single `type name` entry of a function parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Declared type of the parameter.
    pub data_type: DataType,
    /// Parameter name.
    pub name:      String,
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// Declared return type (`void` when nothing is returned).
    pub return_type: DataType,
    /// Function name.
    pub name:        String,
    /// Parameters in declaration order.
    pub params:      Vec<Param>,
    /// Function body.
    pub body:        Block,
    /// Line of the leading type keyword.
    pub line:        usize,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `type name = expr;`
    VariableDeclaration {
        /// Declared type of the variable.
        data_type: DataType,
        /// Name of the variable.
        name:      String,
        /// Initializer expression.
        value:     Expr,
        /// Line number in the source code.
        line:      usize,
    },
    /// `name = expr;`
    Assignment {
        /// Name of the assigned variable.
        name:  String,
        /// Assigned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expr);`
    Print {
        /// Printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// Branch condition, tested for truthiness.
        condition:  Expr,
        /// Block executed when the condition holds.
        then_block: Block,
        /// Optional block executed otherwise.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `while (condition) { ... }`
    While {
        /// Loop condition, re-checked before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `break;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `continue;`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `return [expr];`
    Return {
        /// Returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function declaration.
    Function(FunctionDecl),
    /// A nested `{ ... }` block.
    Block(Block),
    /// A function call used as a statement; its result is discarded.
    Expression {
        /// The call expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number of the statement's leading token.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. }
            | Self::Expression { line, .. } => *line,
            Self::Function(decl) => decl.line,
            Self::Block(block) => block.line,
        }
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Unary operators supported by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Binary operators supported by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always floating-point division.
    Div,
    /// `%`, floor modulo.
    Mod,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`, evaluates both sides.
    And,
    /// `||`, evaluates both sides.
    Or,
}

impl BinaryOperator {
    /// Returns `true` for `+ - * / %`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod)
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{symbol}")
    }
}
