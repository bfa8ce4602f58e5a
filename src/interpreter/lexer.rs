use std::fmt;

use logos::Logos;

use crate::{
    ast::{DataType, LiteralValue},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// The kind of a lexical token, together with its literal payload.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
pub enum TokenKind {
    /// Floating-point literal tokens such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    FloatLit(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    IntLit(i64),
    /// Character literal tokens, such as `'a'`.
    #[token("'", lex_char)]
    CharLit(char),
    /// String literal tokens, such as `"hello"`. No escapes are processed.
    #[token("\"", lex_string)]
    StringLit(String),
    /// Datatype keywords: `int`, `float`, `bool`, `char`, `string`, `void`.
    #[token("int", |_| DataType::Int)]
    #[token("float", |_| DataType::Float)]
    #[token("bool", |_| DataType::Bool)]
    #[token("char", |_| DataType::Char)]
    #[token("string", |_| DataType::String)]
    #[token("void", |_| DataType::Void)]
    Type(DataType),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by the scanner; produced by [`Lexer`] once
    /// the source is exhausted.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FloatLit(x) => write!(f, "float literal '{x:?}'"),
            Self::IntLit(n) => write!(f, "integer literal '{n}'"),
            Self::CharLit(c) => write!(f, "char literal '{c}'"),
            Self::StringLit(s) => write!(f, "string literal \"{s}\""),
            Self::Type(t) => write!(f, "'{t}'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl TokenKind {
    /// Source spelling of keywords, operators and delimiters.
    const fn symbol(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Return => "return",
            Self::Print => "print",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Bang => "!",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            _ => "",
        }
    }
}

/// A token together with the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// 1-indexed source line of the token's first character.
    pub line: usize,
}

impl Token {
    /// Returns the scalar carried by a literal token, if any.
    ///
    /// # Example
    /// ```
    /// use cinder::{
    ///     ast::LiteralValue,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token { kind: TokenKind::IntLit(7),
    ///                     line: 1, };
    /// assert_eq!(token.literal_value(), Some(LiteralValue::Integer(7)));
    ///
    /// let token = Token { kind: TokenKind::Semicolon,
    ///                     line: 1, };
    /// assert_eq!(token.literal_value(), None);
    /// ```
    #[must_use]
    pub fn literal_value(&self) -> Option<LiteralValue> {
        match &self.kind {
            TokenKind::IntLit(n) => Some(LiteralValue::Integer(*n)),
            TokenKind::FloatLit(x) => Some(LiteralValue::Float(*x)),
            TokenKind::CharLit(c) => Some(LiteralValue::Char(*c)),
            TokenKind::StringLit(s) => Some(LiteralValue::Str(s.clone())),
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            _ => None,
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default, Clone)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Failure reasons reported by the scanner callbacks.
///
/// `IllegalCharacter` is the default, produced by logos for input that starts
/// no token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexicalError {
    #[default]
    IllegalCharacter,
    UnterminatedLiteral,
    InvalidCharLiteral,
    LiteralTooLarge,
}

/// Lazy token source over one source string.
///
/// `Lexer` is cheap to clone; the parser clones it to look one token further
/// ahead without disturbing its own position.
#[derive(Clone)]
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    /// Scans and returns the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    ///
    /// # Errors
    /// Returns a `ParseError` for illegal characters, unterminated strings,
    /// malformed char literals and integer literals that do not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("x");
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier("x".into()));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        match self.inner.next() {
            None => Ok(Token { kind: TokenKind::Eof,
                               line: self.inner.extras.line, }),
            Some(Ok(kind)) => {
                let spanned_lines = self.inner.slice().matches('\n').count();
                Ok(Token { kind,
                           line: self.inner.extras.line - spanned_lines })
            },
            Some(Err(error)) => Err(self.lexical_error(error)),
        }
    }

    /// Returns the line the scanner is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    fn lexical_error(&self, error: LexicalError) -> ParseError {
        let line = self.inner.extras.line;
        match error {
            LexicalError::IllegalCharacter => {
                let character = self.inner.slice().chars().next().unwrap_or('\0');
                ParseError::IllegalCharacter { character, line }
            },
            LexicalError::UnterminatedLiteral => ParseError::UnterminatedLiteral { line },
            LexicalError::InvalidCharLiteral => ParseError::InvalidCharLiteral { line },
            LexicalError::LiteralTooLarge => ParseError::LiteralTooLarge { line },
        }
    }
}

/// Yields every token up to and including the first `Eof`, or the first
/// error.
impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        if matches!(result, Err(_) | Ok(Token { kind: TokenKind::Eof, .. })) {
            self.finished = true;
        }
        Some(result)
    }
}

/// Tokenizes a whole source string eagerly.
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use cinder::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("a >= 1;").unwrap()
///                                        .into_iter()
///                                        .map(|t| t.kind)
///                                        .collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier("a".into()),
///                 TokenKind::GreaterEqual,
///                 TokenKind::IntLit(1),
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexicalError> {
    lex.slice()
       .parse()
       .map_err(|_| LexicalError::LiteralTooLarge)
}

/// Scans the body of a string literal after its opening quote.
///
/// The literal runs to the next `"`; line breaks inside it advance the line
/// counter.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexicalError> {
    let rest = lex.remainder();
    let Some(end) = rest.find('"') else {
        return Err(LexicalError::UnterminatedLiteral);
    };
    let text = rest[..end].to_string();
    lex.bump(end + 1);
    lex.extras.line += text.matches('\n').count();
    Ok(text)
}

/// Scans a character literal: exactly one character, then the closing quote.
fn lex_char(lex: &mut logos::Lexer<TokenKind>) -> Result<char, LexicalError> {
    let mut chars = lex.remainder().chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('\'')) => {
            lex.bump(c.len_utf8() + 1);
            if c == '\n' {
                lex.extras.line += 1;
            }
            Ok(c)
        },
        _ => Err(LexicalError::InvalidCharLiteral),
    }
}
