use crate::{
    ast::{Expr, Program},
    config::MAX_NESTING_DEPTH,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens lazily from its [`Lexer`]. `current` is always the
/// next unconsumed token; [`Parser::peek`] can see one token past it.
pub struct Parser<'src> {
    lexer:     Lexer<'src>,
    current:   Token,
    depth:     usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and scans its first token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0,
                  max_depth: MAX_NESTING_DEPTH })
    }

    /// Sets how deep expressions and blocks may nest.
    ///
    /// Every parenthesized expression, call argument, prefix operator and
    /// block counts as one level.
    ///
    /// # Example
    /// ```
    /// use cinder::{error::ParseError, interpreter::parser::core::Parser};
    ///
    /// let err = Parser::new("print(((1)));").unwrap()
    ///                                       .with_max_depth(2)
    ///                                       .parse()
    ///                                       .unwrap_err();
    ///
    /// assert_eq!(err, ParseError::NestingTooDeep { limit: 2, line: 1 });
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a whole program: statements until end of input.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::new("int a = 1; print(a);").unwrap()
    ///                                                  .parse()
    ///                                                  .unwrap();
    ///
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    pub fn parse(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();
        while self.current.kind != TokenKind::Eof {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, logical OR, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_logical_or)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Fails with `NestingTooDeep` once the configured depth is reached.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line:  self.current.line, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// The next unconsumed token.
    pub(in crate::interpreter::parser) const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Returns `true` if the current token is exactly `kind`.
    pub(in crate::interpreter::parser) fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    /// Consumes the current token if it is exactly `kind`, otherwise fails
    /// with `UnexpectedToken`.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Looks one token past `current` without consuming anything.
    ///
    /// The lexer is cloned, so neither the parser nor its lexer move.
    pub(in crate::interpreter::parser) fn peek(&self) -> ParseResult<Token> {
        self.lexer.clone().next_token()
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.kind.to_string(),
                                      line:     self.current.line, }
    }
}
