use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("-" | "!") unary
    ///            | primary
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.current().kind {
            TokenKind::Minus => UnaryOperator::Negate,
            TokenKind::Bang => UnaryOperator::Not,
            _ => return self.parse_primary(),
        };
        let line = self.advance()?.line;
        let expr = self.nested(Self::parse_unary)?;
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := literal
    ///              | "true" | "false"
    ///              | identifier
    ///              | identifier "(" arguments ")"
    ///              | "(" expression ")"
    /// ```
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        if let Some(value) = self.current().literal_value() {
            let line = self.advance()?.line;
            return Ok(Expr::Literal { value, line });
        }

        match &self.current().kind {
            TokenKind::Identifier(_) => self.parse_identifier_or_call(),
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Ok(expr)
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses a bare identifier as a variable reference, or an identifier
    /// followed by `(` as a call.
    ///
    /// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
    pub(crate) fn parse_identifier_or_call(&mut self) -> ParseResult<Expr> {
        let line = self.current().line;
        let name = self.parse_identifier()?;

        if !self.check(&TokenKind::LParen) {
            return Ok(Expr::Variable { name, line });
        }
        self.advance()?;
        let arguments = self.parse_comma_separated(Self::parse_expression, &TokenKind::RParen)?;
        Ok(Expr::FunctionCall { name,
                                arguments,
                                line })
    }
}

