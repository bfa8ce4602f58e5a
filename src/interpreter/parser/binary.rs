use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// Grammar: `or := and ("||" and)*`
    pub(crate) fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && op == BinaryOperator::Or
        {
            self.advance()?;
            let right = self.parse_logical_and()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// Precedence is higher than OR and lower than equality.
    ///
    /// Grammar: `and := equality ("&&" equality)*`
    pub(crate) fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && op == BinaryOperator::And
        {
            self.advance()?;
            let right = self.parse_equality()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses equality operators.
    ///
    /// Grammar: `equality := relational (("==" | "!=") relational)*`
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_relational()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
        {
            self.advance()?;
            let right = self.parse_relational()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses relational operators.
    ///
    /// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
    pub(crate) fn parse_relational(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op,
                          BinaryOperator::Less
                          | BinaryOperator::Greater
                          | BinaryOperator::LessEqual
                          | BinaryOperator::GreaterEqual)
        {
            self.advance()?;
            let right = self.parse_additive()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            self.advance()?;
            let right = self.parse_unary()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }
}

/// Folds two operands into a `BinaryOp` node located at its left operand.
fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let line = left.line_number();
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use cinder::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::AndAnd => Some(BinaryOperator::And),
        TokenKind::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
