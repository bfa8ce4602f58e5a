use crate::{
    ast::Block,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Parsing continues until a
    /// closing `}` token is encountered; reaching the end of input first is an
    /// error.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.nested(Self::parse_block_body)
    }

    fn parse_block_body(&mut self) -> ParseResult<Block> {
        let line = self.expect(&TokenKind::LBrace)?.line;
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RBrace) {
            if self.check(&TokenKind::Eof) {
                return Err(self.unexpected(TokenKind::RBrace.to_string()));
            }
            statements.push(self.parse_statement()?);
        }
        self.advance()?;

        Ok(Block { statements, line })
    }
}
