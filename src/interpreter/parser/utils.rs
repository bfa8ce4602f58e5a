use crate::{
    ast::{DataType, Param},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl<'src> Parser<'src> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by call argument lists and parameter lists. It
    /// repeatedly calls `parse_item` to parse one element, expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list. A
    /// trailing comma is rejected by `parse_item` seeing the closing token.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(closing) {
            self.advance()?;
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            if self.check(&TokenKind::Comma) {
                self.advance()?;
            } else if self.check(closing) {
                self.advance()?;
                break;
            } else {
                return Err(self.unexpected(format!("',' or {closing}")));
            }
        }
        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        if let TokenKind::Identifier(name) = &self.current().kind {
            let name = name.clone();
            self.advance()?;
            Ok(name)
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    /// Parses one `type name` entry of a parameter list. `void` is not a
    /// parameter type.
    pub(in crate::interpreter::parser) fn parse_param(&mut self) -> ParseResult<Param> {
        match self.current().kind {
            TokenKind::Type(data_type) if data_type != DataType::Void => {
                self.advance()?;
                let name = self.parse_identifier()?;
                Ok(Param { data_type, name })
            },
            _ => Err(self.unexpected("a parameter type")),
        }
    }
}
