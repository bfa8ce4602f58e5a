use crate::{
    ast::{DataType, Expr, FunctionDecl, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable or function declaration (leading type keyword),
    /// - an assignment (`identifier =`),
    /// - a call used as a statement (`identifier (`),
    /// - `print`, `if`, `while`, `break`, `continue` or `return`,
    /// - a nested block.
    ///
    /// A leading identifier is disambiguated by peeking at the token after it
    /// without consuming either.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match &self.current().kind {
            TokenKind::Type(_) => self.parse_declaration(),
            TokenKind::Identifier(_) => {
                let next = self.peek()?;
                match next.kind {
                    TokenKind::Assign => self.parse_assignment(),
                    TokenKind::LParen => self.parse_call_statement(),
                    found => Err(ParseError::UnexpectedToken { expected: "'=' or '('".to_string(),
                                                               found:    found.to_string(),
                                                               line:     next.line, }),
                }
            },
            TokenKind::Print => self.parse_print(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Break => {
                let line = self.advance()?.line;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Statement::Break { line })
            },
            TokenKind::Continue => {
                let line = self.advance()?.line;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Statement::Continue { line })
            },
            TokenKind::Return => self.parse_return(),
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block()?)),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// Parses a declaration introduced by a type keyword.
    ///
    /// If the name is followed by `(` the declaration is a function;
    /// otherwise it is a variable declaration of the form
    /// `type name = expression ;`. A `void` declaration must be a function.
    fn parse_declaration(&mut self) -> ParseResult<Statement> {
        let type_token = self.advance()?;
        let TokenKind::Type(data_type) = type_token.kind else {
            return Err(self.unexpected("a type"));
        };
        let line = type_token.line;
        let name = self.parse_identifier()?;

        if self.check(&TokenKind::LParen) || data_type == DataType::Void {
            return self.parse_function_declaration(data_type, name, line);
        }

        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::VariableDeclaration { data_type,
                                            name,
                                            value,
                                            line })
    }

    /// Parses the remainder of a function declaration after its name.
    ///
    /// Grammar: `function := type name "(" (param ("," param)*)? ")" block`
    fn parse_function_declaration(&mut self,
                                  return_type: DataType,
                                  name: String,
                                  line: usize)
                                  -> ParseResult<Statement> {
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_comma_separated(Self::parse_param, &TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(Statement::Function(FunctionDecl { return_type,
                                              name,
                                              params,
                                              body,
                                              line }))
    }

    /// Parses `name = expression ;`.
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;
        let name = self.parse_identifier()?;
        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Assignment { name, value, line })
    }

    /// Parses `name(arguments) ;`, discarding the result at run time.
    fn parse_call_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current().line;
        let expr = self.parse_identifier_or_call()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Expression { expr, line })
    }

    /// Parses `print ( expression ) ;`.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;
        self.expect(&TokenKind::LParen)?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Print { expr, line })
    }

    /// Parses an `if` statement with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if ( <condition> ) <block>
    ///     else <block>
    /// ```
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;
        let condition = self.parse_condition()?;
        let then_block = self.parse_block()?;

        let else_block = if self.check(&TokenKind::Else) {
            self.advance()?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_block,
                           else_block,
                           line })
    }

    /// Parses `while ( <condition> ) <block>`.
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition,
                              body,
                              line })
    }

    /// Parses `return ;` or `return expression ;`.
    fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;
        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Return { value, line })
    }

    /// Parses a parenthesized condition.
    fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        Ok(condition)
    }
}
