//! Statement-level recursive descent.
use crate::{ast::*, lexer::tokens::TokenKind, prelude::*};

use super::{error::Stage, parser_base::Parser, precedence::Precedence};

impl<'s> Parser<'s> {
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        trace!("Statement starting with {}", self.cur_token);
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Identifier, Stage::LetStatement) {
            return None;
        }
        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign, Stage::LetStatement) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cur_token.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.cur_token.clone();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(ExpressionStatement { token, value })
    }

    /// Parses the statements between a pair of braces. On entry the current
    /// token is the opening brace; on exit it is the closing brace (or the end
    /// of the input, if the block was never closed).
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = vec![];
        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::EndOfFile) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => {
                    self.synchronize(true);
                    if self.cur_token_is(TokenKind::RBrace) {
                        continue;
                    }
                }
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
