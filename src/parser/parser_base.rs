//! Parser state and token cursor.
use std::collections::HashMap;

use crate::{
    ast::{Expression, Program},
    error::PositionalError,
    lexer::{tokens::*, Lexer},
    prelude::*,
    span::{Bytes, Span},
};

use super::{error::*, precedence::Precedence};

/// How deeply expressions may nest before the parser gives up on them.
pub const MAX_NESTING: usize = 100;

/// Parses the expression form introduced by the current token.
pub type PrefixParseFn<'s> = fn(&mut Parser<'s>) -> Option<Expression>;
/// Extends an already parsed left-hand side with the operator that is the current token.
pub type InfixParseFn<'s> = fn(&mut Parser<'s>, Expression) -> Option<Expression>;

/// A parser that pulls tokens from a [`Lexer`] with one token of lookahead.
///
/// Syntax errors do not stop the parser. They are collected, and can be
/// retrieved through [`Parser::errors`] once [`Parser::parse_program`] returns.
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    pub(super) cur_token: Token,
    pub(super) peek_token: Token,
    errors: Vec<ParseError>,
    /// Current expression nesting, bounded by [`MAX_NESTING`].
    pub(super) depth: usize,

    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn<'s>>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn<'s>>,
}

impl<'s> Parser<'s> {
    pub fn new(lexer: Lexer<'s>) -> Self {
        let placeholder = Token::new(TokenKind::EndOfFile, "", Span::empty(Bytes::new(0)));
        let mut parser = Self {
            lexer,
            cur_token: placeholder.clone(),
            peek_token: placeholder,
            errors: vec![],
            depth: 0,
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Identifier, Self::parse_identifier);
        parser.register_prefix(TokenKind::IntegerLiteral, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::True, Self::parse_boolean);
        parser.register_prefix(TokenKind::False, Self::parse_boolean);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Self::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for operator in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
        ] {
            parser.register_infix(operator, Self::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Self::parse_call_expression);

        // Read two tokens, so `cur_token` and `peek_token` are both set.
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses statements until the end of the input is reached.
    ///
    /// Statements that fail to parse are left out of the program; the
    /// reason is recorded in [`Parser::errors`] and parsing resumes after
    /// the offending statement.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::EndOfFile) {
            match self.parse_statement() {
                Some(statement) => program.add_statement(statement),
                None => self.synchronize(false),
            }
            self.next_token();
        }

        debug!(
            "Parsed {} statement(s) with {} error(s)",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// The syntax errors recorded so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn register_prefix(&mut self, kind: TokenKind, function: PrefixParseFn<'s>) {
        self.prefix_parse_fns.insert(kind, function);
    }

    fn register_infix(&mut self, kind: TokenKind, function: InfixParseFn<'s>) {
        self.infix_parse_fns.insert(kind, function);
    }

    pub(super) fn prefix_parse_fn(&self, kind: TokenKind) -> Option<PrefixParseFn<'s>> {
        self.prefix_parse_fns.get(&kind).copied()
    }

    pub(super) fn infix_parse_fn(&self, kind: TokenKind) -> Option<InfixParseFn<'s>> {
        self.infix_parse_fns.get(&kind).copied()
    }

    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(super) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    pub(super) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    pub(super) fn peek_precedence(&self) -> Precedence {
        Precedence::for_infix(self.peek_token.kind)
    }

    pub(super) fn cur_precedence(&self) -> Precedence {
        Precedence::for_infix(self.cur_token.kind)
    }

    /// Advances past the next token if it is of the given kind. If the token
    /// does not match, the parser is not advanced, and an error is recorded
    /// instead.
    pub(super) fn expect_peek(&mut self, kind: TokenKind, stage: Stage) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            let reason = Reason::UnexpectedToken {
                expected: kind,
                found: self.peek_token.clone(),
            };
            self.record_error(stage, reason, self.peek_token.source);
            false
        }
    }

    pub(super) fn record_error(&mut self, stage: Stage, reason: Reason, span: Span) {
        let error = ParseError::new(stage, reason, span);
        debug!("Syntax error at {:?}: {}", span, error.describe());
        self.errors.push(error);
    }

    /// Skips the rest of a statement that failed to parse, treating any
    /// brace-delimited body inside it as part of the statement.
    ///
    /// Stops on the first semicolon outside such a body. Inside a block
    /// (`in_block`), it also stops on or in front of the `}` that closes the
    /// enclosing block, so the block still sees it. At the top level an
    /// unmatched `}` is skipped like any other token.
    pub(super) fn synchronize(&mut self, in_block: bool) {
        let mut braces = 0usize;
        loop {
            match self.cur_token.kind {
                TokenKind::EndOfFile => return,
                TokenKind::Semicolon if braces == 0 => return,
                TokenKind::LBrace => braces += 1,
                TokenKind::RBrace if braces > 0 => braces -= 1,
                TokenKind::RBrace if in_block => return,
                _ => {}
            }
            if in_block && braces == 0 && self.peek_token_is(TokenKind::RBrace) {
                return;
            }
            self.next_token();
        }
    }
}
