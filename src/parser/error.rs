//! Error handling for parsing.
use std::fmt;

use thiserror::Error;

use crate::{
    error::PositionalError,
    lexer::tokens::{Token, TokenKind},
    span::Span,
};

/// A syntax error, indicating both the construct that was being parsed when
/// the error was encountered and the cause for the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    stage: Stage,
    reason: Reason,
    span: Span,
}

impl ParseError {
    pub fn new(stage: Stage, reason: Reason, span: Span) -> Self {
        Self {
            stage,
            reason,
            span,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ParseError {}

impl PositionalError for ParseError {
    fn range(&self) -> Span {
        self.span
    }

    fn describe(&self) -> String {
        format!("{} when parsing {}", self.reason, self.stage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("expected next token to be {expected}, got {} instead", .found.kind)]
    UnexpectedToken { expected: TokenKind, found: Token },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
    #[error("expression nested more than {0} levels deep")]
    NestingTooDeep(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A `let` statement.
    LetStatement,
    /// A `return` statement.
    ReturnStatement,
    /// The start of an expression.
    Expression,
    /// The end of a parenthesised expression.
    GroupedExpression,
    /// An `if` expression.
    IfExpression,
    /// A function literal's parameter list.
    FunctionParameters,
    /// A function literal.
    FunctionLiteral,
    /// The argument list of a call.
    CallArguments,
}
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Stage::LetStatement => "a let statement",
            Stage::ReturnStatement => "a return statement",
            Stage::Expression => "an expression",
            Stage::GroupedExpression => "a parenthesised expression",
            Stage::IfExpression => "an if expression",
            Stage::FunctionParameters => "a parameter list",
            Stage::FunctionLiteral => "a function literal",
            Stage::CallArguments => "an argument list",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::span::Bytes;

    use super::*;

    fn integer_token() -> Token {
        Token::new(
            TokenKind::IntegerLiteral,
            "5",
            Span::new(Bytes::new(6), Bytes::new(7)),
        )
    }

    #[test]
    fn unexpected_token_cites_both_kinds() {
        let error = ParseError::new(
            Stage::LetStatement,
            Reason::UnexpectedToken {
                expected: TokenKind::Assign,
                found: integer_token(),
            },
            integer_token().source,
        );

        assert_eq!(
            error.to_string(),
            "expected next token to be Assign, got IntegerLiteral instead"
        );
        assert_eq!(
            error.describe(),
            "expected next token to be Assign, got IntegerLiteral instead when parsing a let statement"
        );
        assert_eq!(error.length(), Bytes::new(1));
    }

    #[test]
    fn missing_prefix_function_names_the_kind() {
        let reason = Reason::NoPrefixParseFn(TokenKind::Illegal);

        assert_eq!(reason.to_string(), "no prefix parse function for Illegal found");
    }
}
