//! Converts a token stream into an abstract syntax tree.
mod error;
mod expression;
mod parser_base;
mod precedence;
mod statement;

pub use error::{ParseError, Reason, Stage};
pub use parser_base::{InfixParseFn, Parser, PrefixParseFn, MAX_NESTING};
pub use precedence::Precedence;

use crate::{ast::Program, lexer::Lexer};

/// Parses `source` into a [`Program`], failing with every recorded syntax
/// error if there was at least one.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.errors().to_vec())
    }
}
