//! Abstract Syntax Tree definitions.
//!
//! Every node keeps the token that introduced it. The token is only used for
//! diagnostics; the tree structure is expressed purely through ownership.
use std::fmt::{self, Display};

mod expression;
mod statement;

pub use expression::*;
pub use statement::*;

/// Behaviour shared by every syntax tree node.
pub trait Node {
    /// The literal source text of the token that introduced this node.
    fn token_literal(&self) -> &str;
}

/// The root of a parsed source text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}
impl Program {
    pub fn new() -> Self {
        Self { statements: vec![] }
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Node::token_literal)
            .unwrap_or("")
    }
}
impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
