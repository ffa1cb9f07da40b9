//! Front end for the Monkey language: a lexer that turns source text into
//! tokens, and a Pratt parser that turns those tokens into a syntax tree.
//!
//! ```
//! use monkey::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

mod prelude;

pub use lexer::{lex, Lexer};
pub use parser::{parse, Parser};
