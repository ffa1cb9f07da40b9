//! Functionality for converting a source code string into a stream of
//! [`Token`](tokens::Token)s.
mod char_ext;
mod char_lexer;
#[allow(clippy::module_inception)]
mod lexer;

pub mod tokens;

pub use lexer::*;
