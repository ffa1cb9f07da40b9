//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token. Empty for [`TokenKind::EndOfFile`].
    pub literal: String,
    pub source: Span,
}
impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, source: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            source,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.literal)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfFile,

    // Identifiers and literals
    Identifier,
    IntegerLiteral,

    // Operators
    Assign,
    Plus,
    Minus,
    Slash,
    Asterisk,
    Bang,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Let,
    Return,
    Function,
    If,
    Else,
    True,
    False,
}
impl TokenKind {
    /// Classifies an identifier-shaped word, returning the reserved kind for
    /// keywords and [`TokenKind::Identifier`] for everything else.
    pub fn for_word(word: &str) -> Self {
        match word {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Identifier,
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
