//! Lexing functions for constructing a token stream.
use crate::{prelude::*, span::*};

use super::{char_ext::*, char_lexer::*, tokens::*};

/// Scans source text into [`Token`]s, one token per call to [`Lexer::next_token`].
pub struct Lexer<'s> {
    source: &'s str,
    chars: CharLexer<'s>,
}

/// Lexes the entire source, up to and including the first
/// [`TokenKind::EndOfFile`] token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token();
        let finished = token.is(TokenKind::EndOfFile);
        tokens.push(token);
        if finished {
            return tokens;
        }
    }
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: CharLexer::new(source),
        }
    }

    /// Reads the next token, skipping any whitespace in front of it.
    /// Once the end of the input has been reached, every call returns an
    /// [`TokenKind::EndOfFile`] token.
    pub fn next_token(&mut self) -> Token {
        self.chars.skip_while(CharExt::is_token_separator);

        let start = self.chars.byte_position();
        let kind = match self.chars.try_next() {
            None => TokenKind::EndOfFile,
            Some(first) => self
                .symbol(first)
                .or_else(|| self.word(first, start))
                .or_else(|| self.integer_literal(first))
                .unwrap_or(TokenKind::Illegal),
        };

        let source = Span::new(start, self.chars.byte_position());
        let token = Token::new(kind, source.lookup(self.source), source);
        trace!("Lexed {} at {:?}", token, token.source);
        token
    }

    /// Recognises operators and delimiters, whose first character has
    /// already been consumed.
    fn symbol(&mut self, first: char) -> Option<TokenKind> {
        let second = self.chars.peek();

        // Try matching two-char symbols first
        let two_char = match (first, second) {
            ('=', Some('=')) => Some(TokenKind::Equal),
            ('!', Some('=')) => Some(TokenKind::NotEqual),
            _ => None,
        };
        if two_char.is_some() {
            self.chars.try_next();
            return two_char;
        }

        let one_char = match first {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '!' => TokenKind::Bang,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(one_char)
    }

    /// Recognises identifiers and keywords.
    fn word(&mut self, first: char, start: Bytes) -> Option<TokenKind> {
        if !first.is_identifier_char() {
            return None;
        }
        self.chars.skip_while(CharExt::is_identifier_char);

        let word = Span::new(start, self.chars.byte_position()).lookup(self.source);
        Some(TokenKind::for_word(word))
    }

    fn integer_literal(&mut self, first: char) -> Option<TokenKind> {
        if !first.is_ascii_digit() {
            return None;
        }
        self.chars.skip_while(char::is_ascii_digit);
        Some(TokenKind::IntegerLiteral)
    }
}
