use std::{iter::Peekable, str::Chars};

use crate::span::Bytes;

/// Abstraction over a peekable char iterator with position information.
///
/// Since it only holds an iterator and a position, this type is very
/// lightweight. It only ever moves forward; once the end of the input has
/// been reached, every further read returns [`None`].
#[derive(Clone)]
pub struct CharLexer<'a> {
    chars: Peekable<Chars<'a>>,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            byte_position: Bytes::new(0),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Retrieves the byte position of the next unread character.
    pub fn byte_position(&self) -> Bytes {
        self.byte_position
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the number of bytes consumed.
    pub fn skip_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position;
        while let Some(ch) = self.chars.peek() {
            if predicate(ch) {
                self.try_next();
            } else {
                break;
            }
        }
        (self.byte_position - start).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_input_is_sticky() {
        let mut lexer = CharLexer::new("a");

        assert_eq!(lexer.try_next(), Some('a'));
        assert_eq!(lexer.try_next(), None);
        assert_eq!(lexer.try_next(), None);
        assert_eq!(lexer.peek(), None);
        assert_eq!(lexer.byte_position(), Bytes::new(1));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = CharLexer::new("!=");

        assert_eq!(lexer.peek(), Some('!'));
        assert_eq!(lexer.peek(), Some('!'));
        assert_eq!(lexer.byte_position(), Bytes::new(0));
    }

    #[test]
    fn positions_are_counted_in_bytes() {
        let mut lexer = CharLexer::new("éa");

        lexer.try_next();
        assert_eq!(lexer.byte_position(), Bytes::new(2));
    }

    #[test]
    fn skip_while_stops_at_first_mismatch() {
        let mut lexer = CharLexer::new("123abc");

        assert_eq!(lexer.skip_while(char::is_ascii_digit), 3);
        assert_eq!(lexer.peek(), Some('a'));
    }
}
