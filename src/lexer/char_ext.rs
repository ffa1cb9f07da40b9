//! Useful character extensions.
pub trait CharExt {
    /// Whitespace that separates tokens: space, tab, carriage return and newline.
    fn is_token_separator(&self) -> bool;

    /// Characters that may appear in an identifier or keyword.
    fn is_identifier_char(&self) -> bool;
}
impl CharExt for char {
    fn is_token_separator(&self) -> bool {
        matches!(self, ' ' | '\t' | '\r' | '\n')
    }

    fn is_identifier_char(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }
}
