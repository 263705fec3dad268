//! Identifier and keyword lexing.

use super::core::{is_ident_continue, Lexer};
use crate::token::{keyword_from_ident, Token};
use monkey_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by any number
    /// of letters, digits, or underscores. Once the full run is scanned, the
    /// text is checked against the seven reserved keywords; anything else
    /// becomes an interned `Ident`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.token_start();
        while is_ident_continue(self.cursor().current_char()) {
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start);
        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(Symbol::intern(text)))
    }
}
