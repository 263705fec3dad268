//! Operator lexing for the handful of tokens with a one-character-of-lookahead
//! ambiguity: `=`/`==` and `!`/`!=`.

use super::core::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Lexes `=` or `==`.
    pub(crate) fn lex_assign_or_eq(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            Token::Eq
        } else {
            Token::Assign
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang_or_not_eq(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            Token::NotEq
        } else {
            Token::Bang
        }
    }
}
