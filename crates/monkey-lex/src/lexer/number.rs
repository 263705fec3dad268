//! Integer literal lexing.
//!
//! Monkey has a single numeric type - 64-bit signed integers - so unlike the
//! teacher's multi-base, float-aware scanner this is just a run of ASCII
//! digits.

use super::core::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal: a run of one or more ASCII digits.
    ///
    /// A literal that overflows `i64` is treated the same as any other
    /// unrecognized input and becomes [`Token::Illegal`], carrying the
    /// overflowing digits - the lexer never fails, but it also can't mint a
    /// token for a value it can't represent.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.token_start();
        while self.cursor().current_char().is_ascii_digit() {
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start);
        match text.parse::<i64>() {
            Ok(value) => Token::Int(value),
            Err(_) => Token::Illegal(monkey_util::Symbol::intern(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> Token {
        crate::Lexer::new(source).next_token()
    }

    #[test]
    fn single_digit() {
        assert_eq!(lex_one("5"), Token::Int(5));
    }

    #[test]
    fn multi_digit() {
        assert_eq!(lex_one("12345"), Token::Int(12345));
    }

    #[test]
    fn zero() {
        assert_eq!(lex_one("0"), Token::Int(0));
    }

    #[test]
    fn overflow_is_illegal() {
        let token = lex_one("99999999999999999999");
        assert_eq!(token.literal(), "99999999999999999999");
        assert!(matches!(token, Token::Illegal(_)));
    }
}
