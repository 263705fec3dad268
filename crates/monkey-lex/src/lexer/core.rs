//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core dispatch.

use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for the Monkey programming language.
///
/// The lexer transforms source text into a stream of tokens, one at a time,
/// via [`Lexer::next_token`]. It never fails: any byte it doesn't recognize
/// becomes a [`Token::Illegal`] carrying the offending text rather than
/// aborting the scan.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Starting byte position of the token currently being scanned.
    token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    pub(crate) fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub(crate) fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character: letters
    /// start an identifier/keyword, digits start an integer literal, and
    /// everything else is matched directly or delegated to the one- or
    /// two-character operator helpers.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();
        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::Eof;
        }

        match self.cursor.current_char() {
            '=' => self.lex_assign_or_eq(),
            '+' => {
                self.cursor.advance();
                Token::Plus
            },
            '-' => {
                self.cursor.advance();
                Token::Minus
            },
            '!' => self.lex_bang_or_not_eq(),
            '*' => {
                self.cursor.advance();
                Token::Asterisk
            },
            '/' => {
                self.cursor.advance();
                Token::Slash
            },
            '<' => {
                self.cursor.advance();
                Token::Lt
            },
            '>' => {
                self.cursor.advance();
                Token::Gt
            },
            ',' => {
                self.cursor.advance();
                Token::Comma
            },
            ';' => {
                self.cursor.advance();
                Token::Semicolon
            },
            '(' => {
                self.cursor.advance();
                Token::LParen
            },
            ')' => {
                self.cursor.advance();
                Token::RParen
            },
            '{' => {
                self.cursor.advance();
                Token::LBrace
            },
            '}' => {
                self.cursor.advance();
                Token::RBrace
            },
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            _ => {
                let start = self.token_start;
                self.cursor.advance();
                let text = self.cursor.slice_from(start);
                Token::Illegal(monkey_util::Symbol::intern(text))
            },
        }
    }
}

/// True for characters that can start an identifier: ASCII letters and `_`.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True for characters that can continue an identifier after the first.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token == Token::Eof {
            None
        } else {
            Some(token)
        }
    }
}
