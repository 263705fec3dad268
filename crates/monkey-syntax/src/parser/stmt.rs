//! Statement parsing: `let`, `return`, expression statements, and blocks.

use monkey_lex::Token;
use monkey_util::Symbol;

use super::core::Parser;
use super::expr::Precedence;
use crate::ast::{Block, ExpressionStmt, Identifier, LetStmt, ReturnStmt, Stmt};

impl<'a> Parser<'a> {
    /// Dispatches on `cur_token`: `let` and `return` have dedicated
    /// productions, everything else is an expression statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur_token {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token;

        if !self.expect_peek(Token::Ident(Symbol::intern("")), "IDENT") {
            return None;
        }
        let name = self.parse_identifier_strict();

        if !self.expect_peek(Token::Assign, "=") {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token == Token::Semicolon {
            self.advance();
        }

        Some(Stmt::Let(LetStmt { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token == Token::Semicolon {
            self.advance();
        }

        Some(Stmt::Return(ReturnStmt { token, value }))
    }

    /// A semicolon is optional at the end of an expression statement, which
    /// matters for the REPL's single-line `>> 5 + 5` case.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.cur_token;
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token == Token::Semicolon {
            self.advance();
        }

        Some(Stmt::Expression(ExpressionStmt { token, expression }))
    }

    /// Parses the identifier that must follow `let`, having already checked
    /// via `expect_peek` that `cur_token` is now an `Ident`.
    fn parse_identifier_strict(&mut self) -> Identifier {
        let token = self.cur_token;
        let value = match self.cur_token {
            Token::Ident(sym) => sym,
            _ => Symbol::intern(""),
        };
        Identifier { token, value }
    }

    /// Parses a brace-delimited statement sequence, assuming `cur_token` is
    /// `{`. Advances past `{`, accumulates statements until `}` or `Eof`, and
    /// leaves `cur_token` on the closing `}` - the caller's own advance steps
    /// past it.
    pub(crate) fn parse_block_statement(&mut self) -> Block {
        let token = Some(self.cur_token);
        let mut statements = Vec::new();
        self.advance();

        while self.cur_token != Token::RBrace && self.cur_token != Token::Eof {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        Block { token, statements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_lex::Lexer;

    fn parse(source: &str) -> (crate::ast::Program, Vec<String>) {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        (program, parser.errors().to_vec())
    }

    #[test]
    fn three_let_statements_with_no_errors() {
        let (program, errors) = parse("let x = 5; let y = 10; let foobar = 838383;");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 3);
        let names: Vec<_> = program
            .statements
            .iter()
            .map(|s| match s {
                Stmt::Let(l) => l.name.value.as_str(),
                _ => panic!("expected let statement"),
            })
            .collect();
        assert_eq!(names, vec!["x", "y", "foobar"]);
    }

    #[test]
    fn malformed_let_statements_produce_expected_errors() {
        let (_, errors) = parse("let x 5; let = 10; let 838383;");
        assert_eq!(
            errors,
            vec![
                "expected next token to be =, got INT",
                "expected next token to be IDENT, got =",
                "no parse function for = found",
                "expected next token to be IDENT, got INT",
            ]
        );
    }

    #[test]
    fn return_statement_renders() {
        let (program, errors) = parse("return 5;");
        assert!(errors.is_empty());
        assert_eq!(program.render(), "return 5;");
    }

    #[test]
    fn expression_statement_without_trailing_semicolon() {
        let (program, errors) = parse("5 + 5");
        assert!(errors.is_empty());
        assert_eq!(program.render(), "(5 + 5)");
    }
}
