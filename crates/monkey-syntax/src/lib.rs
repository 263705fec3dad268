//! monkey-syntax - the abstract syntax tree and Pratt parser for Monkey.
//!
//! [`Parser`] consumes a [`monkey_lex::Lexer`] and produces a [`ast::Program`].
//! Parsing never aborts on the first malformed construct: errors accumulate in
//! [`Parser::errors`] and the caller decides what to do with a partial tree.
//!
//! ```
//! use monkey_lex::Lexer;
//! use monkey_syntax::Parser;
//!
//! let mut parser = Parser::new(Lexer::new("let x = 5;"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.render(), "let x = 5;");
//! ```

pub mod ast;
mod parser;

pub use parser::Parser;
