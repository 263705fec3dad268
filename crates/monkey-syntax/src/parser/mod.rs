//! Parser module, organized into small, focused components:
//! - `core` - the `Parser` struct, two-token lookahead, and the statement loop
//! - `expr` - the Pratt precedence table and prefix/infix dispatch
//! - `stmt` - `let`/`return`/expression statements and blocks

mod core;
mod expr;
mod stmt;

pub use core::Parser;
