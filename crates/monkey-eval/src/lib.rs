//! monkey-eval - a minimal tree-walking evaluator.
//!
//! Covers only enough to demonstrate the core end to end: a program whose
//! last statement is an integer literal expression evaluates to that
//! integer. Every other construct (identifiers, operators, conditionals,
//! functions) is not yet implemented; [`evaluate`] returns [`Object::Null`]
//! for it rather than guessing at semantics the language core doesn't define.
//!
//! ```
//! use monkey_lex::Lexer;
//! use monkey_syntax::Parser;
//! use monkey_eval::{evaluate, Object};
//!
//! let mut parser = Parser::new(Lexer::new("5;"));
//! let program = parser.parse_program();
//! assert_eq!(evaluate(&program), Object::Integer(5));
//! ```

mod object;

pub use object::{Object, ObjectKind};

use monkey_syntax::ast::{Expr, Program, Stmt};

/// Evaluates a program, returning the value of its last statement (or
/// [`Object::Null`] for an empty program).
pub fn evaluate(program: &Program) -> Object {
    program
        .statements
        .last()
        .map(eval_statement)
        .unwrap_or(Object::Null)
}

fn eval_statement(stmt: &Stmt) -> Object {
    match stmt {
        Stmt::Expression(expr_stmt) => expr_stmt
            .expression
            .as_ref()
            .map(eval_expression)
            .unwrap_or(Object::Null),
        Stmt::Let(_) | Stmt::Return(_) | Stmt::Block(_) => Object::Null,
    }
}

fn eval_expression(expr: &Expr) -> Object {
    match expr {
        Expr::IntegerLiteral(lit) => Object::Integer(lit.value),
        _ => Object::Null,
    }
}
