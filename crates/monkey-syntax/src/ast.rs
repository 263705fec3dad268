//! monkey-syntax AST - node definitions and the canonical `render()` form.
//!
//! Every node owns its children exclusively (the tree is acyclic) and keeps
//! the token it was built from, so `token_literal()` is always available for
//! diagnostics without needing a separate position-tracking pass.

use monkey_lex::Token;
use monkey_util::Symbol;

/// The root of a parsed source file: an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or_default()
    }

    /// Concatenates each statement's render, with no separator.
    pub fn render(&self) -> String {
        self.statements.iter().map(Stmt::render).collect()
    }
}

/// A statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(Block),
}

impl Stmt {
    pub fn token_literal(&self) -> String {
        match self {
            Stmt::Let(s) => s.token.literal(),
            Stmt::Return(s) => s.token.literal(),
            Stmt::Expression(s) => s.token.literal(),
            Stmt::Block(s) => s.token.literal(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Stmt::Let(s) => s.render(),
            Stmt::Return(s) => s.render(),
            Stmt::Expression(s) => s.render(),
            Stmt::Block(s) => s.render(),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expr>,
}

impl LetStmt {
    pub fn render(&self) -> String {
        let value = self.value.as_ref().map(Expr::render).unwrap_or_default();
        format!("let {} = {};", self.name.render(), value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl ReturnStmt {
    pub fn render(&self) -> String {
        let value = self.value.as_ref().map(Expr::render).unwrap_or_default();
        format!("return {};", value)
    }
}

/// A bare expression used in statement position, e.g. `x + 1;`.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Option<Expr>,
}

impl ExpressionStmt {
    pub fn render(&self) -> String {
        self.expression.as_ref().map(Expr::render).unwrap_or_default()
    }
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub token: Option<Token>,
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn render(&self) -> String {
        self.statements.iter().map(Stmt::render).collect()
    }
}

/// An expression.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpr),
}

impl Expr {
    pub fn token_literal(&self) -> String {
        match self {
            Expr::Identifier(e) => e.token.literal(),
            Expr::IntegerLiteral(e) => e.token.literal(),
            Expr::BooleanLiteral(e) => e.token.literal(),
            Expr::Prefix(e) => e.token.literal(),
            Expr::Infix(e) => e.token.literal(),
            Expr::If(e) => e.token.literal(),
            Expr::FunctionLiteral(e) => e.token.literal(),
            Expr::Call(e) => e.token.literal(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Expr::Identifier(e) => e.render(),
            Expr::IntegerLiteral(e) => e.render(),
            Expr::BooleanLiteral(e) => e.render(),
            Expr::Prefix(e) => e.render(),
            Expr::Infix(e) => e.render(),
            Expr::If(e) => e.render(),
            Expr::FunctionLiteral(e) => e.render(),
            Expr::Call(e) => e.render(),
        }
    }
}

/// A name reference, e.g. `x`, `foobar`.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: Symbol,
}

impl Identifier {
    pub fn render(&self) -> String {
        self.value.as_str().to_string()
    }
}

/// A 64-bit signed integer literal, e.g. `5`.
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn render(&self) -> String {
        self.value.to_string()
    }
}

/// `true` or `false`.
#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl BooleanLiteral {
    pub fn render(&self) -> String {
        self.value.to_string()
    }
}

/// A unary prefix operator applied to its operand: `!x`, `-x`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl PrefixExpr {
    pub fn render(&self) -> String {
        format!("({}{})", self.operator, self.right.render())
    }
}

/// A binary infix operator between two operands: `a + b`.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl InfixExpr {
    pub fn render(&self) -> String {
        format!("({} {} {})", self.left.render(), self.operator, self.right.render())
    }
}

/// `if (<condition>) <consequence> [else <alternative>]`.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

impl IfExpr {
    pub fn render(&self) -> String {
        let mut out = format!("if {}{}", self.condition.render(), self.consequence.render());
        if let Some(alt) = &self.alternative {
            out.push_str("else ");
            out.push_str(&alt.render());
        }
        out
    }
}

/// `fn(<params>) <body>`.
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

impl FunctionLiteral {
    pub fn render(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(Identifier::render).collect();
        format!("{}({}){}", self.token.literal(), params.join(", "), self.body.render())
    }
}

/// `<function>(<args>)`.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl CallExpr {
    pub fn render(&self) -> String {
        let args: Vec<String> = self.arguments.iter().map(Expr::render).collect();
        format!("{}({})", self.function.render(), args.join(", "))
    }
}
