use crate::interpreter::token::Token;

/// Double dispatch over the syntax tree.
///
/// Declares the `Visitor` trait implemented by the semantic analyzer and the
/// evaluator, and the `accept` methods that route each node to the matching
/// `visit_*` method.
pub mod visitor;

pub use visitor::Visitor;

/// The root of a parsed program: `PROGRAM name; block.`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program name, upper-cased.
    pub name:  String,
    /// The program body.
    pub block: Block,
}

/// Declarations followed by the main compound statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable declarations, one per declared name, in source order.
    pub declarations: Vec<VarDecl>,
    /// The statement executed after all declarations.
    pub compound:     Compound,
}

/// Declaration of a single variable.
///
/// A declaration list such as `a, b: REAL;` expands into one `VarDecl` per
/// name, each with its own copy of the type specification.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared variable.
    pub var:       Var,
    /// The declared type.
    pub type_spec: TypeSpec,
}

/// The declarable types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VarType {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `STRING`
    String,
    /// `BOOLEAN`
    Boolean,
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
        };
        write!(f, "{name}")
    }
}

/// A type keyword in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// The keyword token.
    pub token:    Token,
    /// The type the keyword names.
    pub var_type: VarType,
}

/// `BEGIN statement; ...; statement END`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    /// The statements, in execution order.
    pub children: Vec<Statement>,
}

/// `name := expression`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The assigned variable.
    pub target: Var,
    /// The `:=` token.
    pub token:  Token,
    /// The assigned expression.
    pub value:  Expr,
}

/// Reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    /// Name of the variable, upper-cased.
    pub name:  String,
    /// The identifier token.
    pub token: Token,
}

/// A numeric literal.
///
/// The value is always stored as floating-point, whether or not the literal
/// has a fractional part.
#[derive(Debug, Clone, PartialEq)]
pub struct Num {
    /// The literal token.
    pub token: Token,
    /// The parsed value.
    pub value: f64,
}

/// A unary operation (`+x`, `-x`).
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    /// The operator.
    pub op:      UnaryOperator,
    /// The operator token.
    pub token:   Token,
    /// The operand expression.
    pub operand: Box<Expr>,
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// Left operand.
    pub left:  Box<Expr>,
    /// The operator.
    pub op:    BinaryOperator,
    /// The operator token.
    pub token: Token,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A single-quoted text literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    /// The literal token.
    pub token: Token,
    /// The text between the quotes.
    pub value: String,
}

/// `TRUE` or `FALSE`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    /// The literal token.
    pub token: Token,
    /// The literal value.
    pub value: bool,
}

/// Represents a statement inside a compound statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `BEGIN ... END` block.
    Compound(Compound),
    /// An assignment.
    Assign(Assign),
    /// The empty statement, e.g. before `END` after a trailing `;`.
    Empty,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Num(Num),
    /// A variable reference.
    Var(Var),
    /// A unary operation.
    UnaryOp(UnaryOp),
    /// A binary operation.
    BinOp(BinOp),
    /// A text literal.
    StringLiteral(StringLiteral),
    /// A boolean literal.
    BooleanLiteral(BooleanLiteral),
}

impl Expr {
    /// Gets the token the expression starts at, or for operators the operator
    /// token.
    /// ## Example
    /// ```
    /// use minipas::{
    ///     ast::{Expr, Var},
    ///     interpreter::token::{Token, TokenKind},
    /// };
    ///
    /// let expr = Expr::Var(Var { name:  "X".to_string(),
    ///                            token: Token::new(TokenKind::Id, "X", 5, 3), });
    ///
    /// assert_eq!(expr.token().line, 5);
    /// ```
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Num(Num { token, .. })
            | Self::Var(Var { token, .. })
            | Self::UnaryOp(UnaryOp { token, .. })
            | Self::BinOp(BinOp { token, .. })
            | Self::StringLiteral(StringLiteral { token, .. })
            | Self::BooleanLiteral(BooleanLiteral { token, .. }) => token,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or text concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/` or `DIV`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}
