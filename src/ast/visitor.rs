use crate::ast::{
    Assign, BinOp, Block, BooleanLiteral, Compound, Expr, Num, Program, Statement, StringLiteral,
    TypeSpec, UnaryOp, Var, VarDecl,
};

/// A traversal over the syntax tree.
///
/// Each pass over a program (semantic analysis, evaluation) implements one
/// `visit_*` method per node kind. Expression visits yield `Self::Value` to
/// their caller; statement and declaration visits yield `()`. Every visit may
/// fail with `Self::Error`, which aborts the traversal.
///
/// `Program`, `Block`, `Compound`, `TypeSpec` and the empty statement have
/// default implementations that walk their children in source order.
pub trait Visitor {
    /// What an expression evaluates to in this pass.
    type Value;
    /// The error that aborts this pass.
    type Error;

    /// Visits the program root.
    fn visit_program(&mut self, node: &Program) -> Result<(), Self::Error> {
        self.visit_block(&node.block)
    }

    /// Visits all declarations, then the compound statement.
    fn visit_block(&mut self, node: &Block) -> Result<(), Self::Error> {
        for declaration in &node.declarations {
            self.visit_var_decl(declaration)?;
        }
        self.visit_compound(&node.compound)
    }

    /// Visits a single variable declaration.
    fn visit_var_decl(&mut self, node: &VarDecl) -> Result<(), Self::Error>;

    /// Visits a type keyword.
    fn visit_type_spec(&mut self, _node: &TypeSpec) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits every statement of a compound statement in order.
    fn visit_compound(&mut self, node: &Compound) -> Result<(), Self::Error> {
        for child in &node.children {
            child.accept(self)?;
        }
        Ok(())
    }

    /// Visits an assignment.
    fn visit_assign(&mut self, node: &Assign) -> Result<(), Self::Error>;

    /// Visits the empty statement.
    fn visit_empty(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits a variable reference.
    fn visit_var(&mut self, node: &Var) -> Result<Self::Value, Self::Error>;

    /// Visits a numeric literal.
    fn visit_num(&mut self, node: &Num) -> Result<Self::Value, Self::Error>;

    /// Visits a text literal.
    fn visit_string_literal(&mut self, node: &StringLiteral) -> Result<Self::Value, Self::Error>;

    /// Visits a boolean literal.
    fn visit_boolean_literal(&mut self,
                             node: &BooleanLiteral)
                             -> Result<Self::Value, Self::Error>;

    /// Visits a unary operation.
    fn visit_unary_op(&mut self, node: &UnaryOp) -> Result<Self::Value, Self::Error>;

    /// Visits a binary operation.
    fn visit_bin_op(&mut self, node: &BinOp) -> Result<Self::Value, Self::Error>;
}

impl Statement {
    /// Dispatches to the `visit_*` method of `visitor` matching this
    /// statement.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Self::Compound(node) => visitor.visit_compound(node),
            Self::Assign(node) => visitor.visit_assign(node),
            Self::Empty => visitor.visit_empty(),
        }
    }
}

impl Expr {
    /// Dispatches to the `visit_*` method of `visitor` matching this
    /// expression.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Value, V::Error> {
        match self {
            Self::Num(node) => visitor.visit_num(node),
            Self::Var(node) => visitor.visit_var(node),
            Self::UnaryOp(node) => visitor.visit_unary_op(node),
            Self::BinOp(node) => visitor.visit_bin_op(node),
            Self::StringLiteral(node) => visitor.visit_string_literal(node),
            Self::BooleanLiteral(node) => visitor.visit_boolean_literal(node),
        }
    }
}
