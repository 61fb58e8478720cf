use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    ast::{
        Assign, BinOp, BooleanLiteral, Num, Program, StringLiteral, UnaryOp, Var, VarDecl,
        Visitor,
    },
    error::RuntimeError,
    interpreter::{symbol_table::SymbolTable, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking interpreter.
///
/// Executes a program against its own scope chain and returns the final
/// value of every declared variable. Expression visits return their value
/// directly, so a binary operator holds its left operand while the right one
/// is evaluated.
///
/// The interpreter does not re-run semantic analysis; call
/// [`SemanticAnalyzer::analyze`](crate::interpreter::analyzer::SemanticAnalyzer::analyze)
/// first (or use [`run`](crate::run)) so that invalid programs are rejected
/// before any statement executes.
///
/// ## Example
/// ```
/// use minipas::{
///     interpreter::{evaluator::core::Interpreter, value::core::Value},
///     parse,
/// };
///
/// let program = parse("PROGRAM T; VAR x: INTEGER; r: REAL; BEGIN x := 7.9; r := x END.").unwrap();
/// let memory = Interpreter::new().interpret(&program).unwrap();
///
/// assert_eq!(memory["X"], Value::Integer(7));
/// assert_eq!(memory["R"], Value::Real(7.0));
/// ```
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) scope: SymbolTable,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scope: SymbolTable::new("GLOBAL") }
    }

    /// Executes `tree` and returns the final mapping of declared names to
    /// values, ordered by name.
    ///
    /// Each call starts from a fresh global scope.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while executing; no mapping is
    /// produced in that case.
    pub fn interpret(&mut self, tree: &Program) -> EvalResult<BTreeMap<String, Value>> {
        self.scope = SymbolTable::new("GLOBAL");
        self.visit_program(tree)?;

        let scope = std::mem::replace(&mut self.scope, SymbolTable::new("GLOBAL"));
        let memory = scope.into_global_symbols();

        debug!(program = %tree.name, variables = memory.len(), "program executed");
        Ok(memory)
    }
}

impl Visitor for Interpreter {
    type Error = RuntimeError;
    type Value = Value;

    fn visit_var_decl(&mut self, node: &VarDecl) -> EvalResult<()> {
        self.visit_type_spec(&node.type_spec)?;
        self.scope
            .define(&node.var.name, Value::default_for(node.type_spec.var_type));
        Ok(())
    }

    fn visit_assign(&mut self, node: &Assign) -> EvalResult<()> {
        self.eval_assign(node)
    }

    fn visit_var(&mut self, node: &Var) -> EvalResult<Value> {
        self.scope
            .lookup(&node.name, false)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:   node.name.clone(),
                                                             line:   node.token.line,
                                                             column: node.token.column, })
    }

    fn visit_num(&mut self, node: &Num) -> EvalResult<Value> {
        Ok(Value::Real(node.value))
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) -> EvalResult<Value> {
        Ok(Value::Text(node.value.clone()))
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral) -> EvalResult<Value> {
        Ok(Value::Boolean(node.value))
    }

    fn visit_unary_op(&mut self, node: &UnaryOp) -> EvalResult<Value> {
        let operand = node.operand.accept(self)?;
        Self::eval_unary(node.op, &operand, node.token.line, node.token.column)
    }

    fn visit_bin_op(&mut self, node: &BinOp) -> EvalResult<Value> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        Self::eval_binary(node.op, left, right, node.token.line, node.token.column)
    }
}
