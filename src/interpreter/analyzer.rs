use tracing::debug;

use crate::{
    ast::{
        Assign, BinOp, BooleanLiteral, Num, Program, StringLiteral, UnaryOp, Var, VarDecl,
        Visitor,
    },
    error::SemanticError,
    interpreter::{symbol_table::SymbolTable, value::core::Value},
};

/// Result type used by semantic analysis.
pub type AnalysisResult<T> = Result<T, SemanticError>;

/// Pre-execution validation pass.
///
/// Walks the tree once over its own scope chain and rejects duplicate
/// declarations and references to undeclared variables, so that a program
/// with such errors never starts executing. No arithmetic is performed and
/// value types are not checked; that is left to the evaluator.
///
/// ## Example
/// ```
/// use minipas::{error::SemanticError, interpreter::analyzer::SemanticAnalyzer, parse};
///
/// let program = parse("PROGRAM T; VAR x: REAL; BEGIN x := y + 1 END.").unwrap();
/// let error = SemanticAnalyzer::new().analyze(&program).unwrap_err();
///
/// assert!(matches!(error, SemanticError::UndefinedVariable { ref name, .. } if name == "Y"));
/// ```
pub struct SemanticAnalyzer {
    scope: SymbolTable,
}

#[allow(clippy::new_without_default)]
impl SemanticAnalyzer {
    /// Creates an analyzer with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scope: SymbolTable::new("GLOBAL") }
    }

    /// Validates `tree`.
    ///
    /// Each call starts from a fresh global scope, which is discarded when
    /// the call returns.
    ///
    /// # Errors
    /// - `SemanticError::DuplicateDeclaration` when a name is declared twice
    ///   in the same scope.
    /// - `SemanticError::UndefinedVariable` when a variable is used without a
    ///   declaration.
    pub fn analyze(&mut self, tree: &Program) -> AnalysisResult<()> {
        self.scope = SymbolTable::new("GLOBAL");
        self.visit_program(tree)?;

        debug!(program = %tree.name,
               scope = self.scope.scope_name(),
               declared = self.scope.symbols().len(),
               "semantic analysis passed");
        Ok(())
    }
}

impl Visitor for SemanticAnalyzer {
    type Error = SemanticError;
    type Value = ();

    fn visit_var_decl(&mut self, node: &VarDecl) -> AnalysisResult<()> {
        self.visit_type_spec(&node.type_spec)?;

        let name = &node.var.name;
        if self.scope.lookup(name, true).is_some() {
            return Err(SemanticError::DuplicateDeclaration { name:   name.clone(),
                                                             line:   node.var.token.line,
                                                             column: node.var.token.column, });
        }

        self.scope
            .define(name, Value::default_for(node.type_spec.var_type));
        Ok(())
    }

    fn visit_assign(&mut self, node: &Assign) -> AnalysisResult<()> {
        node.value.accept(self)?;
        self.visit_var(&node.target)
    }

    fn visit_var(&mut self, node: &Var) -> AnalysisResult<()> {
        if self.scope.lookup(&node.name, false).is_none() {
            return Err(SemanticError::UndefinedVariable { name:   node.name.clone(),
                                                          line:   node.token.line,
                                                          column: node.token.column, });
        }
        Ok(())
    }

    fn visit_num(&mut self, _node: &Num) -> AnalysisResult<()> {
        Ok(())
    }

    fn visit_string_literal(&mut self, _node: &StringLiteral) -> AnalysisResult<()> {
        Ok(())
    }

    fn visit_boolean_literal(&mut self, _node: &BooleanLiteral) -> AnalysisResult<()> {
        Ok(())
    }

    fn visit_unary_op(&mut self, node: &UnaryOp) -> AnalysisResult<()> {
        node.operand.accept(self)
    }

    fn visit_bin_op(&mut self, node: &BinOp) -> AnalysisResult<()> {
        node.left.accept(self)?;
        node.right.accept(self)
    }
}
