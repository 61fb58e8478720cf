use tracing::trace;

use crate::{
    ast::Assign,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, kind::ValueKind},
    },
    util::num::{truncate_to_integer, widen_to_real},
};

impl Interpreter {
    /// Evaluates the right-hand side of an assignment and stores it in the
    /// target variable.
    ///
    /// The target must already be declared; its current value decides the
    /// type the incoming value is coerced to (see [`Interpreter::coerce`]).
    /// The right-hand side is evaluated completely before the binding
    /// changes.
    pub(in crate::interpreter::evaluator) fn eval_assign(&mut self,
                                                         node: &Assign)
                                                         -> EvalResult<()> {
        let incoming = node.value.accept(self)?;

        let target = &node.target;
        let undefined = || RuntimeError::UndefinedVariable { name:   target.name.clone(),
                                                             line:   target.token.line,
                                                             column: target.token.column, };

        let expected = self.scope
                           .lookup(&target.name, false)
                           .map(Value::kind)
                           .ok_or_else(undefined)?;
        let value = Self::coerce(expected, incoming, node.token.line, node.token.column)?;

        trace!(variable = %target.name, %value, "assigned");
        self.scope
            .assign(&target.name, value)
            .map_err(|_| undefined())
    }

    /// Converts `value` for storage in a variable currently holding a value
    /// of kind `expected`.
    ///
    /// - An integer stored into a real variable is widened.
    /// - A real stored into an integer variable is truncated toward zero,
    ///   never rounded.
    /// - Values of the expected kind are stored as they are.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` for any other combination.
    ///
    /// # Example
    /// ```
    /// use minipas::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     value::{core::Value, kind::ValueKind},
    /// };
    ///
    /// let v = Interpreter::coerce(ValueKind::Integer, Value::Real(-7.9), 1, 1).unwrap();
    /// assert_eq!(v, Value::Integer(-7));
    ///
    /// let v = Interpreter::coerce(ValueKind::Real, Value::Integer(3), 1, 1).unwrap();
    /// assert_eq!(v, Value::Real(3.0));
    ///
    /// assert!(Interpreter::coerce(ValueKind::Text, Value::Real(1.0), 1, 1).is_err());
    /// ```
    pub fn coerce(expected: ValueKind,
                  value: Value,
                  line: usize,
                  column: usize)
                  -> EvalResult<Value> {
        match (expected, value) {
            (ValueKind::Real, Value::Integer(n)) => Ok(Value::Real(widen_to_real(n))),
            (ValueKind::Integer, Value::Real(r)) => Ok(Value::Integer(truncate_to_integer(r))),
            (expected, value) if value.kind() == expected => Ok(value),
            (expected, value) => Err(RuntimeError::TypeMismatch { expected,
                                                                  found: value.kind(),
                                                                  line,
                                                                  column }),
        }
    }
}
