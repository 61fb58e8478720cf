use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// The operand must be an integer or a real. `Plus` is the identity and
    /// `Minus` negates; the result is always a real.
    ///
    /// # Errors
    /// `RuntimeError::UnsupportedOperand` for boolean, text or absent
    /// operands.
    ///
    /// # Example
    /// ```
    /// use minipas::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Minus, &Value::Integer(5), 1, 1).unwrap();
    /// assert_eq!(v, Value::Real(-5.0));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Plus, &Value::Boolean(true), 1, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator,
                      value: &Value,
                      line: usize,
                      column: usize)
                      -> EvalResult<Value> {
        let x = value.as_real(line, column)?;

        Ok(Value::Real(match op {
                           UnaryOperator::Plus => x,
                           UnaryOperator::Minus => -x,
                       }))
    }
}
