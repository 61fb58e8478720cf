use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// Two text operands joined by `Add` are concatenated. Every other
    /// combination is arithmetic: both operands must be integers or reals,
    /// and the result is computed over `f64` and returned as a real. Division
    /// always yields a real, even for integer-valued operands.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`, `column`: Position of the operator for error reporting.
    ///
    /// # Errors
    /// - `RuntimeError::UnsupportedOperand` for a non-numeric operand, the
    ///   left one checked first.
    /// - `RuntimeError::DivisionByZero` when dividing by exactly zero.
    ///
    /// # Example
    /// ```
    /// use minipas::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    Value::Text("ab".into()),
    ///                                    Value::Text("cd".into()),
    ///                                    1,
    ///                                    1).unwrap();
    /// assert_eq!(sum, Value::Text("abcd".into()));
    ///
    /// let quotient = Interpreter::eval_binary(BinaryOperator::Div,
    ///                                         Value::Integer(7),
    ///                                         Value::Real(2.0),
    ///                                         1,
    ///                                         1);
    /// assert_eq!(quotient.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize,
                       column: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        if let (Add, Value::Text(left), Value::Text(right)) = (op, &left, &right) {
            return Ok(Value::Text(format!("{left}{right}")));
        }

        let left = left.as_real(line, column)?;
        let right = right.as_real(line, column)?;

        Ok(Value::Real(match op {
                           Add => left + right,
                           Sub => left - right,
                           Mul => left * right,
                           Div => {
                               if right == 0.0 {
                                   return Err(RuntimeError::DivisionByZero { line, column });
                               }
                               left / right
                           },
                       }))
    }
}
