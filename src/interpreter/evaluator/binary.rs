use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// `+`, `-` and `*` wrap around on overflow. `/` truncates toward zero,
    /// fails on a zero divisor, and wraps for `i32::MIN / -1`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary_op(BinaryOperator::Div, 7, 2, 1).unwrap(), 3);
    /// assert!(Evaluator::eval_binary_op(BinaryOperator::Div, 7, 0, 1).is_err());
    /// ```
    pub fn eval_binary_op(op: BinaryOperator,
                          left: i32,
                          right: i32,
                          line: usize)
                          -> EvalResult<i32> {
        match op {
            BinaryOperator::Add => Ok(left.wrapping_add(right)),
            BinaryOperator::Sub => Ok(left.wrapping_sub(right)),
            BinaryOperator::Mul => Ok(left.wrapping_mul(right)),
            BinaryOperator::Div => {
                if right == 0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(left.wrapping_div(right))
                }
            },
        }
    }
}
