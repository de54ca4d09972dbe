use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::Environment,
};

impl Environment {
    /// Evaluates a binary operation, left operand first.
    pub(crate) fn eval_binary_op(&self, left: &Expr, op: BinaryOperator, right: &Expr) -> f64 {
        let left = self.eval(left);
        let right = self.eval(right);
        apply(op, left, right)
    }
}

/// Applies an arithmetic operator to two numbers.
///
/// Division is plain float division: `x / 0.0` is an infinity and `0.0 / 0.0`
/// is NaN.
///
/// # Example
/// ```
/// use tally::{ast::BinaryOperator, interpreter::evaluator::binary::apply};
///
/// assert_eq!(apply(BinaryOperator::Sub, 1.0, 3.0), -2.0);
/// assert_eq!(apply(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn apply(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
