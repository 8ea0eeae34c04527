use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::checked_floor_div,
};

/// Evaluates an integer arithmetic operation.
///
/// All operators are checked: a result outside the `i64` range is reported as
/// [`RuntimeError::Overflow`] instead of wrapping. Division rounds toward
/// negative infinity, so `-7 / 2` is `-4`, and a zero divisor is reported as
/// [`RuntimeError::DivisionByZero`].
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use exprcalc::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Mul, 12, 32), Ok(384));
/// assert_eq!(eval_binary_op(BinaryOperator::Div, -7, 2), Ok(-4));
/// assert!(eval_binary_op(BinaryOperator::Add, i64::MAX, 1).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            checked_floor_div(left, right)
        },
    };

    result.ok_or_else(|| RuntimeError::binary_overflow(left, op, right))
}
