use crate::{ast::UnaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: integer negation. Negating `i64::MIN` overflows.
///
/// # Example
/// ```
/// use exprcalc::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5), Ok(-5));
/// assert!(eval_unary(UnaryOperator::Negate, i64::MIN).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: i64) -> EvalResult<i64> {
    match op {
        UnaryOperator::Negate => {
            value.checked_neg()
                 .ok_or_else(|| RuntimeError::Overflow { operation: format!("-({value})") })
        },
    }
}
