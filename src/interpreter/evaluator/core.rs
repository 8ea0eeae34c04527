use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary_op, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to an integer.
///
/// This is the main entry point for evaluation. The tree is only borrowed and
/// never modified; operands are evaluated left before right and the first
/// error aborts the walk.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if a divisor evaluates to zero.
/// - [`RuntimeError::Overflow`] if an intermediate result does not fit into an
///   `i64`.
///
/// # Example
/// ```
/// use exprcalc::{
///     error::RuntimeError,
///     interpreter::{evaluator::core::evaluate, lexer::lex, parser::core::parse},
/// };
///
/// let expr = parse(&lex("2 + 2 * 2").unwrap()).unwrap();
/// assert_eq!(evaluate(&expr), Ok(6));
///
/// let expr = parse(&lex("1 / 0").unwrap()).unwrap();
/// assert_eq!(evaluate(&expr),
///            Err(RuntimeError::DivisionByZero { dividend: 1 }));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Integer(n) => Ok(*n),
        Expr::UnaryOp { op, expr } => eval_unary(*op, evaluate(expr)?),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary_op(*op, left, right)
        },
    }
}
