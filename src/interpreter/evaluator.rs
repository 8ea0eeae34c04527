/// Core evaluation logic for expressions.
///
/// Contains the `EvalResult` alias and the recursive tree walk that dispatches
/// to the operator-specific modules.
pub mod core;

/// Unary operator evaluation.
///
/// Handles all operations that take a single operand, such as negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked integer addition, subtraction, multiplication and floor
/// division.
pub mod binary;
