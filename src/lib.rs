//! # exprcalc
//!
//! exprcalc is an integer arithmetic expression evaluator written in Rust.
//! It lexes, parses and evaluates expressions built from non-negative integer
//! literals, the operators `+ - * /` and parentheses.
//!
//! The pipeline has three phases, each usable on its own:
//!
//! ```
//! use exprcalc::interpreter::{evaluator::core::evaluate, lexer::lex, parser::core::parse};
//!
//! let tokens = lex("(2 + 2) * 2").unwrap();
//! let expr = parse(&tokens).unwrap();
//!
//! assert_eq!(evaluate(&expr), Ok(8));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::evaluate, lexer::lex, parser::core::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// Every phase has its own error enum so callers can tell the failure kinds
/// apart. All of them implement `Display` and `std::error::Error`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the three phases of the pipeline and exposes
/// their entry points.
pub mod interpreter;
/// General numeric helpers.
///
/// Integer routines used by the evaluator that are not specific to a single
/// phase.
pub mod util;

/// Lexes, parses, and evaluates `source`, returning the integer result.
///
/// This is `evaluate(parse(lex(source)))`. Like [`parse`], it ignores tokens
/// that follow a complete expression.
///
/// # Errors
/// Returns the first error raised by any phase. The boxed error is a
/// [`error::LexError`], [`error::ParseError`] or [`error::RuntimeError`] and
/// can be told apart with `downcast_ref`.
///
/// # Examples
/// ```
/// use exprcalc::{calculate, error::ParseError};
///
/// assert_eq!(calculate("12 * 32 + 2").unwrap(), 386);
/// assert_eq!(calculate("-(3 + 4)").unwrap(), -7);
///
/// // Missing closing parenthesis.
/// let err = calculate("(1 + 2").unwrap_err();
/// assert!(err.downcast_ref::<ParseError>().is_some());
/// ```
pub fn calculate(source: &str) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
    let tokens = lex(source)?;
    let expr = parse(&tokens)?;
    Ok(evaluate(&expr)?)
}
