use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. Parenthesized groups call back
/// into this rule.
///
/// Grammar: `expression := additive`
///
/// Tokens after a complete expression are left in the iterator.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}

/// Parses a token sequence into an expression tree.
///
/// Tokens are consumed from the front. Parsing stops as soon as a complete
/// expression has been read; anything after it is ignored, so `1 2` parses as
/// `1`. Use [`parse_all`] to reject trailing tokens.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] when an operand is missing at the
///   end of input.
/// - [`ParseError::UnexpectedToken`] when an operator stands where an operand
///   was expected.
/// - [`ParseError::ExpectedClosingParen`] when a `(` is not closed.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let tokens = lex("2 - 4*3").unwrap();
/// let expected = Expr::binary(Expr::Integer(2),
///                             BinaryOperator::Sub,
///                             Expr::binary(Expr::Integer(4),
///                                          BinaryOperator::Mul,
///                                          Expr::Integer(3)));
///
/// assert_eq!(parse(&tokens).unwrap(), expected);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_expression(&mut tokens.iter().peekable())
}

/// Parses a token sequence that must contain exactly one expression.
///
/// Behaves like [`parse`] but fails with
/// [`ParseError::UnexpectedTrailingTokens`] if any token remains after the
/// expression.
///
/// # Example
/// ```
/// use exprcalc::{
///     error::ParseError,
///     interpreter::{
///         lexer::{Token, lex},
///         parser::core::{parse, parse_all},
///     },
/// };
///
/// let tokens = lex("(1 + 2) 3").unwrap();
///
/// assert!(parse(&tokens).is_ok());
/// assert_eq!(parse_all(&tokens),
///            Err(ParseError::UnexpectedTrailingTokens { token: Token::Integer(3) }));
/// ```
pub fn parse_all(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token: *token }),
        None => Ok(expr),
    }
}
