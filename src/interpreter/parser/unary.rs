use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_multiplicative,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses the first operand of a sum together with its optional sign.
///
/// A leading `+` is consumed and produces no node. A leading `-` wraps the
/// whole following multiplicative term, so `-2 * 3` is `-(2 * 3)` and
/// `-3 + 4` is `(-3) + 4`. At most one sign is accepted: `--1` fails because
/// the second `-` stands where an operand is expected.
///
/// Grammar:
/// ```text
///     signed_term := ("+" | "-")? multiplicative
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the plain multiplicative term.
pub(crate) fn parse_signed_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Plus) => {
            tokens.next();
            parse_multiplicative(tokens)
        },
        Some(Token::Minus) => {
            tokens.next();
            let expr = parse_multiplicative(tokens)?;
            Ok(Expr::unary(UnaryOperator::Negate, expr))
        },
        _ => parse_multiplicative(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are integer literals and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := integer
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Expr::Integer(*n)),
        Some(Token::LParen) => parse_grouping(tokens),
        Some(token) => Err(ParseError::UnexpectedToken { token: *token }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The inner expression is returned as is; parentheses leave no node in the
/// tree.
///
/// # Errors
/// Returns [`ParseError::ExpectedClosingParen`] if the inner expression is not
/// followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        found => Err(ParseError::ExpectedClosingParen { found: found.copied() }),
    }
}
