use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes the whole source text.
///
/// Whitespace between tokens is skipped. Digits are consumed greedily, so
/// `123` is a single [`Token::Integer`]. There are no signed literals: `-5`
/// lexes as [`Token::Minus`] followed by `5`.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for any character that is neither
///   whitespace, a digit nor one of `( ) + - * /`.
/// - [`LexError::LiteralTooLarge`] for a digit run that overflows `i64`.
///
/// Lexing stops at the first error.
///
/// # Example
/// ```
/// use exprcalc::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("(2)*3+2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Integer(2),
///                 Token::RParen,
///                 Token::Star,
///                 Token::Integer(3),
///                 Token::Plus,
///                 Token::Integer(2)]);
///
/// assert!(lex("1+@").is_err());
/// ```
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let position = lexer.span().start;
            let slice = lexer.slice();

            if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                       position });
            }

            let character = source[position..].chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character, position });
        }
    }

    Ok(tokens)
}
