use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an operator where an operand was expected.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// Reached the end of input where an operand was expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead, or `None` at the end of input.
        found: Option<Token>,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        token: Token,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Parse error: Unexpected token '{token}', expected an operand.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Parse error: Unexpected end of input, expected an operand.")
            },

            Self::ExpectedClosingParen { found: Some(token) } => write!(f,
                                                                        "Parse error: Expected closing parenthesis ')' but found '{token}'."),

            Self::ExpectedClosingParen { found: None } => write!(f,
                                                                 "Parse error: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Parse error: Extra tokens after expression, starting at '{token}'."),
        }
    }
}

impl std::error::Error for ParseError {}
