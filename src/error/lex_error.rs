#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source text.
        position:  usize,
    },
    /// An integer literal does not fit into an `i64`.
    LiteralTooLarge {
        /// The digits of the literal as written.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source text where the error was detected.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::error::LexError;
    ///
    /// let err = LexError::UnexpectedCharacter { character: '@',
    ///                                           position:  2, };
    ///
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character '{character}'."),
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
