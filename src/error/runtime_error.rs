use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The dividend that was being divided.
        dividend: i64,
    },
    /// Arithmetic operation overflowed `i64`.
    Overflow {
        /// Human readable form of the failing operation, e.g. `-(-9223372036854775808)`.
        operation: String,
    },
}

impl RuntimeError {
    /// Builds an [`RuntimeError::Overflow`] for a binary operation.
    pub(crate) fn binary_overflow(left: i64, op: BinaryOperator, right: i64) -> Self {
        Self::Overflow { operation: format!("{left} {op} {right}") }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Runtime error: Division by zero ({dividend} / 0).")
            },
            Self::Overflow { operation } => write!(f,
                                                   "Runtime error: Integer overflow while trying to compute {operation}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
