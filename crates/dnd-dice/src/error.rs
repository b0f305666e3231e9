//! Error types for dice parsing and simulation.

/// A dice token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token was the empty string.
    #[error("empty dice token")]
    Empty,

    /// A dice token did not split into exactly one count and one side count.
    #[error("invalid dice term '{token}': expected exactly one 'd' between count and sides")]
    Delimiter {
        /// The offending token.
        token: String,
    },

    /// The dice count was not a positive integer.
    #[error("invalid dice term '{token}': count must be a positive integer")]
    InvalidCount {
        /// The offending token.
        token: String,
    },

    /// The number of sides was not a positive integer.
    #[error("invalid dice term '{token}': sides must be a positive integer")]
    InvalidSides {
        /// The offending token.
        token: String,
    },

    /// A token without a 'd' was not an integer constant.
    #[error("invalid constant '{token}': expected an integer or a dice term like 3d6")]
    InvalidConstant {
        /// The offending token.
        token: String,
    },

    /// A dice term asked for more dice than a single term may roll.
    #[error("invalid dice term '{token}': at most {max} dice per term")]
    TooManyDice {
        /// The offending token.
        token: String,
        /// The per-term limit.
        max: u32,
    },
}

/// Errors that can occur while building or simulating a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A token in the expression was malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The expression held no dice or constant terms.
    #[error("no dice terms supplied (try something like: 3d6 + 2)")]
    EmptyExpression,

    /// A running total of the expression could leave the `i64` range.
    #[error("roll total out of range: '{expression}' can exceed {min}..={max}")]
    TotalOutOfRange {
        /// The expression as written.
        expression: String,
        /// Smallest representable total.
        min: i64,
        /// Largest representable total.
        max: i64,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
