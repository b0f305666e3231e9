//! Single roll terms: `NdM` dice or an integer constant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Upper bound on the number of dice a single term may roll.
pub const MAX_DICE_PER_TERM: u32 = 10_000;

/// One additive term of a roll expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollTerm {
    /// `count` independent dice, each uniform over `1..=sides`.
    Dice {
        /// Number of dice rolled.
        count: u32,
        /// Number of faces on each die.
        sides: u32,
    },
    /// A fixed value added to every trial.
    Constant(i64),
}

impl RollTerm {
    /// Create a dice term.
    pub fn dice(count: u32, sides: u32) -> Self {
        Self::Dice { count, sides }
    }

    /// The expected value of this term.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Dice { count, sides } => f64::from(count) * (f64::from(sides) + 1.0) / 2.0,
            Self::Constant(value) => value as f64,
        }
    }

    /// Smallest total this term can produce.
    pub fn min(&self) -> i64 {
        match *self {
            Self::Dice { count, .. } => i64::from(count),
            Self::Constant(value) => value,
        }
    }

    /// Largest total this term can produce.
    pub fn max(&self) -> i64 {
        match *self {
            Self::Dice { count, sides } => i64::from(count) * i64::from(sides),
            Self::Constant(value) => value,
        }
    }

    /// Returns true for a constant term.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl FromStr for RollTerm {
    type Err = ParseError;

    /// Parse `"3d6"`, `"1D20"` or a bare integer such as `"8"` or `"-2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if token.is_empty() {
            return Err(ParseError::Empty);
        }

        if !token.contains('d') {
            return token
                .parse::<i64>()
                .map(Self::Constant)
                .map_err(|_| ParseError::InvalidConstant { token });
        }

        let parts: Vec<&str> = token.split('d').collect();
        let [count, sides] = parts.as_slice() else {
            return Err(ParseError::Delimiter { token });
        };

        let count = parse_positive(count).ok_or_else(|| ParseError::InvalidCount {
            token: token.clone(),
        })?;
        let sides = parse_positive(sides).ok_or_else(|| ParseError::InvalidSides {
            token: token.clone(),
        })?;
        if count > MAX_DICE_PER_TERM {
            return Err(ParseError::TooManyDice {
                token,
                max: MAX_DICE_PER_TERM,
            });
        }

        Ok(Self::Dice { count, sides })
    }
}

fn parse_positive(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

impl std::fmt::Display for RollTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dice { count, sides } => write!(f, "{count}d{sides}"),
            Self::Constant(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dice() {
        assert_eq!("3d6".parse::<RollTerm>(), Ok(RollTerm::dice(3, 6)));
        assert_eq!("1d20".parse::<RollTerm>(), Ok(RollTerm::dice(1, 20)));
        assert_eq!("2D8".parse::<RollTerm>(), Ok(RollTerm::dice(2, 8)));
        assert_eq!("1d1".parse::<RollTerm>(), Ok(RollTerm::dice(1, 1)));
    }

    #[test]
    fn parse_constant() {
        assert_eq!("8".parse::<RollTerm>(), Ok(RollTerm::Constant(8)));
        assert_eq!("0".parse::<RollTerm>(), Ok(RollTerm::Constant(0)));
        assert_eq!("-2".parse::<RollTerm>(), Ok(RollTerm::Constant(-2)));
    }

    #[test]
    fn parse_rejects_wrong_delimiter_count() {
        assert!(matches!(
            "1d6d2".parse::<RollTerm>(),
            Err(ParseError::Delimiter { .. })
        ));
        assert!(matches!(
            "dd".parse::<RollTerm>(),
            Err(ParseError::Delimiter { .. })
        ));
    }

    #[test]
    fn parse_rejects_missing_parts() {
        assert!(matches!(
            "d6".parse::<RollTerm>(),
            Err(ParseError::InvalidCount { .. })
        ));
        assert!(matches!(
            "3d".parse::<RollTerm>(),
            Err(ParseError::InvalidSides { .. })
        ));
    }

    #[test]
    fn parse_rejects_non_positive_dice() {
        assert!(matches!(
            "0d6".parse::<RollTerm>(),
            Err(ParseError::InvalidCount { .. })
        ));
        assert!(matches!(
            "2d0".parse::<RollTerm>(),
            Err(ParseError::InvalidSides { .. })
        ));
        assert!(matches!(
            "-1d6".parse::<RollTerm>(),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "abc".parse::<RollTerm>(),
            Err(ParseError::InvalidConstant { .. })
        ));
        assert!(matches!(
            "xd6".parse::<RollTerm>(),
            Err(ParseError::InvalidCount { .. })
        ));
        assert_eq!("".parse::<RollTerm>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<RollTerm>(), Err(ParseError::Empty));
    }

    #[test]
    fn parse_rejects_too_many_dice() {
        assert!(matches!(
            "10001d6".parse::<RollTerm>(),
            Err(ParseError::TooManyDice { max: MAX_DICE_PER_TERM, .. })
        ));
        assert!("10000d6".parse::<RollTerm>().is_ok());
    }

    #[test]
    fn mean() {
        assert!((RollTerm::dice(1, 20).mean() - 10.5).abs() < f64::EPSILON);
        assert!((RollTerm::dice(3, 6).mean() - 10.5).abs() < f64::EPSILON);
        assert!((RollTerm::dice(1, 1).mean() - 1.0).abs() < f64::EPSILON);
        assert!((RollTerm::Constant(-4).mean() + 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds() {
        assert_eq!(RollTerm::dice(3, 6).min(), 3);
        assert_eq!(RollTerm::dice(3, 6).max(), 18);
        assert_eq!(RollTerm::Constant(7).min(), 7);
        assert_eq!(RollTerm::Constant(7).max(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(RollTerm::dice(3, 6).to_string(), "3d6");
        assert_eq!("1D20".parse::<RollTerm>().unwrap().to_string(), "1d20");
        assert_eq!(RollTerm::Constant(-2).to_string(), "-2");
    }
}
