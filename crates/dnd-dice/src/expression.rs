//! Roll expressions: additive sequences of terms with display-only separators.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::term::RollTerm;

/// The literal token that groups terms visually in the report.
pub const SEPARATOR: &str = "+";

/// One command-line token of a roll expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A dice or constant term.
    Term(RollTerm),
    /// A literal `+`. Affects rendering only; terms are always summed.
    Separator,
}

/// An ordered, non-empty sum of roll terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollExpression {
    tokens: Vec<Token>,
}

impl RollExpression {
    /// Parse a sequence of tokens such as `["3d6", "+", "2"]`.
    ///
    /// Any malformed token aborts the whole parse. An expression with no
    /// terms (only separators, or nothing at all) is rejected.
    pub fn parse<I, S>(tokens: I) -> DiceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| parse_token(t.as_ref()))
            .collect::<DiceResult<Vec<_>>>()?;
        Self::from_tokens(tokens)
    }

    /// Build an expression from already-parsed tokens.
    ///
    /// Every running total, from the first term through the last, must fit
    /// in an `i64` for every possible roll.
    pub fn from_tokens(tokens: Vec<Token>) -> DiceResult<Self> {
        if !tokens.iter().any(|t| matches!(t, Token::Term(_))) {
            return Err(DiceError::EmptyExpression);
        }
        let expr = Self { tokens };
        expr.check_bounds()?;
        Ok(expr)
    }

    fn check_bounds(&self) -> DiceResult<()> {
        let (mut low, mut high) = (0_i64, 0_i64);
        for term in self.terms() {
            match (low.checked_add(term.min()), high.checked_add(term.max())) {
                (Some(l), Some(h)) => (low, high) = (l, h),
                _ => {
                    return Err(DiceError::TotalOutOfRange {
                        expression: self.to_string(),
                        min: i64::MIN,
                        max: i64::MAX,
                    });
                }
            }
        }
        Ok(())
    }

    /// All tokens in input order, separators included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The terms of the sum, in input order.
    pub fn terms(&self) -> impl Iterator<Item = &RollTerm> {
        self.tokens.iter().filter_map(|t| match t {
            Token::Term(term) => Some(term),
            Token::Separator => None,
        })
    }

    /// Analytic mean of the total.
    pub fn mean(&self) -> f64 {
        self.terms().map(RollTerm::mean).sum()
    }

    /// Returns true if every term is a constant.
    pub fn is_constant(&self) -> bool {
        self.terms().all(RollTerm::is_constant)
    }
}

fn parse_token(token: &str) -> DiceResult<Token> {
    if token.trim() == SEPARATOR {
        return Ok(Token::Separator);
    }
    Ok(Token::Term(token.parse()?))
}

impl std::fmt::Display for RollExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .tokens
            .iter()
            .map(|t| match t {
                Token::Term(term) => term.to_string(),
                Token::Separator => SEPARATOR.to_string(),
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
