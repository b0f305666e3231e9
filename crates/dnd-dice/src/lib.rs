//! Dice expression parsing and Monte Carlo roll statistics.
//!
//! Parses free-form dice notation (`3d6`, `1d20`, `8`, separated by optional
//! `+` tokens), rolls it once for real, and ranks that roll against a large
//! batch of simulated rolls of the same expression.

pub mod config;
pub mod error;
pub mod expression;
pub mod report;
pub mod simulate;
pub mod term;

pub use config::{DEFAULT_BATCH_SIZE, SimConfig};
pub use error::{DiceError, DiceResult, ParseError};
pub use expression::{RollExpression, Token};
pub use report::render;
pub use simulate::{OutcomePart, RollOutcome, Simulator, TermRoll, TrialBatch, roll};
pub use term::RollTerm;
