//! Monte Carlo simulation of roll expressions.
//!
//! A roll is simulated as a batch of independent trials. Trial 0 is the
//! "real" roll shown to the user; the whole batch estimates the
//! distribution of the total, against which the real roll is ranked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SimConfig;
use crate::error::DiceResult;
use crate::expression::{RollExpression, Token};
use crate::term::RollTerm;

/// Simulated totals of every trial in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBatch {
    totals: Vec<i64>,
}

impl TrialBatch {
    fn zeroed(size: usize) -> Self {
        Self {
            totals: vec![0; size.max(1)],
        }
    }

    /// Number of trials.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Always false; a batch holds at least the realized trial.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Per-trial totals.
    pub fn totals(&self) -> &[i64] {
        &self.totals
    }

    /// Total of trial 0.
    pub fn realized(&self) -> i64 {
        self.totals[0]
    }

    /// Number of trials whose total is strictly below `value`.
    pub fn count_below(&self, value: i64) -> usize {
        self.totals.iter().filter(|t| **t < value).count()
    }

    /// Percentage (0-100) of trials strictly below `value`.
    ///
    /// Ties do not count, so a distribution that is a single point always
    /// ranks its own value at 0%.
    pub fn percentile_below(&self, value: i64) -> f64 {
        self.count_below(value) as f64 / self.len() as f64 * 100.0
    }
}

/// The realized value of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRoll {
    /// The term that was rolled.
    pub term: RollTerm,
    /// Individual die faces of the realized trial (empty for constants).
    pub faces: Vec<u32>,
    /// Realized value of the term.
    pub value: i64,
}

impl TermRoll {
    /// Render the die faces as `[ 3 12  7]`, or a constant's literal value.
    pub fn faces_display(&self) -> String {
        if self.term.is_constant() {
            return self.value.to_string();
        }
        let width = self
            .faces
            .iter()
            .map(|f| f.to_string().len())
            .max()
            .unwrap_or(1);
        let faces: Vec<String> = self
            .faces
            .iter()
            .map(|f| format!("{f:>width$}"))
            .collect();
        format!("[{}]", faces.join(" "))
    }
}

/// One piece of a roll outcome, mirroring the tokens of the expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomePart {
    /// A rolled term.
    Term(TermRoll),
    /// A display separator.
    Separator,
}

/// The result of simulating a roll expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Realized terms and separators in input order.
    pub parts: Vec<OutcomePart>,
    /// Realized total (trial 0).
    pub total: i64,
    /// Analytic mean of the expression.
    pub mean: f64,
    /// Percentage of batch trials strictly below the realized total.
    pub percentile: f64,
}

impl RollOutcome {
    /// The realized terms, without separators.
    pub fn terms(&self) -> impl Iterator<Item = &TermRoll> {
        self.parts.iter().filter_map(|p| match p {
            OutcomePart::Term(roll) => Some(roll),
            OutcomePart::Separator => None,
        })
    }
}

/// Runs roll expressions against a pluggable random source.
#[derive(Debug)]
pub struct Simulator<R = StdRng> {
    rng: R,
    batch_size: usize,
}

impl Simulator<StdRng> {
    /// Build a simulator from configuration, seeding from OS entropy unless
    /// a seed is given.
    pub fn from_config(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, config.batch_size)
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator drawing from `rng` with `batch_size` trials
    /// (clamped to at least 1).
    pub fn new(rng: R, batch_size: usize) -> Self {
        Self {
            rng,
            batch_size: batch_size.max(1),
        }
    }

    /// Number of trials per simulation.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Simulate an expression and summarize it.
    pub fn simulate(&mut self, expr: &RollExpression) -> RollOutcome {
        self.simulate_batch(expr).0
    }

    /// Simulate an expression, returning the summary together with the
    /// full batch of trial totals.
    pub fn simulate_batch(&mut self, expr: &RollExpression) -> (RollOutcome, TrialBatch) {
        debug!(
            expression = %expr,
            batch_size = self.batch_size,
            "simulating roll"
        );

        let mut batch = TrialBatch::zeroed(self.batch_size);
        let parts: Vec<OutcomePart> = expr
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Term(term) => OutcomePart::Term(self.roll_term(term, &mut batch.totals)),
                Token::Separator => OutcomePart::Separator,
            })
            .collect();

        let total = batch.realized();
        let outcome = RollOutcome {
            parts,
            total,
            mean: expr.mean(),
            percentile: batch.percentile_below(total),
        };
        debug!(
            total = outcome.total,
            mean = outcome.mean,
            percentile = outcome.percentile,
            "roll simulated"
        );
        (outcome, batch)
    }

    /// Add one term's per-trial contribution into `totals` and return its
    /// realized (trial 0) value.
    fn roll_term(&mut self, term: &RollTerm, totals: &mut [i64]) -> TermRoll {
        match *term {
            RollTerm::Dice { count, sides } => {
                let faces: Vec<u32> = (0..count)
                    .map(|_| self.rng.random_range(1..=sides))
                    .collect();
                let value: i64 = faces.iter().map(|f| i64::from(*f)).sum();
                totals[0] += value;
                for total in totals.iter_mut().skip(1) {
                    let trial: i64 = (0..count)
                        .map(|_| i64::from(self.rng.random_range(1..=sides)))
                        .sum();
                    *total += trial;
                }
                TermRoll {
                    term: *term,
                    faces,
                    value,
                }
            }
            RollTerm::Constant(value) => {
                for total in totals.iter_mut() {
                    *total += value;
                }
                TermRoll {
                    term: *term,
                    faces: Vec::new(),
                    value,
                }
            }
        }
    }
}

/// Parse `tokens` and simulate them with a simulator built from `config`.
pub fn roll<I, S>(tokens: I, config: &SimConfig) -> DiceResult<RollOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let expr = RollExpression::parse(tokens)?;
    Ok(Simulator::from_config(config).simulate(&expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiceError;

    fn seeded(batch_size: usize, seed: u64) -> Simulator {
        Simulator::new(StdRng::seed_from_u64(seed), batch_size)
    }

    fn expr(tokens: &[&str]) -> RollExpression {
        RollExpression::parse(tokens).unwrap()
    }

    #[test]
    fn degenerate_die_is_constant() {
        let outcome = seeded(10_000, 1).simulate(&expr(&["1d1"]));
        assert_eq!(outcome.total, 1);
        assert!((outcome.mean - 1.0).abs() < f64::EPSILON);
        assert_eq!(outcome.percentile, 0.0);
    }

    #[test]
    fn constants_only() {
        let (outcome, batch) = seeded(1_000, 2).simulate_batch(&expr(&["2", "+", "3"]));
        assert_eq!(outcome.total, 5);
        assert!((outcome.mean - 5.0).abs() < f64::EPSILON);
        assert_eq!(outcome.percentile, 0.0);
        assert!(batch.totals().iter().all(|t| *t == 5));
    }

    #[test]
    fn constant_term_every_trial() {
        let (outcome, batch) = seeded(1_000, 3).simulate_batch(&expr(&["-4"]));
        assert_eq!(outcome.total, -4);
        assert!(batch.totals().iter().all(|t| *t == -4));
        let roll = outcome.terms().next().unwrap();
        assert!(roll.faces.is_empty());
        assert_eq!(roll.faces_display(), "-4");
    }

    #[test]
    fn faces_within_range() {
        let outcome = seeded(100, 4).simulate(&expr(&["5d8"]));
        let roll = outcome.terms().next().unwrap();
        assert_eq!(roll.faces.len(), 5);
        assert!(roll.faces.iter().all(|f| (1..=8).contains(f)));
        assert_eq!(roll.value, roll.faces.iter().map(|f| i64::from(*f)).sum::<i64>());
    }

    #[test]
    fn realized_total_is_trial_zero() {
        let (outcome, batch) =
            seeded(1_000, 5).simulate_batch(&expr(&["2d6", "+", "1d4", "+", "3"]));
        assert_eq!(outcome.total, batch.realized());
        let sum: i64 = outcome.terms().map(|t| t.value).sum();
        assert_eq!(outcome.total, sum);
        assert!(batch.totals().iter().all(|t| (6..=19).contains(t)));
    }

    #[test]
    fn batch_size_respected() {
        let (_, batch) = seeded(1_234, 6).simulate_batch(&expr(&["1d6"]));
        assert_eq!(batch.len(), 1_234);
        assert!(!batch.is_empty());
        let sim = seeded(0, 6);
        assert_eq!(sim.batch_size(), 1);
    }

    #[test]
    fn percentile_is_strictly_below() {
        let (outcome, batch) = seeded(10_000, 7).simulate_batch(&expr(&["1d6"]));
        let below = batch
            .totals()
            .iter()
            .filter(|t| **t < outcome.total)
            .count();
        let expected = below as f64 / 10_000.0 * 100.0;
        assert!((outcome.percentile - expected).abs() < 1e-9);
        assert_eq!(batch.percentile_below(1), 0.0);
        assert!((batch.percentile_below(7) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentile_estimate_is_stable() {
        // P(1d20 < 11) = 50%
        let (_, batch) = seeded(200_000, 8).simulate_batch(&expr(&["1d20"]));
        let pct = batch.percentile_below(11);
        assert!((pct - 50.0).abs() < 1.0, "got {pct}");
    }

    #[test]
    fn distribution_mean_matches_analytic_mean() {
        let e = expr(&["3d6", "+", "2"]);
        let (outcome, batch) = seeded(100_000, 9).simulate_batch(&e);
        let empirical = batch.totals().iter().sum::<i64>() as f64 / batch.len() as f64;
        assert!((outcome.mean - 12.5).abs() < f64::EPSILON);
        assert!((empirical - outcome.mean).abs() < 0.1, "got {empirical}");
    }

    #[test]
    fn separators_preserved_in_parts() {
        let outcome = seeded(10, 10).simulate(&expr(&["1d6", "+", "2"]));
        assert_eq!(outcome.parts.len(), 3);
        assert_eq!(outcome.parts[1], OutcomePart::Separator);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let e = expr(&["4d10"]);
        let a = seeded(1_000, 11).simulate(&e);
        let b = seeded(1_000, 11).simulate(&e);
        assert_eq!(a.parts, b.parts);
        assert_eq!(a.total, b.total);
        assert_eq!(a.percentile, b.percentile);
    }

    #[test]
    fn d20_realized_totals_are_uniform() {
        let e = expr(&["1d20"]);
        let mut counts = [0u32; 20];
        for seed in 0..4_000 {
            let outcome = seeded(1, seed).simulate(&e);
            assert!((1..=20).contains(&outcome.total));
            counts[(outcome.total - 1) as usize] += 1;
        }
        // Expected 200 per face; bounds sit about five standard deviations out.
        for (face, count) in counts.iter().enumerate() {
            assert!(
                (130..=270).contains(count),
                "face {} came up {count} times",
                face + 1
            );
        }
    }

    #[test]
    fn faces_display_pads_to_widest() {
        let roll = TermRoll {
            term: RollTerm::dice(3, 12),
            faces: vec![3, 12, 7],
            value: 22,
        };
        assert_eq!(roll.faces_display(), "[ 3 12  7]");

        let roll = TermRoll {
            term: RollTerm::dice(1, 6),
            faces: vec![4],
            value: 4,
        };
        assert_eq!(roll.faces_display(), "[4]");
    }

    #[test]
    fn roll_convenience() {
        let cfg = SimConfig::default().with_batch_size(100).with_seed(12);
        let outcome = roll(["2", "+", "3"], &cfg).unwrap();
        assert_eq!(outcome.total, 5);
        assert!(roll(["1d6d2"], &cfg).is_err());
        assert!(roll(["+"], &cfg).is_err());
    }

    #[test]
    fn overflowing_constants_are_an_error() {
        let cfg = SimConfig::default().with_batch_size(10).with_seed(1);
        assert!(matches!(
            roll(["9223372036854775807", "+", "1"], &cfg),
            Err(DiceError::TotalOutOfRange { .. })
        ));
    }

    #[test]
    fn extreme_constant_simulates_exactly() {
        let cfg = SimConfig::default().with_batch_size(10).with_seed(1);
        let outcome = roll(["9223372036854775806", "1"], &cfg).unwrap();
        assert_eq!(outcome.total, i64::MAX);
    }

    #[test]
    fn constant_shows_parsed_value() {
        let outcome = seeded(10, 13).simulate(&expr(&["1d1", "+", "+3"]));
        let shown: Vec<String> = outcome.terms().map(TermRoll::faces_display).collect();
        assert_eq!(shown, ["[1]", "3"]);
        assert_eq!(outcome.total, 4);
        assert!(crate::report::render(&outcome).contains("\n[1] + 3\n"));
    }
}
