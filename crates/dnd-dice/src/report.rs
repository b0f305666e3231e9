//! Fixed-layout text report for a roll outcome.

use crate::simulate::{OutcomePart, RollOutcome};

const RULE: &str = "*************";
const SEPARATOR: &str = " + ";

/// Render an outcome as the multi-line report printed by the `roll` tool.
///
/// ```text
/// *************
/// Total:   14
/// *************
/// = 12      + 2
/// [5 3 4] + 2
/// Mean: 12.5
/// Percentile: 62.4%
/// ```
pub fn render(outcome: &RollOutcome) -> String {
    let (values, faces) = breakdown(outcome);

    format!(
        "{RULE}\nTotal: {:>4}\n{RULE}\n{values}\n{faces}\nMean: {:.1}\nPercentile: {:.1}%",
        outcome.total, outcome.mean, outcome.percentile
    )
}

/// The `= ...` value line and the die-face line, aligned term by term.
fn breakdown(outcome: &RollOutcome) -> (String, String) {
    let mut values = String::from("= ");
    let mut faces = String::new();
    for part in &outcome.parts {
        match part {
            OutcomePart::Term(roll) => {
                let shown = roll.faces_display();
                let width = shown.chars().count();
                values.push_str(&format!("{:<width$}", roll.value));
                faces.push_str(&shown);
            }
            OutcomePart::Separator => {
                values.push_str(SEPARATOR);
                faces.push_str(SEPARATOR);
            }
        }
    }
    (values, faces)
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
