//! `roll`: simulate a dice expression and print the report.

use dnd_dice::{SimConfig, render};

/// Roll `tokens` (e.g. `["3d6", "+", "2"]`) and print the report.
pub fn run(tokens: &[String], config: &SimConfig) -> Result<(), String> {
    let outcome = dnd_dice::roll(tokens, config).map_err(|e| e.to_string())?;
    println!("{}", render(&outcome));
    Ok(())
}
