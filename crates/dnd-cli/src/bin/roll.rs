//! Monte Carlo dice roller: rolls an expression once and ranks the result
//! against a million simulated rolls.

use clap::Parser;

use dnd_cli::commands;
use dnd_dice::SimConfig;

#[derive(Parser)]
#[command(
    name = "roll",
    about = "Roll dice and see how lucky the roll was",
    long_about = "Roll dice and see how lucky the roll was.\n\n\
                  Terms are summed; a literal + only groups terms in the output.\n\
                  Example: roll 1d20 + 5",
    version
)]
struct Cli {
    /// Dice terms such as 3d6, 1d20 or 8, optionally separated by +
    #[arg(allow_negative_numbers = true)]
    tokens: Vec<String>,
}

fn main() {
    dnd_cli::logging::init();
    let cli = Cli::parse();
    commands::exit_on_error(commands::roll::run(&cli.tokens, &SimConfig::default()));
}
