//! One module per command; each exposes a `run` returning `Result<(), String>`.

pub mod lookup;
pub mod roll;

use std::process;

use colored::Colorize;

/// Print a command error the way every binary reports it and exit non-zero.
pub fn exit_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
