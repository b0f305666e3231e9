//! `lookup5e`: fetch a compendium entry and print it.

use colored::Colorize;
use tracing::info;

use dnd_compendium::{
    Compendium, CompendiumConfig, EntityKind, Entry, format_entry, to_dungeonsheets,
};

/// How a found entry is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The fixed per-kind text layout.
    #[default]
    Text,
    /// A dungeonsheets Python class (spells and items only).
    Dungeonsheets,
    /// Pretty-printed JSON.
    Json,
}

/// Look up `query` (joined with spaces) and print the result.
///
/// Entries that cannot be found, are paywalled, or fail to download are
/// reported on one line followed by `Not Found`; they are not errors.
pub fn run(
    query: &[String],
    kind: Option<EntityKind>,
    format: OutputFormat,
    config: CompendiumConfig,
) -> Result<(), String> {
    let name = query.join(" ");
    let compendium = Compendium::new(config);

    let entry = match compendium.lookup(&name, kind) {
        Ok(entry) if !entry.is_empty() => entry,
        Ok(_) => {
            print_not_found(None);
            return Ok(());
        }
        Err(e) => {
            info!(error = %e, "lookup failed");
            print_not_found(Some(&e.to_string()));
            return Ok(());
        }
    };

    println!("{}", render(&entry, format)?);
    Ok(())
}

/// Render a found entry in the requested format.
pub fn render(entry: &Entry, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(format_entry(entry)),
        OutputFormat::Dungeonsheets => to_dungeonsheets(entry).ok_or_else(|| {
            format!(
                "dungeonsheets export is only available for spells and items, not {} entries",
                entry.kind
            )
        }),
        OutputFormat::Json => serde_json::to_string_pretty(entry).map_err(|e| e.to_string()),
    }
}

fn print_not_found(reason: Option<&str>) {
    if let Some(reason) = reason {
        println!("{reason}");
    }
    println!("{}", "Not Found".yellow());
}
