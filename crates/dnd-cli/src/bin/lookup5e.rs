//! Searches the Roll20 5e compendium (and dnd-spells.com for spells) for
//! the term queried.

use clap::Parser;

use dnd_cli::commands;
use dnd_cli::commands::lookup::OutputFormat;
use dnd_compendium::{CompendiumConfig, EntityKind};

#[derive(Parser)]
#[command(
    name = "lookup5e",
    about = "Searches the 5e compendium for the term queried",
    version
)]
struct Cli {
    /// The words to search
    #[arg(required = true)]
    query: Vec<String>,

    /// Search only monster lists
    #[arg(long, conflicts_with_all = ["spell", "item"])]
    monster: bool,

    /// Search only spell lists
    #[arg(long, conflicts_with = "item")]
    spell: bool,

    /// Search only item lists
    #[arg(long)]
    item: bool,

    /// Print as a dungeonsheets class (spells and items)
    #[arg(long, conflicts_with = "json")]
    ds: bool,

    /// Print the entry as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn kind(&self) -> Option<EntityKind> {
        if self.monster {
            Some(EntityKind::Monster)
        } else if self.spell {
            Some(EntityKind::Spell)
        } else if self.item {
            Some(EntityKind::Item)
        } else {
            None
        }
    }

    fn format(&self) -> OutputFormat {
        if self.ds {
            OutputFormat::Dungeonsheets
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn main() {
    dnd_cli::logging::init();
    let cli = Cli::parse();
    commands::exit_on_error(commands::lookup::run(
        &cli.query,
        cli.kind(),
        cli.format(),
        CompendiumConfig::default(),
    ));
}
