//! 5e compendium client.
//!
//! Fetches monster, spell, and item pages from Roll20 (and spells from
//! dnd-spells.com), extracts an ordered attribute mapping plus a
//! description, and renders them with a fixed layout per entity kind.

pub mod client;
pub mod config;
pub mod dungeonsheets;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod format;
pub mod html;
pub mod kind;

pub use client::Compendium;
pub use config::CompendiumConfig;
pub use dungeonsheets::to_dungeonsheets;
pub use entry::{Attribute, Entry};
pub use error::{CompendiumError, CompendiumResult};
pub use fetch::{Fetch, HttpFetcher, Page};
pub use format::{format_entry, score_to_mod};
pub use kind::{EntityKind, FieldLayout, MissingField, Section};
