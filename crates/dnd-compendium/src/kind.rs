//! Entity kinds and the fixed attribute layout each kind is printed with.

use serde::{Deserialize, Serialize};

/// The kind of compendium entry being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A creature stat block.
    Monster,
    /// A spell description.
    Spell,
    /// A mundane or magic item.
    Item,
    /// Any other compendium page.
    #[default]
    Generic,
}

/// Order in which kinds are tried when the caller does not name one.
pub const SEARCH_ORDER: [EntityKind; 4] = [
    EntityKind::Monster,
    EntityKind::Spell,
    EntityKind::Item,
    EntityKind::Generic,
];

/// The six ability scores, in stat-block order.
pub const ABILITY_SCORES: [&str; 6] = ["STR", "DEX", "CON", "INT", "WIS", "CHA"];

/// What to print for a field the page did not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// Print the field with this placeholder value.
    Fallback(&'static str),
    /// Leave the field out entirely.
    Skip,
}

/// One block of a layout. Blocks are separated by a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `Name: value` lines for these fields, in this order.
    Fields(&'static [&'static str]),
    /// The STR..CHA header row and a `score (modifier)` row.
    AbilityScores,
}

/// A fixed ordered list of sections plus the policy for missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Sections in print order.
    pub sections: &'static [Section],
    /// How absent fields are rendered.
    pub missing: MissingField,
}

const MONSTER_LAYOUT: FieldLayout = FieldLayout {
    sections: &[
        Section::Fields(&["HP", "AC", "Speed", "Challenge Rating"]),
        Section::AbilityScores,
        Section::Fields(&["Type", "Size", "Alignment", "Senses", "Skills", "Languages"]),
    ],
    missing: MissingField::Fallback("EMPTY"),
};

const SPELL_LAYOUT: FieldLayout = FieldLayout {
    sections: &[
        Section::Fields(&["Level", "School", "Classes"]),
        Section::Fields(&[
            "Casting Time",
            "Duration",
            "Concentration",
            "Ritual",
            "Components",
            "Material",
        ]),
        Section::Fields(&["Range", "Damage", "Damage Type", "Save", "Target"]),
    ],
    missing: MissingField::Skip,
};

impl EntityKind {
    /// Path segment Roll20 puts in front of the entry slug.
    pub fn roll20_prefix(self) -> &'static str {
        match self {
            Self::Monster => "Monsters:",
            Self::Spell => "Spells:",
            Self::Item => "Items:",
            Self::Generic => "",
        }
    }

    /// The fixed layout for this kind, or `None` to print every attribute
    /// in page order.
    pub fn layout(self) -> Option<FieldLayout> {
        match self {
            Self::Monster => Some(MONSTER_LAYOUT),
            Self::Spell => Some(SPELL_LAYOUT),
            Self::Item | Self::Generic => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monster => write!(f, "monster"),
            Self::Spell => write!(f, "spell"),
            Self::Item => write!(f, "item"),
            Self::Generic => write!(f, "generic"),
        }
    }
}
