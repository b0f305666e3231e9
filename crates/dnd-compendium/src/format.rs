//! Plain-text rendering of compendium entries.

use crate::entry::Entry;
use crate::kind::{ABILITY_SCORES, FieldLayout, MissingField, Section};

const DESCRIPTION_HEADER: &str = "Description\n===========================";

/// Ability modifier for a score, signed: 8 -> "-1", 10 -> "+0", 15 -> "+2".
pub fn score_to_mod(score: i64) -> String {
    format!("{:+}", (score - 10).div_euclid(2))
}

/// Render an entry: name, attributes laid out per its kind, then the
/// description.
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "{}\n\n{}\n\n{DESCRIPTION_HEADER}\n{}",
        entry.name,
        format_attributes(entry),
        entry.description
    )
}

/// Render only the attribute block of an entry.
pub fn format_attributes(entry: &Entry) -> String {
    match entry.kind.layout() {
        Some(layout) => format_layout(entry, &layout),
        None => entry
            .attributes
            .iter()
            .map(|a| format!("{}: {}\n", a.name, a.value))
            .collect(),
    }
}

fn format_layout(entry: &Entry, layout: &FieldLayout) -> String {
    layout
        .sections
        .iter()
        .map(|section| match section {
            Section::Fields(fields) => format_fields(entry, fields, layout.missing),
            Section::AbilityScores => format_ability_scores(entry, layout.missing),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_fields(entry: &Entry, fields: &[&str], missing: MissingField) -> String {
    fields
        .iter()
        .filter_map(|field| {
            let value = match (entry.get(field), missing) {
                (Some(value), _) => value,
                (None, MissingField::Fallback(fallback)) => fallback,
                (None, MissingField::Skip) => return None,
            };
            Some(format!("{field}: {value}\n"))
        })
        .collect()
}

fn format_ability_scores(entry: &Entry, missing: MissingField) -> String {
    let scores: Vec<String> = ABILITY_SCORES
        .iter()
        .map(|ability| match entry.get(ability) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(score) => format!("{raw} ({})", score_to_mod(score)),
                Err(_) => raw.to_string(),
            },
            None => match missing {
                MissingField::Fallback(fallback) => fallback.to_string(),
                MissingField::Skip => String::new(),
            },
        })
        .collect();
    format!("{}\n{}\n", ABILITY_SCORES.join("\t"), scores.join("\t"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::EntityKind;

    fn goblin() -> Entry {
        Entry::new("Goblin", EntityKind::Monster)
            .with("HP", "7 (2d6)")
            .with("AC", "15")
            .with("Speed", "30 ft.")
            .with("Challenge Rating", "1/4")
            .with("STR", "8")
            .with("DEX", "14")
            .with("CON", "10")
            .with("INT", "10")
            .with("WIS", "8")
            .with("CHA", "8")
            .with("Type", "Humanoid")
            .with("Size", "Small")
            .with("Alignment", "Neutral Evil")
            .with("Senses", "Darkvision 60 ft.")
            .with("Languages", "Common, Goblin")
            .with_description("Goblins are small, black-hearted humanoids.")
    }

    #[test]
    fn ability_modifiers() {
        assert_eq!(score_to_mod(1), "-5");
        assert_eq!(score_to_mod(8), "-1");
        assert_eq!(score_to_mod(9), "-1");
        assert_eq!(score_to_mod(10), "+0");
        assert_eq!(score_to_mod(11), "+0");
        assert_eq!(score_to_mod(15), "+2");
        assert_eq!(score_to_mod(30), "+10");
    }

    #[test]
    fn monster_layout() {
        let expected = "\
Goblin

HP: 7 (2d6)
AC: 15
Speed: 30 ft.
Challenge Rating: 1/4

STR\tDEX\tCON\tINT\tWIS\tCHA
8 (-1)\t14 (+2)\t10 (+0)\t10 (+0)\t8 (-1)\t8 (-1)

Type: Humanoid
Size: Small
Alignment: Neutral Evil
Senses: Darkvision 60 ft.
Skills: EMPTY
Languages: Common, Goblin


Description
===========================
Goblins are small, black-hearted humanoids.";
        assert_eq!(format_entry(&goblin()), expected);
    }

    #[test]
    fn monster_missing_ability_uses_fallback() {
        let entry = Entry::new("Blob", EntityKind::Monster).with("STR", "10").with("DEX", "--");
        let attrs = format_attributes(&entry);
        assert!(attrs.contains("10 (+0)\t--\tEMPTY\tEMPTY\tEMPTY\tEMPTY\n"));
        assert!(attrs.starts_with("HP: EMPTY\nAC: EMPTY\n"));
    }

    #[test]
    fn spell_layout_skips_missing_fields() {
        let entry = Entry::new("Fire Bolt", EntityKind::Spell)
            .with("Level", "0")
            .with("School", "Evocation")
            .with("Casting Time", "1 action")
            .with("Range", "120 feet")
            .with("Damage Type", "Fire");
        let expected = "\
Level: 0
School: Evocation

Casting Time: 1 action

Range: 120 feet
Damage Type: Fire
";
        assert_eq!(format_attributes(&entry), expected);
    }

    #[test]
    fn item_prints_all_attributes_in_order() {
        let entry = Entry::new("Bag Of Holding", EntityKind::Item)
            .with("Rarity", "Uncommon")
            .with("Item Type", "Wondrous Item")
            .with_description("This bag has an interior space.");
        assert_eq!(
            format_entry(&entry),
            "Bag Of Holding\n\nRarity: Uncommon\nItem Type: Wondrous Item\n\n\n\
             Description\n===========================\nThis bag has an interior space."
        );
    }
}
