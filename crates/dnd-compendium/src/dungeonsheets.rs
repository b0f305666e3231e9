//! Export of spells and items as `dungeonsheets` Python class definitions.

use crate::entry::Entry;
use crate::kind::EntityKind;

/// Render `entry` as a dungeonsheets class, or `None` for kinds that have
/// no dungeonsheets counterpart.
pub fn to_dungeonsheets(entry: &Entry) -> Option<String> {
    match entry.kind {
        EntityKind::Spell => Some(spell_class(entry)),
        EntityKind::Item => Some(item_class(entry)),
        EntityKind::Monster | EntityKind::Generic => None,
    }
}

fn spell_class(entry: &Entry) -> String {
    let class_name: String = entry
        .name
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let level = entry
        .get("Level")
        .and_then(leading_int)
        .unwrap_or(-1);
    let components: Vec<String> = entry
        .get_or("Components", "")
        .to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let duration = entry.get_or("Duration", "Instantaneous");
    let duration = if is_set(entry.get("Concentration")) {
        format!("Concentration, {duration}")
    } else {
        duration.to_string()
    };
    let ritual = if is_set(entry.get("Ritual")) { "True" } else { "False" };
    let classes: Vec<String> = entry
        .get_or("Classes", "")
        .split(", ")
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    let mut out = format!("class {class_name}(Spell):\n");
    out.push_str(&docstring(&entry.description));
    out.push_str(&format!("    name = \"{}\"\n", entry.name));
    out.push_str(&format!("    level = {level}\n"));
    out.push_str(&format!(
        "    casting_time = \"{}\"\n",
        entry.get_or("Casting Time", "1 action")
    ));
    out.push_str(&format!(
        "    casting_range = \"{}\"\n",
        entry.get_or("Range", "")
    ));
    out.push_str(&format!("    components = {}\n", py_tuple(&components)));
    out.push_str(&format!(
        "    materials = \"\"\"{}\"\"\"\n",
        entry.get_or("Material", "")
    ));
    out.push_str(&format!("    duration = \"{duration}\"\n"));
    out.push_str(&format!("    ritual = {ritual}\n"));
    out.push_str(&format!(
        "    magic_school = \"{}\"\n",
        entry.get_or("School", "")
    ));
    out.push_str(&format!("    classes = {}\n", py_tuple(&classes)));
    out.push('\n');
    out
}

fn item_class(entry: &Entry) -> String {
    let class_name: String = entry.name.chars().filter(|c| *c != ' ').collect();
    let mut out = format!("class {class_name}(MagicItem):\n");
    out.push_str(&docstring(&entry.description));
    out.push_str(&format!("    name = \"{}\"\n", entry.name));
    out.push('\n');
    out
}

fn docstring(description: &str) -> String {
    format!(
        "    \"\"\"{}\n    \"\"\"\n",
        description.replace('\n', "\n    ")
    )
}

/// Python tuple literal of strings: `()`, `('V',)`, `('V', 'S')`.
fn py_tuple(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| py_repr(s)).collect();
    match quoted.as_slice() {
        [] => "()".to_string(),
        [one] => format!("({one},)"),
        many => format!("({})", many.join(", ")),
    }
}

fn py_repr(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        format!("\"{s}\"")
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Roll20 marks flags with free text ("Yes", "", "No"); treat anything but
/// an empty or negative value as set.
fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim().to_lowercase();
        !v.is_empty() && v != "no" && v != "false" && v != "0"
    })
}
