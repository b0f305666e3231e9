//! Extraction of attributes and descriptions from compendium page markup.

use scraper::{ElementRef, Html, Selector};

use crate::entry::Entry;
use crate::error::{CompendiumError, CompendiumResult};
use crate::kind::EntityKind;

/// Wrap width for Roll20 text.
pub const ROLL20_WRAP: usize = 70;

/// Wrap width for dnd-spells.com descriptions.
pub const DND_SPELLS_WRAP: usize = 80;

fn selector(css: &str) -> CompendiumResult<Selector> {
    Selector::parse(css).map_err(|e| CompendiumError::Parse(format!("bad selector {css}: {e:?}")))
}

/// Turn a fragment of compendium markup into wrapped plain text.
///
/// Line breaks become newlines, `<h2>` headings become `*Heading*`, bold
/// markers are dropped, any other markup is stripped, and entities are
/// decoded.
pub fn stringify(markup: &str, width: usize) -> String {
    let text = markup
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<h2>", "*")
        .replace("</h2>", "*\n")
        .replace("<strong>", "")
        .replace("</strong>", "");
    let plain: String = Html::parse_fragment(&text).root_element().text().collect();
    textwrap::fill(plain.trim(), width)
}

/// Python-style title case: the first letter of every run of letters is
/// upper-cased and the rest lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Upper-case the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of an element with `<br>` line breaks kept as newlines.
fn block_text(el: &ElementRef<'_>) -> String {
    let markup = el
        .inner_html()
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n");
    Html::parse_fragment(&markup).root_element().text().collect()
}

/// Extract a Roll20 compendium page.
///
/// Every `col-md-3 attrName` element names an attribute whose value is the
/// next `value` element in document order; consecutive names share it. The description is the raw
/// HTML carried by `#origpagecontent` blocks.
pub fn parse_roll20(name: &str, kind: EntityKind, html: &str) -> CompendiumResult<Entry> {
    let doc = Html::parse_document(html);
    let mut entry = Entry::new(name, kind);

    let attr_or_value = selector(".col-md-3.attrName, .value")?;
    let mut pending: Vec<String> = Vec::new();
    for el in doc.select(&attr_or_value) {
        if el.value().classes().any(|c| c == "attrName") {
            pending.push(stringify(&element_text(&el), ROLL20_WRAP));
        } else if !pending.is_empty() {
            let value = stringify(&element_text(&el), ROLL20_WRAP);
            for attr in pending.drain(..) {
                entry.insert(attr, value.clone());
            }
        }
    }

    let content = selector(r#"#origpagecontent[type="text/html"]"#)?;
    entry.description = doc
        .select(&content)
        .map(|el| stringify(&el.inner_html(), ROLL20_WRAP))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(entry)
}

/// Extract a dnd-spells.com spell page.
///
/// The page is a sequence of headings and paragraphs: the `h1` title, a
/// school paragraph, a paragraph of `Key: value` details, the description
/// (optionally followed by an "At Higher Levels" paragraph), and a class
/// list two paragraphs later.
pub fn parse_dnd_spells(name: &str, html: &str, ritual: bool) -> CompendiumResult<Entry> {
    let doc = Html::parse_document(html);
    let blocks_sel = selector("h1, h4, p")?;
    let blocks: Vec<(String, String)> = doc
        .select(&blocks_sel)
        .map(|el| (el.value().name().to_string(), block_text(&el)))
        .collect();
    let next = |from: usize, tag: &str| -> CompendiumResult<usize> {
        blocks
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, (t, _))| t == tag)
            .map(|(i, _)| i)
            .ok_or_else(|| CompendiumError::Parse(format!("expected <{tag}> in spell page")))
    };

    let mut entry = Entry::new(name, EntityKind::Spell);
    entry.insert("Ritual", if ritual { "Yes" } else { "No" });

    let title = next(0, "h1")?;
    let school = next(title + 1, "p")?;
    entry.insert("School", blocks[school].1.trim());

    let details = next(school + 1, "p")?;
    for (key, value) in spell_details(&blocks[details].1) {
        entry.insert(title_case(&key), capitalize(&value));
    }
    if let Some(components) = entry.get("Components").map(str::to_string) {
        let (letters, material) = split_components(&components);
        if let Some(material) = material {
            entry.insert("Material", capitalize(&material));
        }
        entry.insert("Components", letters);
    }
    if entry
        .get("Level")
        .is_some_and(|l| l.to_lowercase().contains("cantrip"))
    {
        entry.insert("Level", "0");
    }

    let mut desc_at = next(details + 1, "p")?;
    let mut description = blocks[desc_at].1.trim().replace('\r', "");
    let higher_levels = next(desc_at + 1, "h4")
        .ok()
        .is_some_and(|h| blocks[h].1.to_lowercase().contains("higher level"));
    if higher_levels {
        desc_at = next(desc_at + 1, "p")?;
        description.push_str("\n\nAt Higher Levels: ");
        description.push_str(blocks[desc_at].1.trim());
    }
    entry.description = textwrap::fill(&description, DND_SPELLS_WRAP);

    if let Ok(classes_at) = next(desc_at + 1, "p").and_then(|i| next(i + 1, "p")) {
        let words: Vec<String> = blocks[classes_at]
            .1
            .replace(',', "")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if words.len() > 2 {
            entry.insert("Classes", words[1..words.len() - 1].join(", "));
        }
    }

    Ok(entry)
}

/// Split a details paragraph into `(key, value)` pairs. Entries are
/// separated by line breaks or wide runs of spaces.
fn spell_details(text: &str) -> Vec<(String, String)> {
    text.replace('\r', "")
        .split('\n')
        .flat_map(|line| line.split("  "))
        .filter_map(|chunk| {
            let (key, value) = chunk.trim().split_once(':')?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// `"V, S, M (a pinch of soot)"` -> `("V S M", Some("a pinch of soot"))`.
fn split_components(raw: &str) -> (String, Option<String>) {
    let (letters, material) = match raw.split_once('(') {
        Some((letters, rest)) => (letters, Some(rest.trim().trim_end_matches(')').to_string())),
        None => (raw, None),
    };
    let letters = letters
        .replace(' ', "")
        .split(',')
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (letters, material)
}
