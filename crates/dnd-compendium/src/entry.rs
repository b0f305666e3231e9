//! A compendium entry: an ordered attribute mapping plus a description.

use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;

/// One `name: value` pair scraped from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name as shown on the page (e.g. "HP").
    pub name: String,
    /// Attribute value as text.
    pub value: String,
}

/// A looked-up monster, spell, item, or other page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Normalized (title-cased) entry name.
    pub name: String,
    /// What kind of entry this is.
    pub kind: EntityKind,
    /// Attributes in page order.
    pub attributes: Vec<Attribute>,
    /// Free-text description.
    pub description: String,
}

impl Entry {
    /// Create an entry with no attributes.
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            attributes: Vec::new(),
            description: String::new(),
        }
    }

    /// Set an attribute. An existing attribute keeps its position and has
    /// its value replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    /// Builder form of [`Entry::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Look up an attribute value, falling back to `fallback` when absent.
    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attributes were extracted.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
