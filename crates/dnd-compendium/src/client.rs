//! Compendium lookups against Roll20 and dnd-spells.com.

use tracing::{debug, warn};

use crate::config::CompendiumConfig;
use crate::entry::Entry;
use crate::error::{CompendiumError, CompendiumResult};
use crate::fetch::{Fetch, HttpFetcher, Page};
use crate::html::{parse_dnd_spells, parse_roll20, title_case};
use crate::kind::{EntityKind, SEARCH_ORDER};

/// Normalize a user-supplied name: trailing whitespace removed, title-cased.
pub fn normalize_name(name: &str) -> String {
    title_case(name.trim_end())
}

/// Roll20 page slug: `"Potion Of Healing"` -> `"Potion_Of_Healing"`.
pub fn roll20_slug(name: &str) -> String {
    name.replace(' ', "_")
}

/// dnd-spells.com page slug: `"Magic Missile"` -> `"magic-missile"`.
pub fn dnd_spells_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Looks up compendium entries through a [`Fetch`] transport.
#[derive(Debug, Clone)]
pub struct Compendium<F = HttpFetcher> {
    fetcher: F,
    config: CompendiumConfig,
}

impl Compendium<HttpFetcher> {
    /// A compendium client that talks HTTP.
    pub fn new(config: CompendiumConfig) -> Self {
        let fetcher = HttpFetcher::new(&config);
        Self { fetcher, config }
    }
}

impl<F: Fetch> Compendium<F> {
    /// A compendium client using a custom transport.
    pub fn with_fetcher(fetcher: F, config: CompendiumConfig) -> Self {
        Self { fetcher, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompendiumConfig {
        &self.config
    }

    /// Look up `name`. With no kind, tries monster, spell, item, then any
    /// page, returning the first that resolves.
    pub fn lookup(&self, name: &str, kind: Option<EntityKind>) -> CompendiumResult<Entry> {
        match kind {
            Some(EntityKind::Spell) => self.spell(name),
            Some(kind) => self.roll20(name, kind),
            None => {
                let mut last_err = None;
                for kind in SEARCH_ORDER {
                    match self.roll20(name, kind) {
                        Ok(entry) => return Ok(entry),
                        Err(e) => {
                            debug!(%kind, error = %e, "no match, trying next kind");
                            last_err = Some(e);
                        }
                    }
                }
                Err(last_err.unwrap_or_else(|| CompendiumError::NotFound {
                    name: name.to_string(),
                    url: self.config.roll20_base.clone(),
                }))
            }
        }
    }

    /// Look up a spell on dnd-spells.com, falling back to Roll20.
    pub fn spell(&self, name: &str) -> CompendiumResult<Entry> {
        match self.dnd_spell(name) {
            Ok(entry) => Ok(entry),
            Err(e) => {
                warn!(error = %e, "dnd-spells lookup failed, falling back to Roll20");
                self.roll20(name, EntityKind::Spell)
            }
        }
    }

    /// Fetch and extract a Roll20 compendium page.
    pub fn roll20(&self, name: &str, kind: EntityKind) -> CompendiumResult<Entry> {
        let name = normalize_name(name);
        let url = format!(
            "{}{}{}",
            self.config.roll20_base,
            kind.roll20_prefix(),
            roll20_slug(&name)
        );
        let page = self.fetcher.fetch(&url)?;
        if page.status != 200 {
            return Err(CompendiumError::NotFound { name, url });
        }
        if page.url.contains("marketplace") {
            return Err(CompendiumError::Paywalled { name, url });
        }
        parse_roll20(&name, kind, &page.body)
    }

    /// Fetch and extract a dnd-spells.com spell page. Ritual spells live
    /// under a `-ritual` suffixed slug.
    pub fn dnd_spell(&self, name: &str) -> CompendiumResult<Entry> {
        let name = normalize_name(name);
        let url = format!("{}{}", self.config.dnd_spells_base, dnd_spells_slug(&name));

        let page = self.fetcher.fetch(&url)?;
        if resolved(&page, &url) {
            return parse_dnd_spells(&name, &page.body, false);
        }

        let ritual_url = format!("{url}-ritual");
        let page = self.fetcher.fetch(&ritual_url)?;
        if resolved(&page, &ritual_url) {
            return parse_dnd_spells(&name, &page.body, true);
        }

        Err(CompendiumError::NotFound { name, url })
    }
}

/// A page counts only if it was served from the URL asked for; the site
/// redirects unknown spells elsewhere.
fn resolved(page: &Page, url: &str) -> bool {
    page.status == 200 && page.url == url
}
