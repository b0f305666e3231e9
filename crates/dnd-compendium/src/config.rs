//! Configuration for compendium lookups.

use std::time::Duration;

/// Default Roll20 5e compendium root.
pub const ROLL20_BASE: &str = "https://roll20.net/compendium/dnd5e/";

/// Default dnd-spells.com spell page root.
pub const DND_SPELLS_BASE: &str = "https://www.dnd-spells.com/spell/";

/// Where and how compendium pages are fetched.
#[derive(Debug, Clone)]
pub struct CompendiumConfig {
    /// Root URL of the Roll20 compendium; kind prefixes and slugs are appended.
    pub roll20_base: String,
    /// Root URL of dnd-spells.com spell pages.
    pub dnd_spells_base: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with each request.
    pub user_agent: String,
}

impl Default for CompendiumConfig {
    fn default() -> Self {
        Self {
            roll20_base: ROLL20_BASE.to_string(),
            dnd_spells_base: DND_SPELLS_BASE.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("dnd4rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CompendiumConfig {
    /// Set the Roll20 compendium root.
    pub fn with_roll20_base(mut self, base: impl Into<String>) -> Self {
        self.roll20_base = base.into();
        self
    }

    /// Set the dnd-spells.com root.
    pub fn with_dnd_spells_base(mut self, base: impl Into<String>) -> Self {
        self.dnd_spells_base = base.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = CompendiumConfig::default();
        assert_eq!(cfg.roll20_base, "https://roll20.net/compendium/dnd5e/");
        assert_eq!(cfg.dnd_spells_base, "https://www.dnd-spells.com/spell/");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert!(cfg.user_agent.starts_with("dnd4rs/"));
    }

    #[test]
    fn builder_methods() {
        let cfg = CompendiumConfig::default()
            .with_roll20_base("http://localhost/r20/")
            .with_dnd_spells_base("http://localhost/spells/")
            .with_timeout(Duration::from_secs(2))
            .with_user_agent("test-agent");
        assert_eq!(cfg.roll20_base, "http://localhost/r20/");
        assert_eq!(cfg.dnd_spells_base, "http://localhost/spells/");
        assert_eq!(cfg.timeout, Duration::from_secs(2));
        assert_eq!(cfg.user_agent, "test-agent");
    }
}
