//! Error types for compendium lookups.

/// Errors that can occur while fetching or extracting a compendium entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompendiumError {
    /// The page does not exist (non-200 status or redirected elsewhere).
    #[error("{name} not found at {url}.")]
    NotFound {
        /// The name that was looked up.
        name: String,
        /// The URL that was requested.
        url: String,
    },

    /// The page exists but redirects to paid marketplace content.
    #[error("{name} not found at {url}, likely because this content is behind a paywall.")]
    Paywalled {
        /// The name that was looked up.
        name: String,
        /// The URL that was requested.
        url: String,
    },

    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// Description of the underlying network failure.
        message: String,
    },

    /// The page was fetched but its markup could not be interpreted.
    #[error("could not parse page: {0}")]
    Parse(String),
}

impl CompendiumError {
    /// Returns true if the error means the entry simply is not available,
    /// as opposed to a network or parse failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Paywalled { .. })
    }
}

/// Convenience result type for compendium operations.
pub type CompendiumResult<T> = Result<T, CompendiumError>;
