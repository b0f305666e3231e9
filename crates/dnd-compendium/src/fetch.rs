//! Page transport.

use tracing::debug;

use crate::config::CompendiumConfig;
use crate::error::{CompendiumError, CompendiumResult};

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// HTTP status code.
    pub status: u16,
    /// Final URL after redirects.
    pub url: String,
    /// Response body (empty for error statuses).
    pub body: String,
}

impl Page {
    /// A 200 response served from `url`.
    pub fn ok(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status: 200,
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Something that can fetch a page by URL.
pub trait Fetch {
    /// Fetch `url`. HTTP error statuses are returned as pages; only
    /// failures to get any response are errors.
    fn fetch(&self, url: &str) -> CompendiumResult<Page>;
}

/// Blocking HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Build a transport with the configured timeout and user agent.
    pub fn new(config: &CompendiumConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> CompendiumResult<Page> {
        debug!(url, "fetching page");
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                let final_url = response.get_url().to_string();
                let body = response
                    .into_string()
                    .map_err(|e| CompendiumError::Transport {
                        url: url.to_string(),
                        message: e.to_string(),
                    })?;
                debug!(status, url = %final_url, bytes = body.len(), "page fetched");
                Ok(Page {
                    status,
                    url: final_url,
                    body,
                })
            }
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, url, "page returned error status");
                Ok(Page {
                    status,
                    url: response.get_url().to_string(),
                    body: String::new(),
                })
            }
            Err(ureq::Error::Transport(transport)) => Err(CompendiumError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            }),
        }
    }
}
