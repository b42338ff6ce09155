//! HTTP fetcher backed by reqwest
//!
//! A plain GET with the body fully buffered. Any response counts as content,
//! whatever its status; only transport failures are errors.

use log::debug;
use reqwest::Client;

use crate::config::FetchSettings;
use crate::core::ports::Fetcher;
use crate::error::FetchError;

/// Fetches `http://` and `https://` targets
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with its own connection pool
    pub fn new(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(settings.user_agent.as_str()).build()?;
        Ok(Self { client })
    }

    /// Use an existing client
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, FetchError> {
        let to_error = |source| FetchError::Http {
            url: identifier.to_string(),
            source,
        };

        let response = self.client.get(identifier).send().await.map_err(to_error)?;
        let status = response.status();
        if !status.is_success() {
            debug!("{identifier} answered {status}, checking its body anyway");
        }

        let body = response.bytes().await.map_err(to_error)?;
        Ok(body.to_vec())
    }
}
