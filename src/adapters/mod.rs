//! Adapter implementations of port traits
//!
//! - [`http`] - reqwest GET for `http(s)://` identifiers
//! - [`file`] - tokio filesystem reads for everything else
//!
//! [`TransportFetcher`] picks between the two per identifier.

pub mod file;
pub mod http;

pub use file::FileFetcher;
pub use http::HttpFetcher;

use crate::config::FetchSettings;
use crate::core::models::is_remote;
use crate::core::ports::Fetcher;
use crate::error::FetchError;

/// Default fetcher: HTTP for URLs, disk for paths
#[derive(Debug, Clone)]
pub struct TransportFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl TransportFetcher {
    /// Build from fetch settings
    pub fn new(settings: &FetchSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::with_http(HttpFetcher::new(settings)?))
    }

    /// Build around an existing HTTP fetcher
    #[must_use]
    pub const fn with_http(http: HttpFetcher) -> Self {
        Self {
            http,
            file: FileFetcher,
        }
    }
}

impl Fetcher for TransportFetcher {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, FetchError> {
        if is_remote(identifier) {
            self.http.fetch(identifier).await
        } else {
            self.file.fetch(identifier).await
        }
    }
}
