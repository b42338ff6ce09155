//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for exercising the engine
//! without real I/O operations.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use sitecheck::core::ports::Fetcher;
use sitecheck::error::FetchError;

/// Mock fetcher serving in-memory pages
///
/// Unknown identifiers fail with a not-found I/O error.
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    panics_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` for `identifier`
    pub fn with_page(mut self, identifier: &str, content: &str) -> Self {
        self.pages.insert(identifier.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Delay the response for `identifier`
    pub fn with_delay(mut self, identifier: &str, delay: Duration) -> Self {
        self.delays.insert(identifier.to_string(), delay);
        self
    }

    /// Panic when `identifier` is fetched
    pub fn panicking_on(mut self, identifier: &str) -> Self {
        self.panics_on = Some(identifier.to_string());
        self
    }

    /// Identifiers fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(identifier.to_string());

        if let Some(delay) = self.delays.get(identifier) {
            tokio::time::sleep(*delay).await;
        }
        if self.panics_on.as_deref() == Some(identifier) {
            panic!("mock fetcher told to panic on {identifier}");
        }

        self.pages.get(identifier).cloned().ok_or_else(|| FetchError::Io {
            path: PathBuf::from(identifier),
            source: io::Error::new(io::ErrorKind::NotFound, "no such mock page"),
        })
    }
}
