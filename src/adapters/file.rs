//! Local file fetcher

use std::path::PathBuf;

use crate::core::ports::Fetcher;
use crate::error::FetchError;

/// Reads targets from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    async fn fetch(&self, identifier: &str) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(identifier).await.map_err(|source| FetchError::Io {
            path: PathBuf::from(identifier),
            source,
        })
    }
}
