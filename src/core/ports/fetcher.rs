//! Content fetching port
//!
//! Defines how the engine obtains raw content for a target.

use std::future::Future;

use crate::error::FetchError;

/// Obtains the full content behind a target identifier
///
/// Implementations must be shareable across tasks: the engine holds one
/// fetcher behind an `Arc` and calls it from one task per target.
pub trait Fetcher: Send + Sync {
    /// Fetch and fully buffer the content for `identifier`
    fn fetch(&self, identifier: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}
