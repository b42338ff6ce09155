//! Port traits (interfaces) for external dependencies
//!
//! Implementations live in the `adapters` module. Tests substitute their own
//! fetchers to exercise the engine without network or disk.

mod fetcher;

pub use fetcher::Fetcher;
