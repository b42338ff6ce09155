//! sitecheck - assert that strings appear in websites and files
//!
//! A definition binds regex patterns over target URLs and paths to needles
//! that must occur in each target's content. This library compiles a
//! definition into concrete per-target assertions, fetches every target
//! concurrently, and reports pass/fail per assertion and overall.
//!
//! ```no_run
//! use sitecheck::adapters::TransportFetcher;
//! use sitecheck::config::FetchSettings;
//! use sitecheck::core::services::CheckEngine;
//! use sitecheck::definition::DefinitionSource;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let loaded = DefinitionSource::from_arg(Some("site.json")).load()?;
//! let targets = sitecheck::plan::plan(&loaded)?;
//! let engine = CheckEngine::new(TransportFetcher::new(&FetchSettings::default())?);
//! let result = engine.run(targets).await;
//! assert!(result.overall_pass);
//! # Ok(())
//! # }
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod definition;
pub mod error;
pub mod expand;
pub mod output;
pub mod paths;
pub mod plan;

pub use error::{ConfigError, FetchError};
