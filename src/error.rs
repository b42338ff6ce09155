//! Error taxonomy
//!
//! Two families of errors exist, and they propagate very differently:
//!
//! - [`ConfigError`] - the definition or configuration is unusable. Always
//!   fatal, raised before any target is fetched.
//! - [`FetchError`] - content for one target could not be obtained. Contained
//!   to that target; its assertions stay failed and the run continues.
//!
//! A needle that is missing from fetched content is not an error at all, it
//! is a failed assertion.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Fatal problems with the definition or its loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `checks` key is not a valid regular expression
    #[error("error with check regex [{pattern}]: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation failure reported by the regex engine
        #[source]
        source: regex::Error,
    },

    /// The definition is not valid JSON or has the wrong shape
    #[error("invalid definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),

    /// A check value under a pattern is not a string, object or array
    #[error("invalid check for regex [{pattern}]: {reason}")]
    InvalidCheck {
        /// Pattern the check was declared under
        pattern: String,
        /// What was wrong with it
        reason: String,
    },

    /// No argument was given and stdin is a terminal
    #[error("no definition provided: pass a file path, inline JSON, or pipe one on stdin")]
    NoDefinition,

    /// The definition source could not be read
    #[error("error when reading definition {}: {source}", path.display())]
    ReadDefinition {
        /// File (or `-` for stdin) that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The user config file exists but cannot be used
    #[error("error reading config {}: {reason}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// Read or parse failure
        reason: String,
    },
}

/// Failure to obtain content for a single target
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level HTTP failure (non-2xx statuses are not errors)
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested URL
        url: String,
        /// Client error
        #[source]
        source: reqwest::Error,
    },

    /// Local file could not be read
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The fetch did not finish within the configured timeout
    #[error("fetching {identifier} timed out after {}s", after.as_secs())]
    Timeout {
        /// Target identifier
        identifier: String,
        /// Configured limit
        after: Duration,
    },

    /// A path entry is not a valid glob pattern
    #[error("bad file path or glob pattern ({pattern}): {reason}")]
    InvalidGlob {
        /// Pattern after base directory resolution
        pattern: String,
        /// Parser message
        reason: String,
    },

    /// The fetcher panicked while checking this target
    #[error("check task for {identifier} failed: {reason}")]
    TaskFailed {
        /// Target identifier
        identifier: String,
        /// Panic message
        reason: String,
    },
}
