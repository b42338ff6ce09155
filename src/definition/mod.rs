//! Definition documents
//!
//! ```json
//! {
//!   "checks": { "^https://example.com/$": ["Example Domain", {"check": "error", "count": 0}] },
//!   "urls":   ["https://example.com/"],
//!   "paths":  ["public/**/*.html"]
//! }
//! ```
//!
//! `checks` keys are regexes searched against every entry of `paths` and
//! `urls`. Keys keep their document order, which is the order assertions
//! accumulate in.

pub mod source;
pub mod spec;

pub use source::{DefinitionSource, LoadedDefinition};
pub use spec::AssertionSpec;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::services::AssertionTemplate;
use crate::error::ConfigError;

/// A parsed definition document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Definition {
    /// Pattern to check value, in document order
    #[serde(default)]
    pub checks: Map<String, Value>,

    /// Target URLs or paths
    #[serde(default)]
    pub urls: Vec<String>,

    /// Target paths or globs (URLs are accepted too)
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Definition {
    /// Parse a JSON document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Inspect every check value, in document order
    pub fn specs(&self) -> Result<Vec<(&str, AssertionSpec)>, ConfigError> {
        self.checks
            .iter()
            .map(|(pattern, value)| AssertionSpec::from_value(pattern, value).map(|spec| (pattern.as_str(), spec)))
            .collect()
    }

    /// Compile every pattern; fails on the first invalid check or regex
    ///
    /// Patterns that declare no needles are dropped.
    pub fn templates(&self) -> Result<Vec<AssertionTemplate>, ConfigError> {
        self.specs()?
            .into_iter()
            .filter_map(|(pattern, spec)| {
                let needles = spec.needles();
                (!needles.is_empty()).then(|| AssertionTemplate::compile(pattern, needles))
            })
            .collect()
    }

    /// Every declared target entry: `paths` first, then `urls`
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().chain(&self.urls).map(String::as_str)
    }
}
