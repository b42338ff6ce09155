//! Targets and target sets
//!
//! A Target is one concrete location to check: a URL fetched over HTTP, or a
//! file path read from disk. Glob entries in the definition are expanded to
//! one Target per matched file before binding.
//!
//! # Examples
//!
//! ```
//! use sitecheck::core::models::{Assertion, ExpectedCount, Target, TargetSet};
//!
//! let mut target = Target::new("https://example.com/");
//! target.assertions.push(Assertion::new("Example", "Example", ExpectedCount::AtLeastOne));
//!
//! let set: TargetSet = vec![target, Target::new("docs/index.html")].into_iter().collect();
//! assert_eq!(set.target_count(), 2);
//! assert_eq!(set.assertion_count(), 1);
//! ```

use serde::Serialize;

use super::Assertion;
use crate::error::FetchError;

/// Whether an identifier is fetched over the network rather than read from disk
#[must_use]
pub fn is_remote(identifier: &str) -> bool {
    identifier.starts_with("http://") || identifier.starts_with("https://")
}

/// A single location and the assertions bound to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    /// URL or concrete file path
    pub identifier: String,

    /// Assertions in template order, then needle order
    pub assertions: Vec<Assertion>,

    /// True iff every assertion passed; settled after evaluation
    pub passed: bool,

    /// Why content could not be fetched, if it could not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Target {
    /// Create a target with no assertions
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            assertions: Vec::new(),
            passed: false,
            error: None,
        }
    }

    /// Record a fetch failure; assertions are left unevaluated
    pub fn fail_fetch(&mut self, error: &FetchError) {
        self.error = Some(error.to_string());
    }

    /// Compute `passed` from the assertion outcomes
    ///
    /// A target without assertions passes vacuously.
    pub fn settle(&mut self) -> bool {
        self.passed = self.assertions.iter().all(|a| a.pass);
        self.passed
    }
}

/// Ordered collection of targets with aggregate counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    /// Wrap an ordered list of targets
    #[must_use]
    pub const fn new(targets: Vec<Target>) -> Self {
        Self { targets }
    }

    /// Number of targets
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Total number of assertions across all targets
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.targets.iter().map(|t| t.assertions.len()).sum()
    }

    /// Number of assertions that passed
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.assertions().filter(|a| a.pass).count()
    }

    /// Number of assertions that failed (including unevaluated ones)
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.assertions().filter(|a| !a.pass).count()
    }

    /// Whether the set holds no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate targets in order
    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    /// Borrow the targets as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Target] {
        &self.targets
    }

    /// Unwrap into the underlying list
    #[must_use]
    pub fn into_vec(self) -> Vec<Target> {
        self.targets
    }

    /// Stable sort by identifier; duplicates keep their relative order
    pub fn sort_by_identifier(&mut self) {
        self.targets.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    fn assertions(&self) -> impl Iterator<Item = &Assertion> {
        self.targets.iter().flat_map(|t| t.assertions.iter())
    }
}

impl FromIterator<Target> for TargetSet {
    fn from_iter<I: IntoIterator<Item = Target>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

impl IntoIterator for TargetSet {
    type Item = Target;
    type IntoIter = std::vec::IntoIter<Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}
