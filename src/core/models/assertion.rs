//! Assertion model
//!
//! An assertion says: "this needle occurs in this target's content, this many
//! times". It is produced by binding a needle template to a concrete target
//! and is evaluated once the target's content has been fetched.

use serde::Serialize;

use super::ExpectedCount;

/// A needle template as declared in the definition, before substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedleTemplate {
    /// Template text, possibly containing `$N` placeholders
    pub template: String,
    /// Required occurrence count
    pub expected: ExpectedCount,
}

impl NeedleTemplate {
    /// Create a needle template
    pub fn new(template: impl Into<String>, expected: ExpectedCount) -> Self {
        Self {
            template: template.into(),
            expected,
        }
    }
}

/// A concrete assertion against one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    /// Needle after placeholder substitution
    pub needle: String,

    /// The template the needle was produced from
    pub template: String,

    /// Required occurrence count
    pub expected: ExpectedCount,

    /// Outcome; false until evaluated
    pub pass: bool,

    /// Occurrences found, if the content was ever fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<usize>,
}

impl Assertion {
    /// Create an unevaluated assertion
    pub fn new(needle: impl Into<String>, template: impl Into<String>, expected: ExpectedCount) -> Self {
        Self {
            needle: needle.into(),
            template: template.into(),
            expected,
            pass: false,
            occurrences: None,
        }
    }

    /// Record the occurrence count found in content and settle `pass`
    pub const fn record(&mut self, occurrences: usize) {
        self.occurrences = Some(occurrences);
        self.pass = self.expected.is_satisfied_by(occurrences);
    }

    /// Whether this assertion has been evaluated against content
    #[must_use]
    pub const fn is_evaluated(&self) -> bool {
        self.occurrences.is_some()
    }
}
