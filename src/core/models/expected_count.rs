//! Expected occurrence count
//!
//! A needle either has to appear at least once, or exactly `n` times
//! (including `n = 0`, which asserts absence).

use serde::{Serialize, Serializer};

/// How many times a needle must occur in content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpectedCount {
    /// One or more occurrences
    #[default]
    AtLeastOne,
    /// Exactly this many occurrences
    Exactly(usize),
}

impl ExpectedCount {
    /// Build from a raw definition count; absent or negative means at-least-one
    #[must_use]
    pub fn from_raw(count: Option<i64>) -> Self {
        count.and_then(|c| usize::try_from(c).ok()).map_or(Self::AtLeastOne, Self::Exactly)
    }

    /// Whether `occurrences` satisfies this expectation
    #[must_use]
    pub const fn is_satisfied_by(self, occurrences: usize) -> bool {
        match self {
            Self::AtLeastOne => occurrences > 0,
            Self::Exactly(n) => occurrences == n,
        }
    }
}

impl std::fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtLeastOne => write!(f, "1+"),
            Self::Exactly(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for ExpectedCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AtLeastOne => serializer.serialize_str("1+"),
            Self::Exactly(n) => n.serialize(serializer),
        }
    }
}
