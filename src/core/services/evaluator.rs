//! Assertion evaluation against fetched content
//!
//! Pure, synchronous and cheap relative to fetching.

use crate::core::models::Assertion;

/// Count non-overlapping occurrences of `needle` in `haystack`
///
/// An empty needle matches between every character, so it counts
/// `chars + 1` occurrences.
#[must_use]
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return String::from_utf8_lossy(haystack).chars().count() + 1;
    }

    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..].starts_with(needle) {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Evaluate every assertion against the same content
pub fn evaluate(assertions: &mut [Assertion], content: &[u8]) {
    for assertion in assertions {
        assertion.record(count_occurrences(content, assertion.needle.as_bytes()));
    }
}
