//! Property-based tests for evaluation and substitution
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use regex::Regex;
use sitecheck::core::models::{Assertion, ExpectedCount, RunResult, Target};
use sitecheck::core::services::{count_occurrences, evaluate, substitute};

proptest! {
    /// An exact count passes iff the needle occurs exactly that many times
    #[test]
    fn exact_count_matches_repetitions(reps in 0usize..20, expected in 0usize..20) {
        let content = "<p>needle</p>".repeat(reps);
        let mut assertions = [Assertion::new("needle", "needle", ExpectedCount::Exactly(expected))];
        evaluate(&mut assertions, content.as_bytes());
        prop_assert_eq!(assertions[0].pass, reps == expected);
    }

    /// At-least-one passes iff there is any occurrence
    #[test]
    fn at_least_one_matches_presence(content in "[a-c ]{0,40}") {
        let mut assertions = [Assertion::new("ab", "ab", ExpectedCount::AtLeastOne)];
        evaluate(&mut assertions, content.as_bytes());
        prop_assert_eq!(assertions[0].pass, content.contains("ab"));
    }

    /// Counting agrees with the standard library's non-overlapping matcher
    #[test]
    fn count_matches_str_matches(haystack in "[ab]{0,50}", needle in "[ab]{1,3}") {
        prop_assert_eq!(
            count_occurrences(haystack.as_bytes(), needle.as_bytes()),
            haystack.matches(needle.as_str()).count()
        );
    }

    /// Templates without `$` are returned verbatim
    #[test]
    fn substitution_is_identity_without_placeholders(template in "[^$]{0,40}", id in "/[a-z]{1,10}") {
        let re = Regex::new(r"/(\w+)").unwrap();
        let caps = re.captures(&id).unwrap();
        prop_assert_eq!(substitute(&template, &caps), template);
    }

    /// Flipping any single assertion to failed flips the overall verdict
    #[test]
    fn single_failure_fails_run(targets in 1usize..5, per_target in 1usize..5, pick in any::<prop::sample::Index>()) {
        let build = |fail: Option<usize>| {
            let mut n = 0;
            let list: Vec<_> = (0..targets)
                .map(|i| {
                    let mut t = Target::new(format!("/{i}"));
                    for _ in 0..per_target {
                        let mut a = Assertion::new("x", "x", ExpectedCount::AtLeastOne);
                        a.record(usize::from(fail != Some(n)));
                        n += 1;
                        t.assertions.push(a);
                    }
                    t
                })
                .collect();
            RunResult::from_targets(list)
        };

        prop_assert!(build(None).overall_pass);
        prop_assert!(!build(Some(pick.index(targets * per_target))).overall_pass);
    }
}
