//! Tests for the check engine
//!
//! The engine fetches every target concurrently through a `Fetcher` and
//! evaluates its assertions; these tests drive it with an in-memory mock.

use std::time::{Duration, Instant};

use sitecheck::core::models::{Target, TargetSet};
use sitecheck::core::services::{CheckEngine, EngineOptions, bind};
use sitecheck::definition::Definition;

use crate::common::mocks::MockFetcher;

fn targets(definition: &str) -> TargetSet {
    let def = Definition::parse(definition).unwrap();
    let templates = def.templates().unwrap();
    bind(&templates, def.identifiers()).into_iter().collect()
}

#[tokio::test]
async fn welcome_page_passes_both_checks() {
    let set = targets(r#"{"checks":{"^/$":["Welcome",{"check":"error","count":0}]},"urls":["/"]}"#);
    let engine = CheckEngine::new(MockFetcher::new().with_page("/", "Welcome home"));

    let result = engine.run(set).await;

    assert!(result.overall_pass);
    assert_eq!(result.summary().passed, 2);
    assert_eq!(result.summary().failed, 0);
    let target = &result.targets.as_slice()[0];
    assert!(target.passed);
    assert!(target.assertions.iter().all(|a| a.pass));
}

#[tokio::test]
async fn exact_counts_are_exact() {
    let set = targets(
        r#"{"checks":{"/":[{"check":"li","count":3},{"check":"li","count":2},{"check":"ul","count":2}]},"urls":["/list"]}"#,
    );
    let engine = CheckEngine::new(MockFetcher::new().with_page("/list", "<ul><li>a<li>b<li>c</ul>"));

    let result = engine.run(set).await;
    let outcomes: Vec<_> = result.targets.as_slice()[0].assertions.iter().map(|a| a.pass).collect();
    assert_eq!(outcomes, [true, false, true]);
    assert!(!result.overall_pass);
}

#[tokio::test]
async fn fetch_failure_is_isolated_to_its_target() {
    let set = targets(r#"{"checks":{".":["ok","fine"]},"urls":["/good","/broken"]}"#);
    let engine = CheckEngine::new(MockFetcher::new().with_page("/good", "ok and fine"));

    let result = engine.run(set).await;

    assert!(!result.overall_pass);
    let by_id = |id: &str| result.targets.iter().find(|t| t.identifier == id).unwrap().clone();
    let broken = by_id("/broken");
    assert!(broken.error.is_some());
    assert!(broken.assertions.iter().all(|a| !a.pass && !a.is_evaluated()));
    assert!(!broken.passed);

    let good = by_id("/good");
    assert!(good.error.is_none());
    assert!(good.passed);
}

#[tokio::test]
async fn targets_are_fetched_concurrently() {
    let set = targets(r#"{"checks":{".":"x"},"urls":["/a","/b","/c","/d"]}"#);
    let mut fetcher = MockFetcher::new();
    for id in ["/a", "/b", "/c", "/d"] {
        fetcher = fetcher.with_page(id, "x").with_delay(id, Duration::from_millis(300));
    }
    let engine = CheckEngine::new(fetcher);

    let started = Instant::now();
    let result = engine.run(set).await;

    assert!(result.overall_pass);
    assert!(started.elapsed() < Duration::from_millis(1100));
}

#[tokio::test]
async fn results_are_sorted_regardless_of_completion_order() {
    let set = targets(r#"{"checks":{".":"x"},"urls":["/c","/a","/b"]}"#);
    let fetcher = MockFetcher::new()
        .with_page("/a", "x")
        .with_delay("/a", Duration::from_millis(100))
        .with_page("/b", "x")
        .with_page("/c", "x")
        .with_delay("/c", Duration::from_millis(50));

    let result = CheckEngine::new(fetcher).run(set).await;
    let ids: Vec<_> = result.targets.iter().map(|t| t.identifier.as_str()).collect();
    assert_eq!(ids, ["/a", "/b", "/c"]);
}

#[tokio::test]
async fn duplicate_identifiers_keep_relative_order() {
    let set = targets(r#"{"checks":{"^/z$":"first","^/":"second"},"urls":["/z","/a","/z"]}"#);
    let mut set_vec = set.into_vec();
    // Make the two /z targets distinguishable
    set_vec[2].assertions.truncate(1);
    set_vec[2].assertions[0].needle = "third".into();
    let fetcher = MockFetcher::new().with_page("/z", "first second").with_page("/a", "second");

    let result = CheckEngine::new(fetcher).run(set_vec.into_iter().collect()).await;
    let z: Vec<_> = result
        .targets
        .iter()
        .filter(|t| t.identifier == "/z")
        .map(|t| t.assertions.len())
        .collect();
    assert_eq!(z, [2, 1]);
}

#[tokio::test]
async fn zero_targets_pass_vacuously() {
    let result = CheckEngine::new(MockFetcher::new()).run(TargetSet::default()).await;
    assert!(result.overall_pass);
    assert_eq!(result.summary().total(), 0);
}

#[tokio::test]
async fn target_without_assertions_passes() {
    let set = targets(r#"{"checks":{"^/blog":"x"},"urls":["/about"]}"#);
    let result = CheckEngine::new(MockFetcher::new().with_page("/about", "")).run(set).await;
    assert!(result.overall_pass);
    assert!(result.targets.as_slice()[0].assertions.is_empty());
}

#[tokio::test]
async fn one_failing_assertion_flips_overall() {
    let content = "alpha beta gamma";
    let passing = targets(r#"{"checks":{".":["alpha","beta"]},"urls":["/1","/2"]}"#);
    let failing = targets(r#"{"checks":{".":["alpha","beta"],"^/2$":"delta"},"urls":["/1","/2"]}"#);
    let fetcher = || MockFetcher::new().with_page("/1", content).with_page("/2", content);

    assert!(CheckEngine::new(fetcher()).run(passing).await.overall_pass);
    assert!(!CheckEngine::new(fetcher()).run(failing).await.overall_pass);
}

#[tokio::test]
async fn timeout_marks_target_failed() {
    let set = targets(r#"{"checks":{".":"x"},"urls":["/slow","/fast"]}"#);
    let fetcher = MockFetcher::new()
        .with_page("/slow", "x")
        .with_delay("/slow", Duration::from_secs(30))
        .with_page("/fast", "x");
    let engine = CheckEngine::new(fetcher).with_options(EngineOptions {
        timeout: Some(Duration::from_millis(50)),
    });

    let result = engine.run(set).await;

    let slow = result.targets.iter().find(|t| t.identifier == "/slow").unwrap();
    assert!(slow.error.as_deref().unwrap().contains("timed out"));
    assert!(!slow.passed);
    let fast = result.targets.iter().find(|t| t.identifier == "/fast").unwrap();
    assert!(fast.passed);
}

#[tokio::test]
async fn panicking_fetch_is_contained() {
    let set = targets(r#"{"checks":{".":"x"},"urls":["/boom","/ok"]}"#);
    let fetcher = MockFetcher::new().panicking_on("/boom").with_page("/ok", "x");

    let result = CheckEngine::new(fetcher).run(set).await;

    let boom = result.targets.iter().find(|t| t.identifier == "/boom").unwrap();
    assert!(boom.error.as_deref().unwrap().contains("fetch panicked"));
    assert_eq!(boom.assertions.len(), 1);
    assert!(!boom.assertions[0].is_evaluated());
    assert_eq!(result.summary().total(), 2);
    assert!(!result.overall_pass);
    assert!(result.targets.iter().find(|t| t.identifier == "/ok").unwrap().passed);
}

#[tokio::test]
async fn pre_failed_target_is_not_fetched() {
    let mut target = Target::new("[bad");
    target.error = Some("bad glob".into());
    let fetcher = MockFetcher::new();
    let engine = CheckEngine::new(fetcher);

    let result = engine.run(TargetSet::new(vec![target])).await;
    assert_eq!(result.targets.as_slice()[0].error.as_deref(), Some("bad glob"));
    assert!(engine.fetcher().calls().is_empty());
}
