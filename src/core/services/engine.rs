//! Check engine - fetches and evaluates every target concurrently
//!
//! One tokio task is spawned per target (never per assertion), so fan-out and
//! open connections are bounded by the target count. Each task owns its
//! target outright and hands it back when done; the engine joins on every
//! task before anything is aggregated, so no locking is needed.
//!
//! There is no cancellation. Unless [`EngineOptions::timeout`] is set, a
//! fetch may take as long as the transport allows. A fetcher that panics
//! fails only its own target, with [`FetchError::TaskFailed`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use log::{debug, warn};

use super::evaluator::evaluate;
use crate::core::models::{RunResult, Target, TargetSet};
use crate::core::ports::Fetcher;
use crate::error::FetchError;

/// Tunables for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Per-target fetch limit; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

/// Runs fetch + evaluation for a set of targets
#[derive(Debug)]
pub struct CheckEngine<F> {
    fetcher: Arc<F>,
    options: EngineOptions,
}

impl<F: Fetcher + 'static> CheckEngine<F> {
    /// Create an engine around a fetcher, with no timeout
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            options: EngineOptions::default(),
        }
    }

    /// Replace the engine options
    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// The fetcher in use
    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Check every target and return the settled, sorted result
    ///
    /// Targets whose content cannot be fetched keep all assertions failed
    /// and carry the error; the other targets are unaffected.
    pub async fn run(&self, targets: TargetSet) -> RunResult {
        debug!(
            "checking {} targets, {} assertions",
            targets.target_count(),
            targets.assertion_count()
        );

        let handles: Vec<_> = targets
            .into_iter()
            .map(|target| {
                let fetcher = Arc::clone(&self.fetcher);
                let timeout = self.options.timeout;
                tokio::spawn(async move { check_target(fetcher.as_ref(), target, timeout).await })
            })
            .collect();

        let mut checked = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(target) => checked.push(target),
                // Fetch panics are caught inside the task and tasks are never
                // aborted, so only a panic in evaluation lands here
                Err(err) => panic::resume_unwind(err.into_panic()),
            }
        }

        RunResult::from_targets(checked)
    }
}

/// Fetch one target's content and evaluate its assertions
async fn check_target<F: Fetcher + ?Sized>(
    fetcher: &F,
    mut target: Target,
    timeout: Option<Duration>,
) -> Target {
    // Already failed during expansion
    if target.error.is_some() {
        return target;
    }

    let fetched = match timeout {
        Some(after) => tokio::time::timeout(after, fetch_guarded(fetcher, &target.identifier))
            .await
            .unwrap_or_else(|_| {
                Err(FetchError::Timeout {
                    identifier: target.identifier.clone(),
                    after,
                })
            }),
        None => fetch_guarded(fetcher, &target.identifier).await,
    };

    match fetched {
        Ok(content) => {
            debug!("fetched {} bytes from {}", content.len(), target.identifier);
            evaluate(&mut target.assertions, &content);
        },
        Err(err) => {
            warn!("{err}");
            target.fail_fetch(&err);
        },
    }

    target
}

/// Fetch, turning a panic inside the fetcher into an error for this target
async fn fetch_guarded<F: Fetcher + ?Sized>(fetcher: &F, identifier: &str) -> Result<Vec<u8>, FetchError> {
    AssertUnwindSafe(fetcher.fetch(identifier))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            Err(FetchError::TaskFailed {
                identifier: identifier.to_string(),
                reason: format!("fetch panicked: {}", panic_message(payload.as_ref())),
            })
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause")
}
