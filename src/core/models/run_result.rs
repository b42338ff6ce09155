//! Aggregate outcome of a run

use serde::Serialize;

use super::{Target, TargetSet};

/// Fully evaluated targets plus the overall verdict
///
/// Produced once by the engine after every target has been checked; readers
/// such as the reporter only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Targets sorted by identifier
    pub targets: TargetSet,
    /// Conjunction of every target's `passed`; true when there are no targets
    pub overall_pass: bool,
}

impl RunResult {
    /// Settle every target, compute the overall verdict, then sort for reporting
    #[must_use]
    pub fn from_targets(targets: Vec<Target>) -> Self {
        let mut targets = TargetSet::new(
            targets
                .into_iter()
                .map(|mut t| {
                    t.settle();
                    t
                })
                .collect(),
        );
        let overall_pass = targets.iter().all(|t| t.passed);
        targets.sort_by_identifier();

        Self {
            targets,
            overall_pass,
        }
    }

    /// Pass/fail counts over all assertions
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.targets.passed_count(),
            failed: self.targets.failed_count(),
        }
    }
}

/// Assertion pass/fail counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Assertions that passed
    pub passed: usize,
    /// Assertions that failed or were never evaluated
    pub failed: usize,
}

impl Summary {
    /// Total assertions
    #[must_use]
    pub const fn total(self) -> usize {
        self.passed + self.failed
    }

    /// Percentage of passing assertions; 100 when there are none
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.passed as f64 / self.total() as f64 * 100.0
    }
}
