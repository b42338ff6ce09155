//! Domain models for sitecheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Assertion`] - "this needle occurs in this target, this many times"
//! - [`ExpectedCount`] - at-least-one or an exact count
//! - [`Target`] - a URL or file path and its bound assertions
//! - [`TargetSet`] - ordered targets with aggregate counts
//! - [`RunResult`] - evaluated targets plus the overall verdict

mod assertion;
mod expected_count;
mod run_result;
mod target;

pub use assertion::{Assertion, NeedleTemplate};
pub use expected_count::ExpectedCount;
pub use run_result::{RunResult, Summary};
pub use target::{Target, TargetSet, is_remote};
