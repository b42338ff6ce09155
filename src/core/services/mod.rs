//! Business logic services
//!
//! - [`binder`] - Bind check templates to target identifiers
//! - [`evaluator`] - Count needle occurrences and settle assertions
//! - [`engine`] - Concurrent fetch-and-evaluate over a target set

pub mod binder;
pub mod engine;
pub mod evaluator;

pub use binder::{AssertionTemplate, bind, bind_target, substitute};
pub use engine::{CheckEngine, EngineOptions};
pub use evaluator::{count_occurrences, evaluate};
