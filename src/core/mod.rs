//! Core domain logic for sitecheck
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Assertion, Target, `TargetSet`, `RunResult`)
//! - `services/` - Binding, evaluation and the concurrent check engine
//! - `ports/` - Trait definitions for external dependencies
//!
//! Apart from the engine, which drives a [`ports::Fetcher`], nothing in here
//! performs I/O.

pub mod models;
pub mod ports;
pub mod services;
