//! Conformance testing harness for sigfmt.
//!
//! This crate provides:
//! - Fixture capture: write the builtin formatting case table as JSON
//!   reference data
//! - Fixture verify: render every case through an in-memory sink and
//!   compare against the recorded expectation
//! - Report generation: human-readable markdown + machine-readable JSON

#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{TestRunner, VerificationResult};
