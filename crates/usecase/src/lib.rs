//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load a sequence, tally it and hand the report to a writer
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::TallyOutput;
pub use orchestrator::TallySequence;
