//! # Domain
//!
//! Frequency counting model: value objects describing the input sequence and
//! the supported value range, and the tally table built from them.

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod value_objects;

pub use model::{Summary, TallyRow, TallyTable, tally};
pub use options::OutputFormat;
pub use value_objects::{InputSequence, ValueRange};
