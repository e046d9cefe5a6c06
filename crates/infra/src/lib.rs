// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod source;

pub use output::StreamReportWriter;
pub use source::BuiltinSequence;
