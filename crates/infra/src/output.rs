// crates/infra/src/output.rs
pub mod formatters;
pub mod writer;

pub use formatters::render;
pub use writer::StreamReportWriter;
