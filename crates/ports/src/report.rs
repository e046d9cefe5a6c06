// crates/ports/src/report.rs
use freq_count_shared_kernel::{Element, Frequency, Result};
use serde::{Deserialize, Serialize};

/// DTO for one reported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRowDto {
    pub element: Element,
    pub frequency: Frequency,
}

/// DTO handed to a [`ReportWriter`]: nonzero rows in ascending order of value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrequencyReportDto {
    pub rows: Vec<ReportRowDto>,
    pub total: Frequency,
}

/// Port for emitting a finished report.
pub trait ReportWriter {
    fn write_report(&mut self, report: &FrequencyReportDto) -> Result<()>;
}
