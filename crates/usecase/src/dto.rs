use freq_count_domain::Summary;
use freq_count_ports::report::FrequencyReportDto;

/// Result of tallying one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyOutput {
    pub report: FrequencyReportDto,
    pub summary: Summary,
}
