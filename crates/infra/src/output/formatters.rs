// crates/infra/src/output/formatters.rs
use std::io::Write;

use freq_count_domain::OutputFormat;
use freq_count_ports::report::FrequencyReportDto;
use freq_count_shared_kernel::Result;

pub mod delimited;
pub mod structured;

pub use delimited::output_tsv;
pub use structured::output_json;
#[cfg(feature = "yaml")]
pub use structured::output_yaml;

/// Write `report` to `out` in the requested `format`.
///
/// # Errors
/// Fails when writing or serialization fails, or when YAML is requested from
/// a build without the `yaml` feature.
pub fn render(report: &FrequencyReportDto, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Tsv => output_tsv(report, out),
        OutputFormat::Json => output_json(report, out),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => output_yaml(report, out),
        #[cfg(not(feature = "yaml"))]
        OutputFormat::Yaml => Err(freq_count_shared_kernel::InfrastructureError::SerializationError {
            format: "YAML".to_string(),
            details: "built without the `yaml` feature".to_string(),
        }
        .into()),
    }
}
