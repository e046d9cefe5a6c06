// crates/infra/src/output/formatters/structured.rs
use std::io::Write;

use freq_count_ports::report::FrequencyReportDto;
use freq_count_shared_kernel::Result;

pub fn output_json(report: &FrequencyReportDto, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(feature = "yaml")]
pub fn output_yaml(report: &FrequencyReportDto, out: &mut impl Write) -> Result<()> {
    let yaml_str = serde_yaml::to_string(report)?;
    write!(out, "{yaml_str}")?;
    Ok(())
}
