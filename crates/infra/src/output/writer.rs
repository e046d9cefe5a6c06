// crates/infra/src/output/writer.rs
use std::io::{self, BufWriter, Stdout, Write};

use freq_count_domain::OutputFormat;
use freq_count_ports::report::{FrequencyReportDto, ReportWriter};
use freq_count_shared_kernel::Result;

use super::formatters::render;

/// Renders reports onto any byte stream.
pub struct StreamReportWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> StreamReportWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamReportWriter<BufWriter<Stdout>> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(BufWriter::new(io::stdout()), format)
    }
}

impl<W: Write> ReportWriter for StreamReportWriter<W> {
    fn write_report(&mut self, report: &FrequencyReportDto) -> Result<()> {
        log::debug!("rendering {} rows as {}", report.rows.len(), self.format);
        render(report, self.format, &mut self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
