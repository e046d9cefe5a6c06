use freq_count_domain::{InputSequence, Summary, TallyRow, ValueRange, tally};
use freq_count_ports::report::{FrequencyReportDto, ReportRowDto, ReportWriter};
use freq_count_ports::source::SequenceSource;
use freq_count_shared_kernel::{ErrorContext, Result};

use crate::dto::TallyOutput;

pub struct TallySequence<'a> {
    source: &'a dyn SequenceSource,
    range: Option<ValueRange>,
}

impl<'a> TallySequence<'a> {
    pub fn new(source: &'a dyn SequenceSource, range: Option<ValueRange>) -> Self {
        Self { source, range }
    }

    /// Load the sequence and count it.
    ///
    /// # Errors
    /// Fails when the source cannot be loaded or a value lies outside the range.
    pub fn run(&self) -> Result<TallyOutput> {
        let sequence: InputSequence = self
            .source
            .load()
            .with_context(|| format!("loading sequence '{}'", self.source.name()))?
            .into_iter()
            .collect();
        log::info!("loaded {} elements from '{}'", sequence.len(), self.source.name());

        let table = tally(&sequence, self.range)
            .with_context(|| format!("tallying sequence '{}'", self.source.name()))?;

        let report = FrequencyReportDto {
            rows: table.rows().into_iter().map(row_to_dto).collect(),
            total: table.total(),
        };
        Ok(TallyOutput { report, summary: Summary::from_table(&table) })
    }

    /// Count the sequence and write the report through `writer`.
    ///
    /// # Errors
    /// Propagates failures from [`Self::run`] and from the writer.
    pub fn report(&self, writer: &mut dyn ReportWriter) -> Result<TallyOutput> {
        let output = self.run()?;
        writer.write_report(&output.report).context("writing frequency report")?;
        log::debug!(
            "reported {} rows totalling {}",
            output.report.rows.len(),
            output.report.total
        );
        Ok(output)
    }
}

fn row_to_dto(row: TallyRow) -> ReportRowDto {
    ReportRowDto { element: row.element, frequency: row.frequency }
}
