// crates/infra/src/output/formatters/delimited.rs
use std::io::Write;

use freq_count_ports::report::FrequencyReportDto;
use freq_count_shared_kernel::Result;

const SEP: char = '\t';

pub fn output_tsv(report: &FrequencyReportDto, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Element{SEP}Frequency")?;
    for row in &report.rows {
        writeln!(out, "{}{SEP}{}", row.element, row.frequency)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use freq_count_ports::report::ReportRowDto;
    use freq_count_shared_kernel::{Element, Frequency};

    use super::*;

    fn report(rows: &[(i32, usize)]) -> FrequencyReportDto {
        let rows: Vec<ReportRowDto> = rows
            .iter()
            .map(|&(e, f)| ReportRowDto { element: Element::new(e), frequency: Frequency::new(f) })
            .collect();
        let total = rows.iter().map(|r| r.frequency).sum();
        FrequencyReportDto { rows, total }
    }

    fn render(report: &FrequencyReportDto) -> String {
        let mut buf = Vec::new();
        output_tsv(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_then_tab_separated_rows() {
        let text = render(&report(&[(1, 2), (9, 1)]));
        assert_eq!(text, "Element\tFrequency\n1\t2\n9\t1\n");
    }

    #[test]
    fn empty_report_is_header_only() {
        assert_eq!(render(&FrequencyReportDto::default()), "Element\tFrequency\n");
    }
}
