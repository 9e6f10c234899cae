use crate::application::portfolio::PortfolioReport;
use crate::error::Result;
use std::io::Write;

pub const TOTAL_LABEL: &str = "TOTAL";

/// Writes a portfolio report as `address,status,valuation` CSV, ending with a total row.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_report(&mut self, report: &PortfolioReport) -> Result<()> {
        self.writer.write_record(["address", "status", "valuation"])?;

        for row in &report.rows {
            let valuation = row
                .valuation
                .map(|value| value.normalize().to_string())
                .unwrap_or_default();
            let status = row.status.to_string();
            self.writer
                .write_record([row.address.as_str(), status.as_str(), valuation.as_str()])?;
        }

        let total = report.total.normalize().to_string();
        self.writer.write_record([TOTAL_LABEL, "", total.as_str()])?;
        self.writer.flush()?;
        Ok(())
    }
}
