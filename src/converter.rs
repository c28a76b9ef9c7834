//! Conversion driver.
//!
//! Validates the header row, then pushes each record through enrichment,
//! classification and rendering in input order. Lines are held until the
//! whole input has converted, so a fatal error never leaves a partial report.

use crate::classify::{self, Outcome};
use crate::config::Verbosity;
use crate::enrich;
use crate::error::Result;
use crate::headers;
use crate::output::{self, OutputLine, OutputWriter};
use crate::record::TransactionRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, info};
use std::io::{Read, Write};

/// Per-run counts, logged when conversion finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read.
    pub rows: usize,
    pub sales: usize,
    pub payouts: usize,
    /// Failed or cancelled rows.
    pub skipped: usize,
    /// Rows without a status.
    pub passed_through: usize,
    /// Output lines produced.
    pub lines: usize,
}

/// The result of a successful run.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub lines: Vec<OutputLine>,
    pub summary: ConversionSummary,
}

impl Conversion {
    /// Writes the header and all lines as CSV.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut output = OutputWriter::new(writer)?;
        for line in &self.lines {
            output.write_line(line)?;
        }
        output.finish()
    }
}

/// Converts a processor export into accounting import lines.
///
/// Holds no state across rows beyond the running summary.
pub struct Converter {
    verbosity: Verbosity,
}

impl Converter {
    /// Creates a converter. `Verbosity::Verbose` adds a trace line per emitted line.
    pub fn new(verbosity: Verbosity) -> Self {
        Converter { verbosity }
    }

    /// Converts every row of a CSV export.
    ///
    /// Stops at the first fatal error: bad header, invalid amount, missing
    /// required field, unknown status or failed reconciliation.
    pub fn convert<R: Read>(&self, reader: R) -> Result<Conversion> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let normalized = headers::validate_headers(csv_reader.headers()?)?;
        debug!("Validated headers: {:?}", normalized);
        csv_reader.set_headers(normalized);

        let mut conversion = Conversion::default();

        for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row
            let mut record = result?;

            let lines = self.convert_record(&mut record, row_num, &mut conversion.summary)?;
            conversion.lines.extend(lines);
        }

        let summary = &conversion.summary;
        info!(
            "Processed {} rows: {} sales, {} payouts, {} skipped, {} without status; {} lines written",
            summary.rows,
            summary.sales,
            summary.payouts,
            summary.skipped,
            summary.passed_through,
            summary.lines
        );

        Ok(conversion)
    }

    /// Converts a single record.
    fn convert_record(
        &self,
        record: &mut TransactionRecord,
        row: usize,
        summary: &mut ConversionSummary,
    ) -> Result<Vec<OutputLine>> {
        summary.rows += 1;

        enrich::enrich(record, row)?;
        let outcome = classify::classify(record, row)?;

        match &outcome {
            Outcome::Skip(status) => {
                summary.skipped += 1;
                info!("Row {}: Skipping {:?} transaction", row, status);
            }
            Outcome::PassThrough => {
                summary.passed_through += 1;
                info!("Row {}: No status, nothing to convert", row);
            }
            Outcome::Sale { .. } => summary.sales += 1,
            Outcome::Payout { .. } => summary.payouts += 1,
        }

        let lines = output::render(record, &outcome, row)?;
        summary.lines += outcome.line_count();

        if self.verbosity.is_verbose() {
            for line in &lines {
                debug!(
                    "Row {}: {} {:?} {}",
                    row, line.date, line.reference, line.amount
                );
            }
        }

        Ok(lines)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}
