//! Rendering accounting events as `Date,Reference,Amount` lines.

use crate::classify::Outcome;
use crate::currency::Amount;
use crate::error::{ConvertError, Result};
use crate::record::TransactionRecord;
use std::io::Write;

/// Header line of the accounting import format.
pub const OUTPUT_HEADER: &str = "Date,Reference,Amount";

/// One dated money movement for the accounting tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub date: String,
    pub reference: String,
    /// Positive for money in, negative for money out.
    pub amount: Amount,
}

/// Renders the lines for an enriched row and its outcome.
///
/// A payout always renders fee first, then payout.
pub fn render(
    record: &TransactionRecord,
    outcome: &Outcome,
    row: usize,
) -> Result<Vec<OutputLine>> {
    let description = TransactionRecord::text(&record.description);

    let lines = match outcome {
        Outcome::Skip(_) | Outcome::PassThrough => Vec::new(),
        Outcome::Sale { total } => {
            let payment_method = TransactionRecord::text(&record.payment_method).to_lowercase();
            let entry_mode = TransactionRecord::text(&record.entry_mode).to_lowercase();
            let reference = [
                TransactionRecord::text(&record.card_type),
                TransactionRecord::text(&record.process_as),
                TransactionRecord::text(&record.last_4_digits),
                payment_method.as_str(),
                entry_mode.as_str(),
                description,
            ]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

            vec![OutputLine {
                date: required(&record.date, "date", row)?,
                reference,
                amount: *total,
            }]
        }
        Outcome::Payout { total, fee, payout } => {
            let date = required(&record.date, "date", row)?;
            let payout_date = required(&record.payout_date, "payout date", row)?;
            let payout_id = TransactionRecord::text(&record.payout_id);

            let fee_line = OutputLine {
                reference: with_description(
                    format!("Transaction fee charged against total of {}", total),
                    description,
                ),
                date: date.clone(),
                amount: -*fee,
            };
            let payout_line = OutputLine {
                date: payout_date,
                reference: with_description(
                    format!(
                        "Payout {} raised {}: total {} less fee {}",
                        payout_id, date, total, fee
                    ),
                    description,
                ),
                amount: -*payout,
            };

            vec![fee_line, payout_line]
        }
    };

    Ok(lines)
}

fn required(field: &Option<String>, name: &'static str, row: usize) -> Result<String> {
    field
        .clone()
        .filter(|value| !value.is_empty())
        .ok_or(ConvertError::MissingField { row, field: name })
}

fn with_description(text: String, description: &str) -> String {
    if description.is_empty() {
        text
    } else {
        format!("{} - {}", text, description)
    }
}

/// Writes output lines as CSV.
///
/// References are always quoted, dates only when they need it, amounts never.
pub struct OutputWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutputWriter<W> {
    /// Wraps `writer` and emits the header line.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", OUTPUT_HEADER)?;
        Ok(OutputWriter { writer })
    }

    /// Writes one data line.
    pub fn write_line(&mut self, line: &OutputLine) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{}",
            quote_if_needed(&line.date),
            quote(&line.reference),
            line.amount
        )?;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn quote_if_needed(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        quote(field)
    } else {
        field.to_string()
    }
}
