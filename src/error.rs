//! Error types for the payout converter.

use crate::currency::CurrencyError;
use thiserror::Error;

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during conversion.
///
/// Every variant is fatal: the run stops at the first one and no output is written.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error(
        "Missing input file argument. Usage: payout-converter [--quiet|--verbose] <input.csv>"
    )]
    MissingArgument,

    /// Unrecognized command-line argument
    #[error("Unrecognized argument '{0}'. Usage: payout-converter [--quiet|--verbose] <input.csv>")]
    UnknownArgument(String),

    /// Header cell with no name
    #[error("Empty header name in column {column}")]
    EmptyHeader { column: usize },

    /// Header cell that is not one of the known export columns
    #[error("Unknown header '{name}' in column {column}")]
    UnknownHeader { column: usize, name: String },

    /// Currency field that cannot be normalized
    #[error("Invalid amount in '{field}' at row {row}: {source}")]
    InvalidAmount {
        row: usize,
        field: &'static str,
        #[source]
        source: CurrencyError,
    },

    /// Field required by the row's outcome is absent
    #[error("Missing '{field}' at row {row}")]
    MissingField { row: usize, field: &'static str },

    /// Status value outside the recognized set
    #[error("Unrecognized status '{status}' at row {row}")]
    UnknownStatus { row: usize, status: String },

    /// Paid row whose fee and payout do not add up to its total
    #[error("Reconciliation failed at row {row}: fee {fee} + payout {payout} != total {total}")]
    ReconciliationMismatch {
        row: usize,
        total: String,
        fee: String,
        payout: String,
    },
}
