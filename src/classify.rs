//! Status-driven classification of an enriched row into accounting events.

use crate::currency::Amount;
use crate::error::{ConvertError, Result};
use crate::record::TransactionRecord;
use std::str::FromStr;

/// Recognized values of the `status` column, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Failed,
    Cancelled,
    Successful,
    Paid,
    Unrecognized(String),
}

impl Status {
    /// Parses a raw status value, keeping unrecognized text for error reporting.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "failed" => Status::Failed,
            "cancelled" => Status::Cancelled,
            "successful" => Status::Successful,
            "paid" => Status::Paid,
            _ => Status::Unrecognized(raw.to_string()),
        }
    }
}

/// What a row means for the books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Never settled; no accounting effect.
    Skip(Status),

    /// A card sale: one income line for `total`.
    Sale { total: Amount },

    /// A settled sale: one fee line and one payout line.
    ///
    /// Only constructed once `fee + payout == total` has been verified.
    Payout {
        total: Amount,
        fee: Amount,
        payout: Amount,
    },

    /// No status, or an empty one; nothing emitted.
    PassThrough,
}

impl Outcome {
    /// Number of output lines this outcome renders to.
    pub fn line_count(&self) -> usize {
        match self {
            Outcome::Skip(_) | Outcome::PassThrough => 0,
            Outcome::Sale { .. } => 1,
            Outcome::Payout { .. } => 2,
        }
    }
}

/// Classifies an enriched row by its status.
///
/// An unrecognized status or a paid row failing reconciliation is fatal.
pub fn classify(record: &TransactionRecord, row: usize) -> Result<Outcome> {
    let status = match record.status.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Status::parse(raw),
        _ => return Ok(Outcome::PassThrough),
    };

    match status {
        Status::Failed | Status::Cancelled => Ok(Outcome::Skip(status)),
        Status::Successful => Ok(Outcome::Sale {
            total: amount(&record.total, "total", row)?,
        }),
        Status::Paid => {
            let total = amount(&record.total, "total", row)?;
            let fee = amount(&record.fee, "fee", row)?;
            let payout = amount(&record.payout, "payout", row)?;

            if fee + payout != total {
                return Err(ConvertError::ReconciliationMismatch {
                    row,
                    total: total.to_string(),
                    fee: fee.to_string(),
                    payout: payout.to_string(),
                });
            }

            Ok(Outcome::Payout { total, fee, payout })
        }
        Status::Unrecognized(status) => Err(ConvertError::UnknownStatus { row, status }),
    }
}

fn amount(field: &Option<String>, name: &'static str, row: usize) -> Result<Amount> {
    let value = field
        .as_deref()
        .ok_or(ConvertError::MissingField { row, field: name })?;
    Amount::from_str(value).map_err(|source| ConvertError::InvalidAmount {
        row,
        field: name,
        source,
    })
}
