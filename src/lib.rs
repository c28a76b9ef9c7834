//! # Payout Converter
//!
//! Splits card processor transaction exports, where one row combines a gross
//! sale, the processing fee and the net payout, into single dated
//! `Date,Reference,Amount` lines for an accounting tool.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Amounts are two-decimal `rust_decimal` values
//! - **Reconciliation**: A paid row must satisfy `fee + payout == total`
//! - **Fail fast**: Any fatal condition stops the run before output is written
//! - **Deterministic output**: Lines follow input order; fee before payout
//!
//! ## Example
//!
//! ```no_run
//! use payout_converter::{Converter, Verbosity};
//! use std::io::Cursor;
//!
//! let csv = "Date,Status,Total,Fee,Payout,Payout Date,Payout ID,Last 4 Digits\n\
//!            2021-03-01,Paid,10.00,0.30,9.70,2021-03-03,PO-1,1234\n";
//! let conversion = Converter::new(Verbosity::Quiet).convert(Cursor::new(csv)).unwrap();
//! conversion.write_output(std::io::stdout()).unwrap();
//! ```

pub mod classify;
pub mod config;
pub mod converter;
pub mod currency;
pub mod enrich;
pub mod error;
pub mod headers;
pub mod output;
pub mod record;

pub use classify::{Outcome, Status};
pub use config::{Config, Verbosity};
pub use converter::{Conversion, ConversionSummary, Converter};
pub use currency::{Amount, CurrencyError};
pub use error::{ConvertError, Result};
pub use headers::KnownColumn;
pub use output::OutputLine;
pub use record::TransactionRecord;
