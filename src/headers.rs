//! The closed set of export columns and header-row validation.

use crate::error::{ConvertError, Result};
use csv::StringRecord;

/// Every column a transaction export is allowed to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownColumn {
    Email,
    Date,
    TransactionId,
    TransactionType,
    Status,
    CardType,
    Last4Digits,
    ProcessAs,
    PaymentMethod,
    EntryMode,
    AuthCode,
    Description,
    Total,
    NetSale,
    TaxAmount,
    TipAmount,
    Fee,
    Payout,
    PayoutDate,
    PayoutId,
    Reference,
}

impl KnownColumn {
    /// The normalized header text for this column.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Date => "date",
            Self::TransactionId => "transaction id",
            Self::TransactionType => "transaction type",
            Self::Status => "status",
            Self::CardType => "card type",
            Self::Last4Digits => "last 4 digits",
            Self::ProcessAs => "process as",
            Self::PaymentMethod => "payment method",
            Self::EntryMode => "entry mode",
            Self::AuthCode => "auth code",
            Self::Description => "description",
            Self::Total => "total",
            Self::NetSale => "net sale",
            Self::TaxAmount => "tax amount",
            Self::TipAmount => "tip amount",
            Self::Fee => "fee",
            Self::Payout => "payout",
            Self::PayoutDate => "payout date",
            Self::PayoutId => "payout id",
            Self::Reference => "reference",
        }
    }

    /// Looks up an already-normalized header name.
    pub fn from_header(name: &str) -> Option<KnownColumn> {
        let column = match name {
            "email" => Self::Email,
            "date" => Self::Date,
            "transaction id" => Self::TransactionId,
            "transaction type" => Self::TransactionType,
            "status" => Self::Status,
            "card type" => Self::CardType,
            "last 4 digits" => Self::Last4Digits,
            "process as" => Self::ProcessAs,
            "payment method" => Self::PaymentMethod,
            "entry mode" => Self::EntryMode,
            "auth code" => Self::AuthCode,
            "description" => Self::Description,
            "total" => Self::Total,
            "net sale" => Self::NetSale,
            "tax amount" => Self::TaxAmount,
            "tip amount" => Self::TipAmount,
            "fee" => Self::Fee,
            "payout" => Self::Payout,
            "payout date" => Self::PayoutDate,
            "payout id" => Self::PayoutId,
            "reference" => Self::Reference,
            _ => return None,
        };
        Some(column)
    }
}

/// Lower-cases a raw header and collapses whitespace runs into single spaces.
///
/// A UTF-8 byte order mark at the start (common in spreadsheet exports) is dropped.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Validates a header row against [`KnownColumn`] and returns it normalized.
///
/// Fails on the first empty or unrecognized name, reporting its 1-based column.
pub fn validate_headers(headers: &StringRecord) -> Result<StringRecord> {
    let mut normalized = StringRecord::with_capacity(headers.as_slice().len(), headers.len());

    for (idx, raw) in headers.iter().enumerate() {
        let column = idx + 1;
        let name = normalize_header(raw);

        if name.is_empty() {
            return Err(ConvertError::EmptyHeader { column });
        }
        let known = KnownColumn::from_header(&name).ok_or_else(|| ConvertError::UnknownHeader {
            column,
            name: raw.to_string(),
        })?;

        normalized.push_field(known.name());
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COLUMNS: [KnownColumn; 21] = [
        KnownColumn::Email,
        KnownColumn::Date,
        KnownColumn::TransactionId,
        KnownColumn::TransactionType,
        KnownColumn::Status,
        KnownColumn::CardType,
        KnownColumn::Last4Digits,
        KnownColumn::ProcessAs,
        KnownColumn::PaymentMethod,
        KnownColumn::EntryMode,
        KnownColumn::AuthCode,
        KnownColumn::Description,
        KnownColumn::Total,
        KnownColumn::NetSale,
        KnownColumn::TaxAmount,
        KnownColumn::TipAmount,
        KnownColumn::Fee,
        KnownColumn::Payout,
        KnownColumn::PayoutDate,
        KnownColumn::PayoutId,
        KnownColumn::Reference,
    ];

    #[test]
    fn test_every_column_round_trips_through_its_name() {
        for column in ALL_COLUMNS {
            assert_eq!(KnownColumn::from_header(column.name()), Some(column));
        }
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Last 4 Digits"), "last 4 digits");
        assert_eq!(normalize_header("  Payout   ID "), "payout id");
        assert_eq!(normalize_header("\u{feff}Email"), "email");
        assert_eq!(normalize_header("Entry\tMode"), "entry mode");
    }

    #[test]
    fn test_validate_headers_normalizes() {
        let headers = StringRecord::from(vec!["Date", "Status", "Payout  Date"]);
        let normalized = validate_headers(&headers).unwrap();
        assert_eq!(
            normalized,
            StringRecord::from(vec!["date", "status", "payout date"])
        );
    }

    #[test]
    fn test_validate_headers_rejects_unknown() {
        let headers = StringRecord::from(vec!["Date", "Colour"]);
        match validate_headers(&headers) {
            Err(ConvertError::UnknownHeader { column, name }) => {
                assert_eq!(column, 2);
                assert_eq!(name, "Colour");
            }
            other => panic!("Expected UnknownHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_headers_rejects_empty() {
        let headers = StringRecord::from(vec!["Date", "  ", "Total"]);
        assert!(matches!(
            validate_headers(&headers),
            Err(ConvertError::EmptyHeader { column: 2 })
        ));
    }
}
