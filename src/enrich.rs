//! Row enrichment: legacy-format backfill and currency normalization.
//!
//! Older exports lack the `last 4 digits` and `payout id` columns. Those rows
//! still convert, with a placeholder in place of the missing detail.

use crate::currency::{self, CurrencyError};
use crate::error::{ConvertError, Result};
use crate::record::TransactionRecord;
use log::warn;

/// Stand-in for `last 4 digits` on legacy-format rows.
pub const LAST_4_DIGITS_PLACEHOLDER: &str = "(card digits n/a: legacy export)";

/// Stand-in for `payout id` on legacy-format rows.
pub const PAYOUT_ID_PLACEHOLDER: &str = "(payout id n/a: legacy export)";

/// Fills legacy-format gaps and normalizes every currency field of `record` in place.
///
/// Placeholders are only used when the column itself is missing; an empty
/// cell stays empty. Currency fields that are absent stay absent, while an
/// empty currency cell normalizes to `0.00`. A non-zero tax or tip amount
/// is reported but never folded into total, fee or payout.
pub fn enrich(record: &mut TransactionRecord, row: usize) -> Result<()> {
    match record.last_4_digits.as_mut() {
        Some(digits) => digits.retain(|c| c != '*' && !c.is_whitespace()),
        None => {
            warn!(
                "Row {}: Legacy format detected, 'last 4 digits' missing; using placeholder",
                row
            );
            record.last_4_digits = Some(LAST_4_DIGITS_PLACEHOLDER.to_string());
        }
    }

    if record.payout_id.is_none() {
        warn!(
            "Row {}: Legacy format detected, 'payout id' missing; using placeholder",
            row
        );
        record.payout_id = Some(PAYOUT_ID_PLACEHOLDER.to_string());
    }

    normalize_field(&mut record.total, "total", row)?;
    normalize_field(&mut record.fee, "fee", row)?;
    normalize_field(&mut record.payout, "payout", row)?;
    normalize_field(&mut record.tax_amount, "tax amount", row)?;
    normalize_field(&mut record.tip_amount, "tip amount", row)?;

    for (field, value) in [("tax amount", &record.tax_amount), ("tip amount", &record.tip_amount)] {
        if let Some(value) = value {
            if !currency::is_zero_text(value) {
                warn!(
                    "Row {}: Non-zero {} {} is not supported and was left out of the output",
                    row, field, value
                );
            }
        }
    }

    Ok(())
}

fn normalize_field(field: &mut Option<String>, name: &'static str, row: usize) -> Result<()> {
    if let Some(raw) = field.as_mut() {
        *raw = currency::normalize(raw).map_err(|source: CurrencyError| {
            ConvertError::InvalidAmount {
                row,
                field: name,
                source,
            }
        })?;
    }
    Ok(())
}
