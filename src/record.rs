//! One row of the processor's transaction export.

use serde::{Deserialize, Deserializer};

/// Raw transaction row as read from CSV, keyed by normalized header name.
///
/// A field is `None` only when its column is missing from the export, as in
/// legacy exports. An empty cell in a present column reads as `Some("")`.
/// Known columns that the converter never looks at (email, auth code, ...)
/// are not captured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "cell")]
    pub date: Option<String>,

    #[serde(deserialize_with = "cell")]
    pub status: Option<String>,

    #[serde(rename = "card type", deserialize_with = "cell")]
    pub card_type: Option<String>,

    #[serde(rename = "process as", deserialize_with = "cell")]
    pub process_as: Option<String>,

    /// Masked card number; only the trailing digits survive enrichment.
    #[serde(rename = "last 4 digits", deserialize_with = "cell")]
    pub last_4_digits: Option<String>,

    #[serde(rename = "payment method", deserialize_with = "cell")]
    pub payment_method: Option<String>,

    #[serde(rename = "entry mode", deserialize_with = "cell")]
    pub entry_mode: Option<String>,

    #[serde(deserialize_with = "cell")]
    pub description: Option<String>,

    /// Gross sale amount.
    #[serde(deserialize_with = "cell")]
    pub total: Option<String>,

    /// Processor commission deducted from `total`.
    #[serde(deserialize_with = "cell")]
    pub fee: Option<String>,

    /// Net amount transferred to the merchant.
    #[serde(deserialize_with = "cell")]
    pub payout: Option<String>,

    #[serde(rename = "payout date", deserialize_with = "cell")]
    pub payout_date: Option<String>,

    #[serde(rename = "payout id", deserialize_with = "cell")]
    pub payout_id: Option<String>,

    #[serde(rename = "tax amount", deserialize_with = "cell")]
    pub tax_amount: Option<String>,

    #[serde(rename = "tip amount", deserialize_with = "cell")]
    pub tip_amount: Option<String>,
}

/// Reads a present cell, keeping an empty one as `Some("")`.
fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl TransactionRecord {
    /// Returns the field's value, or `""` when absent.
    pub fn text(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("")
    }
}
