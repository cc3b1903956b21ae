//! Saved ledger records as served by `GET /api/ledger`, plus the totals
//! and ordering the ledger table needs.

use khata_core::numeral::{format_bengali_currency, CurrencyInput};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("ledger JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The backend stores amounts as numbers but older rows carry strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    /// Numeric value, if there is a finite one. Text must be a plain
    /// decimal literal apart from surrounding whitespace. Hex literals
    /// such as `0x10` and `Infinity` are not amounts and count as 0 in
    /// totals.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            AmountValue::Number(n) => *n,
            AmountValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    fn currency_input(&self) -> CurrencyInput<'_> {
        match self {
            AmountValue::Number(n) => CurrencyInput::Number(*n),
            AmountValue::Text(s) => CurrencyInput::Text(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_alt_name: Option<String>,
    pub user_address: String,
    #[serde(default)]
    pub user_amount: Option<AmountValue>,
}

pub fn parse_records(json: &str) -> Result<Vec<LedgerRecord>, RecordError> {
    let records: Vec<LedgerRecord> = serde_json::from_str(json)?;
    debug!(count = records.len(), "ledger records parsed");
    Ok(records)
}

/// Sum of all amounts. Missing and non-numeric amounts count as 0.
pub fn total_amount(records: &[LedgerRecord]) -> f64 {
    records
        .iter()
        .filter_map(|r| r.user_amount.as_ref().and_then(AmountValue::as_f64))
        .sum()
}

/// Sort by `user_id`, highest first. Equal ids keep their order.
pub fn newest_first(mut records: Vec<LedgerRecord>) -> Vec<LedgerRecord> {
    records.sort_by(|a, b| b.user_id.cmp(&a.user_id));
    records
}

/// A record with its amount rendered for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub user_id: i64,
    pub user_name: String,
    pub user_alt_name: String,
    pub user_address: String,
    pub user_amount: String,
}

pub fn display_rows(records: &[LedgerRecord]) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|r| DisplayRow {
            user_id: r.user_id,
            user_name: r.user_name.clone(),
            user_alt_name: r.user_alt_name.clone().unwrap_or_default(),
            user_address: r.user_address.clone(),
            user_amount: format_bengali_currency(
                r.user_amount
                    .as_ref()
                    .map_or(CurrencyInput::Missing, AmountValue::currency_input),
            ),
        })
        .collect()
}
