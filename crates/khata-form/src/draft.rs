use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::address::AddressBook;
use crate::amount::AmountField;
use crate::name::NameField;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("amount {0:?} is not a decimal number")]
    InvalidAmount(String),
}

/// Body of `POST /api/ledger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    pub user_name: String,
    pub user_alt_name: String,
    pub user_address: String,
    /// Western digits, no separators.
    pub user_amount: String,
}

impl NewLedgerEntry {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The whole entry form.
#[derive(Debug, Clone, Default)]
pub struct LedgerDraft {
    pub name: NameField,
    pub alt_name: NameField,
    pub address: AddressBook,
    pub amount: AmountField,
}

impl LedgerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(address: AddressBook, amount: AmountField) -> Self {
        Self {
            name: NameField::new(),
            alt_name: NameField::new(),
            address,
            amount,
        }
    }

    /// Validate and build the payload without touching the draft.
    pub fn payload(&self) -> Result<NewLedgerEntry, DraftError> {
        if self.name.is_blank() {
            return Err(DraftError::MissingField("user_name"));
        }
        if self.address.selected().is_empty() {
            return Err(DraftError::MissingField("user_address"));
        }
        if self.amount.is_empty() {
            return Err(DraftError::MissingField("user_amount"));
        }
        let amount = self.amount.submission_amount();
        if !is_decimal(&amount) {
            return Err(DraftError::InvalidAmount(amount));
        }

        Ok(NewLedgerEntry {
            user_name: self.name.value().to_string(),
            user_alt_name: self.alt_name.value().to_string(),
            user_address: self.address.selected().to_string(),
            user_amount: amount,
        })
    }

    /// Build the payload and reset the fields. On error nothing changes.
    pub fn submit(&mut self) -> Result<NewLedgerEntry, DraftError> {
        let entry = self.payload()?;
        debug!(address = %entry.user_address, amount = %entry.user_amount, "draft submitted");
        self.reset();
        Ok(entry)
    }

    /// Clear the fields. User-added addresses stay in the list.
    pub fn reset(&mut self) {
        self.name.clear();
        self.alt_name.clear();
        self.address.clear_selection();
        self.amount.clear();
    }
}

/// At least one digit, at most one `.`, nothing else.
fn is_decimal(s: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}
