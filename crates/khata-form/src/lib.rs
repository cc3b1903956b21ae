//! Ledger entry form state for the khata page.
//!
//! Each field owns its editing rules: the amount field masks digits as the
//! user types (and holds off while an IME composition is open), the name
//! fields transliterate romanized input, and the address book manages the
//! preset list plus user-added villages. `LedgerDraft` ties them together
//! and produces the JSON payload the ledger backend expects.

mod address;
mod amount;
mod draft;
mod ledger;
mod name;

#[cfg(test)]
mod tests;

pub use address::{AddressBook, ADD_NEW};
pub use amount::{is_amount_input, AmountField};
pub use draft::{DraftError, LedgerDraft, NewLedgerEntry};
pub use ledger::{
    display_rows, newest_first, parse_records, total_amount, AmountValue, DisplayRow,
    LedgerRecord, RecordError,
};
pub use name::NameField;
