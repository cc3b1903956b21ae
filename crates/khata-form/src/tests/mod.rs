
use khata_core::settings::Grouping;

use crate::{AddressBook, AmountField, LedgerDraft, NameField};

pub(super) fn make_address_book() -> AddressBook {
    AddressBook::with_presets(vec![
        "বটতলা".to_string(),
        "বরইতলা".to_string(),
        "আদর্শগ্রাম".to_string(),
    ])
}

pub(super) fn make_draft() -> LedgerDraft {
    LedgerDraft::with_parts(make_address_book(), AmountField::with_grouping(Grouping::Lakh))
}

/// Feed `text` one character at a time, the way an input element reports
/// its full value after each keystroke.
pub(super) fn type_amount(field: &mut AmountField, text: &str) {
    for c in text.chars() {
        let next = format!("{}{c}", field.value());
        field.handle_change(&next);
    }
}

pub(super) fn type_name(field: &mut NameField, text: &str) {
    for c in text.chars() {
        let next = format!("{}{c}", field.value());
        field.handle_change(&next);
    }
}
