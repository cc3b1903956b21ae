use khata_core::numeral::{format_input_with, to_plain_number};
use khata_core::settings::{settings, Grouping};
use tracing::{debug, trace};

/// True when every character is a Western or Bengali digit, `.` or `,`.
/// The empty string is accepted.
pub fn is_amount_input(value: &str) -> bool {
    value
        .chars()
        .all(|c| matches!(c, '0'..='9' | '০'..='৯' | '.' | ','))
}

/// Amount input with live Bengali masking.
///
/// Outside a composition each accepted change is stored masked. During a
/// composition the raw text is stored so the IME keeps control of the
/// preedit; the mask is applied once the composition ends.
#[derive(Debug, Clone)]
pub struct AmountField {
    value: String,
    composing: bool,
    grouping: Grouping,
}

impl Default for AmountField {
    fn default() -> Self {
        Self::new()
    }
}

impl AmountField {
    pub fn new() -> Self {
        Self::with_grouping(settings().numeral.grouping)
    }

    pub fn with_grouping(grouping: Grouping) -> Self {
        Self {
            value: String::new(),
            composing: false,
            grouping,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Apply an edit. Returns false when the edit was rejected and the
    /// field kept its previous value.
    pub fn handle_change(&mut self, value: &str) -> bool {
        if self.composing {
            self.value = value.to_string();
            return true;
        }
        self.store_masked(value)
    }

    pub fn composition_start(&mut self) {
        debug!("amount composition start");
        self.composing = true;
    }

    /// Close the composition with the field's final text. A rejected value
    /// leaves whatever was stored during the composition.
    pub fn composition_end(&mut self, value: &str) -> bool {
        debug!(len = value.len(), "amount composition end");
        self.composing = false;
        self.store_masked(value)
    }

    /// Plain decimal string for the backend: Western digits, no separators.
    pub fn submission_amount(&self) -> String {
        to_plain_number(&self.value)
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.composing = false;
    }

    fn store_masked(&mut self, value: &str) -> bool {
        if !is_amount_input(value) {
            trace!(value, "amount input rejected");
            return false;
        }
        self.value = format_input_with(value, self.grouping);
        true
    }
}
