use khata_core::settings::settings;
use tracing::debug;

/// Select value that switches the picker into custom-address entry.
pub const ADD_NEW: &str = "add_new";

/// The address picker: preset villages, user-added ones, and the current
/// selection.
#[derive(Debug, Clone)]
pub struct AddressBook {
    addresses: Vec<String>,
    selected: String,
    adding_new: bool,
    custom: String,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Start from the preset list in `settings().ledger.addresses`.
    pub fn new() -> Self {
        Self::with_presets(settings().ledger.addresses.clone())
    }

    pub fn with_presets(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            selected: String::new(),
            adding_new: false,
            custom: String::new(),
        }
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Current selection; empty when nothing is selected.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_adding_new(&self) -> bool {
        self.adding_new
    }

    pub fn custom_input(&self) -> &str {
        &self.custom
    }

    /// Handle a change of the select element. `ADD_NEW` opens custom entry
    /// with an empty input and keeps the previous selection.
    pub fn select(&mut self, value: &str) {
        if value == ADD_NEW {
            self.adding_new = true;
            self.custom.clear();
        } else {
            self.selected = value.to_string();
        }
    }

    pub fn set_custom_input(&mut self, value: &str) {
        self.custom = value.to_string();
    }

    /// Finish custom entry (blur or Enter).
    ///
    /// A non-blank address is trimmed, appended unless already listed, and
    /// selected. Blank input changes nothing. Custom entry ends either way.
    /// Returns the newly selected address, if any.
    pub fn commit_custom(&mut self) -> Option<&str> {
        self.adding_new = false;
        let address = self.custom.trim();
        if address.is_empty() {
            return None;
        }
        let address = address.to_string();
        if !self.addresses.contains(&address) {
            debug!(address = %address, "custom address added");
            self.addresses.push(address.clone());
        }
        self.selected = address;
        Some(self.selected.as_str())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.adding_new = false;
        self.custom.clear();
    }
}
