use khata_core::avro::to_bengali;

/// A name input that transliterates its whole content on every change.
///
/// Already-Bengali text passes through the transliterator unchanged, so
/// feeding back the previous value plus the newly typed letters converts
/// only the new romanized tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    value: String,
}

impl NameField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_change(&mut self, value: &str) {
        self.value = to_bengali(value);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
