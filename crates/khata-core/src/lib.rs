//! Bengali text primitives for the khata ledger: Avro phonetic
//! transliteration, Bengali/Western digit conversion, grouped currency
//! display and input masking.

pub mod avro;
pub mod numeral;
pub mod settings;
pub mod unicode;

pub use avro::to_bengali;
pub use numeral::{
    format_bengali_currency, format_input_as_bengali_number, to_bengali_number,
    to_english_number, CurrencyInput,
};
