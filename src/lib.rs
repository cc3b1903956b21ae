// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub use khata_core::{avro, numeral, settings, unicode};
pub use khata_form as form;

pub use khata_core::{
    format_bengali_currency, format_input_as_bengali_number, to_bengali, to_bengali_number,
    to_english_number, CurrencyInput,
};

pub mod ffi;
mod trace_init;

pub use ffi::*;
pub use trace_init::init_tracing;
