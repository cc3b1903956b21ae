//! C ABI for hosts that embed the engine (the browser extension's native
//! helper, mobile keyboards).
//!
//! Every returned `char *` is owned by the caller and must be released with
//! [`khata_string_free`]. Null or non-UTF-8 arguments make string functions
//! return null and status functions return a negative code.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use khata_core::avro::{to_bengali, AvroConfigError, PatternTable};
use khata_core::numeral::{
    format_bengali_currency, format_input_as_bengali_number, to_bengali_number,
    to_english_number, CurrencyInput,
};
use khata_core::settings::{self, SettingsError};


/// Status codes for the `*_init_custom` functions.
pub const KHATA_OK: i32 = 0;
pub const KHATA_ERR_ARGUMENT: i32 = -1;
pub const KHATA_ERR_INVALID: i32 = -2;
pub const KHATA_ERR_ALREADY_INITIALIZED: i32 = -3;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Validate string arguments and bind them as `&str`, returning `$on_err`
/// from the calling function if any pointer is null or not UTF-8.
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text = input,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

/// Hand a Rust string to C. Null if it contains an interior NUL.
fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

// --- Text ---

#[no_mangle]
pub extern "C" fn khata_to_bengali(input: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = input,
    );
    into_c_string(to_bengali(text))
}

#[no_mangle]
pub extern "C" fn khata_to_bengali_number(value: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = value,
    );
    into_c_string(to_bengali_number(text))
}

#[no_mangle]
pub extern "C" fn khata_to_english_number(value: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = value,
    );
    into_c_string(to_english_number(text))
}

// --- Amounts ---

/// Format numeric text as Bengali currency. A null `value` is a missing
/// amount and yields `"০"`.
#[no_mangle]
pub extern "C" fn khata_format_bengali_currency(value: *const c_char) -> *mut c_char {
    if value.is_null() {
        return into_c_string(format_bengali_currency(CurrencyInput::Missing));
    }
    ffi_guard!(ptr::null_mut();
        str: text = value,
    );
    into_c_string(format_bengali_currency(text))
}

#[no_mangle]
pub extern "C" fn khata_format_bengali_currency_f64(value: f64) -> *mut c_char {
    into_c_string(format_bengali_currency(value))
}

#[no_mangle]
pub extern "C" fn khata_format_input(raw: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text = raw,
    );
    into_c_string(format_input_as_bengali_number(text))
}

/// Release a string returned by any `khata_*` function. Null is a no-op.
#[no_mangle]
pub extern "C" fn khata_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

// --- Engine ---

#[no_mangle]
pub extern "C" fn khata_engine_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr().cast()
}

/// Install a custom Avro table. Must run before the first transliteration.
#[no_mangle]
pub extern "C" fn khata_avro_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(KHATA_ERR_ARGUMENT;
        str: content = toml,
    );
    match PatternTable::init_custom(content.to_string()) {
        Ok(()) => KHATA_OK,
        Err(AvroConfigError::AlreadyInitialized) => KHATA_ERR_ALREADY_INITIALIZED,
        Err(e) => {
            tracing::warn!(error = %e, "custom avro table rejected");
            KHATA_ERR_INVALID
        }
    }
}

/// Install custom settings. Must run before the first formatting call.
#[no_mangle]
pub extern "C" fn khata_settings_init_custom(toml: *const c_char) -> i32 {
    ffi_guard!(KHATA_ERR_ARGUMENT;
        str: content = toml,
    );
    match settings::init_custom(content.to_string()) {
        Ok(()) => KHATA_OK,
        Err(SettingsError::AlreadyInitialized) => KHATA_ERR_ALREADY_INITIALIZED,
        Err(e) => {
            tracing::warn!(error = %e, "custom settings rejected");
            KHATA_ERR_INVALID
        }
    }
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn khata_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
