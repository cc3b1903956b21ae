//! Bengali numerals: digit conversion, grouped display and input masking.
//!
//! Grouping follows `settings().numeral.grouping` for both currency display
//! and input masking, so a masked amount and its displayed total always group
//! the same way. The default is lakh grouping (12,34,567).

use std::fmt::Display;

use tracing::debug_span;

use crate::settings::{settings, Grouping, NumeralSettings};
use crate::unicode::{bengali_digit_for, western_digit_for};

/// What `format_bengali_currency` renders for missing or unparseable values.
pub const BENGALI_ZERO: &str = "০";

/// Replace every Western digit with its Bengali glyph.
pub fn to_bengali_number(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| bengali_digit_for(c).unwrap_or(c))
        .collect()
}

/// Replace every Bengali digit with its Western digit.
pub fn to_english_number(value: &str) -> String {
    value
        .chars()
        .map(|c| western_digit_for(c).unwrap_or(c))
        .collect()
}

/// Turn a masked amount (`১২,৩৪৫.৫`) into a plain decimal string (`12345.5`).
pub fn to_plain_number(masked: &str) -> String {
    to_english_number(masked).replace(',', "")
}

/// A value handed to [`format_bengali_currency`]: a number, some text, or nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrencyInput<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CurrencyInput<'_> {
                fn from(value: $t) -> Self {
                    CurrencyInput::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, f64, i32, i64, u32, u64, usize);

impl<'a> From<&'a str> for CurrencyInput<'a> {
    fn from(value: &'a str) -> Self {
        CurrencyInput::Text(value)
    }
}

impl<'a> From<&'a String> for CurrencyInput<'a> {
    fn from(value: &'a String) -> Self {
        CurrencyInput::Text(value.as_str())
    }
}

impl<'a, T: Into<CurrencyInput<'a>>> From<Option<T>> for CurrencyInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(CurrencyInput::Missing, Into::into)
    }
}

/// Render an amount for display: grouped, rounded, in Bengali digits.
///
/// Missing, empty and unparseable values render as `০`. Text may use
/// Bengali digits and is read like a leading float literal (`"12abc"` is 12).
pub fn format_bengali_currency<'a>(value: impl Into<CurrencyInput<'a>>) -> String {
    format_currency_with(value.into(), &settings().numeral)
}

pub fn format_currency_with(value: CurrencyInput<'_>, numeral: &NumeralSettings) -> String {
    let _span = debug_span!("format_bengali_currency", ?value).entered();
    let number = match value {
        CurrencyInput::Missing | CurrencyInput::Text("") => return BENGALI_ZERO.to_string(),
        CurrencyInput::Number(n) => n,
        CurrencyInput::Text(s) => match parse_float_prefix(&to_english_number(s)) {
            Some(n) => n,
            None => return BENGALI_ZERO.to_string(),
        },
    };
    if number.is_nan() {
        return BENGALI_ZERO.to_string();
    }
    to_bengali_number(format_number(number, numeral))
}

/// Format a finite or infinite number with Western digits: rounded half away
/// from zero to `max_fraction_digits`, trailing fraction zeros dropped,
/// integer part grouped. NaN is the caller's concern.
pub fn format_number(value: f64, numeral: &NumeralSettings) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}∞");
    }

    // Display gives the shortest round-trip digits and never an exponent.
    let plain = value.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let (int_digits, frac_digits) = round_fraction(int_part, frac_part, numeral.max_fraction_digits);
    let frac_digits = frac_digits.trim_end_matches('0');

    let mut out = String::with_capacity(plain.len() + 8);
    out.push_str(sign);
    out.push_str(&group_digits(&int_digits, numeral.grouping));
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// Round a decimal digit string to `max` fraction digits, half up.
fn round_fraction(int_part: &str, frac_part: &str, max: usize) -> (String, String) {
    if frac_part.len() <= max {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[max] >= b'5';
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part[..max].bytes()).collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - max;
    let int_digits = digits[..split].iter().map(|&b| char::from(b)).collect();
    let frac_digits = digits[split..].iter().map(|&b| char::from(b)).collect();
    (int_digits, frac_digits)
}

/// Insert `,` separators into a run of digits.
///
/// `Lakh` keeps the last three digits together and groups the rest in pairs;
/// `Thousands` groups in threes.
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = chars.split_at(chars.len() - 3);
    let step = match grouping {
        Grouping::Lakh => 2,
        Grouping::Thousands => 3,
    };

    let mut out = String::with_capacity(digits.len() + chars.len() / 2);
    let lead = head.len() % step;
    for (i, c) in head.iter().enumerate() {
        if i > 0 && (i + step - lead) % step == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.push(',');
    out.extend(tail);
    out
}

/// Leading float literal of `s`, read the way a browser's `parseFloat` does:
/// leading whitespace, optional sign, digits with an optional fraction and
/// exponent, or `Infinity`. Trailing garbage is ignored.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let (negative, body) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let signed = |v: f64| if negative { -v } else { v };

    if body.starts_with("Infinity") {
        return Some(signed(f64::INFINITY));
    }

    let bytes = body.as_bytes();
    let count_digits = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    body[..end].parse::<f64>().ok().map(signed)
}

/// Mask a raw amount as the user types it.
///
/// Commas are dropped and Bengali digits accepted. Input that is not
/// `digits[.digits]` comes back unchanged so an in-progress edit is never
/// rewritten under the cursor. Otherwise the integer part loses leading zeros
/// and gains grouping, the fraction (with its `.`) is kept verbatim, and the
/// result is in Bengali digits. Empty input stays empty.
pub fn format_input_as_bengali_number(raw: &str) -> String {
    format_input_with(raw, settings().numeral.grouping)
}

pub fn format_input_with(raw: &str, grouping: Grouping) -> String {
    let _span = debug_span!("format_input_as_bengali_number", len = raw.len()).entered();
    let cleaned: String = raw.chars().filter(|&c| c != ',').collect();
    let english = to_english_number(&cleaned);

    if english.is_empty() {
        return String::new();
    }
    if !is_decimal_literal(&english) {
        return raw.to_string();
    }

    let (int_part, frac_part) = match english.find('.') {
        Some(dot) => english.split_at(dot),
        None => (english.as_str(), ""),
    };

    let mut out = String::with_capacity(english.len() + english.len() / 2);
    if !int_part.is_empty() {
        let trimmed = int_part.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        out.push_str(&group_digits(digits, grouping));
    }
    out.push_str(frac_part);

    to_bengali_number(out)
}

/// `[0-9]*\.?[0-9]*`
fn is_decimal_literal(s: &str) -> bool {
    let mut seen_dot = false;
    s.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn thousands() -> NumeralSettings {
        NumeralSettings {
            grouping: Grouping::Thousands,
            max_fraction_digits: 3,
        }
    }

    #[test]
    fn test_to_bengali_number() {
        assert_eq!(to_bengali_number(0), "০");
        assert_eq!(to_bengali_number(1234567890u64), "১২৩৪৫৬৭৮৯০");
        assert_eq!(to_bengali_number("12.50"), "১২.৫০");
        assert_eq!(to_bengali_number(1.5f64), "১.৫");
        assert_eq!(to_bengali_number("abc9!"), "abc৯!");
    }

    #[test]
    fn test_to_english_number() {
        assert_eq!(to_english_number("১২৩৪৫৬৭৮৯০"), "1234567890");
        assert_eq!(to_english_number("১২,৩৪৫.৫০"), "12,345.50");
        assert_eq!(to_english_number("টাকা ৫"), "টাকা 5");
        assert_eq!(to_english_number("42"), "42");
        assert_eq!(to_english_number(""), "");
    }

    #[test]
    fn test_to_plain_number() {
        assert_eq!(to_plain_number("১২,৩৪,৫৬৭.৫"), "1234567.5");
        assert_eq!(to_plain_number(""), "");
    }

    #[test]
    fn test_currency_missing_values() {
        assert_eq!(format_bengali_currency(CurrencyInput::Missing), "০");
        assert_eq!(format_bengali_currency(None::<f64>), "০");
        assert_eq!(format_bengali_currency(None::<&str>), "০");
        assert_eq!(format_bengali_currency(""), "০");
    }

    #[test]
    fn test_currency_unparseable() {
        assert_eq!(format_bengali_currency("abc"), "০");
        assert_eq!(format_bengali_currency("."), "০");
        assert_eq!(format_bengali_currency("-"), "০");
        assert_eq!(format_bengali_currency(f64::NAN), "০");
    }

    #[test]
    fn test_currency_lakh_grouping() {
        assert_eq!(format_bengali_currency(1234567i32), "১২,৩৪,৫৬৭");
        assert_eq!(format_bengali_currency(100000u32), "১,০০,০০০");
        assert_eq!(format_bengali_currency(123456789i64), "১২,৩৪,৫৬,৭৮৯");
        assert_eq!(format_bengali_currency(999i32), "৯৯৯");
        assert_eq!(format_bengali_currency(1000i32), "১,০০০");
    }

    #[test]
    fn test_currency_fraction() {
        assert_eq!(format_bengali_currency(1234.5f64), "১,২৩৪.৫");
        assert_eq!(format_bengali_currency(0.1f64 + 0.2), "০.৩");
        assert_eq!(format_bengali_currency(1.0005f64), "১.০০১");
        assert_eq!(format_bengali_currency(999.9996f64), "১,০০০");
        assert_eq!(format_bengali_currency(12.0f64), "১২");
    }

    #[test]
    fn test_currency_negative_and_infinite() {
        assert_eq!(format_bengali_currency(-1234.5f64), "-১,২৩৪.৫");
        assert_eq!(format_bengali_currency(f64::INFINITY), "∞");
        assert_eq!(format_bengali_currency("-Infinity"), "-∞");
    }

    #[test]
    fn test_currency_text_input() {
        assert_eq!(format_bengali_currency("১২৩৪৫৬"), "১,২৩,৪৫৬");
        assert_eq!(format_bengali_currency("12abc"), "১২");
        assert_eq!(format_bengali_currency("  42"), "৪২");
        assert_eq!(format_bengali_currency("1e3"), "১,০০০");
        assert_eq!(format_bengali_currency("1e"), "১");
        assert_eq!(format_bengali_currency(".5"), "০.৫");
        let owned = String::from("2500.75");
        assert_eq!(format_bengali_currency(&owned), "২,৫০০.৭৫");
        assert_eq!(format_bengali_currency(Some("700")), "৭০০");
    }

    #[test]
    fn test_currency_thousands_grouping() {
        let numeral = thousands();
        assert_eq!(
            format_currency_with(CurrencyInput::Number(1234567.0), &numeral),
            "১,২৩৪,৫৬৭"
        );
    }

    #[test]
    fn test_currency_zero_fraction_digits() {
        let numeral = NumeralSettings {
            grouping: Grouping::Lakh,
            max_fraction_digits: 0,
        };
        assert_eq!(format_currency_with(CurrencyInput::Number(2.5), &numeral), "৩");
        assert_eq!(format_currency_with(CurrencyInput::Number(2.4), &numeral), "২");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", Grouping::Lakh), "1");
        assert_eq!(group_digits("123", Grouping::Lakh), "123");
        assert_eq!(group_digits("1234", Grouping::Lakh), "1,234");
        assert_eq!(group_digits("12345", Grouping::Lakh), "12,345");
        assert_eq!(group_digits("123456", Grouping::Lakh), "1,23,456");
        assert_eq!(group_digits("1234567", Grouping::Lakh), "12,34,567");
        assert_eq!(group_digits("12345678", Grouping::Lakh), "1,23,45,678");
        assert_eq!(group_digits("1234", Grouping::Thousands), "1,234");
        assert_eq!(group_digits("123456", Grouping::Thousands), "123,456");
        assert_eq!(group_digits("1234567", Grouping::Thousands), "1,234,567");
    }

    #[test]
    fn test_mask_groups_and_converts() {
        assert_eq!(format_input_as_bengali_number("1234567"), "১২,৩৪,৫৬৭");
        assert_eq!(format_input_as_bengali_number("১২৩৪"), "১,২৩৪");
        assert_eq!(format_input_as_bengali_number("1,2,3,4"), "১,২৩৪");
    }

    #[test]
    fn test_mask_rejects_invalid() {
        assert_eq!(format_input_as_bengali_number("12a3"), "12a3");
        assert_eq!(format_input_as_bengali_number("1.2.3"), "1.2.3");
        assert_eq!(format_input_as_bengali_number("-5"), "-5");
        assert_eq!(format_input_as_bengali_number("১,২a"), "১,২a");
    }

    #[test]
    fn test_mask_empty() {
        assert_eq!(format_input_as_bengali_number(""), "");
        assert_eq!(format_input_as_bengali_number(",,"), "");
    }

    #[test]
    fn test_mask_keeps_fraction_verbatim() {
        assert_eq!(format_input_as_bengali_number("1234.5"), "১,২৩৪.৫");
        assert_eq!(format_input_as_bengali_number("12."), "১২.");
        assert_eq!(format_input_as_bengali_number(".50"), ".৫০");
        assert_eq!(format_input_as_bengali_number("."), ".");
        assert_eq!(format_input_as_bengali_number("1000.000"), "১,০০০.০০০");
    }

    #[test]
    fn test_mask_strips_leading_zeros() {
        assert_eq!(format_input_as_bengali_number("0012"), "১২");
        assert_eq!(format_input_as_bengali_number("000"), "০");
        assert_eq!(format_input_as_bengali_number("0.5"), "০.৫");
    }

    #[test]
    fn test_mask_large_integer_is_exact() {
        assert_eq!(
            format_input_with("12345678901234567890", Grouping::Lakh),
            to_bengali_number("1,23,45,67,89,01,23,45,67,890")
        );
    }

    #[test]
    fn test_mask_is_stable_on_own_output() {
        for raw in ["1234567", "1234.5", "12.", "0"] {
            let once = format_input_as_bengali_number(raw);
            assert_eq!(format_input_as_bengali_number(&once), once);
        }
    }

    #[test]
    fn test_mask_thousands_grouping() {
        assert_eq!(format_input_with("1234567", Grouping::Thousands), "১,২৩৪,৫৬৭");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("42"), Some(42.0));
        assert_eq!(parse_float_prefix("  -3.5kg"), Some(-3.5));
        assert_eq!(parse_float_prefix("+7"), Some(7.0));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("2e-2x"), Some(0.02));
        assert_eq!(parse_float_prefix("Infinityx"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-.e5"), None);
    }

    proptest! {
        #[test]
        fn to_english_number_is_idempotent(s in ".*") {
            let once = to_english_number(&s);
            prop_assert_eq!(to_english_number(&once), once);
        }

        #[test]
        fn digit_round_trip(n in any::<u64>()) {
            prop_assert_eq!(to_english_number(&to_bengali_number(n)), n.to_string());
        }

        #[test]
        fn mask_then_plain_recovers_digits(int in "[0-9]{1,18}", frac in proptest::option::of("[0-9]{0,4}")) {
            let raw = match &frac {
                Some(f) => format!("{int}.{f}"),
                None => int.clone(),
            };
            let masked = format_input_as_bengali_number(&raw);
            let trimmed = int.trim_start_matches('0');
            let int_expected = if trimmed.is_empty() { "0" } else { trimmed };
            let expected = match &frac {
                Some(f) => format!("{int_expected}.{f}"),
                None => int_expected.to_string(),
            };
            prop_assert_eq!(to_plain_number(&masked), expected);
        }

        #[test]
        fn mask_rejection_returns_raw(s in "[0-9]{0,3}[a-z\\-]+[0-9]{0,3}") {
            prop_assert_eq!(format_input_as_bengali_number(&s), s);
        }
    }
}
