//! Global settings loaded from TOML, following the same OnceLock pattern as the avro table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call;
//!   after that it returns `AlreadyInitialized`
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `numeral.max_fraction_digits`.
pub const MAX_FRACTION_DIGITS: usize = 20;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call. Fails with
/// `AlreadyInitialized` once the settings have been loaded.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        let s = parse_settings_toml(toml_str).expect("settings TOML must be valid");
        debug!(
            grouping = ?s.numeral.grouping,
            max_fraction_digits = s.numeral.max_fraction_digits,
            addresses = s.ledger.addresses.len(),
            "settings loaded"
        );
        s
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub numeral: NumeralSettings,
    pub ledger: LedgerSettings,
}

/// Digit grouping for the integer part of a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Last three digits, then pairs: 12,34,567.
    Lakh,
    /// Groups of three: 1,234,567.
    Thousands,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumeralSettings {
    pub grouping: Grouping,
    pub max_fraction_digits: usize,
}

impl Default for NumeralSettings {
    fn default() -> Self {
        Self {
            grouping: Grouping::Lakh,
            max_fraction_digits: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    pub addresses: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.numeral.max_fraction_digits > MAX_FRACTION_DIGITS {
        return Err(SettingsError::InvalidValue {
            field: "numeral.max_fraction_digits".to_string(),
            reason: format!("must be at most {MAX_FRACTION_DIGITS}"),
        });
    }

    if s.ledger.addresses.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "ledger.addresses".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let mut seen = HashSet::new();
    for (i, addr) in s.ledger.addresses.iter().enumerate() {
        if addr.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("ledger.addresses[{i}]"),
                reason: "must not be blank".to_string(),
            });
        }
        if !seen.insert(addr.as_str()) {
            return Err(SettingsError::InvalidValue {
                field: format!("ledger.addresses[{i}]"),
                reason: format!("duplicate address {addr:?}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_custom_after_first_use_is_rejected() {
        let before = crate::numeral::format_input_as_bengali_number("1234567");
        let custom = DEFAULT_SETTINGS_TOML.replace(r#"grouping = "lakh""#, r#"grouping = "thousands""#);
        let err = init_custom(custom).unwrap_err();
        assert!(matches!(err, SettingsError::AlreadyInitialized));
        assert_eq!(settings().numeral.grouping, Grouping::Lakh);
        assert_eq!(crate::numeral::format_input_as_bengali_number("1234567"), before);
    }

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.numeral.grouping, Grouping::Lakh);
        assert_eq!(s.numeral.max_fraction_digits, 3);
        assert_eq!(s.ledger.addresses.len(), 13);
        assert_eq!(s.ledger.addresses[0], "ডুমুরি\u{09DF}া");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[numeral]
grouping = "thousands"
max_fraction_digits = 2

[ledger]
addresses = ["বটতলা"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.numeral.grouping, Grouping::Thousands);
        assert_eq!(s.numeral.max_fraction_digits, 2);
        assert_eq!(s.ledger.addresses, vec!["বটতলা".to_string()]);
    }

    #[test]
    fn error_unknown_grouping() {
        let toml = r#"
[numeral]
grouping = "myriad"
max_fraction_digits = 3

[ledger]
addresses = ["বটতলা"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_too_many_fraction_digits() {
        let toml = r#"
[numeral]
grouping = "lakh"
max_fraction_digits = 21

[ledger]
addresses = ["বটতলা"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("numeral.max_fraction_digits"));
    }

    #[test]
    fn error_empty_addresses() {
        let toml = r#"
[numeral]
grouping = "lakh"
max_fraction_digits = 3

[ledger]
addresses = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("ledger.addresses"));
    }

    #[test]
    fn error_blank_address() {
        let toml = r#"
[numeral]
grouping = "lakh"
max_fraction_digits = 3

[ledger]
addresses = ["বটতলা", "  "]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("ledger.addresses[1]"));
    }

    #[test]
    fn error_duplicate_address() {
        let toml = r#"
[numeral]
grouping = "lakh"
max_fraction_digits = 3

[ledger]
addresses = ["বটতলা", "বটতলা"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[numeral]
grouping = "lakh"
max_fraction_digits = 3
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
