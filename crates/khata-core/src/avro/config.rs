use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_bengali_consonant;

/// Longest phonetic token accepted in any section, in characters.
pub const MAX_TOKEN_CHARS: usize = 4;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvroConfig {
    pub vowels: BTreeMap<String, String>,
    pub vowel_signs: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    #[serde(default)]
    pub conjuncts: BTreeMap<String, String>,
    #[serde(default)]
    pub hybrids: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AvroConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("token {token:?} appears in both [{first}] and [{second}]")]
    DuplicateToken {
        token: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("vowel {0:?} has no entry in [vowel_signs]")]
    MissingVowelSign(String),
    #[error("vowel sign {0:?} has no entry in [vowels]")]
    OrphanVowelSign(String),
    #[error("non-ASCII token: {0}")]
    NonAsciiKey(String),
    #[error("hybrid token must be a Bengali consonant followed by one ASCII letter: {0}")]
    InvalidHybrid(String),
    #[error("token {0:?} must be 1 to 4 characters long")]
    InvalidTokenLength(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("avro table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate an Avro table. The sections come back as sorted maps;
/// ordering across sections is the caller's job (see `PatternTable`).
pub fn parse_avro_toml(toml_str: &str) -> Result<AvroConfig, AvroConfigError> {
    let config: AvroConfig =
        toml::from_str(toml_str).map_err(|e| AvroConfigError::Parse(e.to_string()))?;

    if config.vowels.is_empty() {
        return Err(AvroConfigError::Empty("vowels"));
    }
    if config.consonants.is_empty() {
        return Err(AvroConfigError::Empty("consonants"));
    }

    for token in config.vowels.keys() {
        if !config.vowel_signs.contains_key(token) {
            return Err(AvroConfigError::MissingVowelSign(token.clone()));
        }
    }
    for token in config.vowel_signs.keys() {
        if !config.vowels.contains_key(token) {
            return Err(AvroConfigError::OrphanVowelSign(token.clone()));
        }
    }

    for section in [&config.vowels, &config.consonants, &config.conjuncts] {
        for (token, glyph) in section {
            check_length(token)?;
            if !token.is_ascii() {
                return Err(AvroConfigError::NonAsciiKey(token.clone()));
            }
            if glyph.is_empty() {
                return Err(AvroConfigError::EmptyValue(token.clone()));
            }
        }
    }

    for (token, glyph) in &config.hybrids {
        let mut chars = token.chars();
        let valid = matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(base), Some(modifier), None)
                if is_bengali_consonant(base) && modifier.is_ascii_alphabetic()
        );
        if !valid {
            return Err(AvroConfigError::InvalidHybrid(token.clone()));
        }
        if glyph.is_empty() {
            return Err(AvroConfigError::EmptyValue(token.clone()));
        }
    }

    let sections = [
        ("vowels", &config.vowels),
        ("consonants", &config.consonants),
        ("conjuncts", &config.conjuncts),
        ("hybrids", &config.hybrids),
    ];
    let mut seen: BTreeMap<&str, &'static str> = BTreeMap::new();
    for (name, section) in sections {
        for token in section.keys() {
            if let Some(first) = seen.insert(token.as_str(), name) {
                return Err(AvroConfigError::DuplicateToken {
                    token: token.clone(),
                    first,
                    second: name,
                });
            }
        }
    }

    Ok(config)
}

fn check_length(token: &str) -> Result<(), AvroConfigError> {
    let n = token.chars().count();
    if n == 0 || n > MAX_TOKEN_CHARS {
        return Err(AvroConfigError::InvalidTokenLength(token.to_string()));
    }
    Ok(())
}
