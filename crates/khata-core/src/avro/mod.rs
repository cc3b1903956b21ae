//! Avro-style phonetic transliteration (romanized text to Bengali).
//!
//! A single greedy pass over the input: at each position the longest token
//! from the merged pattern table wins, vowels become signs after consonants,
//! and anything unmatched is copied through.

mod config;
mod convert;
mod patterns;
mod table;

pub use config::{parse_avro_toml, AvroConfig, AvroConfigError, MAX_TOKEN_CHARS};
pub use convert::{explain, explain_with, to_bengali, transliterate_with, Segment, SegmentKind};
pub use patterns::{Pattern, PatternKind, PatternTable};

/// Returns the embedded default Avro table TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
