use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_avro_toml, AvroConfig, AvroConfigError};
use super::table::DEFAULT_TOML;
use crate::unicode::is_bengali_consonant;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<PatternTable> = OnceLock::new();

/// Which sub-table a pattern came from. The declaration order is the merge
/// order, and therefore the tie-break between tokens of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternKind {
    Vowel,
    Consonant,
    Conjunct,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub token: String,
    pub kind: PatternKind,
    /// Independent vowel, consonant, conjunct or hybrid result.
    pub glyph: String,
    /// Dependent vowel sign. Only vowels carry one.
    pub sign: Option<String>,
    char_len: usize,
}

impl Pattern {
    fn new(token: &str, kind: PatternKind, glyph: &str, sign: Option<&str>) -> Self {
        Self {
            token: token.to_string(),
            kind,
            glyph: glyph.to_string(),
            sign: sign.map(str::to_string),
            char_len: token.chars().count(),
        }
    }

    /// Token length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// The text this pattern emits after `prev`, the last character already
    /// written to the output. Vowels attach as a sign to a preceding consonant.
    pub fn render(&self, prev: Option<char>) -> &str {
        match &self.sign {
            Some(sign) if prev.is_some_and(is_bengali_consonant) => sign,
            _ => &self.glyph,
        }
    }
}

/// The merged Avro pattern list in match priority order.
///
/// Patterns are sorted by descending token length in characters. Equal
/// lengths keep merge order (vowels, consonants, conjuncts, hybrids) and,
/// within one sub-table, ascending byte order of the token. Two distinct
/// tokens of the same length cannot both prefix the same input, so the
/// tie-break fixes iteration order without affecting output.
pub struct PatternTable {
    patterns: Vec<Pattern>,
    /// First character of a token -> indices into `patterns`, priority order.
    by_first: HashMap<char, Vec<usize>>,
}

impl PatternTable {
    /// Set custom TOML before first `global()` call. Fails with
    /// `AlreadyInitialized` once the global table has been built.
    pub fn init_custom(toml_content: String) -> Result<(), AvroConfigError> {
        // Validate eagerly
        parse_avro_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(AvroConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| AvroConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PatternTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            PatternTable::from_toml(toml_str).expect("avro TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, AvroConfigError> {
        Ok(Self::from_config(parse_avro_toml(toml_str)?))
    }

    pub fn from_config(config: AvroConfig) -> Self {
        let mut patterns = Vec::with_capacity(
            config.vowels.len()
                + config.consonants.len()
                + config.conjuncts.len()
                + config.hybrids.len(),
        );
        for (token, glyph) in &config.vowels {
            let sign = config.vowel_signs.get(token).map(String::as_str);
            patterns.push(Pattern::new(token, PatternKind::Vowel, glyph, sign));
        }
        let rest = [
            (PatternKind::Consonant, &config.consonants),
            (PatternKind::Conjunct, &config.conjuncts),
            (PatternKind::Hybrid, &config.hybrids),
        ];
        for (kind, section) in rest {
            for (token, glyph) in section {
                patterns.push(Pattern::new(token, kind, glyph, None));
            }
        }

        // Stable: equal lengths keep the merge order built above.
        patterns.sort_by(|a, b| b.char_len.cmp(&a.char_len));

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (idx, p) in patterns.iter().enumerate() {
            if let Some(first) = p.token.chars().next() {
                by_first.entry(first).or_default().push(idx);
            }
        }

        debug!(
            patterns = patterns.len(),
            first_chars = by_first.len(),
            "avro pattern table built"
        );
        Self { patterns, by_first }
    }

    /// All patterns in priority order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Exact token lookup.
    pub fn get(&self, token: &str) -> Option<&Pattern> {
        let first = token.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .map(|&idx| &self.patterns[idx])
            .find(|p| p.token == token)
    }

    /// The highest-priority pattern whose token is a prefix of `rest`.
    pub fn longest_match(&self, rest: &str) -> Option<&Pattern> {
        let first = rest.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .map(|&idx| &self.patterns[idx])
            .find(|p| rest.starts_with(p.token.as_str()))
    }
}
