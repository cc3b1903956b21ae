//! Character-level Unicode classification for Bengali text.
//!
//! Ranges are spelled out explicitly; the boundaries (including the
//! nukta-composed consonants) decide whether a vowel attaches as a sign.

/// Check the whole Bengali block (U+0980..U+09FF).
pub fn is_bengali(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

/// Bengali consonant glyphs that take a dependent vowel sign: ক..হ
/// (U+0995..U+09B9), khanda ta ৎ (U+09CE) and the precomposed ড় ঢ় য়
/// (U+09DC..U+09DF).
///
/// The ক..হ range includes a few unassigned codepoints (U+09A9, U+09B1,
/// U+09B3..U+09B5) which never appear in transliterator output.
pub fn is_bengali_consonant(c: char) -> bool {
    ('\u{0995}'..='\u{09B9}').contains(&c)
        || c == '\u{09CE}'
        || ('\u{09DC}'..='\u{09DF}').contains(&c)
}

/// Bengali digits ০..৯ (U+09E6..U+09EF).
pub fn is_bengali_digit(c: char) -> bool {
    ('\u{09E6}'..='\u{09EF}').contains(&c)
}

/// Value of a Bengali digit glyph.
pub fn bengali_digit_value(c: char) -> Option<u32> {
    is_bengali_digit(c).then(|| c as u32 - 0x09E6)
}

/// Bengali glyph for a Western digit; `None` for anything else.
pub fn bengali_digit_for(c: char) -> Option<char> {
    let d = c.to_digit(10)?;
    char::from_u32(0x09E6 + d)
}

/// Western digit for a Bengali digit glyph; `None` for anything else.
pub fn western_digit_for(c: char) -> Option<char> {
    bengali_digit_value(c).and_then(|d| char::from_digit(d, 10))
}

/// True if `s` is non-empty and every character is in the Bengali block
/// or is whitespace.
pub fn is_bengali_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_bengali(c) || c.is_whitespace())
}
