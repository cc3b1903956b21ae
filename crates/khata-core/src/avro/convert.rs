use tracing::debug_span;

use super::patterns::{PatternKind, PatternTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A vowel written in its independent form.
    Vowel,
    /// A vowel attached to the preceding consonant as a sign.
    VowelSign,
    Consonant,
    Conjunct,
    Hybrid,
    /// No token matched; one character copied verbatim.
    Passthrough,
}

/// One step of the left-to-right scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The slice of input consumed by this step.
    pub source: &'a str,
    /// The text appended to the output.
    pub output: String,
    pub kind: SegmentKind,
}

/// Transliterate romanized text to Bengali with the global pattern table.
///
/// Total: characters that start no token are copied unchanged.
pub fn to_bengali(input: &str) -> String {
    transliterate_with(PatternTable::global(), input)
}

/// Transliterate with an explicit pattern table.
pub fn transliterate_with(table: &PatternTable, input: &str) -> String {
    let _span = debug_span!("to_bengali", len = input.len()).entered();
    let mut output = String::with_capacity(input.len() * 3);
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        match table.longest_match(rest) {
            Some(pattern) => {
                let prev = output.chars().next_back();
                output.push_str(pattern.render(prev));
                rest = &rest[pattern.token.len()..];
            }
            None => {
                output.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    output
}

/// Run the same scan as [`to_bengali`] and report every step.
///
/// Concatenating the `output` of all segments yields `to_bengali(input)`.
pub fn explain(input: &str) -> Vec<Segment<'_>> {
    explain_with(PatternTable::global(), input)
}

pub fn explain_with<'a>(table: &PatternTable, input: &'a str) -> Vec<Segment<'a>> {
    let _span = debug_span!("explain", len = input.len()).entered();
    let mut segments: Vec<Segment<'a>> = Vec::new();
    let mut prev: Option<char> = None;
    let mut pos = 0;

    while let Some(c) = input[pos..].chars().next() {
        let rest = &input[pos..];
        let (consumed, output, kind) = match table.longest_match(rest) {
            Some(pattern) => {
                let text = pattern.render(prev);
                let kind = match pattern.kind {
                    PatternKind::Vowel if Some(text) == pattern.sign.as_deref() => {
                        SegmentKind::VowelSign
                    }
                    PatternKind::Vowel => SegmentKind::Vowel,
                    PatternKind::Consonant => SegmentKind::Consonant,
                    PatternKind::Conjunct => SegmentKind::Conjunct,
                    PatternKind::Hybrid => SegmentKind::Hybrid,
                };
                (pattern.token.len(), text.to_string(), kind)
            }
            None => (c.len_utf8(), c.to_string(), SegmentKind::Passthrough),
        };

        // An empty sign (inherent vowel) leaves the previous character in place.
        if let Some(last) = output.chars().next_back() {
            prev = Some(last);
        }
        segments.push(Segment {
            source: &input[pos..pos + consumed],
            output,
            kind,
        });
        pos += consumed;
    }

    segments
}
