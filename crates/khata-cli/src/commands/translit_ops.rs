use std::fs;
use std::io::{self, BufRead, Write};

use khata_engine::avro::{explain_with, transliterate_with, PatternTable, Segment, SegmentKind};
use tracing::debug;

use super::pad;

/// Transliterate `text`, or every stdin line when `text` is `None`.
pub fn translit(text: Option<&str>, explain: bool, table_file: Option<&str>) {
    let custom = table_file.map(|file| {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        let table = die!(PatternTable::from_toml(&content), "Error: {}");
        debug!(file, patterns = table.len(), "custom avro table loaded");
        table
    });
    let table = custom.as_ref().unwrap_or_else(|| PatternTable::global());

    let emit = |line: &str| {
        if explain {
            print!("{}", format_explain(line, &explain_with(table, line)));
        } else {
            println!("{}", transliterate_with(table, line));
        }
    };

    match text {
        Some(text) => emit(text),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                emit(&line);
            }
        }
    }
    die!(io::stdout().flush(), "Error writing stdout: {}");
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Vowel => "vowel",
        SegmentKind::VowelSign => "sign",
        SegmentKind::Consonant => "consonant",
        SegmentKind::Conjunct => "conjunct",
        SegmentKind::Hybrid => "hybrid",
        SegmentKind::Passthrough => "pass",
    }
}

/// One line per scan step: source token, emitted text, kind.
pub fn format_explain(input: &str, segments: &[Segment<'_>]) -> String {
    let mut out = format!("=== \"{input}\" ({} steps) ===\n", segments.len());
    for (i, seg) in segments.iter().enumerate() {
        let output = if seg.output.is_empty() {
            "(none)".to_string()
        } else {
            seg.output.clone()
        };
        out.push_str(&format!(
            "  [{i:>2}] {} -> {} {}\n",
            pad(&format!("{:?}", seg.source), 8),
            pad(&output, 8),
            kind_label(seg.kind),
        ));
    }
    let joined: String = segments.iter().map(|s| s.output.as_str()).collect();
    out.push_str(&format!("  = {joined}\n"));
    out
}
