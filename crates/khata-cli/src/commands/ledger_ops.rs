use std::fs;

use khata_engine::form::{display_rows, newest_first, parse_records, total_amount, DisplayRow};
use khata_engine::numeral::format_bengali_currency;
use serde::Serialize;

use super::pad;

#[derive(Serialize)]
struct TotalReport {
    records: usize,
    total: f64,
    total_display: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rows: Vec<DisplayRow>,
}

/// Summarise a `GET /api/ledger` JSON dump.
pub fn total(file: &str, rows: bool, json: bool) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let records = newest_first(die!(parse_records(&content), "Error: {}"));
    let total = total_amount(&records);
    let report = TotalReport {
        records: records.len(),
        total,
        total_display: format_bengali_currency(total),
        rows: if rows { display_rows(&records) } else { Vec::new() },
    };

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&report), "Error: {}")
        );
        return;
    }

    if rows {
        print!("{}", format_rows(&report.rows));
    }
    println!("মোট: {} ৳ ({} records)", report.total_display, report.records);
}

pub fn format_rows(rows: &[DisplayRow]) -> String {
    let name_w = column_width(rows.iter().map(|r| r.user_name.as_str()), "নাম");
    let alt_w = column_width(rows.iter().map(|r| r.user_alt_name.as_str()), "Alt Name");
    let addr_w = column_width(rows.iter().map(|r| r.user_address.as_str()), "ঠিকানা");

    let mut out = format!(
        "{} {} {} {}\n",
        pad("নাম", name_w),
        pad("Alt Name", alt_w),
        pad("ঠিকানা", addr_w),
        "টাকার পরিমাণ"
    );
    for r in rows {
        out.push_str(&format!(
            "{} {} {} {}\n",
            pad(&r.user_name, name_w),
            pad(&r.user_alt_name, alt_w),
            pad(&r.user_address, addr_w),
            r.user_amount
        ));
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    values
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(UnicodeWidthStr::width(header)))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows_aligns_columns() {
        let rows = vec![
            DisplayRow {
                user_id: 2,
                user_name: "রহিম".into(),
                user_alt_name: String::new(),
                user_address: "বটতলা".into(),
                user_amount: "১,৫০০".into(),
            },
            DisplayRow {
                user_id: 1,
                user_name: "ab".into(),
                user_alt_name: "x".into(),
                user_address: "y".into(),
                user_amount: "০".into(),
            },
        ];
        let text = format_rows(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("নাম"));
        assert!(lines[1].ends_with("১,৫০০"));
        assert!(lines[2].starts_with("ab "));
        assert!(lines[2].ends_with(" ০"));
    }
}
