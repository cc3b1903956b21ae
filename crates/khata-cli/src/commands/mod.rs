macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod ledger_ops;
pub mod number_ops;
pub mod translit_ops;

use unicode_width::UnicodeWidthStr;

/// Pad `s` with spaces to `width` terminal columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}
