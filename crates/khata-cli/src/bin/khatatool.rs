use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use khata_cli::commands::{config_ops, ledger_ops, number_ops, translit_ops};

#[derive(Parser)]
#[command(name = "khatatool", about = "Khata Bengali text and ledger tool")]
struct Cli {
    /// Log engine spans and events to stderr (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate romanized text to Bengali (reads stdin lines without TEXT)
    Translit {
        /// Romanized text
        text: Option<String>,
        /// Show every step of the scan
        #[arg(long)]
        explain: bool,
        /// Use a custom Avro table TOML instead of the built-in one
        #[arg(long)]
        table: Option<String>,
    },
    /// Replace Western digits with Bengali digits
    BnNumber {
        value: String,
    },
    /// Replace Bengali digits with Western digits
    EnNumber {
        value: String,
    },
    /// Format an amount as grouped Bengali currency
    Currency {
        /// Number or numeric text (omit for a missing amount)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Apply the amount input mask to raw text
    Mask {
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Total the amounts in a ledger JSON dump
    Total {
        /// JSON array as returned by GET /api/ledger
        file: String,
        /// Also list every record, newest first
        #[arg(long)]
        rows: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the default Avro table as TOML
    AvroExport,
    /// Validate a custom Avro table TOML file
    AvroValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("khata_core=debug,khata_form=debug,khata_cli=debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging();
    }

    match cli.command {
        Command::Translit {
            text,
            explain,
            table,
        } => translit_ops::translit(text.as_deref(), explain, table.as_deref()),
        Command::BnNumber { value } => number_ops::bn_number(&value),
        Command::EnNumber { value } => number_ops::en_number(&value),
        Command::Currency { value } => number_ops::currency(value.as_deref()),
        Command::Mask { raw } => number_ops::mask(&raw),
        Command::Total { file, rows, json } => ledger_ops::total(&file, rows, json),
        Command::AvroExport => config_ops::avro_export(),
        Command::AvroValidate { file } => config_ops::avro_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
