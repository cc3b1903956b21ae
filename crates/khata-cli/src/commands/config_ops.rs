use std::fs;

use khata_engine::avro::{parse_avro_toml, PatternTable};
use khata_engine::settings::parse_settings_toml;

pub fn avro_export() {
    print!("{}", khata_engine::avro::default_toml());
}

pub fn avro_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_avro_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants, {} conjuncts, {} hybrids",
        config.vowels.len(),
        config.consonants.len(),
        config.conjuncts.len(),
        config.hybrids.len()
    );
    let table = PatternTable::from_config(config);
    println!("    {} patterns", table.len());
}

pub fn settings_export() {
    print!("{}", khata_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: numeral.grouping={:?}, numeral.max_fraction_digits={}, ledger.addresses={}",
        s.numeral.grouping,
        s.numeral.max_fraction_digits,
        s.ledger.addresses.len()
    );
}
