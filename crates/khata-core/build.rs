fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["numeral", "ledger"],
    );
    validate_toml(
        "src/avro/default_avro.toml",
        include_str!("src/avro/default_avro.toml"),
        &["vowels", "vowel_signs", "consonants", "conjuncts", "hybrids"],
    );
}

fn validate_toml(path: &str, content: &str, sections: &[&str]) {
    let value = match content.parse::<toml::Table>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in sections {
        if !value.get(*section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
