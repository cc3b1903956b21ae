use khata_engine::numeral::{
    format_bengali_currency, format_input_as_bengali_number, to_bengali_number, to_english_number,
};

pub fn bn_number(value: &str) {
    println!("{}", to_bengali_number(value));
}

pub fn en_number(value: &str) {
    println!("{}", to_english_number(value));
}

/// No value prints what the ledger shows for a missing amount.
pub fn currency(value: Option<&str>) {
    println!("{} ৳", format_bengali_currency(value));
}

pub fn mask(raw: &str) {
    println!("{}", format_input_as_bengali_number(raw));
}
