#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

const NAMES: [&str; 5] = ["Maruti Swift", "Honda City", "Hyundai i20", "Hyundai Verna", "Tata Nexon"];

/// Generates `rows` car listings delimited by `delimiter`, with every 50th price left empty.
pub fn generate_cars(rows: u64, delimiter: char) -> String {
    let mut data = ["name", "year", "selling_price", "km_driven"].join(&delimiter.to_string());
    data.push('\n');
    for row in 0..rows {
        let name = NAMES[(row % NAMES.len() as u64) as usize];
        let year = 2000 + row % 24;
        let price = if row % 50 == 0 { String::new() } else { ((row * 7919) % 3_000_000).to_string() };
        let km = (row * 104_729) % 250_000;
        data.push_str(&format!("{name}{delimiter}{year}{delimiter}{price}{delimiter}{km}\n"));
    }
    data
}

/// Writes generated car listings to a temporary file.
pub fn cars_file(rows: u64, delimiter: char) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Benchmark setup: unable to create file");
    file.write_all(generate_cars(rows, delimiter).as_bytes())
        .expect("Benchmark setup: unable to write file");
    file
}
