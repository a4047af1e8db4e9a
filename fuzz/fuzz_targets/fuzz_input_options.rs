//! Fuzz target for string-keyed hidden field options and color parsing.
//!
//! Neither parser may panic; bad input must come back as an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pincode_tui::color::Rgba;
use pincode_tui::pin::{Animation, InputOptions};

fuzz_target!(|data: &str| {
    let pairs: Vec<(&str, &str)> = data
        .lines()
        .filter_map(|line| line.split_once('='))
        .collect();
    let _ = InputOptions::from_pairs(pairs);

    let _ = Rgba::parse_hex(data);
    let _ = data.parse::<Animation>();
});
