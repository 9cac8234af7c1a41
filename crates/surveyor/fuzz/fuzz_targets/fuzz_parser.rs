//! Fuzz target for the survey loader.
//!
//! Arbitrary bytes are parsed as both a delimited export and a JSON export;
//! whatever loads is then analyzed. Neither step may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use surveyor::{Parser, Surveyor};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    let surveyor = Surveyor::new();

    for delimiter in [b',', b'\t', b';', b'|'] {
        if let Ok(dataset) = parser.parse_delimited(data, delimiter) {
            let _ = surveyor.analyze(&dataset);
        }
    }

    if let Ok(dataset) = parser.parse_json(data) {
        let _ = surveyor.analyze(&dataset);
    }
});
