//! Fuzzing placeholder for the rsrckit-core decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_load

use rsrckit_core::ResourceCatalog;

pub fn fuzz_load(data: &[u8]) {
    // Try to decode - should never panic
    let _ = ResourceCatalog::load(data.to_vec());
}

pub fn fuzz_fetch_all(data: &[u8]) {
    // When arbitrary bytes decode, every payload fetch must stay
    // bounds-checked - should never panic
    if let Ok(catalog) = ResourceCatalog::load(data.to_vec()) {
        for tag in catalog.types() {
            for res in catalog.resources(tag) {
                let _ = catalog.data(tag, res.id);
                let _ = catalog.data_size(tag, res.id);
            }
        }
    }
}
