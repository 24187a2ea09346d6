#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_vista::models::Dataset;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must yield Ok or a LoadError, never a panic
    if let Ok(dataset) = Dataset::from_slice(data) {
        for paper in &dataset.papers {
            let _ = paper.year();
        }
    }
});
