//! Fuzzing library for paper-vista.
//!
//! This crate provides fuzzing targets for payload parsing and for the
//! permissive coercion of filter and command input.
//!
//! # Usage
//!
//! ```bash
//! cd crates/paper-vista-fuzz
//! cargo +nightly fuzz run fuzz_dataset_parse -- -max_total_time=60
//! ```

pub use paper_vista::models;
