//! Fuzzing library for research-scout.
//!
//! Targets cover name normalization, candidate URL generation, HTML field
//! extraction and JSON model parsing. None of them may panic.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scout-fuzz
//! cargo +nightly fuzz run fuzz_extract -- -max_total_time=60
//! ```

pub use research_scout::{candidates, extract, models, normalize};
