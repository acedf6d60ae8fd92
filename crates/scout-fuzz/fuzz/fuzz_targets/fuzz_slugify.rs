#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::normalize::{name_tokens, slugify};

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let slug = slugify(name);
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(name_tokens(name).iter().all(|t| !t.is_empty()));
    }
});
