#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::candidates::{CandidateStrategy, PageKind, Portal};
use research_scout::config::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    let portal = Portal::new(&Config::default());
    for strategy in [CandidateStrategy::Exhaustive, CandidateStrategy::Ordering] {
        for candidate in portal.candidates(name, strategy, PageKind::Profile) {
            // Every candidate must be a parseable URL
            assert!(url::Url::parse(&candidate.url).is_ok(), "bad URL {}", candidate.url);
        }
    }
});
