#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::models::{PublicationsReport, Researcher};

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<PublicationsReport>(data);
    let _ = serde_json::from_slice::<Vec<Researcher>>(data);
});
