#![no_main]

use libfuzzer_sys::fuzz_target;
use research_scout::extract::{
    bio_details, profile_details, publication_details, publication_entries, roster_entries,
};
use research_scout::html::Page;

fuzz_target!(|data: &[u8]| {
    // Malformed markup must degrade to missing fields, never panic
    let html = String::from_utf8_lossy(data);
    let page = Page::parse(&html);
    let site = url::Url::parse("https://www.crig.ugent.be").unwrap();

    let _ = roster_entries(&page, &site);
    let _ = bio_details(&page);
    let _ = profile_details(&page);
    let _ = publication_entries(&page, Some(&site));
    let _ = publication_details(&page);
});
