//! Portal profile page.

use std::sync::LazyLock;

use scraper::Selector;

use crate::html::{Page, non_empty, selector, text_of};
use crate::models::ProfileDetails;

static DISCIPLINE_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("div#id23 li"));
static DISCIPLINE_NAME: LazyLock<Selector> = LazyLock::new(|| selector("span.normal"));
static EXPERTISE_KEYWORD: LazyLock<Selector> =
    LazyLock::new(|| selector("div#id24 div.keywords span.keyword-label"));

/// Research disciplines and expertise keywords from a profile page.
#[must_use]
pub fn profile_details(page: &Page) -> ProfileDetails {
    let research_disciplines = page
        .select(&DISCIPLINE_ITEM)
        .filter_map(|li| li.select(&DISCIPLINE_NAME).next())
        .filter_map(|span| non_empty(&text_of(span)))
        .collect();

    let expertise =
        page.select(&EXPERTISE_KEYWORD).filter_map(|span| non_empty(&text_of(span))).collect();

    ProfileDetails { research_disciplines, expertise }
}
