//! Publications index and publication detail pages.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::html::{Page, collapse_whitespace, non_empty, selector, text_of};
use crate::models::{PublicationDetails, PublicationEntry};

static SECTION: LazyLock<Selector> = LazyLock::new(|| selector("div.margin-bottom-gl"));
static SECTION_YEAR: LazyLock<Selector> = LazyLock::new(|| selector("div.header-5 span"));
static ENTRY: LazyLock<Selector> = LazyLock::new(|| selector("div.bg-blue-hover"));
static ENTRY_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[data-type="title"]"#));
static ENTRY_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static ENTRY_YEAR: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[data-type="year"]"#));

static ABSTRACT: LazyLock<Selector> = LazyLock::new(|| selector(r#"dd[itemprop="description"]"#));
static DEFINITION: LazyLock<Selector> = LazyLock::new(|| selector("dd"));
static TERM_OR_DEFINITION: LazyLock<Selector> = LazyLock::new(|| selector("dt, dd"));
static IDENTIFIER: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="dc.identifier"][content]"#));

const JOURNAL_ARTICLE: &str = "Journal Article";
const CLASSIFICATION_TERM: &str = "UGent classification";

/// Publications no older than `years` before `current_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    /// Window length in years.
    pub years: u32,
    /// Year the window ends in.
    pub current_year: i32,
}

impl RecencyWindow {
    /// Create a window of `years` ending in `current_year`.
    #[must_use]
    pub const fn new(years: u32, current_year: i32) -> Self {
        Self { years, current_year }
    }

    /// Oldest year still inside the window. Saturates at `i32::MIN` for
    /// windows wider than the representable range.
    #[must_use]
    pub fn cutoff(&self) -> i32 {
        i32::try_from(self.years).map_or(i32::MIN, |years| self.current_year.saturating_sub(years))
    }

    /// Whether `year` falls inside the window. The cutoff year itself is included.
    #[must_use]
    pub fn includes(&self, year: i32) -> bool {
        year >= self.cutoff()
    }

    /// Whether an optional year falls inside the window; unknown years never do.
    #[must_use]
    pub fn includes_opt(&self, year: Option<i32>) -> bool {
        year.is_some_and(|y| self.includes(y))
    }
}

/// Rows of a publications index page.
///
/// A row's year comes from its own year cell, else from the heading of the
/// year section it sits in. Relative links are resolved against `base`.
#[must_use]
pub fn publication_entries(page: &Page, base: Option<&Url>) -> Vec<PublicationEntry> {
    let mut section_years = HashMap::new();
    for section in page.select(&SECTION) {
        let year = section.select(&SECTION_YEAR).next().and_then(|s| parse_year(&text_of(s)));
        for entry in section.select(&ENTRY) {
            section_years.insert(entry.id(), year);
        }
    }

    page.select(&ENTRY)
        .map(|entry| {
            let title = entry.select(&ENTRY_TITLE).next().and_then(|s| non_empty(&text_of(s)));
            let url = entry
                .select(&ENTRY_LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| resolve_href(base, href));
            let year = entry
                .select(&ENTRY_YEAR)
                .next()
                .and_then(|d| parse_year(&text_of(d)))
                .or_else(|| section_years.get(&entry.id()).copied().flatten());

            PublicationEntry { title, url, year }
        })
        .collect()
}

/// Distinct titles of rows inside the window, in page order.
#[must_use]
pub fn recent_titles(entries: &[PublicationEntry], window: RecencyWindow) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| window.includes_opt(e.year))
        .filter_map(|e| e.title.clone())
        .filter(|title| seen.insert(title.clone()))
        .collect()
}

/// `(url, year)` of linked rows inside the window, in page order.
#[must_use]
pub fn recent_links(entries: &[PublicationEntry], window: RecencyWindow) -> Vec<(String, i32)> {
    entries
        .iter()
        .filter_map(|e| Some((e.url.clone()?, e.year?)))
        .filter(|(_, year)| window.includes(*year))
        .collect()
}

/// Abstract, type, DOI and classification from a publication detail page.
#[must_use]
pub fn publication_details(page: &Page) -> PublicationDetails {
    let r#abstract = page.first(&ABSTRACT).and_then(|dd| non_empty(&text_of(dd)));

    let kind = page
        .select(&DEFINITION)
        .map(text_of)
        .find(|text| text.contains(JOURNAL_ARTICLE))
        .map(|text| collapse_whitespace(&text));

    let doi = page
        .select(&IDENTIFIER)
        .filter_map(|meta| meta.value().attr("content"))
        .find(|content| content.contains("doi.org"))
        .and_then(non_empty);

    PublicationDetails { r#abstract, kind, doi, classification: classification(page) }
}

/// Definition following the "UGent classification" term.
fn classification(page: &Page) -> Option<String> {
    let mut after_term = false;

    for element in page.select(&TERM_OR_DEFINITION) {
        if element.value().name() == "dt" {
            after_term = text_of(element) == CLASSIFICATION_TERM;
        } else if after_term {
            return non_empty(&text_of(element));
        }
    }

    None
}

fn parse_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    match base {
        Some(base) => base.join(href).ok().map(String::from),
        None => non_empty(href),
    }
}
