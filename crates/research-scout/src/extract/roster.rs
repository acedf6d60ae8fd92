//! Group roster and bio pages.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::html::{Page, non_empty, selector, text_of};
use crate::models::{BioDetails, RosterEntry};

static PARTNER: LazyLock<Selector> = LazyLock::new(|| selector("div.node-partner"));
static PARTNER_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.field-group-link"));
static PARTNER_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));
static RICH_TEXT_ITEM: LazyLock<Selector> =
    LazyLock::new(|| selector("div.field--name-field-rich-text li"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(r#"meta[name="description"]"#));
static FOCUS_WALK: LazyLock<Selector> = LazyLock::new(|| selector("h2, div.group-right"));
static ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));

const FOCUS_HEADING: &str = "Research focus";

/// Members listed on the roster page, partner cards first, then the extra list.
///
/// Relative links are resolved against `site`. Cards without a link or a
/// named image are skipped.
#[must_use]
pub fn roster_entries(page: &Page, site: &Url) -> Vec<RosterEntry> {
    let mut entries = Vec::new();

    for card in page.select(&PARTNER) {
        let Some(href) = card.select(&PARTNER_LINK).next().and_then(|a| a.value().attr("href"))
        else {
            continue;
        };
        let name = card
            .select(&PARTNER_IMAGE)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .and_then(non_empty);

        if let (Some(name), Some(profile_url)) = (name, absolutize(site, href)) {
            entries.push(RosterEntry { name, profile_url });
        }
    }

    for item in page.select(&RICH_TEXT_ITEM) {
        let Some(link) = item.select(&LINK).next() else {
            continue;
        };
        let name = non_empty(&text_of(link));
        let profile_url = link.value().attr("href").and_then(|href| absolutize(site, href));

        if let (Some(name), Some(profile_url)) = (name, profile_url) {
            entries.push(RosterEntry { name, profile_url });
        }
    }

    entries
}

/// Description and research focus from a member's bio page.
#[must_use]
pub fn bio_details(page: &Page) -> BioDetails {
    BioDetails {
        description: page.attr_of(&DESCRIPTION, "content"),
        research_focus: research_focus(page),
    }
}

/// List items of the first `div.group-right` after the "Research focus" heading.
fn research_focus(page: &Page) -> Vec<String> {
    let mut after_heading = false;

    for element in page.select(&FOCUS_WALK) {
        if element.value().name() == "h2" {
            after_heading |= text_of(element) == FOCUS_HEADING;
        } else if after_heading {
            return element.select(&ITEM).filter_map(|li| non_empty(&text_of(li))).collect();
        }
    }

    Vec::new()
}

fn absolutize(site: &Url, href: &str) -> Option<String> {
    site.join(href.trim()).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"
        <html><body>
          <div class="node-partner">
            <a class="field-group-link" href="/en/people/jane-doe">
              <img src="j.jpg" alt="Jane Doe">
            </a>
          </div>
          <div class="node-partner">
            <a class="field-group-link" href="https://other.example/en/john">
              <img src="s.jpg" alt="John Smith (PhD)">
            </a>
          </div>
          <div class="node-partner">
            <img src="x.jpg" alt="No Link">
          </div>
          <div class="field--name-field-rich-text">
            <ul>
              <li><a href="/en/people/anna">Anna Lee</a></li>
              <li>No link here</li>
            </ul>
          </div>
        </body></html>
    "#;

    fn site() -> Url {
        Url::parse("https://www.crig.ugent.be").unwrap()
    }

    #[test]
    fn test_roster_entries() {
        let entries = roster_entries(&Page::parse(ROSTER), &site());

        assert_eq!(
            entries,
            vec![
                RosterEntry {
                    name: "Jane Doe".to_string(),
                    profile_url: "https://www.crig.ugent.be/en/people/jane-doe".to_string(),
                },
                RosterEntry {
                    name: "John Smith (PhD)".to_string(),
                    profile_url: "https://other.example/en/john".to_string(),
                },
                RosterEntry {
                    name: "Anna Lee".to_string(),
                    profile_url: "https://www.crig.ugent.be/en/people/anna".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_roster() {
        assert!(roster_entries(&Page::parse("<html></html>"), &site()).is_empty());
    }

    #[test]
    fn test_bio_details() {
        let page = Page::parse(
            r#"<html><head><meta name="description" content=" Plant virologist. "></head><body>
                 <div class="group-right"><ul><li>Not this</li></ul></div>
                 <h2>Contact</h2>
                 <h2>Research focus</h2>
                 <div class="group-left">ignored</div>
                 <div class="group-right"><ul>
                   <li> Viruses </li><li>Vectors</li><li> </li>
                 </ul></div>
                 <div class="group-right"><ul><li>Nor this</li></ul></div>
               </body></html>"#,
        );

        let bio = bio_details(&page);
        assert_eq!(bio.description.as_deref(), Some("Plant virologist."));
        assert_eq!(bio.research_focus, vec!["Viruses", "Vectors"]);
    }

    #[test]
    fn test_bio_without_focus() {
        let bio = bio_details(&Page::parse("<html><body><h2>Other</h2></body></html>"));
        assert_eq!(bio, BioDetails::default());
    }
}
