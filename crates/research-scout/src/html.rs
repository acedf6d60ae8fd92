//! Parsed HTML pages.
//!
//! A [`Page`] owns the parsed tree; the `extract` functions run selectors
//! over it and return typed, optional fields. Parsing and extraction are
//! synchronous and never cross an `.await`.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse a full HTML document. Malformed markup is repaired, never rejected.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// Elements matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.document.select(selector)
    }

    /// First element matching `selector`.
    #[must_use]
    pub fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.document.select(selector).next()
    }

    /// Trimmed `attr` of the first element matching `selector`, if non-empty.
    #[must_use]
    pub fn attr_of(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.first(selector).and_then(|el| el.value().attr(attr)).and_then(non_empty)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").finish_non_exhaustive()
    }
}

/// Compile a selector known at build time.
#[must_use]
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// Text content of an element with whitespace runs collapsed.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed copy of `text`, or `None` when blank.
#[must_use]
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_collapses_whitespace() {
        let page = Page::parse("<div><p>  Plant \n\t <b>virology</b>  </p></div>");
        let p = page.first(&selector("p")).unwrap();
        assert_eq!(text_of(p), "Plant virology");
    }

    #[test]
    fn test_attr_of() {
        let page = Page::parse(
            r#"<meta name="description" content="  hi  "><meta name="x" content=" ">"#,
        );
        let description = page.attr_of(&selector("meta[name=description]"), "content");
        assert_eq!(description.as_deref(), Some("hi"));
        assert_eq!(page.attr_of(&selector("meta[name=x]"), "content"), None);
        assert_eq!(page.attr_of(&selector("meta[name=missing]"), "content"), None);
    }

    #[test]
    fn test_malformed_html_parses() {
        let page = Page::parse("<div><li>unclosed <span>text");
        assert!(page.first(&selector("span")).is_some());
    }
}
