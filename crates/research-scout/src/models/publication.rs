//! Publication records scraped from the portal.

use serde::{Deserialize, Serialize};

/// One row of a researcher's publications index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationEntry {
    /// Publication title.
    pub title: Option<String>,
    /// Link to the publication detail page.
    pub url: Option<String>,
    /// Publication year, from the row itself or its year section.
    pub year: Option<i32>,
}

/// Fields read from a publication detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationDetails {
    /// Abstract text.
    pub r#abstract: Option<String>,
    /// Publication type, e.g. "Journal Article".
    pub kind: Option<String>,
    /// DOI link.
    pub doi: Option<String>,
    /// Portal classification, e.g. "A1".
    pub classification: Option<String>,
}

impl PublicationDetails {
    /// Whether the classification equals `tag` exactly.
    #[must_use]
    pub fn is_classified(&self, tag: &str) -> bool {
        self.classification.as_deref() == Some(tag)
    }
}

/// A publication record as written to the publications JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication year.
    pub year: i32,

    /// Detail page URL.
    pub url: String,

    /// Abstract text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Publication type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// DOI link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Portal classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    /// Expertise description generated from the abstract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

impl Publication {
    /// Build a record from an index row's link and year plus its detail page.
    #[must_use]
    pub fn new(year: i32, url: impl Into<String>, details: PublicationDetails) -> Self {
        Self {
            year,
            url: url.into(),
            r#abstract: details.r#abstract,
            kind: details.kind,
            doi: details.doi,
            classification: details.classification,
            expertise: None,
        }
    }

    /// Abstract text if present and non-blank.
    #[must_use]
    pub fn abstract_text(&self) -> Option<&str> {
        self.r#abstract.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_renamed() {
        let publication = Publication {
            year: 2022,
            url: "https://biblio.ugent.be/publication/1".to_string(),
            kind: Some("Journal Article".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&publication).unwrap();
        assert_eq!(json["type"], "Journal Article");
        assert!(json.get("abstract").is_none());
        assert!(json.get("expertise").is_none());
    }

    #[test]
    fn test_reads_minimal_record() {
        let publication: Publication =
            serde_json::from_str(r#"{"year": 2020, "url": "u", "abstract": "text"}"#).unwrap();
        assert_eq!(publication.abstract_text(), Some("text"));
        assert!(publication.classification.is_none());
    }

    #[test]
    fn test_blank_abstract_is_absent() {
        let publication = Publication { r#abstract: Some("  ".to_string()), ..Default::default() };
        assert!(publication.abstract_text().is_none());
    }

    #[test]
    fn test_is_classified() {
        let details =
            PublicationDetails { classification: Some("A1".to_string()), ..Default::default() };
        assert!(details.is_classified("A1"));
        assert!(!details.is_classified("A2"));
        assert!(!PublicationDetails::default().is_classified("A1"));
    }
}
