//! Researcher records assembled by the roster pipeline.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A member listed on the group roster page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Name as shown on the roster.
    pub name: String,
    /// Absolute link to the member's bio page.
    pub profile_url: String,
}

/// Fields read from a member's bio page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioDetails {
    /// Meta description.
    pub description: Option<String>,
    /// Items of the "Research focus" list.
    pub research_focus: Vec<String>,
}

/// Fields read from a portal profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetails {
    /// Research disciplines.
    pub research_disciplines: BTreeSet<String>,
    /// Expertise keywords.
    pub expertise: Vec<String>,
}

/// A researcher as written to the roster JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Researcher {
    /// Name as scraped.
    pub name: String,

    /// Bio page on the group site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,

    /// Portal profile the name resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,

    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Research focus items, in page order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub research_focus: Vec<String>,

    /// Research disciplines.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub research_disciplines: BTreeSet<String>,

    /// Expertise keywords, in page order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<String>,

    /// Recent publication titles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<String>,
}

impl Researcher {
    /// Start a record from a roster entry.
    #[must_use]
    pub fn from_entry(entry: RosterEntry) -> Self {
        Self { name: entry.name, profile_url: Some(entry.profile_url), ..Default::default() }
    }

    /// Merge bio page fields.
    pub fn apply_bio(&mut self, bio: BioDetails) {
        if bio.description.is_some() {
            self.description = bio.description;
        }
        self.research_focus.extend(bio.research_focus);
    }

    /// Merge portal profile fields.
    pub fn apply_profile(&mut self, profile: ProfileDetails) {
        self.research_disciplines.extend(profile.research_disciplines);
        self.expertise.extend(profile.expertise);
    }
}

/// A name no candidate URL resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// Name as given.
    pub name: String,
    /// Every URL that was tried, in order.
    pub tried: Vec<String>,
}
