//! Candidate URL generation.
//!
//! The portal identifies people by a slug that is usually, but not always,
//! the normalized name. Same-named people get a trailing counter, some
//! profiles drop a middle name, and some are filed surname-first. Each
//! strategy lists the plausible slugs most-likely first; the resolver tries
//! them in that order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::{Config, portal};
use crate::normalize::{name_tokens, slugify};

/// Literal substitutions applied to a slug before percent-encoding.
///
/// `slugify` already folds these, but slugs can also be built by hand.
const SEGMENT_SUBSTITUTIONS: &[(char, char)] = &[
    ('ü', 'u'),
    ('é', 'e'),
    ('ö', 'o'),
    ('ğ', 'g'),
    ('ç', 'c'),
    ('ı', 'i'),
    ('â', 'a'),
    ('û', 'u'),
];

/// How candidate slugs are derived from a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStrategy {
    /// Counter suffixes, shortened names, spaced and initial variants.
    #[default]
    Exhaustive,
    /// First-last and last-first orderings with a `-0` counter.
    Ordering,
}

/// Which page of a person a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// `/web/person/<slug>/en`
    Profile,
    /// `/web/person/<slug>/publications/en`
    Publications,
}

/// One guessed portal URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Slug as generated, before encoding.
    pub slug: String,
    /// Absolute, percent-encoded URL.
    pub url: String,
}

/// Builds person URLs under the portal's person path.
#[derive(Debug, Clone)]
pub struct Portal {
    person_base: String,
}

impl Portal {
    /// Create a portal rooted at the configured base URL.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { person_base: config.person_base() }
    }

    /// URL of a person's page.
    #[must_use]
    pub fn url_for(&self, slug: &str, kind: PageKind) -> String {
        let segment = encode_segment(slug);
        match kind {
            PageKind::Profile => {
                format!("{}/{}/{}", self.person_base, segment, portal::LANGUAGE)
            }
            PageKind::Publications => {
                format!("{}/{}/publications/{}", self.person_base, segment, portal::LANGUAGE)
            }
        }
    }

    /// Ordered candidate URLs for a name.
    #[must_use]
    pub fn candidates(
        &self,
        name: &str,
        strategy: CandidateStrategy,
        kind: PageKind,
    ) -> Vec<Candidate> {
        candidate_slugs(name, strategy)
            .into_iter()
            .map(|slug| Candidate { url: self.url_for(&slug, kind), slug })
            .collect()
    }
}

/// Substitute known letters and percent-encode a slug for use as a path segment.
#[must_use]
pub fn encode_segment(slug: &str) -> String {
    let substituted: String = slug
        .chars()
        .map(|c| {
            SEGMENT_SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect();

    urlencoding::encode(&substituted).into_owned()
}

/// Ordered candidate slugs for a name, exact duplicates removed.
#[must_use]
pub fn candidate_slugs(name: &str, strategy: CandidateStrategy) -> Vec<String> {
    let slugs = match strategy {
        CandidateStrategy::Exhaustive => exhaustive_slugs(&slugify(name)),
        CandidateStrategy::Ordering => ordering_slugs(&name_tokens(name)),
    };

    let mut seen = HashSet::new();
    slugs.into_iter().filter(|slug| seen.insert(slug.clone())).collect()
}

fn exhaustive_slugs(slug: &str) -> Vec<String> {
    let mut slugs = vec![
        slug.to_string(),
        format!("{slug}-0"),
        format!("{slug}--0"),
        format!("{slug}-1"),
        format!("{slug}--1"),
    ];

    let parts: Vec<&str> = slug.split('-').collect();
    if let [first, .., last] = parts.as_slice() {
        // A spurious trailing token (second surname, suffix) is common
        let shortened = parts[..parts.len() - 1].join("-");
        slugs.push(shortened.clone());
        slugs.push(format!("{shortened}-0"));

        let spaced = slug.replace('-', " ");
        slugs.push(spaced.clone());
        slugs.push(format!("{spaced}-0"));

        let initial: String = first.chars().take(1).collect();
        slugs.push(format!("{initial}-{last}"));
        slugs.push(format!("{initial}-{last}-0"));
    }

    slugs
}

fn ordering_slugs(tokens: &[String]) -> Vec<String> {
    let mut slugs = vec![format!("{}-0", tokens.join("-"))];

    if let [init @ .., last] = tokens {
        if !init.is_empty() {
            slugs.push(format!("{}-{}-0", last, init.join("-")));
        }
    }

    slugs.push(format!("{}-0", tokens.concat()));
    if let Some(first) = tokens.first() {
        slugs.push(format!("{first}-0"));
    }

    slugs
}
