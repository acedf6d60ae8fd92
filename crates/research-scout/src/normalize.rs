//! Name normalization.
//!
//! Turns a human name as scraped or typed ("Jane Dr. Doe (MD)", "Çağrı Öztürk")
//! into a lowercase ASCII slug usable as a portal path segment.
//!
//! Steps, in order:
//! 1. Remove parenthesized groups (an unclosed `(` swallows the rest).
//! 2. Drop whole-word academic titles and degrees.
//! 3. Lowercase, NFKD-decompose, drop combining marks, fold the few Latin
//!    letters that have no decomposition, drop anything still non-ASCII.
//! 4. Keep only `[a-z0-9-]` inside each word.
//! 5. Collapse hyphen runs, trim hyphens from each word, drop empty words and
//!    join the rest with single hyphens.
//!
//! Every function here is total: garbage in gives a (possibly empty) slug out.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)?").expect("valid parenthetical regex"));

/// Title and degree tokens, compared lowercase with trailing commas removed.
const TITLES: &[&str] = &["md", "phd", "ph.d.", "ph.d", "dvm", "prof.", "prof", "dr.", "dr"];

/// Letters NFKD leaves untouched.
const FOLDS: &[(char, &str)] = &[
    ('ı', "i"),
    ('ł', "l"),
    ('ø', "o"),
    ('đ', "d"),
    ('ħ', "h"),
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('þ', "th"),
    ('ð', "d"),
];

/// Remove every parenthesized group from a name.
#[must_use]
pub fn strip_parenthetical(name: &str) -> String {
    PARENTHETICAL.replace_all(name, " ").into_owned()
}

/// Whether a whitespace-delimited token is an academic title or degree.
#[must_use]
pub fn is_title(token: &str) -> bool {
    let token = token.trim_end_matches(',').to_lowercase();
    TITLES.contains(&token.as_str())
}

/// Lowercase and reduce to ASCII, mapping accented letters to their base.
#[must_use]
pub fn fold_to_ascii(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());

    for c in lower.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii() {
            out.push(c);
        } else if let Some((_, folded)) = FOLDS.iter().find(|(from, _)| *from == c) {
            out.push_str(folded);
        }
    }

    out
}

/// Words of a name after steps 1-4, possibly empty or hyphen-only.
fn clean_words(name: &str) -> Vec<String> {
    strip_parenthetical(name)
        .split_whitespace()
        .filter(|word| !is_title(word))
        .map(|word| {
            fold_to_ascii(word)
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect()
        })
        .collect()
}

/// Normalize a name into a portal slug.
///
/// ```
/// use research_scout::normalize::slugify;
///
/// assert_eq!(slugify("Jane Dr. Doe (MD)"), "jane-doe");
/// assert_eq!(slugify("Çağrı Öztürk"), "cagri-ozturk");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    name_tokens(name).join("-")
}

/// Normalized words of a name, for strategies that permute them.
///
/// Hyphens inside a word ("jean-luc") are kept as single hyphens; words that
/// normalize to nothing are dropped. Joined with `-`, the tokens give
/// [`slugify`]'s output.
#[must_use]
pub fn name_tokens(name: &str) -> Vec<String> {
    clean_words(name)
        .into_iter()
        .map(|word| word.split('-').filter(|part| !part.is_empty()).collect::<Vec<_>>().join("-"))
        .filter(|word| !word.is_empty())
        .collect()
}
