//! Configuration for the research scout.

use std::path::PathBuf;
use std::time::Duration;

use crate::candidates::CandidateStrategy;

/// Research portal constants.
pub mod portal {
    use std::time::Duration;

    /// Base URL of the research portal.
    pub const BASE_URL: &str = "https://research.ugent.be";

    /// Path under which person pages live.
    pub const PERSON_PATH: &str = "/web/person";

    /// Language segment appended to every person page.
    pub const LANGUAGE: &str = "en";

    /// Timeout for page fetches.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Timeout for existence probes.
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay after a candidate fails to resolve.
    pub const PROBE_DELAY: Duration = Duration::from_secs(1);

    /// Delay between researcher records.
    pub const RECORD_DELAY: Duration = Duration::from_secs(2);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("research-scout/", env!("CARGO_PKG_VERSION"));
}

/// Research group roster constants.
pub mod roster {
    /// Page listing all group leaders and members.
    pub const ROSTER_URL: &str = "https://www.crig.ugent.be/en/all-crig-group-leaders-and-members";

    /// Site root used to resolve relative member links.
    pub const SITE_URL: &str = "https://www.crig.ugent.be";
}

/// Publication recency windows, in years before the current year.
///
/// The two pipelines were tuned independently; neither is derived from the other.
pub mod windows {
    /// Window for publication titles attached to roster entries.
    pub const ROSTER_YEARS: u32 = 7;

    /// Window for publication records in the publications pipeline.
    pub const PUBLICATION_YEARS: u32 = 9;
}

/// Classification tag for peer-reviewed journal articles.
pub const PEER_REVIEWED: &str = "A1";

/// Language model constants.
pub mod expertise {
    /// Default Ollama endpoint.
    pub const OLLAMA_URL: &str = "http://localhost:11434";

    /// Default model name.
    pub const MODEL: &str = "llama3";

    /// Word budget for a single publication's expertise description.
    pub const PUBLICATION_WORDS: usize = 80;

    /// Word budget for a researcher's combined summary.
    pub const RESEARCHER_WORDS: usize = 150;
}

/// Portal access configuration shared by every pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the research portal (for testing with mock servers).
    pub portal_url: String,

    /// Timeout for page fetches.
    pub request_timeout: Duration,

    /// Timeout for existence probes.
    pub probe_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay after a candidate fails to resolve.
    pub probe_delay: Duration,

    /// Delay between researcher records.
    pub record_delay: Duration,

    /// User agent header.
    pub user_agent: String,
}

impl Config {
    /// Create a configuration pointing at the given portal.
    #[must_use]
    pub fn new(portal_url: impl Into<String>) -> Self {
        Self {
            portal_url: portal_url.into(),
            request_timeout: portal::REQUEST_TIMEOUT,
            probe_timeout: portal::PROBE_TIMEOUT,
            connect_timeout: portal::CONNECT_TIMEOUT,
            probe_delay: portal::PROBE_DELAY,
            record_delay: portal::RECORD_DELAY,
            user_agent: portal::USER_AGENT.to_string(),
        }
    }

    /// Create a test configuration with a mock server URL and no pacing.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            portal_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(2),
            probe_delay: Duration::from_millis(0), // No delay in tests
            record_delay: Duration::from_millis(0),
            user_agent: portal::USER_AGENT.to_string(),
        }
    }

    /// Base URL of person pages, e.g. `https://research.ugent.be/web/person`.
    #[must_use]
    pub fn person_base(&self) -> String {
        format!("{}{}", self.portal_url.trim_end_matches('/'), portal::PERSON_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(portal::BASE_URL)
    }
}

/// Options for the roster pipeline.
#[derive(Debug, Clone)]
pub struct RosterOptions {
    /// Group landing page listing all members.
    pub roster_url: String,

    /// Site root for resolving relative member links.
    pub site_url: String,

    /// Where the researcher array is written.
    pub output: PathBuf,

    /// Where unresolved names are logged.
    pub unresolved_log: PathBuf,

    /// Publication recency window in years.
    pub window_years: u32,

    /// Candidate strategy for locating portal profiles.
    pub strategy: CandidateStrategy,

    /// Year the recency window is anchored to.
    pub current_year: i32,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            roster_url: roster::ROSTER_URL.to_string(),
            site_url: roster::SITE_URL.to_string(),
            output: PathBuf::from("researchers_crig.json"),
            unresolved_log: PathBuf::from("invalid_urls.log"),
            window_years: windows::ROSTER_YEARS,
            strategy: CandidateStrategy::Exhaustive,
            current_year: current_year(),
        }
    }
}

/// Options for the probe pipeline.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Names file, one per line.
    pub input: PathBuf,

    /// Where unresolved names are logged.
    pub unresolved_log: PathBuf,

    /// Candidate strategy.
    pub strategy: CandidateStrategy,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("hint.researchers.txt"),
            unresolved_log: PathBuf::from("invalid_urls.log"),
            strategy: CandidateStrategy::Ordering,
        }
    }
}

/// Options for the publications pipeline.
#[derive(Debug, Clone)]
pub struct PublicationsOptions {
    /// Names file, one per line.
    pub input: PathBuf,

    /// Where the name-keyed publications object is written.
    pub output: PathBuf,

    /// Where unresolved names are logged.
    pub unresolved_log: PathBuf,

    /// Publication recency window in years.
    pub window_years: u32,

    /// Only publications with this classification are kept.
    pub classification: String,

    /// Candidate strategy.
    pub strategy: CandidateStrategy,

    /// Year the recency window is anchored to.
    pub current_year: i32,
}

impl Default for PublicationsOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test.researchers.txt"),
            output: PathBuf::from("test.publications_data.json"),
            unresolved_log: PathBuf::from("invalid_urls.log"),
            window_years: windows::PUBLICATION_YEARS,
            classification: PEER_REVIEWED.to_string(),
            strategy: CandidateStrategy::Ordering,
            current_year: current_year(),
        }
    }
}

/// Options for the expertise pipeline.
#[derive(Debug, Clone)]
pub struct ExpertiseOptions {
    /// Publications JSON produced by the publications pipeline.
    pub input: PathBuf,

    /// Publications JSON with per-publication expertise attached.
    pub annotated_output: PathBuf,

    /// Name-keyed researcher summaries.
    pub summary_output: PathBuf,
}

impl Default for ExpertiseOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test.publications_data.json"),
            annotated_output: PathBuf::from("test.publications_data_expertise.json"),
            summary_output: PathBuf::from("test.publications_data_expertise_summary.json"),
        }
    }
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
