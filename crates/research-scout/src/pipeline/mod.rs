//! End-to-end pipelines, one per subcommand.
//!
//! Each pipeline:
//! 1. Reads its input (names file, roster page or publications JSON)
//! 2. Resolves and scrapes pages one request at a time
//! 3. Writes its outputs once, at the end of the run

pub mod expertise;
pub mod probe;
pub mod publications;
pub mod roster;

use std::path::PathBuf;

use crate::candidates::Portal;
use crate::client::PortalClient;
use crate::config::Config;
use crate::models::Unresolved;

/// Shared state for portal pipelines.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Portal HTTP client.
    pub client: PortalClient,
    /// Builds person URLs on the configured portal.
    pub portal: Portal,
    /// Pacing and timeouts.
    pub config: Config,
}

impl PipelineContext {
    /// Create a context for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = PortalClient::new(&config)?;
        let portal = Portal::new(&config);
        Ok(Self { client, portal, config })
    }
}

/// What a pipeline run processed and wrote.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Names or roster entries processed.
    pub processed: usize,
    /// Names with no resolving candidate.
    pub unresolved: Vec<Unresolved>,
    /// Files written, in order.
    pub written: Vec<PathBuf>,
}

impl RunSummary {
    /// Names that resolved.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.processed.saturating_sub(self.unresolved.len())
    }
}

/// Sleep between records, skipping the first and zero delays.
async fn pace(index: usize, delay: std::time::Duration) {
    if index > 0 && !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
