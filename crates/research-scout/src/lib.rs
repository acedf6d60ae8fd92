//! Research Scout
//!
//! Finds researcher profile pages on the Ghent University research portal by
//! guessing URL slugs from a person's name, scrapes biographical metadata and
//! recent publications from the pages that resolve, and summarizes scraped
//! abstracts into expertise descriptions with a local language model.
//!
//! # Features
//!
//! - **Candidate URLs**: name normalization plus two slug strategies
//! - **Fetch-with-fallback**: candidates probed in order, first 200 wins
//! - **Extraction**: bio, profile and publication pages via CSS selectors
//! - **Expertise**: per-abstract and per-researcher summaries through Ollama
//!
//! # Example
//!
//! ```no_run
//! use research_scout::{config::Config, pipeline::{PipelineContext, probe}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = PipelineContext::new(Config::default())?;
//!     let summary = probe::run(&ctx, &Default::default()).await?;
//!
//!     println!("{} of {} names resolved", summary.resolved(), summary.processed);
//!     Ok(())
//! }
//! ```

pub mod candidates;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod html;
pub mod models;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod resolve;

pub use client::{OllamaClient, PortalClient};
pub use config::Config;
pub use error::{ClientError, ScoutError};
