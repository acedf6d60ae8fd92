//! Research Scout - Entry Point
//!
//! One subcommand per pipeline; pipelines never run together.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_scout::candidates::CandidateStrategy;
use research_scout::config::{
    self, Config, ExpertiseOptions, ProbeOptions, PublicationsOptions, RosterOptions,
};
use research_scout::pipeline::{PipelineContext, RunSummary, expertise, probe, publications, roster};
use research_scout::OllamaClient;

#[derive(Parser, Debug)]
#[command(name = "research-scout")]
#[command(about = "Find researcher profiles on research.ugent.be and scrape their publications")]
#[command(version)]
struct Cli {
    /// Base URL of the research portal
    #[arg(
        long,
        global = true,
        env = "RESEARCH_PORTAL_URL",
        default_value = config::portal::BASE_URL
    )]
    portal_url: String,

    /// Delay after a failed candidate, in milliseconds
    #[arg(long, global = true, env = "SCOUT_PROBE_DELAY_MS")]
    probe_delay_ms: Option<u64>,

    /// Delay between researchers, in milliseconds
    #[arg(long, global = true, env = "SCOUT_RECORD_DELAY_MS")]
    record_delay_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape the group roster into a researcher JSON array
    Roster {
        /// Page listing all group members
        #[arg(long, default_value = config::roster::ROSTER_URL)]
        roster_url: String,

        /// Site root for relative member links
        #[arg(long, default_value = config::roster::SITE_URL)]
        site_url: String,

        /// Researcher JSON output
        #[arg(short, long, default_value = "researchers_crig.json")]
        output: PathBuf,

        /// Unresolved names log
        #[arg(long, default_value = "invalid_urls.log")]
        log: PathBuf,

        /// Publication window in years
        #[arg(long, default_value_t = config::windows::ROSTER_YEARS)]
        years: u32,

        /// Candidate strategy for portal profiles
        #[arg(long, value_enum, default_value_t = CandidateStrategy::Exhaustive)]
        strategy: CandidateStrategy,
    },

    /// Check which names in a file have a portal profile
    Probe {
        /// Names file, one per line
        #[arg(short, long, default_value = "hint.researchers.txt")]
        input: PathBuf,

        /// Unresolved names log
        #[arg(long, default_value = "invalid_urls.log")]
        log: PathBuf,

        /// Candidate strategy
        #[arg(long, value_enum, default_value_t = CandidateStrategy::Ordering)]
        strategy: CandidateStrategy,
    },

    /// Collect classified recent publications for each name in a file
    Publications {
        /// Names file, one per line
        #[arg(short, long, default_value = "test.researchers.txt")]
        input: PathBuf,

        /// Name-keyed publications JSON output
        #[arg(short, long, default_value = "test.publications_data.json")]
        output: PathBuf,

        /// Unresolved names log
        #[arg(long, default_value = "invalid_urls.log")]
        log: PathBuf,

        /// Publication window in years
        #[arg(long, default_value_t = config::windows::PUBLICATION_YEARS)]
        years: u32,

        /// Classification to keep
        #[arg(long, default_value = config::PEER_REVIEWED)]
        classification: String,

        /// Candidate strategy
        #[arg(long, value_enum, default_value_t = CandidateStrategy::Ordering)]
        strategy: CandidateStrategy,
    },

    /// Summarize publication abstracts into expertise descriptions
    Expertise {
        /// Publications JSON to annotate
        #[arg(short, long, default_value = "test.publications_data.json")]
        input: PathBuf,

        /// Annotated publications JSON output
        #[arg(long, default_value = "test.publications_data_expertise.json")]
        annotated: PathBuf,

        /// Researcher summaries JSON output
        #[arg(long, default_value = "test.publications_data_expertise_summary.json")]
        summary: PathBuf,

        /// Ollama server URL
        #[arg(long, env = "OLLAMA_URL", default_value = config::expertise::OLLAMA_URL)]
        ollama_url: String,

        /// Model name
        #[arg(long, env = "OLLAMA_MODEL", default_value = config::expertise::MODEL)]
        model: String,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

impl Cli {
    fn portal_config(&self) -> Config {
        let mut config = Config::new(self.portal_url.clone());
        if let Some(ms) = self.probe_delay_ms {
            config.probe_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.record_delay_ms {
            config.record_delay = Duration::from_millis(ms);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        portal = %cli.portal_url,
        "Starting research scout"
    );

    let portal = cli.portal_config();
    let current_year = config::current_year();
    let summary = match cli.command {
        Command::Roster { roster_url, site_url, output, log, years, strategy } => {
            let ctx = PipelineContext::new(portal)?;
            let options = RosterOptions {
                roster_url,
                site_url,
                output,
                unresolved_log: log,
                window_years: years,
                strategy,
                current_year,
            };
            roster::run(&ctx, &options).await?
        }
        Command::Probe { input, log, strategy } => {
            let ctx = PipelineContext::new(portal)?;
            let options = ProbeOptions { input, unresolved_log: log, strategy };
            probe::run(&ctx, &options).await?
        }
        Command::Publications { input, output, log, years, classification, strategy } => {
            let ctx = PipelineContext::new(portal)?;
            let options = PublicationsOptions {
                input,
                output,
                unresolved_log: log,
                window_years: years,
                classification,
                strategy,
                current_year,
            };
            publications::run(&ctx, &options).await?
        }
        Command::Expertise { input, annotated, summary, ollama_url, model } => {
            let model = OllamaClient::new(ollama_url, model)?;
            tracing::info!(model = %model.model(), "Using language model");
            let options =
                ExpertiseOptions { input, annotated_output: annotated, summary_output: summary };
            expertise::run(&model, &options).await?
        }
    };

    report(&summary);
    Ok(())
}

fn report(summary: &RunSummary) {
    tracing::info!(
        processed = summary.processed,
        resolved = summary.resolved(),
        unresolved = summary.unresolved.len(),
        "Run complete"
    );
    for path in &summary.written {
        tracing::info!(path = %path.display(), "Wrote");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_config_applies_overrides() {
        let cli = Cli::try_parse_from([
            "research-scout",
            "--portal-url",
            "http://localhost:9000",
            "--probe-delay-ms",
            "25",
            "--record-delay-ms",
            "0",
            "probe",
        ])
        .unwrap();

        let config = cli.portal_config();
        assert_eq!(config.portal_url, "http://localhost:9000");
        assert_eq!(config.probe_delay, Duration::from_millis(25));
        assert_eq!(config.record_delay, Duration::ZERO);
    }

    #[test]
    fn test_portal_config_keeps_default_pacing() {
        let cli = Cli::try_parse_from(["research-scout", "probe"]).unwrap();
        let defaults = Config::new(cli.portal_url.clone());

        let config = cli.portal_config();
        assert_eq!(config.probe_delay, defaults.probe_delay);
        assert_eq!(config.record_delay, defaults.record_delay);
    }
}
