//! Probe pipeline: check which names have a portal profile.

use super::{PipelineContext, RunSummary, pace};
use crate::candidates::PageKind;
use crate::config::ProbeOptions;
use crate::error::ScoutResult;
use crate::models::Unresolved;
use crate::output;
use crate::resolve::{ProbeMethod, Resolution, resolve};

/// HEAD-probe candidate profile URLs for each name and return the names with no hit.
pub async fn collect(
    ctx: &PipelineContext,
    names: &[String],
    options: &ProbeOptions,
) -> Vec<Unresolved> {
    let mut unresolved = Vec::new();

    for (i, name) in names.iter().enumerate() {
        pace(i, ctx.config.record_delay).await;

        let candidates = ctx.portal.candidates(name, options.strategy, PageKind::Profile);
        match resolve(&ctx.client, &candidates, ProbeMethod::Head, ctx.config.probe_delay).await {
            Resolution::Resolved { candidate, .. } => {
                tracing::info!(name = %name, url = %candidate.url, "Profile found");
            }
            Resolution::Unresolved { tried } => {
                tracing::warn!(name = %name, tried = tried.len(), "No profile found");
                unresolved.push(Unresolved { name: name.clone(), tried });
            }
        }
    }

    unresolved
}

/// Run the probe pipeline. The log is written only if some name is unresolved.
///
/// # Errors
///
/// Returns [`ScoutError::MissingInput`](crate::error::ScoutError::MissingInput)
/// if the names file is absent, or an I/O error if the log cannot be written.
pub async fn run(ctx: &PipelineContext, options: &ProbeOptions) -> ScoutResult<RunSummary> {
    let names = output::read_names(&options.input)?;
    let unresolved = collect(ctx, &names, options).await;

    let mut summary = RunSummary { processed: names.len(), ..Default::default() };
    if output::write_unresolved_log(&options.unresolved_log, &unresolved)? {
        tracing::info!(log = %options.unresolved_log.display(), "Invalid URLs have been logged");
        summary.written.push(options.unresolved_log.clone());
    } else {
        tracing::info!("All URLs were constructed and verified successfully");
    }
    summary.unresolved = unresolved;

    Ok(summary)
}
