//! Roster pipeline: group landing page to a researcher JSON array.

use url::Url;

use super::{PipelineContext, RunSummary, pace};
use crate::candidates::{Candidate, PageKind};
use crate::config::RosterOptions;
use crate::error::{ScoutError, ScoutResult};
use crate::extract::{
    RecencyWindow, bio_details, profile_details, publication_entries, recent_titles, roster_entries,
};
use crate::html::Page;
use crate::models::{Researcher, RosterEntry, Unresolved};
use crate::output;
use crate::resolve::{ProbeMethod, Resolution, resolve};

/// Scrape every roster member and return the records plus unresolved names.
///
/// # Errors
///
/// Fails if the site URL is invalid or the roster page cannot be fetched.
/// Failures on individual members only drop the affected fields.
pub async fn collect(
    ctx: &PipelineContext,
    options: &RosterOptions,
) -> ScoutResult<(Vec<Researcher>, Vec<Unresolved>)> {
    let site = Url::parse(&options.site_url)
        .map_err(|source| ScoutError::InvalidUrl { url: options.site_url.clone(), source })?;

    tracing::info!(url = %options.roster_url, "Fetching roster");
    let body = ctx.client.get_html(&options.roster_url).await?;
    let entries = roster_entries(&Page::parse(&body), &site);
    tracing::info!(count = entries.len(), "Found roster members");

    let window = RecencyWindow::new(options.window_years, options.current_year);
    let mut researchers = Vec::with_capacity(entries.len());
    let mut unresolved = Vec::new();

    for (i, entry) in entries.into_iter().enumerate() {
        pace(i, ctx.config.record_delay).await;
        let (researcher, missing) = scrape_member(ctx, options, window, entry).await;
        researchers.push(researcher);
        unresolved.extend(missing);
    }

    Ok((researchers, unresolved))
}

/// Run the roster pipeline and write its outputs.
///
/// # Errors
///
/// Returns error on a fatal fetch failure or if an output cannot be written.
pub async fn run(ctx: &PipelineContext, options: &RosterOptions) -> ScoutResult<RunSummary> {
    let (researchers, unresolved) = collect(ctx, options).await?;

    let mut summary = RunSummary { processed: researchers.len(), ..Default::default() };
    output::write_json(&options.output, &researchers)?;
    summary.written.push(options.output.clone());

    if output::write_unresolved_log(&options.unresolved_log, &unresolved)? {
        summary.written.push(options.unresolved_log.clone());
    }
    summary.unresolved = unresolved;

    tracing::info!(
        researchers = summary.processed,
        unresolved = summary.unresolved.len(),
        output = %options.output.display(),
        "Roster scrape complete"
    );
    Ok(summary)
}

/// Bio page, portal profile and recent titles for one member.
///
/// An unresolved portal profile still yields a record with the bio fields.
async fn scrape_member(
    ctx: &PipelineContext,
    options: &RosterOptions,
    window: RecencyWindow,
    entry: RosterEntry,
) -> (Researcher, Option<Unresolved>) {
    tracing::info!(name = %entry.name, "Processing member");
    let mut researcher = Researcher::from_entry(entry);

    if let Some(bio_url) = researcher.profile_url.clone() {
        match ctx.client.get_html(&bio_url).await {
            Ok(body) => researcher.apply_bio(bio_details(&Page::parse(&body))),
            Err(e) => tracing::warn!(url = %bio_url, error = %e, "Bio page unavailable"),
        }
    }

    let candidates = ctx.portal.candidates(&researcher.name, options.strategy, PageKind::Profile);
    match resolve(&ctx.client, &candidates, ProbeMethod::Get, ctx.config.probe_delay).await {
        Resolution::Resolved { candidate, body } => {
            if let Some(body) = body {
                researcher.apply_profile(profile_details(&Page::parse(&body)));
            }
            researcher.publications = recent_publication_titles(ctx, &candidate, window).await;
            researcher.portal_url = Some(candidate.url);
            (researcher, None)
        }
        Resolution::Unresolved { tried } => {
            let missing = Unresolved { name: researcher.name.clone(), tried };
            (researcher, Some(missing))
        }
    }
}

async fn recent_publication_titles(
    ctx: &PipelineContext,
    candidate: &Candidate,
    window: RecencyWindow,
) -> Vec<String> {
    let url = ctx.portal.url_for(&candidate.slug, PageKind::Publications);

    match ctx.client.get_html(&url).await {
        Ok(body) => {
            let base = Url::parse(&url).ok();
            let entries = publication_entries(&Page::parse(&body), base.as_ref());
            let titles = recent_titles(&entries, window);
            tracing::debug!(url = %url, count = titles.len(), "Found recent publications");
            titles
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Publications page unavailable");
            Vec::new()
        }
    }
}
