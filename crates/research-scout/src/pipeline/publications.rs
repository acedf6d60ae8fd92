//! Publications pipeline: names to classified publication records.

use url::Url;

use super::{PipelineContext, RunSummary, pace};
use crate::candidates::PageKind;
use crate::config::PublicationsOptions;
use crate::error::ScoutResult;
use crate::extract::{RecencyWindow, publication_details, publication_entries, recent_links};
use crate::html::Page;
use crate::models::{Publication, PublicationsReport, Unresolved};
use crate::output;
use crate::resolve::{ProbeMethod, Resolution, resolve};

/// Collect recent publications with the wanted classification for each name.
///
/// Every name appears in the report, in input order, with an empty list when
/// no candidate resolved or nothing matched.
pub async fn collect(
    ctx: &PipelineContext,
    names: &[String],
    options: &PublicationsOptions,
) -> (PublicationsReport, Vec<Unresolved>) {
    let window = RecencyWindow::new(options.window_years, options.current_year);
    let mut report = PublicationsReport::new();
    let mut unresolved = Vec::new();

    for (i, name) in names.iter().enumerate() {
        pace(i, ctx.config.record_delay).await;
        tracing::info!(name = %name, "Processing researcher");

        let candidates = ctx.portal.candidates(name, options.strategy, PageKind::Publications);
        let publications = match resolve(
            &ctx.client,
            &candidates,
            ProbeMethod::Head,
            ctx.config.probe_delay,
        )
        .await
        {
            Resolution::Resolved { candidate, .. } => {
                researcher_publications(ctx, &candidate.url, window, &options.classification).await
            }
            Resolution::Unresolved { tried } => {
                unresolved.push(Unresolved { name: name.clone(), tried });
                Vec::new()
            }
        };

        tracing::info!(name = %name, count = publications.len(), "Collected publications");
        report.insert(name.clone(), publications);
    }

    (report, unresolved)
}

/// Run the publications pipeline and write its outputs.
///
/// # Errors
///
/// Returns [`ScoutError::MissingInput`](crate::error::ScoutError::MissingInput)
/// if the names file is absent, or an I/O error if an output cannot be written.
pub async fn run(ctx: &PipelineContext, options: &PublicationsOptions) -> ScoutResult<RunSummary> {
    let names = output::read_names(&options.input)?;
    let (report, unresolved) = collect(ctx, &names, options).await;

    let mut summary = RunSummary { processed: names.len(), ..Default::default() };
    output::write_json(&options.output, &report)?;
    summary.written.push(options.output.clone());
    tracing::info!(output = %options.output.display(), "Data has been written");

    if output::write_unresolved_log(&options.unresolved_log, &unresolved)? {
        summary.written.push(options.unresolved_log.clone());
    }
    summary.unresolved = unresolved;

    Ok(summary)
}

/// Detail records for the recent rows of one publications index.
async fn researcher_publications(
    ctx: &PipelineContext,
    index_url: &str,
    window: RecencyWindow,
    classification: &str,
) -> Vec<Publication> {
    let links = match ctx.client.get_html(index_url).await {
        Ok(body) => {
            let base = Url::parse(index_url).ok();
            recent_links(&publication_entries(&Page::parse(&body), base.as_ref()), window)
        }
        Err(e) => {
            tracing::warn!(url = %index_url, error = %e, "Publications index unavailable");
            return Vec::new();
        }
    };

    let mut publications = Vec::new();
    for (url, year) in links {
        let details = match ctx.client.get_html(&url).await {
            Ok(body) => publication_details(&Page::parse(&body)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Publication page unavailable");
                continue;
            }
        };

        if details.is_classified(classification) {
            publications.push(Publication::new(year, url, details));
        } else {
            tracing::debug!(url = %url, classification = ?details.classification, "Skipped");
        }
    }

    publications
}
