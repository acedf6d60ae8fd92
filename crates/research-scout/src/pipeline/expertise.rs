//! Expertise pipeline: abstracts to per-publication and per-researcher summaries.

use super::RunSummary;
use crate::client::LanguageModel;
use crate::config::{ExpertiseOptions, expertise};
use crate::error::ScoutResult;
use crate::models::{ExpertiseSummaries, PublicationsReport};
use crate::output;

/// Prompt asking for a short expertise description of one abstract.
#[must_use]
pub fn publication_prompt(abstract_text: &str) -> String {
    format!(
        "Based on the following abstract, describe the expertise of the authors and any \
         technology or software they used. Make it concise, professional, and no longer than \
         {} words:\n\nAbstract: {abstract_text}\n\nExpertise:",
        expertise::PUBLICATION_WORDS
    )
}

/// Prompt asking for a researcher summary from their publication descriptions.
#[must_use]
pub fn researcher_prompt(descriptions: &[String]) -> String {
    format!(
        "The following is a collection of expertise descriptions from publications associated \
         with a researcher. Create a cohesive, detailed, and professional summary of the \
         researcher's expertise in no more than {} words:\n\n{}\n\nResearcher's Expertise:",
        expertise::RESEARCHER_WORDS,
        descriptions.join("\n")
    )
}

/// Attach an `expertise` description to every publication with an abstract
/// and summarize each researcher that got at least one.
///
/// # Errors
///
/// Any model failure aborts the whole run.
pub async fn annotate<M>(
    model: &M,
    report: &mut PublicationsReport,
) -> ScoutResult<ExpertiseSummaries>
where
    M: LanguageModel + ?Sized,
{
    let mut summaries = ExpertiseSummaries::new();

    for (name, publications) in report.iter_mut() {
        let mut descriptions = Vec::new();

        for publication in publications.iter_mut() {
            let Some(abstract_text) = publication.abstract_text() else {
                continue;
            };
            let description = model.generate(&publication_prompt(abstract_text)).await?;
            let description = description.trim().to_string();
            publication.expertise = Some(description.clone());
            descriptions.push(description);
        }

        tracing::info!(name = %name, described = descriptions.len(), "Described publications");
        if descriptions.is_empty() {
            continue;
        }

        let summary = model.generate(&researcher_prompt(&descriptions)).await?;
        summaries.insert(name, summary.trim().to_string());
    }

    Ok(summaries)
}

/// Run the expertise pipeline. Outputs are written only after every prompt succeeded.
///
/// # Errors
///
/// Returns error if the input is missing or malformed, the model fails, or
/// an output cannot be written.
pub async fn run<M>(model: &M, options: &ExpertiseOptions) -> ScoutResult<RunSummary>
where
    M: LanguageModel + ?Sized,
{
    let mut report: PublicationsReport = output::read_json(&options.input)?;
    let summaries = annotate(model, &mut report).await?;

    output::write_json(&options.summary_output, &summaries)?;
    output::write_json(&options.annotated_output, &report)?;
    tracing::info!(researchers = summaries.len(), "Final expertise descriptions generated");

    Ok(RunSummary {
        processed: report.len(),
        unresolved: Vec::new(),
        written: vec![options.summary_output.clone(), options.annotated_output.clone()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_prompt() {
        let prompt = publication_prompt("We study tomato viruses.");
        assert!(prompt.contains("no longer than 80 words"));
        assert!(prompt.contains("Abstract: We study tomato viruses."));
        assert!(prompt.ends_with("Expertise:"));
    }

    #[test]
    fn test_researcher_prompt_joins_lines() {
        let prompt = researcher_prompt(&["one".to_string(), "two".to_string()]);
        assert!(prompt.contains("no more than 150 words"));
        assert!(prompt.contains("one\ntwo"));
        assert!(prompt.ends_with("Researcher's Expertise:"));
    }
}
