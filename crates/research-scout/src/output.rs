//! Names files, JSON outputs and the unresolved-names log.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ScoutError, ScoutResult};
use crate::models::Unresolved;

const UNRESOLVED_HEADER: &str =
    "The following names had no valid URLs. Tested URLs are listed below:";

/// Read a names file: one name per line, trimmed, blank lines skipped.
///
/// # Errors
///
/// Returns [`ScoutError::MissingInput`] if the file does not exist.
pub fn read_names(path: &Path) -> ScoutResult<Vec<String>> {
    if !path.exists() {
        return Err(ScoutError::MissingInput { path: path.to_path_buf() });
    }

    let text = fs::read_to_string(path).map_err(|e| ScoutError::io(path, e))?;
    Ok(text.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect())
}

/// Write `value` as pretty-printed UTF-8 JSON.
///
/// # Errors
///
/// Returns error if serialization or the write fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> ScoutResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| ScoutError::io(path, e))
}

/// Read a JSON file.
///
/// # Errors
///
/// Returns [`ScoutError::MissingInput`] if the file does not exist, or a
/// parse error if it is not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> ScoutResult<T> {
    if !path.exists() {
        return Err(ScoutError::MissingInput { path: path.to_path_buf() });
    }

    let text = fs::read_to_string(path).map_err(|e| ScoutError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Render the unresolved-names log.
#[must_use]
pub fn format_unresolved(unresolved: &[Unresolved]) -> String {
    let mut log = String::from(UNRESOLVED_HEADER);
    log.push('\n');

    for entry in unresolved {
        let _ = writeln!(log, "Name: {}", entry.name);
        log.push_str("Tested URLs:\n");
        for url in &entry.tried {
            let _ = writeln!(log, "  {url}");
        }
        log.push('\n');
    }

    log
}

/// Write the unresolved-names log. Nothing is written when every name resolved.
///
/// Returns whether a file was written.
///
/// # Errors
///
/// Returns error if the write fails.
pub fn write_unresolved_log(path: &Path, unresolved: &[Unresolved]) -> ScoutResult<bool> {
    if unresolved.is_empty() {
        return Ok(false);
    }

    fs::write(path, format_unresolved(unresolved)).map_err(|e| ScoutError::io(path, e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Publication, PublicationsReport, Researcher};

    #[test]
    fn test_read_names_trims_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        fs::write(&path, "  Jane Doe \n\n\t\nJohn Smith\r\n").unwrap();

        assert_eq!(read_names(&path).unwrap(), vec!["Jane Doe", "John Smith"]);
    }

    #[test]
    fn test_read_names_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_names(&path).unwrap_err();
        assert!(matches!(err, ScoutError::MissingInput { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unresolved_log_format() {
        let log = format_unresolved(&[Unresolved {
            name: "Jane Doe".to_string(),
            tried: vec!["https://a/1".to_string(), "https://a/2".to_string()],
        }]);

        assert_eq!(
            log,
            "The following names had no valid URLs. Tested URLs are listed below:\n\
             Name: Jane Doe\n\
             Tested URLs:\n  https://a/1\n  https://a/2\n\n"
        );
    }

    #[test]
    fn test_no_log_when_all_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid_urls.log");

        assert!(!write_unresolved_log(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &vec!["Müller"]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Müller"));
        let back: Vec<String> = read_json(&path).unwrap();
        assert_eq!(back, vec!["Müller"]);
    }

    #[test]
    fn test_researchers_survive_write_and_read() {
        let researchers = vec![
            Researcher {
                name: "Jane Doe".to_string(),
                profile_url: Some("https://www.crig.ugent.be/en/jane-doe".to_string()),
                portal_url: Some("https://research.ugent.be/web/person/jane-doe-0/en".to_string()),
                description: Some("Plant virologist".to_string()),
                research_focus: vec!["Viruses".to_string(), "Vectors".to_string()],
                research_disciplines: ["Virology".to_string(), "Plant biology".to_string()].into(),
                expertise: vec!["qPCR".to_string(), "Sequencing".to_string()],
                publications: vec!["Tomato viruses (2024)".to_string()],
            },
            Researcher { name: "John Smith".to_string(), ..Default::default() },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("researchers.json");
        write_json(&path, &researchers).unwrap();

        let back: Vec<Researcher> = read_json(&path).unwrap();
        assert_eq!(back, researchers);
    }

    #[test]
    fn test_publications_report_survives_write_and_read() {
        let mut report = PublicationsReport::new();
        report.insert(
            "Jane Doe",
            vec![
                Publication {
                    year: 2024,
                    url: "https://biblio.ugent.be/publication/1".to_string(),
                    r#abstract: Some("Tomato viruses.".to_string()),
                    kind: Some("Journal Article".to_string()),
                    doi: Some("10.1000/xyz123".to_string()),
                    classification: Some("A1".to_string()),
                    expertise: Some("Plant virology".to_string()),
                },
                Publication {
                    year: 2019,
                    url: "https://biblio.ugent.be/publication/2".to_string(),
                    ..Default::default()
                },
            ],
        );
        report.insert("Nobody Here", Vec::new());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publications.json");
        write_json(&path, &report).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""type": "Journal Article""#));

        let back: PublicationsReport = read_json(&path).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["Jane Doe", "Nobody Here"]);
    }
}
