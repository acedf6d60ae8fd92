//! Fetch-with-fallback resolution of candidate URLs.
//!
//! Candidates are probed strictly in order. The first one answering 200 is
//! adopted and nothing after it is probed. Any failure (non-200, network
//! error, timeout) only moves on to the next candidate after a fixed delay.

use std::time::Duration;

use crate::candidates::Candidate;
use crate::error::ClientResult;

/// How a candidate URL is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// HEAD request; cheap, no body.
    Head,
    /// GET request; the body is kept so the page need not be fetched twice.
    Get,
}

/// Something that can check whether a URL exists.
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Probe `url`. `Ok` means HTTP 200; the body is present for [`ProbeMethod::Get`].
    async fn probe(&self, url: &str, method: ProbeMethod) -> ClientResult<Option<String>>;
}

/// Outcome of resolving one name.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A candidate answered 200.
    Resolved {
        /// The winning candidate.
        candidate: Candidate,
        /// Page body, when probed with GET.
        body: Option<String>,
    },
    /// No candidate answered 200.
    Unresolved {
        /// Every URL that was probed, in order.
        tried: Vec<String>,
    },
}

impl Resolution {
    /// The resolved candidate, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Resolved { candidate, .. } => Some(candidate),
            Self::Unresolved { .. } => None,
        }
    }

    /// Whether a candidate resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Probe candidates in order until one resolves.
pub async fn resolve<P>(
    prober: &P,
    candidates: &[Candidate],
    method: ProbeMethod,
    delay: Duration,
) -> Resolution
where
    P: Prober + ?Sized,
{
    let mut tried = Vec::with_capacity(candidates.len());

    for (i, candidate) in candidates.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tried.push(candidate.url.clone());
        match prober.probe(&candidate.url, method).await {
            Ok(body) => {
                tracing::info!(url = %candidate.url, attempts = tried.len(), "Resolved profile");
                return Resolution::Resolved { candidate: candidate.clone(), body };
            }
            Err(e) => {
                tracing::debug!(url = %candidate.url, error = %e, "Candidate did not resolve");
            }
        }
    }

    tracing::warn!(attempts = tried.len(), "No candidate URL resolved");
    Resolution::Unresolved { tried }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::ClientError;

    /// Answers 200 for a fixed set of URLs and records every probe.
    struct FakeProber {
        found: Vec<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeProber {
        fn new(found: Vec<&'static str>) -> Self {
            Self { found, calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Prober for FakeProber {
        async fn probe(&self, url: &str, method: ProbeMethod) -> ClientResult<Option<String>> {
            self.calls.lock().unwrap().push(url.to_string());
            if self.found.iter().any(|found| *found == url) {
                Ok((method == ProbeMethod::Get).then(|| format!("<html>{url}</html>")))
            } else {
                Err(ClientError::not_found(url))
            }
        }
    }

    fn candidates(urls: &[&str]) -> Vec<Candidate> {
        urls.iter().map(|u| Candidate { slug: (*u).to_string(), url: (*u).to_string() }).collect()
    }

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let prober = FakeProber::new(vec!["b", "c"]);
        let result =
            resolve(&prober, &candidates(&["a", "b", "c"]), ProbeMethod::Head, Duration::ZERO)
                .await;

        assert_eq!(result.candidate().map(|c| c.url.as_str()), Some("b"));
        assert_eq!(prober.calls(), vec!["a", "b"]);
        match result {
            Resolution::Resolved { body, .. } => assert!(body.is_none()),
            Resolution::Unresolved { .. } => panic!("expected resolution"),
        }
    }

    #[tokio::test]
    async fn test_get_keeps_body() {
        let prober = FakeProber::new(vec!["a"]);
        let result =
            resolve(&prober, &candidates(&["a"]), ProbeMethod::Get, Duration::ZERO).await;

        match result {
            Resolution::Resolved { body, .. } => {
                assert_eq!(body.as_deref(), Some("<html>a</html>"));
            }
            Resolution::Unresolved { .. } => panic!("expected resolution"),
        }
    }

    #[tokio::test]
    async fn test_unresolved_lists_every_url() {
        let prober = FakeProber::new(vec![]);
        let result =
            resolve(&prober, &candidates(&["a", "b", "c"]), ProbeMethod::Head, Duration::ZERO)
                .await;

        assert!(!result.is_resolved());
        match result {
            Resolution::Unresolved { tried } => assert_eq!(tried, vec!["a", "b", "c"]),
            Resolution::Resolved { .. } => panic!("expected no resolution"),
        }
        assert_eq!(prober.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let prober = FakeProber::new(vec![]);
        let result = resolve(&prober, &[], ProbeMethod::Head, Duration::ZERO).await;
        assert!(matches!(result, Resolution::Unresolved { ref tried } if tried.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_only_between_attempts() {
        let prober = FakeProber::new(vec![]);
        let start = tokio::time::Instant::now();
        resolve(&prober, &candidates(&["a", "b", "c"]), ProbeMethod::Head, Duration::from_secs(1))
            .await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
    }
}
