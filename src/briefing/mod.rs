//! Briefing composition
//!
//! This module turns fetched METAR/TAF reports into the briefing
//! document returned to the caller:
//! - prompt construction for the AI backend
//! - deterministic fallback rendering when the AI path is unavailable
//! - the multi-layer selection logic between the two

pub mod fallback;
pub mod prompt;

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{MetarReport, TafReport};
use crate::summarizer::SummaryBackend;

pub use fallback::{route_label, FallbackReason};

/// Returned when neither METAR nor TAF raw text is available.
///
/// Intentionally a plain string rather than the HTML skeleton, matching
/// long-standing front-end behavior.
pub const NOT_ENOUGH_DATA: &str = "Not enough data to generate a summary.";

/// Builds the briefing document from fetched reports.
///
/// Holds the process-wide AI backend handle (absent when no credential
/// was configured) and the pilot profile string, both immutable after
/// construction.
pub struct BriefingComposer {
    backend: Option<Arc<dyn SummaryBackend>>,
    pilot_profile: String,
}

impl BriefingComposer {
    /// Create a composer with an optional AI backend
    #[must_use]
    pub fn new(backend: Option<Arc<dyn SummaryBackend>>, pilot_profile: String) -> Self {
        Self {
            backend,
            pilot_profile,
        }
    }

    /// Compose the briefing document for one request.
    ///
    /// Never fails: every AI-path failure is converted into a fallback
    /// document, so the caller always receives well-formed output.
    pub async fn compose(&self, metars: &[MetarReport], tafs: &[TafReport]) -> String {
        let metar_block = join_raw_texts(metars.iter().map(|m| m.raw_ob.as_deref()));
        let taf_block = join_raw_texts(tafs.iter().map(|t| t.raw_taf.as_deref()));

        if metar_block.is_empty() && taf_block.is_empty() {
            info!("No raw report text available, skipping AI summarization");
            return NOT_ENOUGH_DATA.to_string();
        }

        let Some(backend) = &self.backend else {
            info!("AI backend not configured, rendering fallback briefing");
            return fallback::render(metars, FallbackReason::Unconfigured);
        };

        let prompt = prompt::build(&self.pilot_profile, metars, &metar_block, &taf_block);

        match backend.generate(&prompt).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("AI backend invocation failed: {e}");
                fallback::render(metars, FallbackReason::InvocationFailed)
            }
        }
    }
}

fn join_raw_texts<'a>(raw_texts: impl Iterator<Item = Option<&'a str>>) -> String {
    raw_texts
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BriefingError;
    use crate::Result;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubBackend {
        reply: Result<&'static str>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn ok(reply: &'static str) -> Self {
            Self {
                reply: Ok(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(BriefingError::invocation("stub failure")),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SummaryBackend for StubBackend {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok((*text).to_string()),
                Err(_) => Err(BriefingError::invocation("stub failure")),
            }
        }
    }

    fn metar(station: &str, raw: &str) -> MetarReport {
        MetarReport::new(station, raw)
    }

    #[tokio::test]
    async fn test_empty_data_short_circuits_without_ai_call() {
        let backend = Arc::new(StubBackend::ok("unused"));
        let composer = BriefingComposer::new(Some(backend.clone()), "VFR".into());

        let summary = composer.compose(&[], &[]).await;

        assert_eq!(summary, NOT_ENOUGH_DATA);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_reports_without_raw_text_also_short_circuit() {
        let backend = Arc::new(StubBackend::ok("unused"));
        let composer = BriefingComposer::new(Some(backend.clone()), "VFR".into());

        let metars = vec![MetarReport {
            station_id: Some("KJFK".into()),
            raw_ob: None,
            extra: serde_json::Map::new(),
        }];

        let summary = composer.compose(&metars, &[]).await;
        assert_eq!(summary, NOT_ENOUGH_DATA);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_backend_renders_favorable_fallback() {
        let composer = BriefingComposer::new(None, "VFR".into());
        let metars = vec![metar("KJFK", "KJFK 121251Z 31008KT 10SM FEW250 03/M08 A3033")];

        let summary = composer.compose(&metars, &[]).await;

        assert!(summary.contains("briefing-content"));
        assert!(summary.contains("Conditions appear favorable"));
        assert!(summary.contains("KJFK"));
    }

    #[tokio::test]
    async fn test_invocation_failure_renders_unavailable_fallback() {
        let backend = Arc::new(StubBackend::failing());
        let composer = BriefingComposer::new(Some(backend.clone()), "VFR".into());
        let metars = vec![metar("KJFK", "KJFK 121251Z 31008KT 10SM FEW250 03/M08 A3033")];

        let summary = composer.compose(&metars, &[]).await;

        assert_eq!(backend.call_count(), 1);
        assert!(summary.contains("briefing-content"));
        assert!(summary.contains("temporarily unavailable"));
    }

    #[tokio::test]
    async fn test_successful_ai_output_is_returned_unmodified() {
        let backend = Arc::new(StubBackend::ok("<p>anything the model says</p>"));
        let composer = BriefingComposer::new(Some(backend), "VFR".into());
        let metars = vec![metar("KJFK", "KJFK 121251Z 31008KT 10SM FEW250 03/M08 A3033")];

        let summary = composer.compose(&metars, &[]).await;
        assert_eq!(summary, "<p>anything the model says</p>");
    }

    #[tokio::test]
    async fn test_compose_is_idempotent_with_deterministic_backend() {
        let backend = Arc::new(StubBackend::ok("<div>stable</div>"));
        let composer = BriefingComposer::new(Some(backend), "VFR".into());
        let metars = vec![metar("KJFK", "KJFK 121251Z 31008KT 10SM FEW250 03/M08 A3033")];
        let tafs = vec![TafReport::new("KJFK", "KJFK 121130Z 1212/1318 31010KT P6SM")];

        let first = composer.compose(&metars, &tafs).await;
        let second = composer.compose(&metars, &tafs).await;
        assert_eq!(first, second);
    }
}
