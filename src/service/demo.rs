// Demo mode: local stand-in for the translation service
//
// Lets the TUI be exercised without a running backend. Behaves like a cold
// hosted model: the first request reports a warm-up error, later requests
// succeed after a short simulated latency.
//
// Run with: LEGALIS_DEMO=1 cargo run --release

use super::{TranslationOutcome, TranslationRequest, TranslationService};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Legal vocabulary rendered in formal (Vidhik) Hindi
const GLOSSARY: &[(&str, &str)] = &[
    ("act", "अधिनियम"),
    ("petition", "याचिका"),
    ("petitioner", "याचिकाकर्ता"),
    ("respondent", "प्रत्यर्थी"),
    ("court", "न्यायालय"),
    ("magistrate", "मजिस्ट्रेट"),
    ("judge", "न्यायाधीश"),
    ("judgment", "निर्णय"),
    ("bail", "जमानत"),
    ("application", "आवेदन"),
    ("rejected", "अस्वीकार किया"),
    ("dismissed", "खारिज किया"),
    ("appeal", "अपील"),
    ("accused", "अभियुक्त"),
    ("section", "धारा"),
    ("law", "विधि"),
    ("contract", "संविदा"),
    ("evidence", "साक्ष्य"),
    ("witness", "साक्षी"),
    ("order", "आदेश"),
    ("the", ""),
    ("is", "है"),
    ("was", "था"),
    ("and", "और"),
    ("of", "का"),
];

/// Message the demo backend sends while "warming up"
const DEMO_WARMUP_ERROR: &str = "Model is waking up. Please try again in 30 seconds.";

/// Translation service that renders text locally
pub struct DemoTranslationService {
    latency: Duration,
    warmed_up: AtomicBool,
}

impl DemoTranslationService {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(1200))
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            warmed_up: AtomicBool::new(false),
        }
    }
}

impl Default for DemoTranslationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationService for DemoTranslationService {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        tokio::time::sleep(self.latency).await;

        if !self.warmed_up.swap(true, Ordering::SeqCst) {
            tracing::debug!("Demo service cold start");
            return TranslationOutcome::ServiceError {
                error: json!(DEMO_WARMUP_ERROR),
            };
        }

        TranslationOutcome::Success {
            translated_text: render(&request.text),
        }
    }
}

/// Word-by-word glossary substitution, keeping punctuation and unknown words
pub fn render(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| {
            let trimmed = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
            let punctuation = &word[trimmed.len()..];
            let lowered = trimmed.to_lowercase();

            match GLOSSARY.iter().find(|(english, _)| *english == lowered) {
                Some((_, "")) if punctuation.is_empty() => None,
                Some((_, hindi)) => Some(format!("{}{}", hindi, devanagari_stop(punctuation))),
                None => Some(word.to_string()),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full stops become the danda
fn devanagari_stop(punctuation: &str) -> String {
    punctuation.replace('.', "।")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::OutcomeKind;

    #[test]
    fn glossary_rendering() {
        assert_eq!(render("The petition is dismissed."), "याचिका है खारिज किया।");
        assert_eq!(render("Section 438"), "धारा 438");
    }

    #[tokio::test]
    async fn first_call_warms_up_then_translates() {
        let service = DemoTranslationService::with_latency(Duration::ZERO);
        let request = TranslationRequest::new("bail application");

        let first = service.translate(&request).await;
        assert_eq!(first.kind(), OutcomeKind::ServiceError);

        match service.translate(&request).await {
            TranslationOutcome::Success { translated_text } => {
                assert_eq!(translated_text, "जमानत आवेदन");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }
}
