//! Translation service client
//!
//! The session controller talks to the translation service through the
//! [`TranslationService`] trait. Every call resolves to exactly one
//! [`TranslationOutcome`]; transport problems are values, not errors, so the
//! controller can always return the session to idle.
//!
//! Two implementations exist:
//! - [`HttpTranslationService`]: `POST {"text": ...}` to the configured URL
//! - [`DemoTranslationService`]: local glossary renderer for demo mode

mod demo;
mod error;
mod http;

pub use demo::{render as render_glossary, DemoTranslationService};
pub use error::TransportError;
pub use http::HttpTranslationService;

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Body of the outbound request, snapshotted from the input text at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    pub text: String,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The three disjoint ways a translation call can end
#[derive(Debug, Clone)]
pub enum TranslationOutcome {
    /// Service answered with a translation
    Success { translated_text: String },
    /// Service was reachable but reported a logical failure (e.g. cold start).
    /// The payload is opaque and only kept for logging.
    ServiceError { error: serde_json::Value },
    /// Anything below the application protocol: network, status, body shape
    TransportFailure(TransportError),
}

/// Payload-free view of an outcome, for exit codes and log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    ServiceError,
    TransportFailure,
}

impl TranslationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success { .. } => OutcomeKind::Success,
            Self::ServiceError { .. } => OutcomeKind::ServiceError,
            Self::TransportFailure(_) => OutcomeKind::TransportFailure,
        }
    }
}

/// Anything that can turn English legal text into Hindi
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Perform one request. Never panics on remote failures; they are
    /// reported as [`TranslationOutcome::TransportFailure`].
    async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome;
}

/// Build the service selected by configuration
pub fn from_config(config: &Config) -> Result<Arc<dyn TranslationService>> {
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - translations are generated locally");
        return Ok(Arc::new(DemoTranslationService::new()));
    }

    let service = HttpTranslationService::new(
        config.api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    tracing::debug!(
        "Translation service endpoint: {} (timeout {}s)",
        service.url(),
        config.request_timeout_secs
    );
    Ok(Arc::new(service))
}
