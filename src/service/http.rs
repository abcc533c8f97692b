//! HTTP translation service
//!
//! Wire contract:
//! - Request: `POST <url>` with JSON `{"text": "..."}`
//! - 2xx + string `translated_text` → success
//! - 2xx + `error` field (any value) → service error
//! - everything else → transport failure
//!
//! When both fields are present a non-empty `translated_text` wins; an empty
//! one defers to `error`.

use super::{TransportError, TranslationOutcome, TranslationRequest, TranslationService};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Translation service reached over HTTP
pub struct HttpTranslationService {
    client: reqwest::Client,
    url: String,
}

impl HttpTranslationService {
    /// Create a client for the given endpoint
    ///
    /// The timeout is the only deadline on a request; when it elapses the
    /// call ends as a transport failure.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TranslationService for HttpTranslationService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationOutcome {
        let started = Instant::now();
        tracing::debug!(chars = request.text.chars().count(), "Sending translation request");

        let response = match self.client.post(&self.url).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = TransportError::from(e);
                tracing::warn!("Translation request failed: {}", error);
                return TranslationOutcome::TransportFailure(error);
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Translation service returned {}", status);
            return TranslationOutcome::TransportFailure(TransportError::Status(status.as_u16()));
        }

        let outcome = match response.text().await {
            Ok(body) => interpret_body(&body),
            Err(e) => TranslationOutcome::TransportFailure(TransportError::Body(e.to_string())),
        };

        tracing::info!(
            outcome = ?outcome.kind(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Translation request finished"
        );
        outcome
    }
}

/// Classify a 2xx response body
///
/// `translated_text` wins when it is a non-empty string. Otherwise the
/// presence of `error` (even `null`) marks a service error, and an empty
/// string translation on its own is still a success.
pub(crate) fn interpret_body(body: &str) -> TranslationOutcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return TranslationOutcome::TransportFailure(TransportError::Body(e.to_string()));
        }
    };

    let Some(fields) = value.as_object() else {
        return TranslationOutcome::TransportFailure(TransportError::Body(
            "expected a JSON object".to_string(),
        ));
    };

    let translated = fields.get("translated_text").and_then(Value::as_str);

    match (translated, fields.get("error")) {
        (Some(text), _) if !text.is_empty() => TranslationOutcome::Success {
            translated_text: text.to_string(),
        },
        (_, Some(error)) => {
            tracing::info!("Translation service reported an error: {}", error);
            TranslationOutcome::ServiceError {
                error: error.clone(),
            }
        }
        (Some(text), None) => {
            tracing::debug!("Translation service returned an empty translation");
            TranslationOutcome::Success {
                translated_text: text.to_string(),
            }
        }
        (None, None) => TranslationOutcome::TransportFailure(TransportError::UnexpectedShape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::OutcomeKind;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return the translate URL
    async fn spawn_service(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/translate", addr)
    }

    fn service(url: String) -> HttpTranslationService {
        HttpTranslationService::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn posts_text_and_reads_translation() {
        let router = Router::new().route(
            "/translate",
            post(|Json(body): Json<Value>| async move {
                let text = body["text"].as_str().unwrap_or_default().to_string();
                Json(json!({ "translated_text": format!("अनुवाद: {}", text) }))
            }),
        );
        let url = spawn_service(router).await;

        let outcome = service(url)
            .translate(&TranslationRequest::new("The petition is dismissed."))
            .await;

        match outcome {
            TranslationOutcome::Success { translated_text } => {
                assert_eq!(translated_text, "अनुवाद: The petition is dismissed.");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_field_is_a_service_error() {
        let router = Router::new().route(
            "/translate",
            post(|| async { Json(json!({ "error": "Model is waking up." })) }),
        );
        let url = spawn_service(router).await;

        let outcome = service(url).translate(&TranslationRequest::new("Act")).await;
        assert_eq!(outcome.kind(), OutcomeKind::ServiceError);
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_failure() {
        let router = Router::new().route(
            "/translate",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "boom" })),
                )
            }),
        );
        let url = spawn_service(router).await;

        let outcome = service(url).translate(&TranslationRequest::new("Act")).await;
        assert!(matches!(
            outcome,
            TranslationOutcome::TransportFailure(TransportError::Status(500))
        ));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_failure() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = service(format!("http://{}/translate", addr))
            .translate(&TranslationRequest::new("Act"))
            .await;
        assert_eq!(outcome.kind(), OutcomeKind::TransportFailure);
    }

    #[test]
    fn body_classification() {
        assert_eq!(
            interpret_body(r#"{"translated_text": "याचिका"}"#).kind(),
            OutcomeKind::Success
        );
        assert_eq!(
            interpret_body(r#"{"error": null}"#).kind(),
            OutcomeKind::ServiceError
        );
        assert_eq!(
            interpret_body(r#"{"translated_text": "", "error": "cold"}"#).kind(),
            OutcomeKind::ServiceError
        );
        assert!(matches!(
            interpret_body(r#"{"translated_text": ""}"#),
            TranslationOutcome::Success { ref translated_text } if translated_text.is_empty()
        ));
        assert!(matches!(
            interpret_body(r#"{"status": "ok"}"#),
            TranslationOutcome::TransportFailure(TransportError::UnexpectedShape)
        ));
        assert!(matches!(
            interpret_body(r#"{"translated_text": 42}"#),
            TranslationOutcome::TransportFailure(TransportError::UnexpectedShape)
        ));
        assert!(matches!(
            interpret_body("<html>502 Bad Gateway</html>"),
            TranslationOutcome::TransportFailure(TransportError::Body(_))
        ));
        assert!(matches!(
            interpret_body(r#"["translated_text"]"#),
            TranslationOutcome::TransportFailure(TransportError::Body(_))
        ));
    }
}
