// Relay backend - small HTTP API in front of the hosted inference engine
//
// This is the service the translation client talks to by default. It accepts
// `{"text": ...}`, asks the engine for a translation, and always answers 200
// with either `{"translated_text": ...}` or `{"error": ...}`, so clients can
// tell "service reachable but not ready" apart from transport problems.

pub mod engine;
pub mod error;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use crate::config::Config;
use engine::{GlossaryEngine, GradioEngine, InferenceEngine};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Error text returned while the engine is spinning up
pub const WAKING_UP_ERROR: &str = "Model is waking up. Please try again in 30 seconds.";

/// Shared state for the relay handlers
#[derive(Clone)]
pub struct RelayState {
    engine: Arc<dyn InferenceEngine>,
}

impl RelayState {
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateBody {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TranslateReply {
    Translated { translated_text: String },
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct HomeReply {
    pub message: &'static str,
}

/// Pick the engine: the local glossary in demo mode, otherwise the Space
pub fn engine_from_config(config: &Config) -> Result<Arc<dyn InferenceEngine>> {
    if config.demo_mode {
        return Ok(Arc::new(GlossaryEngine));
    }
    Ok(Arc::new(GradioEngine::from_config(&config.backend)?))
}

/// Build the relay router
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until `shutdown` resolves
pub async fn serve(
    bind_addr: SocketAddr,
    state: RelayState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("Relay listening on {}", bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Relay shut down gracefully");
    Ok(())
}

async fn home() -> Json<HomeReply> {
    Json(HomeReply {
        message: "Legalis API is running via HF Spaces",
    })
}

async fn translate(
    State(state): State<RelayState>,
    Json(body): Json<TranslateBody>,
) -> Json<TranslateReply> {
    match state.engine.predict(&body.text).await {
        Ok(translated_text) => Json(TranslateReply::Translated { translated_text }),
        Err(e) => {
            tracing::error!("Error: {}", e);
            let error = if e.is_cold_start() {
                WAKING_UP_ERROR.to_string()
            } else {
                e.to_string()
            };
            Json(TranslateReply::Failed { error })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::EngineError;
    use crate::clipboard::SystemClipboard;
    use crate::service::{
        HttpTranslationService, OutcomeKind, TranslationOutcome, TranslationRequest,
        TranslationService,
    };
    use crate::session::SessionController;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::time::Duration;

    /// Engine that answers with a fixed result
    struct FixedEngine(Result<String, EngineError>);

    #[async_trait]
    impl InferenceEngine for FixedEngine {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn predict(&self, _text: &str) -> Result<String, EngineError> {
            self.0.clone()
        }
    }

    async fn spawn_relay(engine: impl InferenceEngine + 'static) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(RelayState::new(Arc::new(engine)));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn home_reports_running() {
        let base = spawn_relay(FixedEngine(Ok(String::new()))).await;
        let body: Value = reqwest::get(&base).await.unwrap().json().await.unwrap();
        assert_eq!(body["message"], "Legalis API is running via HF Spaces");
    }

    #[tokio::test]
    async fn client_receives_relayed_translation() {
        let base = spawn_relay(FixedEngine(Ok("अधिनियम".to_string()))).await;
        let client =
            HttpTranslationService::new(format!("{}/translate", base), Duration::from_secs(5))
                .unwrap();

        match client.translate(&TranslationRequest::new("Act")).await {
            TranslationOutcome::Success { translated_text } => {
                assert_eq!(translated_text, "अधिनियम")
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn cold_engine_becomes_waking_up_error() {
        let base = spawn_relay(FixedEngine(Err(EngineError::Http {
            status: 504,
            body: String::new(),
        })))
        .await;

        let body: Value = reqwest::Client::new()
            .post(format!("{}/translate", base))
            .json(&serde_json::json!({ "text": "Act" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["error"], WAKING_UP_ERROR);
    }

    #[tokio::test]
    async fn other_engine_failures_are_service_errors_for_the_client() {
        let base = spawn_relay(FixedEngine(Err(EngineError::Failed(
            "CUDA out of memory".to_string(),
        ))))
        .await;
        let client =
            HttpTranslationService::new(format!("{}/translate", base), Duration::from_secs(5))
                .unwrap();

        let outcome = client.translate(&TranslationRequest::new("Act")).await;
        assert_eq!(outcome.kind(), OutcomeKind::ServiceError);
    }

    #[tokio::test]
    async fn empty_relayed_translation_is_not_a_connection_error() {
        // The glossary drops bare articles, so "The" renders to ""
        let base = spawn_relay(GlossaryEngine).await;
        let service =
            HttpTranslationService::new(format!("{}/translate", base), Duration::from_secs(5))
                .unwrap();
        let mut controller = SessionController::new(Arc::new(service), Box::new(SystemClipboard));

        controller.on_input_change("The");
        let kind = controller.submit().await;

        assert_eq!(kind, Some(OutcomeKind::Success));
        assert_eq!(controller.session().output_text(), "");
        assert!(!controller.session().is_pending());
    }
}
