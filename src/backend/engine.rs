// Inference engine client - calls the hosted Gradio Space
//
// Gradio's REST protocol is two requests:
//
// ```
// POST {space}/call/{api}            {"data": [text]}  ->  {"event_id": "..."}
// GET  {space}/call/{api}/{event_id}                   ->  text/event-stream
// ```
//
// The event stream carries `generating`/`heartbeat` events while the job runs
// and ends with either:
// ```
// event: complete
// data: ["<translation>"]
// ```
// or `event: error` with an optional message.

use super::error::EngineError;
use crate::config::BackendConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Anything the relay can hand legal text to
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Human-readable description for the startup banner and logs
    fn describe(&self) -> String;

    async fn predict(&self, text: &str) -> Result<String, EngineError>;
}

/// Client for a Gradio Space endpoint
pub struct GradioEngine {
    client: reqwest::Client,
    base_url: String,
    api_name: String,
}

#[derive(Debug, Deserialize)]
struct QueuedJob {
    event_id: String,
}

impl GradioEngine {
    pub fn new(base_url: impl Into<String>, api_name: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_name: api_name.trim_start_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(
            config.space_url(),
            &config.api_name,
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn call_url(&self) -> String {
        format!("{}/call/{}", self.base_url, self.api_name)
    }

    /// Queue a prediction and return its event id
    async fn submit_job(&self, text: &str) -> Result<String, EngineError> {
        let response = self
            .client
            .post(self.call_url())
            .json(&json!({ "data": [text] }))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let job: QueuedJob = response.json().await?;
        tracing::debug!("Engine queued job {}", job.event_id);
        Ok(job.event_id)
    }

    /// Follow the job's event stream until it completes or fails
    async fn await_result(&self, event_id: &str) -> Result<String, EngineError> {
        let url = format!("{}/{}", self.call_url(), event_id);
        let response = ensure_success(self.client.get(url).send().await?).await?;

        let mut parser = SseParser::default();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk: Bytes = chunk?;
            for event in parser.push(&chunk) {
                if let Some(result) = event.into_result() {
                    return result;
                }
            }
        }

        if let Some(result) = parser.finish().and_then(SseEvent::into_result) {
            return result;
        }

        Err(EngineError::Protocol(
            "event stream ended before completion".to_string(),
        ))
    }
}

#[async_trait]
impl InferenceEngine for GradioEngine {
    fn describe(&self) -> String {
        format!("{} (/{})", self.base_url, self.api_name)
    }

    async fn predict(&self, text: &str) -> Result<String, EngineError> {
        let event_id = self.submit_job(text).await?;
        self.await_result(&event_id).await
    }
}

/// Turn non-2xx responses into [`EngineError::Http`] with the body attached
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, EngineError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(EngineError::Http {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

/// Offline engine backed by the demo glossary, for `legalis serve --demo`
pub struct GlossaryEngine;

#[async_trait]
impl InferenceEngine for GlossaryEngine {
    fn describe(&self) -> String {
        "local glossary (demo)".to_string()
    }

    async fn predict(&self, text: &str) -> Result<String, EngineError> {
        Ok(crate::service::render_glossary(text))
    }
}

// ============================================================================
// SSE parsing
// ============================================================================

/// One server-sent event: its name and joined data lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SseEvent {
    pub event: String,
    pub data: String,
}

impl SseEvent {
    /// `Some` for terminal events, `None` for progress and heartbeats
    fn into_result(self) -> Option<Result<String, EngineError>> {
        match self.event.as_str() {
            "complete" => Some(extract_output(&self.data)),
            "error" => {
                let message = match self.data.trim() {
                    "" | "null" => "the engine reported an error".to_string(),
                    other => serde_json::from_str::<String>(other)
                        .unwrap_or_else(|_| other.to_string()),
                };
                Some(Err(EngineError::Failed(message)))
            }
            _ => None,
        }
    }
}

/// The first output of a `complete` payload (`["..."]`)
fn extract_output(data: &str) -> Result<String, EngineError> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| EngineError::Protocol(format!("invalid complete payload: {}", e)))?;

    match value.get(0) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(EngineError::Protocol(format!(
            "expected a string output, got {}",
            other
        ))),
        None => Err(EngineError::Protocol(format!(
            "complete payload has no outputs: {}",
            data
        ))),
    }
}

/// Incremental SSE parser; handles events and UTF-8 split across chunks
#[derive(Debug, Default)]
pub(crate) struct SseParser {
    line_buffer: Vec<u8>,
    event: String,
    data: Vec<String>,
}

impl SseParser {
    /// Feed a chunk, returning every event it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.line_buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(newline_pos) = self.line_buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.line_buffer.drain(..=newline_pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.is_empty() {
                events.extend(self.dispatch());
            } else if let Some(name) = line.strip_prefix("event:") {
                self.event = name.trim().to_string();
            } else if let Some(data) = line.strip_prefix("data:") {
                self.data.push(data.trim_start().to_string());
            }
            // Comments (":") and unknown fields are ignored
        }
        events
    }

    /// Flush a trailing event that was not followed by a blank line
    pub fn finish(&mut self) -> Option<SseEvent> {
        if !self.line_buffer.is_empty() {
            let mut rest = std::mem::take(&mut self.line_buffer);
            rest.push(b'\n');
            if let Some(event) = self.push(&rest).pop() {
                return Some(event);
            }
        }
        self.dispatch()
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        if self.event.is_empty() && self.data.is_empty() {
            return None;
        }
        let event = SseEvent {
            event: std::mem::take(&mut self.event),
            data: std::mem::take(&mut self.data).join("\n"),
        };
        Some(event)
    }
}
