//! Session controller - the only writer of [`Session`]
//!
//! Three triggers drive every state change:
//! - text edit → [`SessionController::on_input_change`]
//! - submit → [`SessionController::begin_submit`] + [`SessionController::complete`]
//!   (or [`SessionController::submit`] when the caller can await in place)
//! - copy → [`SessionController::copy`]
//!
//! Submission is split in two so the TUI can keep editing while the request
//! runs on a spawned task: `begin_submit` flips the session to pending and
//! hands out a [`PendingTranslation`]; the event loop feeds the outcome back
//! through `complete`.

use super::{
    Session, Status, CONNECTION_ERROR_MESSAGE, COPY_ACK_WINDOW, WARMING_UP_MESSAGE,
};
use crate::clipboard::ClipboardSink;
use crate::service::{
    OutcomeKind, TransportError, TranslationOutcome, TranslationRequest, TranslationService,
};
use std::sync::Arc;
use tokio::time::Instant;

/// Result of a copy request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Output written to the clipboard and acknowledged
    Copied,
    /// Output is empty, nothing happened
    NothingToCopy,
    /// Clipboard refused the write; session left untouched
    Rejected,
}

/// A request that has been admitted but not yet sent
///
/// Holds a snapshot of the input, so edits made while the request is in
/// flight never change what is sent.
pub struct PendingTranslation {
    request: TranslationRequest,
    service: Arc<dyn TranslationService>,
}

impl PendingTranslation {
    pub fn request(&self) -> &TranslationRequest {
        &self.request
    }

    /// Run the request on the current task
    pub async fn dispatch(self) -> TranslationOutcome {
        self.service.translate(&self.request).await
    }

    /// Run the request on its own task
    ///
    /// A panic inside the service is reported as a transport failure, so the
    /// session always gets an outcome and never stays pending.
    pub async fn dispatch_detached(self) -> TranslationOutcome {
        match tokio::spawn(self.dispatch()).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Translation task failed: {}", e);
                TranslationOutcome::TransportFailure(TransportError::Aborted(e.to_string()))
            }
        }
    }
}

pub struct SessionController {
    session: Session,
    service: Arc<dyn TranslationService>,
    clipboard: Box<dyn ClipboardSink>,
}

impl SessionController {
    pub fn new(service: Arc<dyn TranslationService>, clipboard: Box<dyn ClipboardSink>) -> Self {
        tracing::debug!("Session started (service: {})", service.name());
        Self {
            session: Session::new(),
            service,
            clipboard,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the input text. Allowed at any time, including while pending.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.session.input_text = text.into();
    }

    /// Admit a submission, or return `None` when a guard blocks it
    ///
    /// Guards: empty input, or a request already outstanding. Neither is an
    /// error and neither changes state.
    pub fn begin_submit(&mut self) -> Option<PendingTranslation> {
        if self.session.input_text.is_empty() {
            tracing::debug!("Submit ignored: input is empty");
            return None;
        }
        if self.session.is_pending() {
            tracing::debug!("Submit ignored: a translation is already pending");
            return None;
        }

        self.session.status = Status::Pending;
        Some(PendingTranslation {
            request: TranslationRequest::new(self.session.input_text.clone()),
            service: Arc::clone(&self.service),
        })
    }

    /// Apply the outcome of the outstanding request and return to idle
    pub fn complete(&mut self, outcome: TranslationOutcome) -> OutcomeKind {
        let kind = outcome.kind();

        if !self.session.is_pending() {
            tracing::warn!("Dropping {:?} outcome: no translation was pending", kind);
            return kind;
        }

        self.session.output_text = match outcome {
            TranslationOutcome::Success { translated_text } => translated_text,
            TranslationOutcome::ServiceError { .. } => WARMING_UP_MESSAGE.to_string(),
            TranslationOutcome::TransportFailure(error) => {
                tracing::error!("Error: {}", error);
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        };
        self.session.status = Status::Idle;
        kind
    }

    /// Submit and await the outcome in place
    ///
    /// Returns `None` when a guard blocked the submission.
    pub async fn submit(&mut self) -> Option<OutcomeKind> {
        let pending = self.begin_submit()?;
        let outcome = pending.dispatch_detached().await;
        Some(self.complete(outcome))
    }

    /// Copy the output to the clipboard and start (or restart) the
    /// acknowledgment window
    pub fn copy(&mut self) -> CopyOutcome {
        if self.session.output_text.is_empty() {
            return CopyOutcome::NothingToCopy;
        }

        match self.clipboard.write(&self.session.output_text) {
            Ok(()) => {
                self.session.copy_ack_until = Some(Instant::now() + COPY_ACK_WINDOW);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {:#}", e);
                CopyOutcome::Rejected
            }
        }
    }
}
