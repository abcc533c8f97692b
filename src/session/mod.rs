//! Translation session state
//!
//! A [`Session`] is the single mutable unit of interaction state for one run
//! of the front end. Only the [`SessionController`] mutates it; everything
//! else gets a shared reference for rendering.

mod controller;

pub use controller::{CopyOutcome, PendingTranslation, SessionController};

use std::time::Duration;
use tokio::time::Instant;

/// How long the copy acknowledgment stays visible
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Output shown when the service reports a logical error (cold model)
pub const WARMING_UP_MESSAGE: &str = "Model is warming up... please wait 20s and try again.";

/// Output shown when the service could not be reached
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server.";

/// Whether a request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input_text: String,
    output_text: String,
    status: Status,
    /// Deadline of the current copy acknowledgment. Each copy replaces it,
    /// so an older copy can never end a newer acknowledgment early.
    copy_ack_until: Option<Instant>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Last translation, or an advisory/error message
    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// True until [`COPY_ACK_WINDOW`] has elapsed since the latest copy
    pub fn copy_acknowledged(&self) -> bool {
        self.copy_ack_until
            .is_some_and(|until| Instant::now() < until)
    }
}
