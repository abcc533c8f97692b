//! Inference engine errors and how the relay reports them

use std::fmt;

/// Failures talking to the hosted inference engine
#[derive(Debug, Clone)]
pub enum EngineError {
    /// Engine answered with a non-2xx status
    Http { status: u16, body: String },
    /// Could not reach the engine
    Network(String),
    /// Engine did not answer within the configured timeout
    Timeout,
    /// Engine reported a failure on its event stream (queue errors land here)
    Failed(String),
    /// Engine answered with something we cannot interpret
    Protocol(String),
}

impl EngineError {
    /// Whether the failure looks like a sleeping Space spinning up
    ///
    /// Gateway timeouts and queue errors are what a cold Space produces;
    /// callers should retry after a short wait. Any error text mentioning a
    /// 504 or the queue counts, whatever variant carries it.
    pub fn is_cold_start(&self) -> bool {
        match self {
            Self::Http { status, body } => *status == 504 || mentions_cold_start(body),
            Self::Timeout => true,
            Self::Failed(msg) | Self::Protocol(msg) | Self::Network(msg) => {
                mentions_cold_start(msg)
            }
        }
    }
}

fn mentions_cold_start(text: &str) -> bool {
    text.contains("504") || text.contains("Queue")
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { status, body } if body.is_empty() => {
                write!(f, "Engine returned HTTP {}", status)
            }
            Self::Http { status, body } => write!(f, "Engine returned HTTP {}: {}", status, body),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout => write!(f, "Engine timed out"),
            Self::Failed(msg) => write!(f, "Engine error: {}", msg),
            Self::Protocol(msg) => write!(f, "Unexpected engine response: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<reqwest::Error> for EngineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Http {
                status: status.as_u16(),
                body: String::new(),
            }
        } else if e.is_decode() {
            Self::Protocol(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_classification() {
        let gateway = EngineError::Http {
            status: 504,
            body: String::new(),
        };
        assert!(gateway.is_cold_start());
        assert!(EngineError::Failed("QueueError: queue is full".into()).is_cold_start());
        assert!(EngineError::Timeout.is_cold_start());

        let server = EngineError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert!(!server.is_cold_start());
        assert!(!EngineError::Network("dns".into()).is_cold_start());
        assert_eq!(server.to_string(), "Engine returned HTTP 500: boom");
    }

    #[test]
    fn queue_text_in_any_status_body_is_a_cold_start() {
        let overloaded = EngineError::Http {
            status: 503,
            body: "{\"detail\": \"Queue is full\"}".into(),
        };
        assert!(overloaded.is_cold_start());

        let proxied = EngineError::Network("upstream answered 504 Gateway Time-out".into());
        assert!(proxied.is_cold_start());
    }
}
