//! Transport-level failures of a translation call

use std::fmt;

/// Why a translation request never produced a usable service response
#[derive(Debug, Clone)]
pub enum TransportError {
    /// Connection refused, DNS failure, TLS failure
    Connect(String),
    /// HTTP client timeout elapsed
    Timeout,
    /// Service answered with a non-2xx status
    Status(u16),
    /// Body could not be read or is not JSON
    Body(String),
    /// JSON body carries neither `translated_text` nor `error`
    UnexpectedShape,
    /// Request could not be sent for another reason
    Request(String),
    /// The task running the request died before producing an outcome
    Aborted(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(msg) => write!(f, "Connection failed: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Status(code) => write!(f, "Service returned HTTP {}", code),
            Self::Body(msg) => write!(f, "Malformed response body: {}", msg),
            Self::UnexpectedShape => {
                write!(f, "Response has neither translated_text nor error")
            }
            Self::Request(msg) => write!(f, "Request failed: {}", msg),
            Self::Aborted(msg) => write!(f, "Request task aborted: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_decode() || e.is_body() {
            Self::Body(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}
