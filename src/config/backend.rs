//! Relay backend configuration: bind address and hosted engine location

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "127.0.0.1:8000";
const DEFAULT_SPACE: &str = "ranveer0323/legalis-engine";
const DEFAULT_API_NAME: &str = "/translate";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Address the relay listens on
    pub bind_addr: SocketAddr,
    /// Hosted Gradio Space: `owner/name` id or full URL
    pub space: String,
    /// Gradio endpoint name, e.g. "/translate"
    pub api_name: String,
    /// Upper bound for one engine round trip (cold Spaces are slow)
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            space: DEFAULT_SPACE.to_string(),
            api_name: DEFAULT_API_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Backend settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileBackend {
    pub bind_addr: Option<String>,
    pub space: Option<String>,
    pub api_name: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Create from file config with env overrides and defaults
    pub fn from_file(
        file: Option<FileBackend>,
        env_bind: Option<String>,
        env_space: Option<String>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        // Bind address: env > file > default
        let bind = env_bind
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid backend bind address: {:?}", bind))?;

        Ok(Self {
            bind_addr,
            space: env_space.or(file.space).unwrap_or(defaults.space),
            api_name: file.api_name.unwrap_or(defaults.api_name),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
        })
    }

    /// Base URL of the hosted engine
    pub fn space_url(&self) -> String {
        space_url(&self.space)
    }
}

/// Resolve a Space id (`owner/name`) to its direct URL
///
/// Hugging Face serves Spaces at `https://{owner}-{name}.hf.space`, lowercased,
/// with `_` and `.` replaced by `-`. Anything that already looks like a URL is
/// returned without its trailing slash.
pub fn space_url(space: &str) -> String {
    if space.starts_with("http://") || space.starts_with("https://") {
        return space.trim_end_matches('/').to_string();
    }

    let subdomain: String = space
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '_' | '.' => '-',
            other => other,
        })
        .collect();
    format!("https://{}.hf.space", subdomain)
}
