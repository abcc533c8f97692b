//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# Legalis configuration\n");
        output.push_str("# Precedence: environment variables > this file > built-in defaults\n\n");

        output.push_str("# Translation endpoint (env: LEGALIS_API_URL)\n");
        output.push_str(&format!("api_url = {:?}\n", self.api_url));
        output.push_str("# Seconds before a translation request counts as a connection error\n");
        output.push_str(&format!(
            "request_timeout_secs = {}\n",
            self.request_timeout_secs
        ));
        output.push_str("# Theme: \"Legalis\", \"Dark\", \"Terminal\" (env: LEGALIS_THEME)\n");
        output.push_str(&format!("theme = {:?}\n", self.theme));

        output.push_str(&self.logging_to_toml());
        output.push_str(&self.backend_to_toml());
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("\n[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        output.push_str(&format!("level = {:?}\n", logging.level));
        output.push_str("# JSON log files with rotation: hourly, daily, never\n");
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {:?}\n",
            logging.file_dir.display().to_string()
        ));
        output.push_str(&format!(
            "file_rotation = {:?}\n",
            logging.file_rotation.as_str()
        ));
        output.push_str(&format!("file_prefix = {:?}\n", logging.file_prefix));
        output
    }

    fn backend_to_toml(&self) -> String {
        let backend = &self.backend;
        let mut output = String::from("\n[backend]\n");
        output.push_str("# Used by `legalis serve` (env: LEGALIS_BIND, LEGALIS_SPACE)\n");
        output.push_str(&format!(
            "bind_addr = {:?}\n",
            backend.bind_addr.to_string()
        ));
        output.push_str("# Hugging Face Space id (owner/name) or full URL\n");
        output.push_str(&format!("space = {:?}\n", backend.space));
        output.push_str(&format!("api_name = {:?}\n", backend.api_name));
        output.push_str(&format!("timeout_secs = {}\n", backend.timeout_secs));
        output
    }
}
