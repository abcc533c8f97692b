// Startup module - banner for the relay backend and boot lines for the TUI
//
// `legalis serve` prints a banner before it starts listening. The TUI cannot
// print to the terminal once it owns the screen, so it logs the same facts to
// the logs strip instead.

use crate::backend::engine::InferenceEngine;
use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Print the relay banner to stdout
pub fn print_serve_banner(config: &Config, engine: &dyn InferenceEngine) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Legalis{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}English to Hindi legal translation relay{RESET}");
    println!();

    print_config_source();
    println!("  {DIM}Engine:{RESET} {}", engine.describe());
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Listening on {BOLD}http://{}{RESET}",
        config.backend.bind_addr
    );
    println!(
        "  {DIM}  POST /translate  {{\"text\": \"...\"}}{RESET}"
    );
    println!("  {DIM}  Press Ctrl+C to stop{RESET}");
    println!();
}

fn print_config_source() {
    use colors::*;

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
}

/// Boot lines for the TUI logs strip
pub fn log_startup(config: &Config, service_name: &str) {
    tracing::info!("Legalis v{}", VERSION);

    if config.demo_mode {
        tracing::info!("▸ Demo mode active (local glossary, no network)");
    } else {
        tracing::info!("▸ Translating via {} ({})", service_name, config.api_url);
    }

    tracing::info!("Ready. Type English legal text and press Ctrl+Enter.");
}

/// One-line notice on stderr when a headless command runs in demo mode
pub fn print_demo_notice() {
    use colors::*;
    eprintln!("{YELLOW}▸ Demo mode active{RESET} {DIM}(local glossary, no network){RESET}");
}
