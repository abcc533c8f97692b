// CLI module - command-line argument parsing and handlers
//
// With no subcommand the interactive TUI starts. Subcommands:
// - translate: One-shot translation to stdout
// - serve: Run the relay backend
// - config --show|--reset|--path: Configuration management

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Legalis - English to Hindi legal translation
#[derive(Parser)]
#[command(name = "legalis")]
#[command(version = VERSION)]
#[command(about = "English to Hindi legal translation", long_about = None)]
pub struct Cli {
    /// Translate locally without contacting the service
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate text once and print the result
    Translate {
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,

        /// Also copy the translation to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Run the relay backend in front of the inference engine
    Serve {
        /// Address to listen on (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run `legalis config ...`
pub fn handle_config_command(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: legalis config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("theme = {:?}", config.theme);
    println!(
        "# bundled themes: {}",
        Theme::bundled_names().collect::<Vec<_>>().join(", ")
    );
    println!("demo_mode = {}", config.demo_mode);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!();
    println!("[backend]");
    println!("bind_addr = {:?}", config.backend.bind_addr.to_string());
    println!("space = {:?}", config.backend.space);
    println!("# resolves to {}", config.backend.space_url());
    println!("api_name = {:?}", config.backend.api_name);
    println!("timeout_secs = {}", config.backend.timeout_secs);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Single source of truth for the template
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
