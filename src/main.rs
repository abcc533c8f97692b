// Legalis - English to Hindi legal translation
//
// One binary, three faces:
// - TUI (default): edit English text, translate, copy the Hindi result
// - `translate`: one-shot headless translation to stdout
// - `serve`: the relay backend the client talks to, forwarding to the
//   hosted inference engine
//
// Architecture:
// - Session (session/): the interaction state machine and its controller
// - Service (service/): the translation service client (HTTP or demo)
// - Backend (backend/): axum relay + Gradio engine client
// - TUI (tui/): ratatui front end driving the controller

mod backend;
mod cli;
mod clipboard;
mod config;
mod logging;
mod service;
mod session;
mod startup;
mod theme;
mod tui;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::SystemClipboard;
use config::Config;
use logging::{LogBuffer, LogSink};
use service::OutcomeKind;
use session::{CopyOutcome, SessionController};
use std::io::Read;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before anything reads the config
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config_command(show, reset, path);
    }

    Config::ensure_config_exists();
    let mut config = Config::load()?;
    if cli.demo {
        config.demo_mode = true;
    }

    // TUI owns the screen, so its logs go to the in-memory buffer
    let sink = if cli.command.is_none() {
        LogSink::Buffer
    } else {
        LogSink::Stderr
    };
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, sink, &log_buffer);

    match cli.command {
        None => run_interactive(config, log_buffer).await,
        Some(Commands::Translate { text, copy }) => run_translate(&config, text, copy).await,
        Some(Commands::Serve { bind }) => run_serve(config, bind).await,
        Some(Commands::Config { .. }) => Ok(()),
    }
}

async fn run_interactive(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let service = service::from_config(&config)?;
    startup::log_startup(&config, service.name());

    let controller = SessionController::new(service, Box::new(SystemClipboard));
    tui::run_tui(controller, log_buffer, &config).await
}

/// Translate once; exits non-zero unless the service produced a translation
async fn run_translate(config: &Config, text: Option<String>, copy: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };
    let text = text.trim_end_matches(['\n', '\r']);

    if config.demo_mode {
        startup::print_demo_notice();
    }

    let mut controller =
        SessionController::new(service::from_config(config)?, Box::new(SystemClipboard));
    controller.on_input_change(text);

    let Some(kind) = controller.submit().await else {
        bail!("Nothing to translate: input is empty");
    };

    let output = controller.session().output_text().to_string();
    if kind != OutcomeKind::Success {
        bail!("{}", output);
    }

    println!("{}", output);

    if copy {
        match controller.copy() {
            CopyOutcome::Copied => eprintln!("✓ Copied"),
            CopyOutcome::Rejected => bail!("Translation printed but could not be copied"),
            CopyOutcome::NothingToCopy => {}
        }
    }

    Ok(())
}

async fn run_serve(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.backend.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }

    let engine = backend::engine_from_config(&config)?;
    startup::print_serve_banner(&config, engine.as_ref());

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        tracing::info!("Shutting down...");
    };

    backend::serve(
        config.backend.bind_addr,
        backend::RelayState::new(engine),
        shutdown,
    )
    .await
}
