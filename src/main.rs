//! Medscreen: terminal disease screening form.
//!
//! Main entry point for the terminal application.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medscreen::adapters::redact::RedactingMakeWriter;
use medscreen::config::{Config, LogMode};
use medscreen::tui::App;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Log lines on the terminal would corrupt the alternate screen.
    let use_file = match config.log_mode {
        LogMode::File => true,
        LogMode::Stdout => false,
        LogMode::Auto => std::io::stdout().is_terminal(),
    };

    let (writer, _guard) = if use_file {
        if let Some(parent) = config.log_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("Cannot open log file {:?}", config.log_file))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(RedactingMakeWriter::new(writer)))
        .init();

    tracing::info!("Starting Medscreen...");

    // Models load before the terminal switches to the alternate screen.
    let mut app = App::new(&config).map_err(|e| {
        tracing::error!("Startup aborted: {}", e);
        e
    })?;
    app.run()?;

    tracing::info!("Medscreen shutdown complete.");
    Ok(())
}
