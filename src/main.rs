// inclusive - Accessible interaction patterns in the terminal
//
// A single-screen demo of a validated contact form, a keyboard-navigable
// listbox and a focus-trapping dialog, with a polite live region.
//
// Architecture:
// - a11y: Focus model, listbox, dialog, live region, listener registry,
//   deferred focus and the derived accessibility tree
// - form: Field buffers, validation and submission
// - TUI (ratatui): Renders the page and routes keyboard and mouse input
// - Config/logging: TOML config with env overrides, tracing to a log panel

mod a11y;
mod cli;
mod config;
mod form;
mod logging;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (inspect, config) print and exit; keep their logs on stderr
    if cli.command.is_some() {
        let config = Config::from_env();
        let _file_guard = logging::init(&config.logging, &LogBuffer::new(), false);
        cli::handle_cli(&cli)?;
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }

    // In TUI mode logs are captured to the buffer so they don't garble the display
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer, true);

    tracing::info!(theme = %config.theme, "Starting TUI");

    // The terminal is restored before an error propagates, so main's report is readable
    tui::run(&config, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
