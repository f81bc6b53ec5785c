// CLI module - command-line argument parsing and handlers
//
// Provides subcommands next to the interactive demo:
// - inspect: Print the accessibility tree as JSON and exit
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file location

use crate::a11y::FocusTarget;
use crate::config::{Config, VERSION};
use crate::logging::LogBuffer;
use crate::tui::app::App;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// Accessible interaction patterns in the terminal
#[derive(Parser)]
#[command(name = "inclusive")]
#[command(version = VERSION)]
#[command(
    about = "Accessible form, listbox and dialog patterns in the terminal",
    long_about = None
)]
pub struct Cli {
    /// Theme override: dark, light, high-contrast
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the accessibility tree as JSON
    Inspect {
        /// Open a component before taking the snapshot
        #[arg(long, value_enum)]
        open: Option<OpenComponent>,
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

/// Component `inspect --open` can expand before the snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OpenComponent {
    /// The topic listbox
    Topic,
    /// The rollout dialog
    Dialog,
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Inspect { open }) => {
            println!("{}", inspect_json(cli.theme.as_deref(), open)?);
            Ok(true)
        }
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: inclusive config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the TUI
    }
}

/// Build the app headlessly, optionally open a component, and serialize
/// the tree as it stands after the first render commit
pub fn inspect_json(theme: Option<&str>, open: Option<OpenComponent>) -> Result<String> {
    let mut config = Config::from_env();
    if let Some(theme) = theme {
        config.theme = theme.to_string();
    }

    let mut app = App::with_config(&config, LogBuffer::new())?;
    if let Some(component) = open {
        open_component(&mut app, component);
    }
    app.after_render();

    app.accessibility_tree()
        .to_json()
        .context("Failed to serialize accessibility tree")
}

/// Focus the component's control, then activate it, as a click would, so
/// the dialog records the right opener
fn open_component(app: &mut App, component: OpenComponent) {
    let target = match component {
        OpenComponent::Topic => FocusTarget::TopicTrigger,
        OpenComponent::Dialog => FocusTarget::OpenDialogButton,
    };
    app.focus.set(target);
    app.activate(target);
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!();
    println!("[interface]");
    println!("show_inspector = {}", config.interface.show_inspector);
    println!("show_logs = {}", config.interface.show_logs);
    println!("mouse = {}", config.interface.mouse);
    println!("tick_rate_ms = {}", config.interface.tick_rate_ms);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inspect_with_open_component() {
        let cli = Cli::try_parse_from(["inclusive", "inspect", "--open", "dialog"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Inspect {
                open: Some(OpenComponent::Dialog)
            })
        ));
    }

    #[test]
    fn theme_flag_is_global() {
        let cli = Cli::try_parse_from(["inclusive", "inspect", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("light"));

        let cli = Cli::try_parse_from(["inclusive", "--theme", "high-contrast"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("high-contrast"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn opened_dialog_returns_focus_to_its_button() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new()).unwrap();
        open_component(&mut app, OpenComponent::Dialog);
        app.after_render();
        assert!(app.dialog.is_open());
        assert_eq!(app.focus.current(), FocusTarget::DialogClose);

        app.close_dialog();
        assert_eq!(app.focus.current(), FocusTarget::OpenDialogButton);
    }

    #[test]
    fn opened_list_keeps_focus_in_dropdown() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new()).unwrap();
        open_component(&mut app, OpenComponent::Topic);
        app.after_render();
        assert!(app.listbox.is_open());
        assert!(app.focus.current().in_dropdown());
    }

    #[test]
    fn rejects_unknown_component() {
        assert!(Cli::try_parse_from(["inclusive", "inspect", "--open", "menu"]).is_err());
    }
}
