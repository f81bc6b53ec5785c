// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the page, then applying focus moves that waited for the draw

pub mod app;
pub mod components;
pub mod hit;
pub mod input;
pub mod layout;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::InputHandler;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, whether the loop ended cleanly or with an error.
pub async fn run(config: &Config, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::with_config(config, log_buffer)?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let tick = Duration::from_millis(config.interface.tick_rate_ms);
    let result = run_event_loop(&mut terminal, &mut app, tick).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    if app.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each turn draws the frame, flushes deferred focus (redrawing at once if
/// focus moved), then waits for input or the next tick.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick);
    let mut input = InputHandler::new();

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // A focus move landed after the draw; show it before waiting again
        if app.after_render() {
            continue;
        }

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, &mut input, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(_) => {}
                        Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                    }
                }
            } => {}

            // Periodic tick for redrawing (log panel, resize, announcement fade)
            _ = tick_interval.tick() => app.on_tick(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Debounce action keys, then hand the event to the app
fn handle_key_event(app: &mut App, input: &mut InputHandler, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if input.handle_key_press(key_event.code) {
                app.handle_key(key_event);
            }
        }
        KeyEventKind::Release => input.handle_key_release(key_event.code),
    }
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
        app.handle_pointer_down(mouse_event.column, mouse_event.row);
    }
}
