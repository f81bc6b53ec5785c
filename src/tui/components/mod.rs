// Components module - reusable UI building blocks
//
// Shell components are rendered around the page:
// - Title bar: Intro banner and active theme
// - Status bar: Live region announcements and focus hints
// - Logs panel: System log entries
//
// Each component is a focused, single-responsibility module.

pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
