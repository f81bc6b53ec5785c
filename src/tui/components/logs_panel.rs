//! Logs panel component
//!
//! Displays the newest system log entries (F4), color-coded by severity.
//! Announcements are logged too, so the panel doubles as a history of
//! what the live region said.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Target of live region writes
const ANNOUNCE_TARGET: &str = "inclusive::announce";

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    let prefix = if entry.target == ANNOUNCE_TARGET { "live: " } else { "" };
    format!(
        "[{}] {:5} {}{}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        prefix,
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.error),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

/// Render the logs panel, auto-following the newest entries
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = log_level_style(entry.level, &app.theme);
            ListItem::new(format_log_entry(entry)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}
