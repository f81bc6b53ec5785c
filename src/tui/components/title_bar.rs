// Title bar component
//
// Renders the intro banner: eyebrow, heading, and a one-line summary.

use crate::a11y::tree;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the title bar needs, borders included
pub const HEIGHT: u16 = 5;

const EYEBROW: &str = "Inclusive by design";
const SUMMARY: &str = "A contact form, a custom dropdown, and a modal dialog that follow \
WCAG-informed patterns: keyboard operable, announced, readable in any theme.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut heading = vec![Span::styled(
        tree::INTRO_HEADING,
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];
    if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        heading.insert(
            0,
            Span::styled(
                format!("{} · ", EYEBROW),
                Style::default().fg(theme.muted),
            ),
        );
    }

    let text = vec![
        Line::from(heading),
        Line::styled(SUMMARY, Style::default().fg(theme.foreground)),
    ];

    let title = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(format!(" theme: {} ", theme.name)).right_aligned()),
    );

    f.render_widget(title, area);
}
