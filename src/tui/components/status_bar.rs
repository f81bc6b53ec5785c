// Status bar component
//
// The polite live region: the latest announcement on the left, hints for the
// focused control on the right. Announcements are plain text so screen
// readers attached to the terminal read them as they appear.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLOBAL_HINTS: &str = "Tab/⇧Tab:move  F2:tree  F3:theme  F4:logs  ^Q:quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" Status ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let announcement = if app.live.is_empty() {
        Line::styled("Ready.", Style::default().fg(theme.muted))
    } else {
        let mut style = Style::default().fg(theme.success);
        if app.announcement_is_fresh() {
            style = style.add_modifier(Modifier::BOLD);
        }
        Line::styled(app.live.text(), style)
    };

    let hints = if bp.at_least(Breakpoint::Wide) {
        format!("{}  │  {}", app.focus_hint(), GLOBAL_HINTS)
    } else {
        app.focus_hint().to_string()
    };

    // The announcement always wins; hints only show when both fit
    let needed = announcement.width() + 2 + hints.chars().count();
    let show_hints = bp.at_least(Breakpoint::Normal) && needed <= inner.width as usize;

    f.render_widget(Paragraph::new(announcement), inner);
    if show_hints {
        f.render_widget(
            Paragraph::new(Line::styled(hints, Style::default().fg(theme.muted)).right_aligned()),
            inner,
        );
    }
}
