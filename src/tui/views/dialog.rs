// Dialog view - backdrop plus the centered rollout dialog
//
// The backdrop covers the whole frame and dims what is under it; only a
// press on the backdrop itself (not the dialog surface) dismisses.

use super::render_button;
use crate::a11y::{dialog, FocusTarget};
use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 15;

/// Calculate centered rect for the dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    // Dim the page; symbols stay, colors fade
    f.buffer_mut().set_style(
        area,
        Style::default().fg(app.theme.muted).bg(app.theme.backdrop),
    );
    app.hits.register(area, HitTarget::Backdrop);

    let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.focus))
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        )
        .title(Span::styled(
            format!(" {} ", dialog::TITLE),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Tab: cycle  Esc: close ").centered());
    let inner = block.inner(rect);
    f.render_widget(block, rect);
    app.hits.register(rect, HitTarget::DialogSurface);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // close
            Constraint::Length(3), // description
            Constraint::Length(3), // note
            Constraint::Length(3), // actions
            Constraint::Min(0),
        ])
        .split(inner);

    // Close control, right-aligned like an icon button
    let close_width = (dialog::CLOSE_LABEL.len() as u16 + 6).min(rows[0].width);
    let close_area = Rect {
        x: rows[0].right().saturating_sub(close_width),
        width: close_width,
        ..rows[0]
    };
    render_button(
        f,
        close_area,
        app,
        FocusTarget::DialogClose,
        &format!("× {}", dialog::CLOSE_LABEL),
    );

    f.render_widget(
        Paragraph::new(dialog::DESCRIPTION).wrap(Wrap { trim: true }),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(dialog::NOTE)
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    let actions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(dialog::SOUNDS_GOOD_LABEL.len() as u16 + 4),
            Constraint::Length(1),
            Constraint::Length(dialog::CONTINUE_LABEL.len() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(rows[3]);
    render_button(
        f,
        actions[0],
        app,
        FocusTarget::DialogSoundsGood,
        dialog::SOUNDS_GOOD_LABEL,
    );
    render_button(
        f,
        actions[2],
        app,
        FocusTarget::DialogContinue,
        dialog::CONTINUE_LABEL,
    );
}
