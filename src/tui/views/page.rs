// Page view: contact form and the modal section
//
// The dropdown list is drawn last so it overlaps the controls below the
// trigger and wins their hit areas while open.

use super::{control_block, render_button};
use crate::a11y::{listbox, tree, FocusTarget};
use crate::form::Field;
use crate::tui::app::App;
use crate::tui::hit::HitTarget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const CONTACT_DESCRIPTION: &str =
    "Tell us how we can help and we will reach out with resources that match your goals.";
const MODAL_SECTION_TEXT: &str = "Modals should not trap people. This example focuses the first \
interactive element, supports the Escape key, and returns focus to the button that launched it.";

/// Visible text rows of the message box
const MESSAGE_ROWS: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    render_contact(f, chunks[0], app);
    render_modal_section(f, chunks[1], app);
}

fn section_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_contact(f: &mut Frame, area: Rect, app: &mut App) {
    let block = section_block(app, tree::CONTACT_HEADING);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // description
            Constraint::Length(3),                // name
            Constraint::Length(1),                // name error
            Constraint::Length(3),                // email
            Constraint::Length(1),                // email error
            Constraint::Length(MESSAGE_ROWS + 2), // message
            Constraint::Length(1),                // message error
            Constraint::Length(3),                // topic trigger
            Constraint::Length(1),                // subscribe
            Constraint::Length(3),                // submit
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(CONTACT_DESCRIPTION)
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    render_field(f, rows[1], rows[2], app, Field::Name);
    render_field(f, rows[3], rows[4], app, Field::Email);
    render_field(f, rows[5], rows[6], app, Field::Message);
    let trigger = render_trigger(f, rows[7], app);
    render_checkbox(f, rows[8], app);
    render_button(f, rows[9], app, FocusTarget::SubmitButton, tree::SUBMIT_LABEL);

    if app.listbox.is_open() {
        render_list(f, trigger, area, app);
    }
}

/// Text field with its inline error line
fn render_field(f: &mut Frame, area: Rect, error_area: Rect, app: &mut App, field: Field) {
    let target = FocusTarget::from_field(field);
    let focused = app.focus.is_focused(target);
    let error = app.form.errors().get(field);
    let input = app.form.input(field);

    let block = control_block(&app.theme, field.label(), focused, error.is_some());
    let text_area = block.inner(area);

    // Keep the cursor inside the box
    let (row, col) = input.cursor_position();
    let scroll_y = (row as u16).saturating_sub(text_area.height.saturating_sub(1));
    let scroll_x = (col as u16).saturating_sub(text_area.width.saturating_sub(1));

    let lines: Vec<Line> = input.lines().map(|l| Line::raw(l.to_string())).collect();
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.foreground))
        .block(block)
        .scroll((scroll_y, scroll_x));
    f.render_widget(paragraph, area);

    if focused && !app.dialog.is_open() {
        let x = text_area.x + (col as u16).saturating_sub(scroll_x);
        let y = text_area.y + (row as u16).saturating_sub(scroll_y);
        if text_area.contains(Position::new(x, y)) {
            f.set_cursor_position(Position::new(x, y));
        }
    }

    if let Some(message) = error {
        f.render_widget(
            Paragraph::new(Line::styled(
                format!("⚠ {}", message),
                Style::default().fg(app.theme.error),
            )),
            error_area,
        );
    }

    app.hits.register(area, HitTarget::Control(target));
}

/// Dropdown trigger showing the selected topic; returns its rect
fn render_trigger(f: &mut Frame, area: Rect, app: &mut App) -> Rect {
    let width = area.width.min(48);
    let rect = Rect::new(area.x, area.y, width, area.height);
    let focused = app.focus.is_focused(FocusTarget::TopicTrigger);
    let indicator = if app.listbox.is_open() { "▴" } else { "▾" };

    let block = control_block(&app.theme, listbox::LABEL, focused, false);
    let content = Line::from(vec![
        Span::styled(
            app.listbox.selected_option().label,
            Style::default().fg(app.theme.foreground),
        ),
        Span::styled(format!(" {}", indicator), Style::default().fg(app.theme.muted)),
    ]);
    f.render_widget(Paragraph::new(content).block(block), rect);

    app.hits.register(rect, HitTarget::Control(FocusTarget::TopicTrigger));
    rect
}

/// Open option list, drawn over whatever sits below the trigger
fn render_list(f: &mut Frame, trigger: Rect, bounds: Rect, app: &mut App) {
    let options = app.listbox.options();
    let height = (options.len() as u16 + 2).min(bounds.bottom().saturating_sub(trigger.bottom()));
    if height < 3 {
        return;
    }
    let rect = Rect::new(trigger.x, trigger.bottom(), trigger.width, height);
    let focused = app.focus.is_focused(FocusTarget::TopicListbox);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if i == app.listbox.selected() { "✓ " } else { "  " };
            let pointer = if i == app.listbox.highlighted() { "›" } else { " " };
            let style = if i == app.listbox.highlighted() {
                Style::default()
                    .fg(app.theme.selection_fg)
                    .bg(app.theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.foreground)
            };
            ListItem::new(format!("{}{}{}", pointer, marker, option.label)).style(style)
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        List::new(items)
            .block(control_block(&app.theme, "", focused, false))
            .style(Style::default().bg(app.theme.background)),
        rect,
    );

    app.hits.register(rect, HitTarget::Control(FocusTarget::TopicListbox));
    let rows = Rect::new(rect.x + 1, rect.y + 1, rect.width.saturating_sub(2), 1);
    for i in 0..(height - 2) {
        app.hits.register(
            Rect { y: rows.y + i, ..rows },
            HitTarget::TopicOption(i as usize),
        );
    }
}

fn render_checkbox(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus.is_focused(FocusTarget::SubscribeCheckbox);
    let mark = if app.form.subscribe { "[x]" } else { "[ ]" };

    let mut style = Style::default().fg(app.theme.foreground);
    if focused {
        style = style
            .fg(app.theme.focus)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let pointer = if focused { "▶ " } else { "  " };
    let text = format!("{}{} {}", pointer, mark, tree::SUBSCRIBE_LABEL);
    let width = (text.chars().count() as u16).min(area.width);

    f.render_widget(Paragraph::new(Line::styled(text, style)), area);
    app.hits.register(
        Rect { width, ..area },
        HitTarget::Control(FocusTarget::SubscribeCheckbox),
    );
}

fn render_modal_section(f: &mut Frame, area: Rect, app: &mut App) {
    let block = section_block(app, tree::MODAL_SECTION_HEADING);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    f.render_widget(
        Paragraph::new(MODAL_SECTION_TEXT)
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true }),
        rows[0],
    );
    render_button(f, rows[1], app, FocusTarget::OpenDialogButton, tree::OPEN_DIALOG_LABEL);
}
