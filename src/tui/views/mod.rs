// Views module - screen-level rendering logic
//
// One screen, drawn back to front:
// - Title bar (intro copy)
// - Page: contact form with the topic dropdown, modal section
// - Side column: accessibility inspector (F2) and system logs (F4)
// - Status bar: live region and focus hints
// - Dialog with backdrop, when open
//
// Every frame starts from an empty hit map; controls register themselves
// as they are drawn.

mod dialog;
mod inspector;
mod page;

use super::app::App;
use super::layout::Breakpoint;
use crate::a11y::FocusTarget;
use crate::theme::Theme;
use crate::tui::components;
use crate::tui::hit::HitTarget;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hits.clear();

    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(components::title_bar::HEIGHT),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    render_body(f, chunks[1], app);
    components::render_status(f, chunks[2], app);

    if app.dialog.is_open() {
        dialog::render(f, f.area(), app);
    }
}

fn render_body(f: &mut Frame, area: Rect, app: &mut App) {
    if !app.show_inspector && !app.show_logs {
        page::render(f, area, app);
        return;
    }

    let (page_area, side) = Breakpoint::from_width(area.width).split_side(area);
    page::render(f, page_area, app);

    match (app.show_inspector, app.show_logs) {
        (true, true) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(side);
            inspector::render(f, rows[0], app);
            components::render_logs_panel(f, rows[1], app);
        }
        (true, false) => inspector::render(f, side, app),
        (false, _) => components::render_logs_panel(f, side, app),
    }
}

/// Bordered box for a focusable control
///
/// Focus shows as a double border in the focus color, so it survives
/// monochrome terminals; invalid controls use the error color.
pub(super) fn control_block<'a>(
    theme: &Theme,
    title: &'a str,
    focused: bool,
    invalid: bool,
) -> Block<'a> {
    let (border_type, color) = if focused {
        (BorderType::Double, theme.focus)
    } else if invalid {
        (theme.border_type, theme.error)
    } else {
        (theme.border_type, theme.border)
    };

    let mut title_style = Style::default().fg(theme.foreground);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color));
    if title.is_empty() {
        block
    } else {
        block.title(Line::styled(format!(" {} ", title), title_style))
    }
}

/// Button drawn as a bordered label; registers itself for clicks
pub(super) fn render_button(
    f: &mut Frame,
    area: Rect,
    app: &mut App,
    target: FocusTarget,
    label: &str,
) {
    let width = (label.chars().count() as u16 + 4).min(area.width);
    let rect = Rect::new(area.x, area.y, width, area.height.min(3));
    let focused = app.focus.is_focused(target);

    let block = control_block(&app.theme, "", focused, false);
    let mut style = Style::default().fg(app.theme.foreground);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    f.render_widget(
        Paragraph::new(Line::styled(label.to_string(), style).centered()).block(block),
        rect,
    );
    app.hits.register(rect, HitTarget::Control(target));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(show_inspector: bool, show_logs: bool) -> App {
        let mut config = Config::default();
        config.interface.show_inspector = show_inspector;
        config.interface.show_logs = show_logs;
        App::with_config(&config, LogBuffer::new()).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_every_theme_and_size_without_panicking() {
        for (width, height) in [(40, 20), (80, 30), (100, 48), (160, 50)] {
            for theme in crate::theme::THEME_NAMES {
                let mut app = app(true, true);
                app.theme = Theme::by_name(theme);
                app.activate(FocusTarget::TopicTrigger);
                app.activate(FocusTarget::OpenDialogButton);

                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal.draw(|f| draw(f, &mut app)).unwrap();
                app.after_render();
                terminal.draw(|f| draw(f, &mut app)).unwrap();
            }
        }
    }

    #[test]
    fn page_shows_controls_and_announcement() {
        let mut app = app(false, false);
        app.submit();
        let mut terminal = Terminal::new(TestBackend::new(100, 48)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Full name"));
        assert!(text.contains("Designing with color contrast"));
        assert!(text.contains("Please share your name."));
        assert!(text.contains("Please fix the highlighted fields before submitting."));
        assert!(app.hits.len() >= 7);
    }

    #[test]
    fn dialog_registers_backdrop_surface_and_actions() {
        let mut app = app(false, false);
        app.activate(FocusTarget::OpenDialogButton);
        let mut terminal = Terminal::new(TestBackend::new(100, 48)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert_eq!(app.hits.hit_test(0, 0), Some(HitTarget::Backdrop));
        let surface = app.hits.rect_of(HitTarget::DialogSurface).unwrap();
        assert_eq!(
            app.hits.hit_test(surface.x + 1, surface.y + 4),
            Some(HitTarget::DialogSurface)
        );
        for action in [
            FocusTarget::DialogClose,
            FocusTarget::DialogSoundsGood,
            FocusTarget::DialogContinue,
        ] {
            let rect = app.hits.rect_of(HitTarget::Control(action)).unwrap();
            assert!(surface.contains(rect.as_position()));
        }
        assert!(screen_text(&terminal).contains("Rollout principles"));
    }

    #[test]
    fn inspector_shows_focused_node() {
        let mut app = app(true, false);
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("focus: #contact-name"));
        assert!(text.contains("textbox"));
    }
}
