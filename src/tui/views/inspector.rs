// Inspector view - the accessibility tree as assistive technology sees it
//
// One line per node: role, accessible name, then states. The focused node
// is highlighted and kept in view.

use crate::a11y::tree::AccessibleNode;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest accessible name shown before truncation
const MAX_NAME: usize = 40;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let tree = app.accessibility_tree();
    let theme = &app.theme;

    let mut focused_row = 0;
    let lines: Vec<Line> = tree
        .flatten()
        .into_iter()
        .enumerate()
        .map(|(row, (depth, node))| {
            if node.focused {
                focused_row = row;
            }
            node_line(depth, node, app)
        })
        .collect();

    let height = area.height.saturating_sub(2) as usize;
    let scroll = focused_row.saturating_sub(height.saturating_sub(1) / 2) as u16;

    let title = format!(" Accessibility tree · focus: #{} ", tree.focused);
    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(title, Style::default().fg(theme.title)))
            .title_bottom(Line::from(" F2 ").right_aligned()),
    );

    f.render_widget(paragraph, area);
}

fn node_line<'a>(depth: usize, node: &'a AccessibleNode, app: &App) -> Line<'a> {
    let theme = &app.theme;
    let mut spans = vec![
        Span::raw("  ".repeat(depth)),
        Span::styled(
            node.role,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if !node.name.is_empty() {
        spans.push(Span::styled(
            format!(" \"{}\"", truncate_to_width(&node.name, MAX_NAME)),
            Style::default().fg(theme.foreground),
        ));
    }

    for (key, value) in &node.states {
        let style = if *key == "invalid" && value == "true" {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {}={}", key, value), style));
    }

    let line = Line::from(spans);
    if node.focused {
        line.style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection),
        )
    } else {
        line
    }
}
