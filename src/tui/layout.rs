//! Responsive breakpoints for the page layout.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: single column, side panels stack below the page
    Compact,
    /// 80-119 cols: page plus one side column
    Normal,
    /// 120+ cols: roomier side column, full status hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Split `area` into the page and a side region for the inspector/log panels
    pub fn split_side(&self, area: Rect) -> (Rect, Rect) {
        let (direction, side) = match self {
            Breakpoint::Compact => (Direction::Vertical, Constraint::Percentage(40)),
            Breakpoint::Normal => (Direction::Horizontal, Constraint::Percentage(40)),
            Breakpoint::Wide => (Direction::Horizontal, Constraint::Percentage(45)),
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints([Constraint::Min(0), side])
            .split(area);
        (chunks[0], chunks[1])
    }
}
