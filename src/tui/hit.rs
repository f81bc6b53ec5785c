//! Hit map for pointer input
//!
//! Views register clickable regions while they render; the event loop asks
//! the map what lies under a pointer-down. Registration order is z-order:
//! the dialog registers after the page, so it wins where they overlap.

use crate::a11y::FocusTarget;
use ratatui::layout::{Position, Rect};

/// What a region of the screen represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A focusable control
    Control(FocusTarget),
    /// An option row in the open listbox
    TopicOption(usize),
    /// The dimmed area around the dialog
    Backdrop,
    /// Dialog content that is not itself a control
    DialogSurface,
}

impl HitTarget {
    /// Part of the dropdown container (trigger, list, or one of its options)
    pub fn in_dropdown(self) -> bool {
        match self {
            HitTarget::Control(target) => target.in_dropdown(),
            HitTarget::TopicOption(_) => true,
            HitTarget::Backdrop | HitTarget::DialogSurface => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HitArea {
    rect: Rect,
    target: HitTarget,
}

/// Clickable regions of the last frame
#[derive(Debug, Default)]
pub struct HitMap {
    areas: Vec<HitArea>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame. Call at the start of every draw.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a region; later registrations sit on top
    pub fn register(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.areas.push(HitArea { rect, target });
        }
    }

    /// Topmost target under the point
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        let point = Position::new(x, y);
        self.areas
            .iter()
            .rev()
            .find(|area| area.rect.contains(point))
            .map(|area| area.target)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Rect most recently registered for `target`
    #[cfg(test)]
    pub fn rect_of(&self, target: HitTarget) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.target == target)
            .map(|area| area.rect)
    }
}
