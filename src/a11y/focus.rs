//! Focus tracking and keyboard traversal
//!
//! Exactly one control holds focus at a time. Tab / Shift+Tab walk the
//! page in document order; while the dialog is open the walk is confined to
//! the dialog's controls.

use crate::form::Field;

/// Every control that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    NameInput,
    EmailInput,
    MessageInput,
    TopicTrigger,
    /// Only focusable programmatically (tabindex -1)
    TopicListbox,
    SubscribeCheckbox,
    SubmitButton,
    OpenDialogButton,
    DialogClose,
    DialogSoundsGood,
    DialogContinue,
}

/// Page tab order. The listbox is deliberately absent.
pub const PAGE_RING: [FocusTarget; 7] = [
    FocusTarget::NameInput,
    FocusTarget::EmailInput,
    FocusTarget::MessageInput,
    FocusTarget::TopicTrigger,
    FocusTarget::SubscribeCheckbox,
    FocusTarget::SubmitButton,
    FocusTarget::OpenDialogButton,
];

/// Tab order inside the open dialog
pub const DIALOG_RING: [FocusTarget; 3] = [
    FocusTarget::DialogClose,
    FocusTarget::DialogSoundsGood,
    FocusTarget::DialogContinue,
];

impl FocusTarget {
    /// Element id used in the accessibility tree
    pub fn element_id(self) -> &'static str {
        match self {
            FocusTarget::NameInput => Field::Name.input_id(),
            FocusTarget::EmailInput => Field::Email.input_id(),
            FocusTarget::MessageInput => Field::Message.input_id(),
            FocusTarget::TopicTrigger => super::listbox::BUTTON_ID,
            FocusTarget::TopicListbox => super::listbox::LIST_ID,
            FocusTarget::SubscribeCheckbox => "subscribe-updates",
            FocusTarget::SubmitButton => "contact-submit",
            FocusTarget::OpenDialogButton => "open-dialog",
            FocusTarget::DialogClose => "modal-close",
            FocusTarget::DialogSoundsGood => "modal-sounds-good",
            FocusTarget::DialogContinue => "modal-continue",
        }
    }

    /// Text field backing this control, if any
    pub fn field(self) -> Option<Field> {
        match self {
            FocusTarget::NameInput => Some(Field::Name),
            FocusTarget::EmailInput => Some(Field::Email),
            FocusTarget::MessageInput => Some(Field::Message),
            _ => None,
        }
    }

    pub fn from_field(field: Field) -> Self {
        match field {
            Field::Name => FocusTarget::NameInput,
            Field::Email => FocusTarget::EmailInput,
            Field::Message => FocusTarget::MessageInput,
        }
    }

    pub fn is_dialog_control(self) -> bool {
        DIALOG_RING.contains(&self)
    }

    /// Inside the dropdown's container (trigger or list)
    pub fn in_dropdown(self) -> bool {
        matches!(self, FocusTarget::TopicTrigger | FocusTarget::TopicListbox)
    }

    /// Position used for tab traversal; the listbox walks from its trigger
    fn ring_anchor(self) -> Self {
        match self {
            FocusTarget::TopicListbox => FocusTarget::TopicTrigger,
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FocusManager {
    current: FocusTarget,
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusManager {
    /// Focus starts on the first form field
    pub fn new() -> Self {
        Self {
            current: PAGE_RING[0],
        }
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current == target
    }

    pub fn set(&mut self, target: FocusTarget) {
        if self.current != target {
            tracing::debug!(from = ?self.current, to = ?target, "focus moved");
            self.current = target;
        }
    }

    /// Tab. `trapped` confines traversal to the dialog.
    pub fn next(&mut self, trapped: bool) {
        let target = self.step(trapped, true);
        self.set(target);
    }

    /// Shift+Tab
    pub fn prev(&mut self, trapped: bool) {
        let target = self.step(trapped, false);
        self.set(target);
    }

    fn step(&self, trapped: bool, forward: bool) -> FocusTarget {
        let ring: &[FocusTarget] = if trapped { &DIALOG_RING } else { &PAGE_RING };
        let anchor = self.current.ring_anchor();

        match ring.iter().position(|&t| t == anchor) {
            Some(idx) if forward => ring[(idx + 1) % ring.len()],
            Some(idx) => ring[(idx + ring.len() - 1) % ring.len()],
            // Focus is outside the ring (e.g. dialog just opened): enter at an edge
            None if forward => ring[0],
            None => ring[ring.len() - 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_walks_page_in_document_order_and_wraps() {
        let mut focus = FocusManager::new();
        let mut seen = vec![focus.current()];
        for _ in 0..PAGE_RING.len() {
            focus.next(false);
            seen.push(focus.current());
        }
        assert_eq!(&seen[..PAGE_RING.len()], &PAGE_RING);
        assert_eq!(seen[PAGE_RING.len()], FocusTarget::NameInput);
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        let mut focus = FocusManager::new();
        focus.prev(false);
        assert_eq!(focus.current(), FocusTarget::OpenDialogButton);
    }

    #[test]
    fn listbox_is_skipped_and_tabs_from_trigger_position() {
        let mut focus = FocusManager::new();
        focus.set(FocusTarget::TopicListbox);
        focus.next(false);
        assert_eq!(focus.current(), FocusTarget::SubscribeCheckbox);

        focus.set(FocusTarget::TopicListbox);
        focus.prev(false);
        assert_eq!(focus.current(), FocusTarget::MessageInput);
    }

    #[test]
    fn trapped_traversal_stays_in_dialog() {
        let mut focus = FocusManager::new();
        focus.set(FocusTarget::DialogContinue);
        focus.next(true);
        assert_eq!(focus.current(), FocusTarget::DialogClose);
        focus.prev(true);
        assert_eq!(focus.current(), FocusTarget::DialogContinue);
    }

    #[test]
    fn trapped_traversal_enters_from_outside() {
        let mut focus = FocusManager::new();
        focus.set(FocusTarget::OpenDialogButton);
        focus.next(true);
        assert_eq!(focus.current(), FocusTarget::DialogClose);

        focus.set(FocusTarget::OpenDialogButton);
        focus.prev(true);
        assert_eq!(focus.current(), FocusTarget::DialogContinue);
    }

    #[test]
    fn field_mapping_is_symmetric() {
        for field in Field::ALL {
            assert_eq!(FocusTarget::from_field(field).field(), Some(field));
        }
        assert_eq!(FocusTarget::SubmitButton.field(), None);
    }
}
