//! Topic dropdown (listbox pattern)
//!
//! A trigger button discloses a fixed list of options. The selection
//! persists across opens; the keyboard highlight is transient and reseeded
//! from the selection every time the list opens. Focus stays on the list
//! container while open and the highlighted option is exposed through
//! `aria-activedescendant`.

use super::listeners::Subscription;
use super::{DeferredFocus, FocusTarget, Handled, ListenerKind, Listeners, Owner};
use crossterm::event::KeyCode;

/// Trigger button id
pub const BUTTON_ID: &str = "topic-button";
/// Option list id (also the prefix of option ids)
pub const LIST_ID: &str = "topic-listbox";
/// Visible label id
pub const LABEL_ID: &str = "topic-label";
/// Visible label text
pub const LABEL: &str = "Choose a learning topic";

/// One selectable topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOption {
    /// Unique key
    pub value: &'static str,
    pub label: &'static str,
}

impl DropdownOption {
    /// Element id of this option inside the list
    pub fn element_id(&self) -> String {
        format!("{}-{}", LIST_ID, self.value)
    }
}

/// The fixed topic list. Never mutated at runtime.
pub const TOPICS: [DropdownOption; 3] = [
    DropdownOption {
        value: "contrast",
        label: "Designing with color contrast",
    },
    DropdownOption {
        value: "keyboard",
        label: "Supporting keyboard-only flows",
    },
    DropdownOption {
        value: "aria",
        label: "Using landmarks and ARIA labels",
    },
];

/// What a key press did to the open list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListboxAction {
    /// Key not handled by the list
    Ignored,
    /// Highlight moved to this index
    Highlighted(usize),
    /// Option committed; list closed, focus belongs on the trigger
    Selected(usize),
    /// List dismissed without selecting; focus belongs on the trigger
    Dismissed,
}

#[derive(Debug)]
pub struct Listbox {
    selected: usize,
    highlighted: usize,
    /// Outside-click listener; present exactly while the list is open
    pointer_listener: Option<Subscription>,
}

impl Default for Listbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Listbox {
    pub fn new() -> Self {
        Self {
            selected: 0,
            highlighted: 0,
            pointer_listener: None,
        }
    }

    pub fn options(&self) -> &'static [DropdownOption] {
        &TOPICS
    }

    pub fn is_open(&self) -> bool {
        self.pointer_listener.is_some()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn selected_option(&self) -> &'static DropdownOption {
        &TOPICS[self.selected]
    }

    /// Id of the highlighted option, exposed only while the list is open
    pub fn active_descendant(&self) -> Option<String> {
        self.is_open().then(|| TOPICS[self.highlighted].element_id())
    }

    /// Open the list. Returns false if it was already open.
    ///
    /// Seeds the highlight from the selection, starts listening for
    /// pointer-downs outside the container, and asks for focus to move to
    /// the list once it has been drawn.
    pub fn open(&mut self, listeners: &Listeners, deferred: &mut DeferredFocus) -> bool {
        if self.is_open() {
            return false;
        }
        self.highlighted = self.selected;
        self.pointer_listener =
            Some(listeners.subscribe(ListenerKind::PointerDown, Owner::Listbox));
        deferred.schedule(Owner::Listbox, FocusTarget::TopicListbox);
        tracing::debug!(highlighted = self.highlighted, "listbox opened");
        true
    }

    /// Close the list. Returns false if it was already closed.
    pub fn close(&mut self, deferred: &mut DeferredFocus) -> bool {
        if self.pointer_listener.take().is_none() {
            return false;
        }
        deferred.cancel_for(Owner::Listbox);
        tracing::debug!("listbox closed");
        true
    }

    /// Trigger click
    pub fn toggle(&mut self, listeners: &Listeners, deferred: &mut DeferredFocus) {
        if self.is_open() {
            self.close(deferred);
        } else {
            self.open(listeners, deferred);
        }
    }

    /// Keys on the trigger: Down, Up, Enter and Space open the list
    pub fn handle_trigger_key(
        &mut self,
        code: KeyCode,
        listeners: &Listeners,
        deferred: &mut DeferredFocus,
    ) -> Handled {
        match code {
            KeyCode::Down | KeyCode::Up | KeyCode::Enter | KeyCode::Char(' ') => {
                self.open(listeners, deferred);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    /// Keys anywhere in the container while open
    pub fn handle_list_key(
        &mut self,
        code: KeyCode,
        deferred: &mut DeferredFocus,
    ) -> ListboxAction {
        if !self.is_open() {
            return ListboxAction::Ignored;
        }

        match code {
            KeyCode::Down => {
                self.highlighted = (self.highlighted + 1) % TOPICS.len();
                ListboxAction::Highlighted(self.highlighted)
            }
            KeyCode::Up => {
                self.highlighted = (self.highlighted + TOPICS.len() - 1) % TOPICS.len();
                ListboxAction::Highlighted(self.highlighted)
            }
            KeyCode::Enter => ListboxAction::Selected(self.select(self.highlighted, deferred)),
            KeyCode::Esc => {
                self.close(deferred);
                ListboxAction::Dismissed
            }
            _ => ListboxAction::Ignored,
        }
    }

    /// Commit `index` as the selection and close. Out-of-range indices
    /// clamp to the last option.
    pub fn select(&mut self, index: usize, deferred: &mut DeferredFocus) -> usize {
        let index = index.min(TOPICS.len() - 1);
        self.selected = index;
        self.highlighted = index;
        self.close(deferred);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_listbox() -> (Listbox, Listeners, DeferredFocus) {
        let listeners = Listeners::new();
        let mut deferred = DeferredFocus::new();
        let mut listbox = Listbox::new();
        assert!(listbox.open(&listeners, &mut deferred));
        (listbox, listeners, deferred)
    }

    #[test]
    fn open_seeds_highlight_from_selection() {
        let (mut listbox, listeners, mut deferred) = open_listbox();
        listbox.select(2, &mut deferred);

        listbox.open(&listeners, &mut deferred);
        assert_eq!(listbox.highlighted(), 2);

        // Move the highlight, dismiss, reopen: highlight is reseeded
        listbox.handle_list_key(KeyCode::Down, &mut deferred);
        listbox.handle_list_key(KeyCode::Esc, &mut deferred);
        listbox.open(&listeners, &mut deferred);
        assert_eq!(listbox.highlighted(), 2);
    }

    #[test]
    fn arrow_down_wraps_from_last_to_first() {
        let (mut listbox, _listeners, mut deferred) = open_listbox();
        let mut seen = Vec::new();
        for _ in 0..TOPICS.len() {
            if let ListboxAction::Highlighted(i) =
                listbox.handle_list_key(KeyCode::Down, &mut deferred)
            {
                seen.push(i);
            }
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn arrow_up_wraps_from_first_to_last() {
        let (mut listbox, _listeners, mut deferred) = open_listbox();
        assert_eq!(
            listbox.handle_list_key(KeyCode::Up, &mut deferred),
            ListboxAction::Highlighted(2)
        );
    }

    #[test]
    fn enter_commits_highlight_and_closes() {
        let (mut listbox, listeners, mut deferred) = open_listbox();
        listbox.handle_list_key(KeyCode::Down, &mut deferred);

        assert_eq!(
            listbox.handle_list_key(KeyCode::Enter, &mut deferred),
            ListboxAction::Selected(1)
        );
        assert!(!listbox.is_open());
        assert_eq!(listbox.selected_option().label, "Supporting keyboard-only flows");
        assert!(listeners.is_empty());
    }

    #[test]
    fn close_cancels_pending_focus_and_listener() {
        let (mut listbox, listeners, mut deferred) = open_listbox();
        assert!(deferred.is_pending(Owner::Listbox));
        assert!(listeners.is_registered(ListenerKind::PointerDown, Owner::Listbox));

        assert!(listbox.close(&mut deferred));
        assert!(!deferred.is_pending(Owner::Listbox));
        assert!(listeners.is_empty());
        assert!(!listbox.close(&mut deferred));
    }

    #[test]
    fn trigger_keys_open() {
        for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter, KeyCode::Char(' ')] {
            let listeners = Listeners::new();
            let mut deferred = DeferredFocus::new();
            let mut listbox = Listbox::new();
            assert_eq!(
                listbox.handle_trigger_key(code, &listeners, &mut deferred),
                Handled::Yes
            );
            assert!(listbox.is_open(), "{code:?} should open the list");
        }

        let listeners = Listeners::new();
        let mut deferred = DeferredFocus::new();
        let mut listbox = Listbox::new();
        assert_eq!(
            listbox.handle_trigger_key(KeyCode::Char('x'), &listeners, &mut deferred),
            Handled::No
        );
        assert!(!listbox.is_open());
    }

    #[test]
    fn active_descendant_only_while_open() {
        let listbox = Listbox::new();
        assert_eq!(listbox.active_descendant(), None);

        let (mut listbox, _listeners, mut deferred) = open_listbox();
        listbox.handle_list_key(KeyCode::Up, &mut deferred);
        assert_eq!(listbox.active_descendant().as_deref(), Some("topic-listbox-aria"));
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut listbox = Listbox::new();
        let mut deferred = DeferredFocus::new();
        assert_eq!(
            listbox.handle_list_key(KeyCode::Down, &mut deferred),
            ListboxAction::Ignored
        );
        assert_eq!(listbox.highlighted(), 0);
    }
}
