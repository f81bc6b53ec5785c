// App state for the TUI
//
// One owner for the form, the listbox, the dialog, focus and the live
// region. Input arrives here already debounced (see tui::input); rendering
// reads it back through the views and fills `hits` for pointer routing.

use crate::a11y::deferred::PendingFocus;
use crate::a11y::{
    AccessibilityTree, DeferredFocus, Dialog, FocusManager, FocusTarget, Handled, Interactive,
    ListenerKind, Listeners, Listbox, ListboxAction, LiveRegion, Owner, TOPICS,
};
use crate::config::Config;
use crate::form::ContactForm;
use crate::logging::LogBuffer;
use crate::theme::{Theme, MIN_TEXT_CONTRAST};
use crate::tui::hit::{HitMap, HitTarget};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application state
pub struct App {
    pub form: ContactForm,
    pub listbox: Listbox,
    pub dialog: Dialog,
    pub focus: FocusManager,
    /// Polite status region
    pub live: LiveRegion,
    listeners: Listeners,
    deferred: DeferredFocus,
    /// Clickable regions of the last drawn frame
    pub hits: HitMap,
    pub theme: Theme,
    /// Accessibility tree panel (F2)
    pub show_inspector: bool,
    /// System log panel (F4)
    pub show_logs: bool,
    pub log_buffer: LogBuffer,
    pub mouse_enabled: bool,
    pub should_quit: bool,
    /// Live region revision the status bar last emphasized
    seen_revision: u64,
    /// Ticks left to emphasize the latest announcement
    fresh_ticks: u8,
}

/// How many ticks a new announcement stays emphasized
const FRESH_TICKS: u8 = 4;

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Result<Self> {
        Ok(Self {
            form: ContactForm::new()?,
            listbox: Listbox::new(),
            dialog: Dialog::new(),
            focus: FocusManager::new(),
            live: LiveRegion::new(),
            listeners: Listeners::new(),
            deferred: DeferredFocus::new(),
            hits: HitMap::new(),
            theme: Theme::by_name(&config.theme),
            show_inspector: config.interface.show_inspector,
            show_logs: config.interface.show_logs,
            log_buffer,
            mouse_enabled: config.interface.mouse,
            should_quit: false,
            seen_revision: 0,
            fresh_ticks: 0,
        })
    }

    /// Handle to the document listener registry
    #[cfg(test)]
    pub fn listeners(&self) -> Listeners {
        self.listeners.clone()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Keyboard
    // ─────────────────────────────────────────────────────────────────────

    /// Layered dispatch: Global → Traversal → Focused control → Document listeners
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.handle_traversal(key) {
            return;
        }

        if self.dispatch_to_focused(key).was_handled() {
            return;
        }

        self.dispatch_document_key(key);
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::F(2) => {
                self.show_inspector = !self.show_inspector;
                true
            }
            KeyCode::F(3) => {
                self.cycle_theme();
                true
            }
            KeyCode::F(4) => {
                self.show_logs = !self.show_logs;
                true
            }
            _ => false,
        }
    }

    /// Tab / Shift-Tab, trapped inside the dialog while it is open
    fn handle_traversal(&mut self, key: KeyEvent) -> bool {
        let trapped = self.dialog.is_open();
        match key.code {
            KeyCode::BackTab => self.focus.prev(trapped),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.focus.prev(trapped),
            KeyCode::Tab => self.focus.next(trapped),
            _ => return false,
        }
        true
    }

    fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        let focused = self.focus.current();

        // Container-level keys: while open, the list answers for trigger and list alike
        if focused.in_dropdown() && self.listbox.is_open() {
            match self.listbox.handle_list_key(key.code, &mut self.deferred) {
                ListboxAction::Ignored => {}
                ListboxAction::Highlighted(_) => return Handled::Yes,
                ListboxAction::Selected(index) => {
                    self.focus.set(FocusTarget::TopicTrigger);
                    self.announce_topic(index);
                    return Handled::Yes;
                }
                ListboxAction::Dismissed => {
                    self.focus.set(FocusTarget::TopicTrigger);
                    return Handled::Yes;
                }
            }
        }

        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));

        match focused {
            FocusTarget::NameInput | FocusTarget::EmailInput | FocusTarget::MessageInput => {
                let Some(field) = focused.field() else {
                    return Handled::No;
                };
                let input = self.form.input_mut(field);
                if input.handle_key(key).was_handled() {
                    return Handled::Yes;
                }
                // Implicit submission from a single-line field
                if key.code == KeyCode::Enter && !input.is_multiline() {
                    self.submit();
                    return Handled::Yes;
                }
                Handled::No
            }
            FocusTarget::TopicTrigger => {
                self.listbox.handle_trigger_key(key.code, &self.listeners, &mut self.deferred)
            }
            FocusTarget::TopicListbox => Handled::No,
            FocusTarget::SubscribeCheckbox => {
                if key.code == KeyCode::Char(' ') {
                    self.form.toggle_subscribe();
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            FocusTarget::SubmitButton
            | FocusTarget::OpenDialogButton
            | FocusTarget::DialogClose
            | FocusTarget::DialogSoundsGood
            | FocusTarget::DialogContinue => {
                if activate {
                    self.activate(focused);
                }
                Handled::from_bool(activate)
            }
        }
    }

    /// Document-level keydown listeners, in registration order
    fn dispatch_document_key(&mut self, key: KeyEvent) {
        for owner in self.listeners.owners(ListenerKind::KeyDown) {
            match owner {
                Owner::Dialog if key.code == KeyCode::Esc => {
                    self.close_dialog();
                    return;
                }
                _ => {}
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────

    /// Primary-button press at a terminal cell
    ///
    /// Document pointer-down listeners see the event first, then the
    /// topmost target under the pointer is activated.
    pub fn handle_pointer_down(&mut self, column: u16, row: u16) {
        let hit = self.hits.hit_test(column, row);
        for owner in self.listeners.owners(ListenerKind::PointerDown) {
            // Whatever is drawn on top decides, not the dropdown's geometry
            if owner == Owner::Listbox && !hit.is_some_and(HitTarget::in_dropdown) {
                tracing::debug!(column, row, ?hit, "pointer-down outside dropdown");
                self.listbox.close(&mut self.deferred);
            }
        }

        match hit {
            Some(HitTarget::Control(target)) => {
                self.focus.set(target);
                self.activate(target);
            }
            // Options don't take focus; selection hands it to the trigger
            Some(HitTarget::TopicOption(index)) => self.select_topic(index),
            Some(HitTarget::Backdrop) => self.close_dialog(),
            Some(HitTarget::DialogSurface) | None => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Click (or Enter/Space) on a control
    pub fn activate(&mut self, target: FocusTarget) {
        match target {
            FocusTarget::TopicTrigger => self.listbox.toggle(&self.listeners, &mut self.deferred),
            FocusTarget::SubscribeCheckbox => self.form.toggle_subscribe(),
            FocusTarget::SubmitButton => self.submit(),
            FocusTarget::OpenDialogButton => self.open_dialog(),
            FocusTarget::DialogClose
            | FocusTarget::DialogSoundsGood
            | FocusTarget::DialogContinue => self.close_dialog(),
            FocusTarget::NameInput
            | FocusTarget::EmailInput
            | FocusTarget::MessageInput
            | FocusTarget::TopicListbox => {}
        }
    }

    /// Validate and announce the outcome. Focus stays where it is.
    pub fn submit(&mut self) {
        let topic = self.listbox.selected_option().label;
        let outcome = self.form.submit(topic);
        self.live.announce(outcome.announcement());
    }

    /// Open the dialog from the focused control
    pub fn open_dialog(&mut self) {
        let opener = self.focus.current();
        self.dialog.open(opener, &self.listeners, &mut self.deferred);
    }

    /// Close the dialog and hand focus back to its opener
    pub fn close_dialog(&mut self) {
        if let Some(opener) = self.dialog.close(&mut self.deferred) {
            self.focus.set(opener);
        }
    }

    /// Commit a topic, close the list and return focus to the trigger
    pub fn select_topic(&mut self, index: usize) {
        let index = self.listbox.select(index, &mut self.deferred);
        self.focus.set(FocusTarget::TopicTrigger);
        self.announce_topic(index);
    }

    fn announce_topic(&mut self, index: usize) {
        self.live.announce(format!("Topic set to {}.", TOPICS[index].label));
    }

    /// Apply focus moves that were waiting for the frame to be drawn.
    /// Returns true if focus changed, so the caller can redraw.
    pub fn after_render(&mut self) -> bool {
        if self.deferred.is_empty() {
            return false;
        }
        let pending = self.deferred.drain();
        let before = self.focus.current();
        for PendingFocus { owner, target } in pending {
            tracing::trace!(owner = owner.as_str(), ?target, "deferred focus");
            self.focus.set(target);
        }
        self.focus.current() != before
    }

    /// Timer tick: age the announcement emphasis
    pub fn on_tick(&mut self) {
        if self.live.revision() != self.seen_revision {
            self.seen_revision = self.live.revision();
            self.fresh_ticks = FRESH_TICKS;
        } else {
            self.fresh_ticks = self.fresh_ticks.saturating_sub(1);
        }
    }

    /// Whether the announcement was (re)written recently, identical text included
    pub fn announcement_is_fresh(&self) -> bool {
        self.live.revision() != self.seen_revision || self.fresh_ticks > 0
    }

    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.theme.name);
        self.theme = Theme::by_name(next);
        match self.theme.text_contrast() {
            Some(ratio) if ratio < MIN_TEXT_CONTRAST => {
                tracing::warn!(theme = next, ratio, "theme text contrast below WCAG AA")
            }
            ratio => tracing::info!(theme = next, ?ratio, "theme changed"),
        }
    }

    pub fn accessibility_tree(&self) -> AccessibilityTree {
        AccessibilityTree::snapshot(
            &self.form,
            &self.listbox,
            &self.dialog,
            self.focus.current(),
            &self.live,
        )
    }

    /// Status bar hint for the focused control
    pub fn focus_hint(&self) -> &'static str {
        let focused = self.focus.current();
        if let Some(field) = focused.field() {
            return self.form.input(field).focus_hint().unwrap_or("");
        }
        match focused {
            FocusTarget::TopicTrigger if self.listbox.is_open() => {
                "↑↓:highlight  Enter:select  Esc:close"
            }
            FocusTarget::TopicTrigger => "↑↓/Enter/Space:open topics",
            FocusTarget::TopicListbox => "↑↓:highlight  Enter:select  Esc:close",
            FocusTarget::SubscribeCheckbox => "Space:toggle",
            FocusTarget::SubmitButton => "Enter/Space:send request",
            FocusTarget::OpenDialogButton => "Enter/Space:open dialog",
            target if target.is_dialog_control() => "Enter/Space:activate  Esc:close dialog",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::tree;
    use crate::form::{Field, FAILURE_ANNOUNCEMENT};
    use crate::tui::views;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let mut config = Config::default();
        config.interface.show_inspector = false;
        App::with_config(&config, LogBuffer::new()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Draw once and flush deferred focus, like one turn of the event loop
    fn render(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|f| views::draw(f, app)).unwrap();
        app.after_render();
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 48)).unwrap()
    }

    fn click(app: &mut App, target: HitTarget) {
        let rect = app
            .hits
            .rect_of(target)
            .unwrap_or_else(|| panic!("{target:?} was not drawn"));
        app.handle_pointer_down(rect.x, rect.y);
    }

    #[test]
    fn valid_submission_announces_and_resets() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.org");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Hello");
        app.focus.set(FocusTarget::SubmitButton);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.live.text(),
            "Thanks Ada! We will send more on designing with color contrast."
        );
        assert!(app.form.errors().is_empty());
        assert_eq!(app.form.name.value(), "");
        assert_eq!(app.form.message.value(), "");
        assert_eq!(app.focus.current(), FocusTarget::SubmitButton);
    }

    #[test]
    fn invalid_submission_keeps_values_and_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@");
        // Enter in a single-line field submits implicitly
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.live.text(), FAILURE_ANNOUNCEMENT);
        assert_eq!(app.form.errors().len(), 3);
        assert_eq!(
            app.form.errors().get(Field::Email),
            Some("Enter a valid email address.")
        );
        assert_eq!(app.form.email.value(), "ada@");
        assert_eq!(app.focus.current(), FocusTarget::EmailInput);
    }

    #[test]
    fn enter_in_message_inserts_newline() {
        let mut app = app();
        app.focus.set(FocusTarget::MessageInput);
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        assert_eq!(app.form.message.value(), "a\nb");
        assert!(app.live.is_empty());
    }

    #[test]
    fn listbox_keyboard_flow() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);

        press(&mut app, KeyCode::Down);
        assert!(app.listbox.is_open());
        // Focus moves only after the list has been drawn
        assert_eq!(app.focus.current(), FocusTarget::TopicTrigger);
        render(&mut app, &mut terminal);
        assert_eq!(app.focus.current(), FocusTarget::TopicListbox);

        // Up from the first option wraps to the last
        press(&mut app, KeyCode::Up);
        assert_eq!(app.listbox.highlighted(), 2);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.listbox.highlighted(), 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.listbox.is_open());
        assert_eq!(app.listbox.selected(), 1);
        assert_eq!(app.focus.current(), FocusTarget::TopicTrigger);
        assert_eq!(app.live.text(), "Topic set to Supporting keyboard-only flows.");
        assert!(app.listeners().is_empty());
    }

    #[test]
    fn escape_closes_list_and_restores_trigger() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Enter);
        render(&mut app, &mut terminal);
        press(&mut app, KeyCode::Down);

        press(&mut app, KeyCode::Esc);
        assert!(!app.listbox.is_open());
        assert_eq!(app.listbox.selected(), 0);
        assert_eq!(app.focus.current(), FocusTarget::TopicTrigger);
        assert!(app.live.is_empty());
    }

    #[test]
    fn list_keys_work_from_trigger_while_open() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Char(' '));
        render(&mut app, &mut terminal);

        // Focus back on the trigger with the list still open
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.listbox.is_open(), "Space on the trigger keeps the list open");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.listbox.selected(), 2);
        assert_eq!(app.live.text(), "Topic set to Using landmarks and ARIA labels.");
    }

    #[test]
    fn closing_before_render_discards_deferred_focus() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);

        render(&mut app, &mut terminal);
        assert_eq!(app.focus.current(), FocusTarget::TopicTrigger);
    }

    #[test]
    fn dialog_focus_cycle_and_escape() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::OpenDialogButton);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_open());
        render(&mut app, &mut terminal);
        assert_eq!(app.focus.current(), FocusTarget::DialogClose);

        // Trapped: close → sounds good → continue → close
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus.current(), FocusTarget::DialogSoundsGood);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus.current(), FocusTarget::DialogContinue);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus.current(), FocusTarget::DialogClose);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus.current(), FocusTarget::DialogContinue);

        press(&mut app, KeyCode::Esc);
        assert!(!app.dialog.is_open());
        assert_eq!(app.focus.current(), FocusTarget::OpenDialogButton);
        assert!(app.listeners().is_empty());
    }

    #[test]
    fn footer_actions_close_dialog() {
        for action in [FocusTarget::DialogSoundsGood, FocusTarget::DialogContinue] {
            let mut app = app();
            let mut terminal = terminal();
            app.focus.set(FocusTarget::OpenDialogButton);
            press(&mut app, KeyCode::Char(' '));
            render(&mut app, &mut terminal);

            app.focus.set(action);
            press(&mut app, KeyCode::Enter);
            assert!(!app.dialog.is_open());
            assert_eq!(app.focus.current(), FocusTarget::OpenDialogButton);
        }
    }

    #[test]
    fn escape_without_dialog_does_nothing() {
        let mut app = app();
        app.focus.set(FocusTarget::SubmitButton);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus.current(), FocusTarget::SubmitButton);
        assert!(!app.dialog.has_been_opened());
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut app = app();
        let mut terminal = terminal();
        render(&mut app, &mut terminal);
        click(&mut app, HitTarget::Control(FocusTarget::OpenDialogButton));
        assert!(app.dialog.is_open());
        render(&mut app, &mut terminal);
        assert_eq!(app.focus.current(), FocusTarget::DialogClose);

        click(&mut app, HitTarget::DialogSurface);
        assert!(app.dialog.is_open());

        // Top-left cell is outside the dialog box
        app.handle_pointer_down(0, 0);
        assert!(!app.dialog.is_open());
        assert_eq!(app.focus.current(), FocusTarget::OpenDialogButton);
    }

    #[test]
    fn pointer_selects_option_and_outside_click_closes() {
        let mut app = app();
        let mut terminal = terminal();
        render(&mut app, &mut terminal);

        click(&mut app, HitTarget::Control(FocusTarget::TopicTrigger));
        assert!(app.listbox.is_open());
        render(&mut app, &mut terminal);

        click(&mut app, HitTarget::TopicOption(2));
        assert!(!app.listbox.is_open());
        assert_eq!(app.listbox.selected(), 2);
        assert_eq!(app.focus.current(), FocusTarget::TopicTrigger);

        // Reopen, then press somewhere outside the container
        render(&mut app, &mut terminal);
        click(&mut app, HitTarget::Control(FocusTarget::TopicTrigger));
        render(&mut app, &mut terminal);
        click(&mut app, HitTarget::Control(FocusTarget::NameInput));
        assert!(!app.listbox.is_open());
        assert_eq!(app.listbox.selected(), 2);
        assert_eq!(app.focus.current(), FocusTarget::NameInput);
        assert!(app.listeners().is_empty());
    }

    #[test]
    fn backdrop_over_open_list_counts_as_outside() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Down);
        render(&mut app, &mut terminal);
        assert!(app.listbox.is_open());

        // List stays open while the dialog comes up over it
        app.focus.set(FocusTarget::OpenDialogButton);
        press(&mut app, KeyCode::Enter);
        render(&mut app, &mut terminal);
        assert!(app.dialog.is_open());
        assert!(app.listbox.is_open());

        let trigger = app
            .hits
            .rect_of(HitTarget::Control(FocusTarget::TopicTrigger))
            .unwrap();
        assert_eq!(
            app.hits.hit_test(trigger.x, trigger.y),
            Some(HitTarget::Backdrop)
        );

        app.handle_pointer_down(trigger.x, trigger.y);
        assert!(!app.dialog.is_open());
        assert!(!app.listbox.is_open());
        assert!(app.listeners().is_empty());
    }

    #[test]
    fn trigger_click_toggles() {
        let mut app = app();
        let mut terminal = terminal();
        render(&mut app, &mut terminal);
        click(&mut app, HitTarget::Control(FocusTarget::TopicTrigger));
        render(&mut app, &mut terminal);
        click(&mut app, HitTarget::Control(FocusTarget::TopicTrigger));
        assert!(!app.listbox.is_open());
    }

    #[test]
    fn listeners_released_when_app_drops() {
        let mut app = app();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Down);
        app.focus.set(FocusTarget::OpenDialogButton);
        press(&mut app, KeyCode::Enter);

        let listeners = app.listeners();
        assert_eq!(listeners.len(), 2);
        drop(app);
        assert!(listeners.is_empty());
    }

    #[test]
    fn tree_reflects_open_components() {
        let mut app = app();
        let mut terminal = terminal();
        app.focus.set(FocusTarget::TopicTrigger);
        press(&mut app, KeyCode::Down);
        render(&mut app, &mut terminal);

        let tree = app.accessibility_tree();
        assert_eq!(tree.focused, "topic-listbox");
        let trigger = tree.find("topic-button").unwrap();
        assert_eq!(trigger.get_state("expanded"), Some("true"));
        assert_eq!(trigger.get_state("controls"), Some("topic-listbox"));
        let list = tree.find("topic-listbox").unwrap();
        assert_eq!(
            list.get_state("activedescendant"),
            Some("topic-listbox-contrast")
        );
        assert!(tree.find(tree::STATUS_ID).is_some());
    }

    #[test]
    fn global_keys() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert!(app.show_inspector);
        press(&mut app, KeyCode::F(4));
        assert!(app.show_logs);
        press(&mut app, KeyCode::F(3));
        assert_eq!(app.theme.name, "light");

        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        // Ctrl chords never reach the text field
        assert_eq!(app.form.name.value(), "");
    }

    #[test]
    fn repeated_announcement_is_emphasized_again() {
        let mut app = app();
        app.focus.set(FocusTarget::SubmitButton);
        press(&mut app, KeyCode::Enter);
        assert!(app.announcement_is_fresh());

        for _ in 0..=FRESH_TICKS {
            app.on_tick();
        }
        assert!(!app.announcement_is_fresh());

        // Same failure text again still counts as a new announcement
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.live.text(), FAILURE_ANNOUNCEMENT);
        assert!(app.announcement_is_fresh());
    }
}
