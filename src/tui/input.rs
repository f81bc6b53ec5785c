// Key repeat filtering
//
// Terminals that never send Release events report a held key as a stream of
// presses. Dismiss and the panel toggles are debounced so one physical press
// triggers once. Everything else passes straight through, Enter included: it
// types newlines in the message field and opens then selects in the listbox.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held action key
const DEBOUNCE: Duration = Duration::from_millis(150);

/// How repeats of a key are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Once per press; repeats inside the debounce window are dropped
    StateChange,
    /// Every press counts (text, Enter, arrows, Tab traversal)
    Passthrough,
}

impl KeyBehavior {
    pub fn of(key: KeyCode) -> Self {
        match key {
            // Dismiss, then inspector, theme, logs
            KeyCode::Esc | KeyCode::F(2..=4) => Self::StateChange,
            _ => Self::Passthrough,
        }
    }
}

/// Filters repeated presses of action keys
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Action keys currently held, with the time they last fired
    held: HashMap<KeyCode, Instant>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the press should reach the app
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        if KeyBehavior::of(key) == KeyBehavior::Passthrough {
            return true;
        }

        match self.held.get_mut(&key) {
            // Still held (or no Release ever arrived): fire again once the window passed
            Some(last) if now.duration_since(*last) < DEBOUNCE => false,
            Some(last) => {
                *last = now;
                true
            }
            None => {
                self.held.insert(key, now);
                true
            }
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_action_key_fires_once_until_released() {
        let mut handler = InputHandler::new();
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::F(3), start));
        assert!(!handler.handle_key_press_at(KeyCode::F(3), start + Duration::from_millis(30)));
        assert!(!handler.handle_key_press_at(KeyCode::F(3), start + Duration::from_millis(60)));

        handler.handle_key_release(KeyCode::F(3));
        assert!(handler.handle_key_press_at(KeyCode::F(3), start + Duration::from_millis(70)));
    }

    #[test]
    fn held_key_fires_again_after_debounce() {
        let mut handler = InputHandler::new();
        let start = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Esc, start));
        assert!(!handler.handle_key_press_at(KeyCode::Esc, start + Duration::from_millis(40)));
        assert!(handler.handle_key_press_at(KeyCode::Esc, start + DEBOUNCE));
    }

    #[test]
    fn typing_is_never_debounced() {
        let mut handler = InputHandler::new();

        // "aaa" typed quickly must produce three characters
        for _ in 0..3 {
            assert!(handler.handle_key_press(KeyCode::Char('a')));
        }
        assert!(handler.handle_key_press(KeyCode::Tab));
        assert!(handler.handle_key_press(KeyCode::Tab));
        assert_eq!(KeyBehavior::of(KeyCode::F(5)), KeyBehavior::Passthrough);
        assert_eq!(KeyBehavior::of(KeyCode::F(3)), KeyBehavior::StateChange);
    }

    #[test]
    fn quick_enters_all_reach_the_app() {
        let mut handler = InputHandler::new();
        let start = Instant::now();

        // Two newlines in the message field, or open-then-select in the list
        assert!(handler.handle_key_press_at(KeyCode::Enter, start));
        assert!(handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(20)));
        assert!(handler.handle_key_press_at(KeyCode::Enter, start + Duration::from_millis(40)));
        assert_eq!(KeyBehavior::of(KeyCode::Enter), KeyBehavior::Passthrough);
    }
}
