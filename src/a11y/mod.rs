//! Accessible interaction primitives
//!
//! Terminal renditions of the browser patterns this app demonstrates:
//!
//! ```text
//!   ┌──────────────┐   owns    ┌────────────────┐
//!   │   Listbox    │──────────▶│  Subscription  │──┐
//!   │   Dialog     │           └────────────────┘  │ unregisters on Drop
//!   └──────┬───────┘                               ▼
//!          │ schedule / cancel            ┌────────────────┐
//!          ▼                              │   Listeners    │  document-level
//!   ┌──────────────┐  flushed after draw  └────────────────┘  key / pointer
//!   │ DeferredFocus│─────────────▶ FocusManager
//!   └──────────────┘
//! ```
//!
//! - [`focus`] - focusable controls, tab order, dialog focus trap
//! - [`listbox`] - the topic dropdown (listbox pattern)
//! - [`dialog`] - the modal dialog controller
//! - [`announcer`] - polite live region (last write wins)
//! - [`deferred`] - "move focus after the next render" queue
//! - [`listeners`] - document listener registry with RAII subscriptions
//! - [`tree`] - ARIA-equivalent attribute snapshot

pub mod announcer;
pub mod deferred;
pub mod dialog;
pub mod focus;
pub mod listbox;
pub mod listeners;
pub mod tree;

pub use announcer::LiveRegion;
pub use deferred::DeferredFocus;
pub use dialog::Dialog;
pub use focus::{FocusManager, FocusTarget};
pub use listbox::{Listbox, ListboxAction, TOPICS};
pub use listeners::{ListenerKind, Listeners};
pub use tree::AccessibilityTree;

use crossterm::event::KeyEvent;

/// Component that owns a document listener or a deferred focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Listbox,
    Dialog,
}

impl Owner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Owner::Listbox => "listbox",
            Owner::Dialog => "dialog",
        }
    }
}

/// Result of handling a key event
///
/// Tells the caller whether the control consumed the event or
/// if it should bubble up to the next handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed (the browser equivalent of `preventDefault`)
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Controls that edit their own content from keyboard input
///
/// The App routes key events to the focused control first; anything
/// the control returns `Handled::No` for bubbles to form-level handling
/// (implicit submit) and then to document listeners.
pub trait Interactive {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Hint text for the status bar when this control is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
