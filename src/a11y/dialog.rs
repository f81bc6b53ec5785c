//! Modal dialog controller
//!
//! Open: capture Escape at the document level and move focus to the close
//! control after the first draw. Close (Escape, close button, either footer
//! action, or a click on the backdrop itself): release the listener, cancel
//! the pending focus move and hand focus back to the control that opened it.

use super::listeners::Subscription;
use super::{DeferredFocus, FocusTarget, ListenerKind, Listeners, Owner};

pub const HEADING_ID: &str = "modal-heading";
pub const DESCRIPTION_ID: &str = "modal-description";

pub const TITLE: &str = "Rollout principles";
pub const DESCRIPTION: &str = "Ship in small slices, observe real-world feedback, and keep a \
     rollback plan ready. Accessibility fixes deserve the same urgency as security updates.";
pub const NOTE: &str = "Before exiting, confirm keyboard navigation, screen reader \
     announcements, and zoomed layouts hold up.";

/// Accessible name of the close control
pub const CLOSE_LABEL: &str = "Close dialog";
pub const SOUNDS_GOOD_LABEL: &str = "Sounds good";
pub const CONTINUE_LABEL: &str = "Continue";

#[derive(Debug, Default)]
pub struct Dialog {
    /// Escape capture; present exactly while the dialog is open
    key_listener: Option<Subscription>,
    /// Control that opened the dialog most recently; None until first open
    opener: Option<FocusTarget>,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.key_listener.is_some()
    }

    pub fn has_been_opened(&self) -> bool {
        self.opener.is_some()
    }

    /// Open the dialog. Idempotent: returns false if it was already open.
    pub fn open(
        &mut self,
        opener: FocusTarget,
        listeners: &Listeners,
        deferred: &mut DeferredFocus,
    ) -> bool {
        if self.is_open() {
            return false;
        }
        let first = !self.has_been_opened();
        self.opener = Some(opener);
        self.key_listener = Some(listeners.subscribe(ListenerKind::KeyDown, Owner::Dialog));
        deferred.schedule(Owner::Dialog, FocusTarget::DialogClose);
        tracing::debug!(?opener, first, "dialog opened");
        true
    }

    /// Close the dialog.
    ///
    /// Returns the control focus should return to, or None when the dialog
    /// was not open.
    pub fn close(&mut self, deferred: &mut DeferredFocus) -> Option<FocusTarget> {
        self.key_listener.take()?;
        deferred.cancel_for(Owner::Dialog);
        tracing::debug!(restore = ?self.opener, "dialog closed");
        self.opener
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_idempotent() {
        let listeners = Listeners::new();
        let mut deferred = DeferredFocus::new();
        let mut dialog = Dialog::new();

        assert!(dialog.open(FocusTarget::OpenDialogButton, &listeners, &mut deferred));
        assert!(!dialog.open(FocusTarget::SubmitButton, &listeners, &mut deferred));
        assert_eq!(listeners.len(), 1);

        // Restoration target is the first opener, not the ignored request
        assert_eq!(
            dialog.close(&mut deferred),
            Some(FocusTarget::OpenDialogButton)
        );
    }

    #[test]
    fn close_releases_listener_and_pending_focus() {
        let listeners = Listeners::new();
        let mut deferred = DeferredFocus::new();
        let mut dialog = Dialog::new();
        dialog.open(FocusTarget::OpenDialogButton, &listeners, &mut deferred);
        assert!(listeners.is_registered(ListenerKind::KeyDown, Owner::Dialog));
        assert!(deferred.is_pending(Owner::Dialog));

        dialog.close(&mut deferred);
        assert!(listeners.is_empty());
        assert!(deferred.is_empty());
        assert!(!dialog.is_open());
    }

    #[test]
    fn closing_never_opened_dialog_restores_nothing() {
        let mut deferred = DeferredFocus::new();
        let mut dialog = Dialog::new();
        assert!(!dialog.has_been_opened());
        assert_eq!(dialog.close(&mut deferred), None);
    }
}
