//! Deferred focus transfers
//!
//! Opening the listbox or the dialog mounts new controls that cannot take
//! focus until they have been drawn once. The owner schedules the move here;
//! the event loop flushes the queue right after the next draw. Closing the
//! owner before that cancels the move so focus never lands on a control that
//! is no longer on screen.

use super::{FocusTarget, Owner};

/// A focus move waiting for the next render commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFocus {
    pub owner: Owner,
    pub target: FocusTarget,
}

#[derive(Debug, Default)]
pub struct DeferredFocus {
    pending: Vec<PendingFocus>,
}

impl DeferredFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a focus move; replaces any move already pending for `owner`
    pub fn schedule(&mut self, owner: Owner, target: FocusTarget) {
        self.pending.retain(|p| p.owner != owner);
        self.pending.push(PendingFocus { owner, target });
    }

    /// Drop the pending move for `owner`. Returns true if one was pending.
    pub fn cancel_for(&mut self, owner: Owner) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.owner != owner);
        let cancelled = self.pending.len() != before;
        if cancelled {
            tracing::trace!(owner = owner.as_str(), "deferred focus cancelled");
        }
        cancelled
    }

    #[cfg(test)]
    pub fn is_pending(&self, owner: Owner) -> bool {
        self.pending.iter().any(|p| p.owner == owner)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending move, oldest first
    pub fn drain(&mut self) -> Vec<PendingFocus> {
        std::mem::take(&mut self.pending)
    }
}
