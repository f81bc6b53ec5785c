//! Document-level listener registry
//!
//! Components subscribe while they are open and hold the returned
//! [`Subscription`]. Dropping the subscription unregisters the listener, so
//! every exit path (close, replace, App teardown) releases it.

use super::Owner;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Event kind a document listener is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    /// Key presses anywhere (used for Escape capture)
    KeyDown,
    /// Pointer presses anywhere (used for outside-click detection)
    PointerDown,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: u64,
    kind: ListenerKind,
    owner: Owner,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Registration>,
}

/// Shared handle to the document listener registry
///
/// Cloning is cheap; all clones see the same registrations. The UI runs on a
/// single thread, so `Rc<RefCell<..>>` is enough.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the guard is dropped
    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, kind: ListenerKind, owner: Owner) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Registration { id, kind, owner });

        tracing::trace!(id, ?kind, owner = owner.as_str(), "document listener added");

        Subscription {
            id,
            kind,
            owner,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Owners listening for `kind`, in registration order
    pub fn owners(&self, kind: ListenerKind) -> Vec<Owner> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.owner)
            .collect()
    }

    /// Whether `owner` currently listens for `kind`
    #[cfg(test)]
    pub fn is_registered(&self, kind: ListenerKind, owner: Owner) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|r| r.kind == kind && r.owner == owner)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration guard; unregisters its listener on drop
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
    owner: Owner,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Registry already gone during teardown: nothing left to clean up
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.borrow_mut().entries.retain(|r| r.id != self.id);
        tracing::trace!(
            id = self.id,
            kind = ?self.kind,
            owner = self.owner.as_str(),
            "document listener removed"
        );
    }
}
