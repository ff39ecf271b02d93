use tracing::debug;

use crate::models::slider::{ListenerId, ListenerKind};

/// Something window-like that listeners can be attached to.
///
/// Implemented by the host (a DOM window binding, a native event loop).
pub trait EventTarget {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);
}

/// Window listeners held for as long as the comparison slider is mounted.
///
/// Attaches one listener per kind on creation and removes every one of
/// them when dropped, whichever way the owner goes away.
pub struct ListenerRegistration<'a, T: EventTarget> {
    target: &'a mut T,
    attached: Vec<(ListenerKind, ListenerId)>,
}

impl<'a, T: EventTarget> ListenerRegistration<'a, T> {
    /// Attach `kinds` to `target`.
    pub fn attach(target: &'a mut T, kinds: &[ListenerKind]) -> Self {
        let attached = kinds
            .iter()
            .map(|kind| (*kind, target.add_listener(*kind)))
            .collect::<Vec<_>>();
        debug!(count = attached.len(), "Attached window listeners");
        Self { target, attached }
    }

    /// Attach everything the comparison slider listens to.
    pub fn for_slider(target: &'a mut T) -> Self {
        Self::attach(target, &ListenerKind::SLIDER)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ListenerKind> {
        self.attached.iter().map(|(kind, _)| *kind).collect()
    }

    #[must_use]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.attached.iter().any(|(k, _)| *k == kind)
    }

    /// Detach now instead of at end of scope.
    pub fn release(self) {}
}

impl<T: EventTarget> Drop for ListenerRegistration<'_, T> {
    fn drop(&mut self) {
        for (kind, id) in self.attached.drain(..) {
            debug!(%kind, "Removing window listener");
            self.target.remove_listener(id);
        }
    }
}
