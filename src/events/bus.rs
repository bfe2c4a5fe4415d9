//! Listener registration and dispatch.
//!
//! Listeners run synchronously inside [`EventBus::emit`], in the order they
//! were registered: kind-specific listeners first, then catch-all ones.

use rustc_hash::FxHashMap;

use super::event::{EventKind, GameEvent};

/// Callback invoked with each matching event.
pub type Listener = Box<dyn FnMut(&GameEvent)>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Default)]
pub struct EventBus {
    by_kind: FxHashMap<EventKind, Vec<(SubscriptionId, Listener)>>,
    catch_all: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for one kind of event.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        let id = self.allocate_id();
        self.by_kind
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Listen for every event.
    pub fn subscribe_all(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = self.allocate_id();
        self.catch_all.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listener_count();
        for listeners in self.by_kind.values_mut() {
            listeners.retain(|(registered, _)| *registered != id);
        }
        self.catch_all.retain(|(registered, _)| *registered != id);
        self.listener_count() != before
    }

    /// Deliver `event` to every interested listener.
    pub fn emit(&mut self, event: &GameEvent) {
        tracing::trace!(kind = ?event.kind(), "emit");
        if let Some(listeners) = self.by_kind.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
        for (_, listener) in &mut self.catch_all {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum::<usize>() + self.catch_all.len()
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
