//! Listener registry.

use serde::{Deserialize, Serialize};

/// Handle returned by `ListenerRegistry::add`, used to remove a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Wrap a raw ID value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// Ordered callbacks observing a value of type `T`.
pub struct ListenerRegistry<T> {
    listeners: Vec<(ListenerId, Callback<T>)>,
    next_id: u32,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> std::fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("ids", &self.ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> ListenerRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returns its ID.
    pub fn add(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener once, oldest registration first.
    pub fn notify(&mut self, subject: &T) {
        for (_, listener) in &mut self.listeners {
            listener(subject);
        }
    }

    /// Registered IDs in call order.
    #[must_use]
    pub fn ids(&self) -> Vec<ListenerId> {
        self.listeners.iter().map(|(id, _)| *id).collect()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
