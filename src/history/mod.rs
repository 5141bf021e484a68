//! Undo history.
//!
//! A `Snapshot` is taken immediately before every move and holds a deep
//! copy of the state at that point. Undo pops the newest snapshot and
//! restores it wholesale.

mod snapshot;

pub use snapshot::Snapshot;

use im::Vector;

/// Stack of snapshots, newest last.
///
/// Backed by `im::Vector` so cloning a game with a long history is cheap.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<Snapshot>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
    }

    /// Pop the newest snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Look at the newest snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if there is anything to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
