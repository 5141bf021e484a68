//! Change notification.
//!
//! Each game owns a `ListenerRegistry`. After every mutation (a move, an
//! undo, a change of turn) the game calls every listener once, in
//! registration order, handing it read-only access to the game so it can
//! re-read whatever it displays. There is no global registry: two games
//! never share listeners.

mod registry;

pub use registry::{ListenerId, ListenerRegistry};
