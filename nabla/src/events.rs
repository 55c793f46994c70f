//! Session notifications as pure data.
//!
//! The session never calls back into the host; it queues events and the
//! host drains them with [`Session::take_events`](crate::Session::take_events)
//! after each operation. This keeps the core testable without any UI.

/// Something the host should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The tree or its presentation changed; redraw the display.
    RedrawRequested,
    /// The return key ended the session; input should be saved.
    ReturnPressed,
    /// The dismiss key ended the session; input should be discarded.
    DismissPressed,
}
