//! Outbound oven events.
//!
//! The [`Coordinator`](super::service::Coordinator) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them: log to serial, count them,
//! record them in a test.

use super::commands::Notification;
use crate::fsm::StateId;

/// Structured events emitted by the oven core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OvenEvent {
    /// The coordinator has started (carries initial state).
    Started(StateId),

    /// The state machine moved between states.
    StateChanged { from: StateId, to: StateId },

    /// A notification had no effect in the current state.
    InputIgnored {
        notification: Notification,
        state: StateId,
    },

    /// A cook cycle began.
    CookStarted { power_w: u16, duration_secs: u32 },

    /// A cook cycle was stopped early (start/cancel or door).
    CookCancelled,

    /// A cook cycle ran to expiry.
    CookFinished { power_w: u16, duration_secs: u32 },

    /// A notification was dropped because the mailbox was full.
    NotificationDropped(Notification),
}
