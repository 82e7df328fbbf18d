//! Inbound notifications to the coordinator.
//!
//! These are the discrete, payload-minimal events delivered by the
//! buttons, the door, and the timer.  The
//! [`Coordinator`](super::service::Coordinator) interprets and acts upon
//! them one at a time, in arrival order.

use crate::fsm::Input;

/// Notifications that sources can deliver into the oven core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Power button pressed.
    PowerPressed,
    /// Time button pressed.
    TimePressed,
    /// Start/cancel button pressed.
    StartCancelPressed,

    /// Door moved closed → open.
    DoorOpened,
    /// Door moved open → closed.
    DoorClosed,

    /// One second of countdown elapsed.
    TimerTick { remaining_secs: u32 },
    /// Countdown reached zero.
    TimerExpired,

    /// The sequencer finished a cycle.  Queued internally by the
    /// coordinator's [`CookDelegate`](super::ports::CookDelegate); not
    /// expected from outside sources.
    CookingDone,
}

impl Notification {
    /// The state-machine input this notification maps to, if any.
    ///
    /// Timer notifications go to the sequencer, not the state machine.
    pub fn as_input(self) -> Option<Input> {
        match self {
            Self::PowerPressed => Some(Input::PowerPressed),
            Self::TimePressed => Some(Input::TimePressed),
            Self::StartCancelPressed => Some(Input::StartCancelPressed),
            Self::DoorOpened => Some(Input::DoorOpened),
            Self::DoorClosed => Some(Input::DoorClosed),
            Self::CookingDone => Some(Input::CookingDone),
            Self::TimerTick { .. } | Self::TimerExpired => None,
        }
    }
}
