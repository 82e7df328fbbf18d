//! Door sensor.
//!
//! Holds only the open/closed flag and emits a notification on an
//! actual transition.  Opening an open door, or closing a closed one,
//! is silently absorbed.

use crate::app::commands::Notification;
use crate::app::ports::InputSink;

#[derive(Debug, Default)]
pub struct Door {
    is_open: bool,
}

impl Door {
    /// A closed door.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the door.  Returns `true` if this changed its state.
    pub fn open(&mut self, subscriber: &mut impl InputSink) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        subscriber.notify(Notification::DoorOpened);
        true
    }

    /// Close the door.  Returns `true` if this changed its state.
    pub fn close(&mut self, subscriber: &mut impl InputSink) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        subscriber.notify(Notification::DoorClosed);
        true
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
