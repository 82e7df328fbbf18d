//! Front-panel buttons: power, time, start/cancel.
//!
//! A [`Button`] holds no state.  Each `press()` delivers exactly one
//! notification to the subscriber, synchronously.
//!
//! ## Debouncing
//!
//! Mechanical switches bounce.  [`DebouncedButton`] sits between the raw
//! GPIO edge and the `Button`: an edge is accepted only if at least
//! `DEBOUNCE_MS` passed since the last accepted edge.
//!
//! | Edge at (ms) | Last accepted | Result            |
//! |--------------|---------------|-------------------|
//! | 1000         | none          | press delivered   |
//! | 1020         | 1000          | dropped (bounce)  |
//! | 1060         | 1000          | press delivered   |

use crate::app::commands::Notification;
use crate::app::ports::InputSink;

const DEBOUNCE_MS: u32 = 50;

/// Which of the three panel buttons this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Power,
    Time,
    StartCancel,
}

impl ButtonKind {
    fn notification(self) -> Notification {
        match self {
            Self::Power => Notification::PowerPressed,
            Self::Time => Notification::TimePressed,
            Self::StartCancel => Notification::StartCancelPressed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Button {
    kind: ButtonKind,
}

impl Button {
    pub fn new(kind: ButtonKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// Deliver one press notification.
    pub fn press(&self, subscriber: &mut impl InputSink) {
        subscriber.notify(self.kind.notification());
    }
}

/// Button behind a time-based debounce filter.
pub struct DebouncedButton {
    button: Button,
    last_accepted_ms: Option<u32>,
}

impl DebouncedButton {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            button: Button::new(kind),
            last_accepted_ms: None,
        }
    }

    /// Feed a raw falling edge observed at `now_ms`.
    /// Returns `true` if it was accepted as a press.
    pub fn edge(&mut self, now_ms: u32, subscriber: &mut impl InputSink) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < DEBOUNCE_MS {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        self.button.press(subscriber);
        true
    }

    pub fn kind(&self) -> ButtonKind {
        self.button.kind()
    }
}
