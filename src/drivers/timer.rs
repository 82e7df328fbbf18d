//! Software countdown timer.
//!
//! Advanced by the caller once per second (board: a 1 Hz hardware timer
//! interrupt; host: the simulator's `tick` command).  Each second yields
//! a tick carrying the remaining time, and the final second yields the
//! expiry instead, after which the timer is stopped.

use crate::app::commands::Notification;

#[derive(Debug, Default)]
pub struct CountdownTimer {
    remaining_secs: Option<u32>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for `duration_secs`, replacing any running countdown.
    pub fn start(&mut self, duration_secs: u32) {
        self.remaining_secs = Some(duration_secs);
    }

    pub fn stop(&mut self) {
        self.remaining_secs = None;
    }

    /// One second elapsed.
    pub fn on_second(&mut self) -> Option<Notification> {
        let remaining = self.remaining_secs?;
        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.remaining_secs = None;
            Some(Notification::TimerExpired)
        } else {
            self.remaining_secs = Some(remaining);
            Some(Notification::TimerTick {
                remaining_secs: remaining,
            })
        }
    }

    pub fn is_running(&self) -> bool {
        self.remaining_secs.is_some()
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }
}
