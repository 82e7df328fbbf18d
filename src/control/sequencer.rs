//! Cook sequencer
//!
//! Drives one cook cycle: power tube on at the requested level, timer
//! armed for the requested duration, and both stopped again on cancel or
//! natural expiry.  It makes no decisions about oven state; the
//! coordinator decides *when* to start or cancel, the sequencer only
//! knows *how*.
//!
//! ## Cycle lifecycle
//!
//! 1. `start(power, secs)`: tube on, then timer started.
//! 2. Each timer tick: remaining time shown on the display.
//! 3a. `cancel()`: tube off, timer stopped.  No delegate callback; the
//!     caller already knows.
//! 3b. Timer expiry: tube off, timer disarmed, then
//!     `CookDelegate::on_cycle_ended`.

use log::{debug, info};

use crate::app::ports::{CookDelegate, DisplayPort, PowerTubePort, TimerPort};
use crate::error::SequencerError;

/// The one running cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookSession {
    pub power_w: u16,
    pub duration_secs: u32,
    /// Last remaining time reported by the timer.
    pub remaining_secs: u32,
}

/// Cook sequencer.  Holds at most one [`CookSession`].
#[derive(Debug, Default)]
pub struct CookSequencer {
    session: Option<CookSession>,
}

impl CookSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a cycle: tube on at `power_w`, then timer for `duration_secs`.
    pub fn start(
        &mut self,
        power_w: u16,
        duration_secs: u32,
        hw: &mut (impl PowerTubePort + TimerPort),
    ) -> Result<(), SequencerError> {
        if self.session.is_some() {
            return Err(SequencerError::AlreadyRunning);
        }

        hw.turn_on(power_w);
        hw.start(duration_secs);

        self.session = Some(CookSession {
            power_w,
            duration_secs,
            remaining_secs: duration_secs,
        });
        info!("Sequencer: cycle started at {} W for {}s", power_w, duration_secs);
        Ok(())
    }

    /// Abort the running cycle: tube off, timer stopped.
    pub fn cancel(
        &mut self,
        hw: &mut (impl PowerTubePort + TimerPort),
    ) -> Result<(), SequencerError> {
        let session = self.session.take().ok_or(SequencerError::NotRunning)?;

        hw.turn_off();
        hw.stop();

        info!(
            "Sequencer: cycle cancelled with {}s of {}s remaining",
            session.remaining_secs, session.duration_secs
        );
        Ok(())
    }

    /// Forward a countdown tick to the display.  Ignored when idle.
    pub fn on_timer_tick(&mut self, remaining_secs: u32, display: &mut impl DisplayPort) {
        let Some(session) = self.session.as_mut() else {
            debug!("Sequencer: tick with no cycle running");
            return;
        };
        session.remaining_secs = remaining_secs;
        display.show_time(remaining_secs / 60, (remaining_secs % 60) as u8);
    }

    /// Natural end of the cycle.  Ignored when idle.
    ///
    /// The timer is stopped as well, so an expiry delivered early leaves
    /// no countdown armed.
    pub fn on_timer_expired(
        &mut self,
        hw: &mut (impl PowerTubePort + TimerPort),
        delegate: &mut dyn CookDelegate,
    ) {
        let Some(session) = self.session.take() else {
            debug!("Sequencer: expiry with no cycle running");
            return;
        };

        hw.turn_off();
        hw.stop();
        info!("Sequencer: cycle finished after {}s", session.duration_secs);
        delegate.on_cycle_ended(session.power_w, session.duration_secs);
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// The running cycle, if any.
    pub fn session(&self) -> Option<&CookSession> {
        self.session.as_ref()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
