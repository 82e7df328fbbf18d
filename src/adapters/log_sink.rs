//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured oven events to the
//! `log` facade (serial console on the board, stderr on the host).

use log::{info, warn};

use crate::app::events::OvenEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`OvenEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &OvenEvent) {
        match event {
            OvenEvent::Started(state) => {
                info!("START | initial_state={}", state.name());
            }
            OvenEvent::StateChanged { from, to } => {
                info!("STATE | {} -> {}", from.name(), to.name());
            }
            OvenEvent::InputIgnored {
                notification,
                state,
            } => {
                info!("INPUT | {:?} ignored in {}", notification, state.name());
            }
            OvenEvent::CookStarted {
                power_w,
                duration_secs,
            } => {
                info!("COOK  | started {} W for {}s", power_w, duration_secs);
            }
            OvenEvent::CookCancelled => {
                info!("COOK  | cancelled");
            }
            OvenEvent::CookFinished {
                power_w,
                duration_secs,
            } => {
                info!("COOK  | finished {} W after {}s", power_w, duration_secs);
            }
            OvenEvent::NotificationDropped(notification) => {
                warn!("INPUT | {:?} dropped, mailbox full", notification);
            }
        }
    }
}
