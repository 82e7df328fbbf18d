//! Oven coordinator, the hexagonal core.
//!
//! [`Coordinator`] owns the state machine, the cook sequencer, the
//! notification mailbox, the hardware, and the event sink.  Every
//! button, door and timer notification enters through
//! [`InputSink::notify`], is handled to completion, and only then is the
//! next one taken from the mailbox.
//!
//! ```text
//!  Button/Door/Timer ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                        │      Coordinator       │
//!   Light/Display    ◀── │  FSM · Sequencer       │
//!   PowerTube/Timer  ◀── └────────────────────────┘
//! ```

use log::{error, info, warn};

use crate::config::OvenConfig;
use crate::error::Result;
use crate::control::sequencer::CookSequencer;
use crate::events::NotificationQueue;
use crate::fsm::{Action, Fsm, Input, OvenState, StateId};

use super::commands::Notification;
use super::events::OvenEvent;
use super::ports::{
    CookDelegate, DisplayPort, EventSink, InputSink, LightPort, OvenHardware, TimerSource,
};

// ───────────────────────────────────────────────────────────────
// Coordinator
// ───────────────────────────────────────────────────────────────

/// The coordinator orchestrates all oven logic.
pub struct Coordinator<H, E> {
    fsm: Fsm,
    sequencer: CookSequencer,
    mailbox: NotificationQueue,
    /// Set while the mailbox is being drained.
    dispatching: bool,
    hw: H,
    sink: E,
}

impl<H: OvenHardware, E: EventSink> Coordinator<H, E> {
    /// Construct the coordinator in `Ready`.
    ///
    /// Fails with [`Error::Config`](crate::Error::Config) if `config` does not validate.
    /// Issues no actuator commands; call [`start`](Self::start) to
    /// announce the initial state.
    pub fn new(config: OvenConfig, hw: H, sink: E) -> Result<Self> {
        Ok(Self {
            fsm: Fsm::new(config)?,
            sequencer: CookSequencer::new(),
            mailbox: NotificationQueue::new(),
            dispatching: false,
            hw,
            sink,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self) {
        let state = self.fsm.state_id();
        self.sink.emit(&OvenEvent::Started(state));
        info!("Coordinator started in {}", state.name());
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current state identity.
    pub fn state(&self) -> StateId {
        self.fsm.state_id()
    }

    /// Current state with its selection data.
    pub fn oven_state(&self) -> &OvenState {
        self.fsm.state()
    }

    pub fn is_cooking(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn config(&self) -> &OvenConfig {
        self.fsm.config()
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    // ── Dispatch ──────────────────────────────────────────────

    fn enqueue(&mut self, notification: Notification) {
        if !self.mailbox.push(notification) {
            warn!("Mailbox full, dropping {:?}", notification);
            self.sink.emit(&OvenEvent::NotificationDropped(notification));
        }
    }

    fn drain(&mut self) {
        if self.dispatching {
            return;
        }
        self.dispatching = true;
        while let Some(notification) = self.mailbox.pop() {
            self.process(notification);
        }
        self.dispatching = false;
    }

    fn process(&mut self, notification: Notification) {
        match notification {
            Notification::TimerTick { remaining_secs } => {
                self.sequencer.on_timer_tick(remaining_secs, &mut self.hw);
            }
            Notification::TimerExpired => {
                let Self {
                    sequencer,
                    hw,
                    mailbox,
                    sink,
                    ..
                } = self;
                let mut delegate = MailboxDelegate { mailbox, sink };
                sequencer.on_timer_expired(hw, &mut delegate);
            }
            // Only the sequencer's own delegate may end a running cycle.
            Notification::CookingDone if self.sequencer.is_running() => {
                warn!("CookingDone while the cycle is still running, ignoring");
                self.sink.emit(&OvenEvent::InputIgnored {
                    notification,
                    state: self.fsm.state_id(),
                });
            }
            other => {
                if let Some(input) = other.as_input() {
                    self.apply_input(other, input);
                }
            }
        }
    }

    fn apply_input(&mut self, notification: Notification, input: Input) {
        let from = self.fsm.state_id();
        let Some(actions) = self.fsm.handle(input) else {
            self.sink.emit(&OvenEvent::InputIgnored {
                notification,
                state: from,
            });
            return;
        };

        for action in actions {
            self.apply_action(action);
        }

        let to = self.fsm.state_id();
        if from != to {
            self.sink.emit(&OvenEvent::StateChanged { from, to });
        }
    }

    /// Translate one FSM action into port calls.
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::ShowPower(watts) => self.hw.show_power(watts),
            Action::ShowTime { minutes, seconds } => self.hw.show_time(minutes, seconds),
            Action::ClearDisplay => DisplayPort::clear(&mut self.hw),
            Action::LightOn => LightPort::turn_on(&mut self.hw),
            Action::LightOff => LightPort::turn_off(&mut self.hw),
            Action::StartCooking {
                power_w,
                duration_secs,
            } => match self.sequencer.start(power_w, duration_secs, &mut self.hw) {
                Ok(()) => self.sink.emit(&OvenEvent::CookStarted {
                    power_w,
                    duration_secs,
                }),
                Err(e) => error!("Sequencer start rejected: {}", e),
            },
            Action::CancelCooking => match self.sequencer.cancel(&mut self.hw) {
                Ok(()) => self.sink.emit(&OvenEvent::CookCancelled),
                Err(e) => error!("Sequencer cancel rejected: {}", e),
            },
        }
    }
}

impl<H: OvenHardware + TimerSource, E: EventSink> Coordinator<H, E> {
    /// Advance the hardware timer by one second and deliver whatever it
    /// reports.
    pub fn tick(&mut self) {
        if let Some(notification) = self.hw.on_second() {
            self.notify(notification);
        }
    }
}

impl<H: OvenHardware, E: EventSink> InputSink for Coordinator<H, E> {
    fn notify(&mut self, notification: Notification) {
        self.enqueue(notification);
        self.drain();
    }
}

// ───────────────────────────────────────────────────────────────
// Sequencer → coordinator bridge
// ───────────────────────────────────────────────────────────────

/// Bridges the sequencer's cycle-ended callback to the mailbox.  The
/// notification is handled after the current one finishes.
struct MailboxDelegate<'a, E> {
    mailbox: &'a mut NotificationQueue,
    sink: &'a mut E,
}

impl<E: EventSink> CookDelegate for MailboxDelegate<'_, E> {
    fn on_cycle_ended(&mut self, power_w: u16, duration_secs: u32) {
        self.sink.emit(&OvenEvent::CookFinished {
            power_w,
            duration_secs,
        });
        if !self.mailbox.push(Notification::CookingDone) {
            warn!("Mailbox full, dropping CookingDone");
            self.sink
                .emit(&OvenEvent::NotificationDropped(Notification::CookingDone));
        }
    }
}
