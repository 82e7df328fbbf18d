//! Oven control state machine.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Fsm                                                         │
//! │  ┌────────────────┬──────────────────────────────────────┐   │
//! │  │ OvenState      │ carries                              │   │
//! │  ├────────────────┼──────────────────────────────────────┤   │
//! │  │ Ready          │ -                                    │   │
//! │  │ PowerSelected  │ power_w                              │   │
//! │  │ TimeSelected   │ power_w, minutes                     │   │
//! │  │ Cooking        │ power_w, minutes                     │   │
//! │  │ DoorOpen       │ -                                    │   │
//! │  └────────────────┴──────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each input is routed to the handler for the **current** state (see
//! [`states::step`]).  A handler either returns `None` (the input is
//! ignored in this state: no state change, no side effect) or a
//! [`Transition`] naming the next state and the ordered list of
//! [`Action`]s the coordinator must apply to the actuators.
//!
//! The selection data lives inside the state variants, so returning to
//! `Ready` discards it by construction.

pub mod states;

use log::{debug, info};

use crate::config::OvenConfig;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Payload-free discriminant of [`OvenState`], for events and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Ready = 0,
    PowerSelected = 1,
    TimeSelected = 2,
    Cooking = 3,
    DoorOpen = 4,
}

impl StateId {
    /// Total number of states.
    pub const COUNT: usize = 5;

    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::PowerSelected => "PowerSelected",
            Self::TimeSelected => "TimeSelected",
            Self::Cooking => "Cooking",
            Self::DoorOpen => "DoorOpen",
        }
    }
}

// ---------------------------------------------------------------------------
// State with data
// ---------------------------------------------------------------------------

/// The oven's state, carrying only the data relevant to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OvenState {
    /// Idle, nothing selected.
    #[default]
    Ready,
    /// Power chosen, still accumulating.
    PowerSelected { power_w: u16 },
    /// Power and at least one time increment chosen.
    TimeSelected { power_w: u16, minutes: u32 },
    /// Sequencer active.
    Cooking { power_w: u16, minutes: u32 },
    /// Door override.  Remembers nothing about the prior state.
    DoorOpen,
}

impl OvenState {
    pub fn id(&self) -> StateId {
        match self {
            Self::Ready => StateId::Ready,
            Self::PowerSelected { .. } => StateId::PowerSelected,
            Self::TimeSelected { .. } => StateId::TimeSelected,
            Self::Cooking { .. } => StateId::Cooking,
            Self::DoorOpen => StateId::DoorOpen,
        }
    }

    /// Selected power, if any selection is held.
    pub fn power_w(&self) -> Option<u16> {
        match *self {
            Self::PowerSelected { power_w }
            | Self::TimeSelected { power_w, .. }
            | Self::Cooking { power_w, .. } => Some(power_w),
            Self::Ready | Self::DoorOpen => None,
        }
    }

    /// Selected cook time in minutes, if chosen.
    pub fn minutes(&self) -> Option<u32> {
        match *self {
            Self::TimeSelected { minutes, .. } | Self::Cooking { minutes, .. } => Some(minutes),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs and actions
// ---------------------------------------------------------------------------

/// Events the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    PowerPressed,
    TimePressed,
    StartCancelPressed,
    DoorOpened,
    DoorClosed,
    /// The sequencer finished a cycle by natural expiry.
    CookingDone,
}

/// Side effects requested by a transition, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowPower(u16),
    ShowTime { minutes: u32, seconds: u8 },
    ClearDisplay,
    LightOn,
    LightOff,
    StartCooking { power_w: u16, duration_secs: u32 },
    CancelCooking,
}

/// Upper bound on actions emitted by one transition.
pub const MAX_ACTIONS: usize = 4;

/// Ordered action list for one transition.
pub type Actions = heapless::Vec<Action, MAX_ACTIONS>;

/// Result of a handled input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: OvenState,
    pub actions: Actions,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The state machine engine.
///
/// Owns the current [`OvenState`] and the configuration the handlers
/// consult.  Pure: it only reports the actions, it never performs them.
pub struct Fsm {
    state: OvenState,
    config: OvenConfig,
    /// Number of accepted (non-ignored) inputs.
    transitions: u64,
}

impl Fsm {
    /// Construct a new FSM in `Ready`.
    ///
    /// The handlers rely on a validated config (whole steps, non-zero
    /// increments), so an invalid one is rejected here.
    pub fn new(config: OvenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: OvenState::Ready,
            config,
            transitions: 0,
        })
    }

    /// Feed one input.
    ///
    /// Returns the actions to apply, or `None` when the input is ignored
    /// in the current state.
    pub fn handle(&mut self, input: Input) -> Option<Actions> {
        let Some(transition) = states::step(&self.state, input, &self.config) else {
            debug!("FSM: {:?} ignored in {}", input, self.state.id().name());
            return None;
        };

        let from = self.state.id();
        let to = transition.next.id();
        if from != to {
            info!("FSM transition: {} -> {}", from.name(), to.name());
        }

        self.state = transition.next;
        self.transitions += 1;
        Some(transition.actions)
    }

    /// The current state, with its selection data.
    pub fn state(&self) -> &OvenState {
        &self.state
    }

    /// The current state's identity.
    pub fn state_id(&self) -> StateId {
        self.state.id()
    }

    /// How many inputs have been accepted since construction.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    pub fn config(&self) -> &OvenConfig {
        &self.config
    }
}
