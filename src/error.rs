//! Unified error types for the oven control core.
//!
//! A single `Error` enum that every subsystem converts into.  All
//! variants are `Copy` so they can be passed through the coordinator
//! and drivers without allocation.
//!
//! Note the split: the state machine itself has no error path.  Every
//! (state, input) pair is either a transition or a documented no-op.
//! Errors here are contract violations (sequencer misuse), driver
//! failures, and rejected configuration.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cook sequencer was driven outside its contract.
    Sequencer(SequencerError),
    /// An actuator driver rejected a command or its peripheral failed.
    Actuator(ActuatorError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequencer(e) => write!(f, "sequencer: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sequencer errors
// ---------------------------------------------------------------------------

/// Invalid-state invocation of the [`CookSequencer`](crate::control::sequencer::CookSequencer).
///
/// The coordinator's state guards make these unreachable from normal
/// operation; seeing one in the log means a wiring bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerError {
    /// `start` while a cycle is already running.
    AlreadyRunning,
    /// `cancel` while no cycle is running.
    NotRunning,
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "cook cycle already running"),
            Self::NotRunning => write!(f, "no cook cycle running"),
        }
    }
}

impl core::error::Error for SequencerError {}

impl From<SequencerError> for Error {
    fn from(e: SequencerError) -> Self {
        Self::Sequencer(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// Requested power is outside `[1, rated]` watts.
    PowerOutOfRange(u16),
    /// `turn_on` while the power tube is already on.
    AlreadyOn,
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerOutOfRange(w) => write!(f, "power {w} W out of range"),
            Self::AlreadyOn => write!(f, "power tube already on"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl core::error::Error for ActuatorError {}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Input was not a well-formed config document.
    Malformed,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
