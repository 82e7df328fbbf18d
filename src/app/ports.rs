//! Port traits: the hexagonal boundary between the oven core and the
//! outside world.
//!
//! ```text
//!   Button / Door / Timer ──▶ InputSink ──▶ Coordinator ──▶ Light / Display
//!                                             │
//!                                             └─▶ CookSequencer ──▶ PowerTube / Timer
//! ```
//!
//! Driven adapters (light, display, power tube, timer, event sinks)
//! implement these traits.  The [`Coordinator`](super::service::Coordinator)
//! consumes them via generics, so the core never touches hardware
//! directly.  Every actuator command is fire-and-forget: adapters log
//! their own failures and return nothing.

use super::commands::Notification;
use super::events::OvenEvent;

// ───────────────────────────────────────────────────────────────
// Actuator ports (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Cavity light.
pub trait LightPort {
    fn turn_on(&mut self);
    fn turn_off(&mut self);
}

/// Front-panel display.
pub trait DisplayPort {
    /// Show the selected power level.
    fn show_power(&mut self, watts: u16);

    /// Show a duration as `minutes:seconds`.
    fn show_time(&mut self, minutes: u32, seconds: u8);

    fn clear(&mut self);
}

/// Magnetron power tube.
pub trait PowerTubePort {
    fn turn_on(&mut self, power_w: u16);
    fn turn_off(&mut self);
}

/// Countdown timer.  Expiry comes back as [`Notification::TimerExpired`].
pub trait TimerPort {
    fn start(&mut self, duration_secs: u32);
    fn stop(&mut self);
}

/// Everything the coordinator drives.  Blanket-implemented for any type
/// that provides all four ports, so one adapter can satisfy it without
/// a double mutable borrow.
pub trait OvenHardware: LightPort + DisplayPort + PowerTubePort + TimerPort {}

impl<T: LightPort + DisplayPort + PowerTubePort + TimerPort> OvenHardware for T {}

/// Hardware whose timer is advanced by the caller's clock.
///
/// Called once per elapsed second; returns the timer's notification for
/// that second, if any.
pub trait TimerSource {
    fn on_second(&mut self) -> Option<Notification>;
}

// ───────────────────────────────────────────────────────────────
// Text output (driven adapter: display driver → panel / console)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text output used by the display driver.
pub trait LineOutput {
    fn output_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Input subscription (driving adapter: sources → domain)
// ───────────────────────────────────────────────────────────────

/// Subscriber for button, door and timer notifications.
///
/// Sources call this synchronously; the subscriber reacts fully before
/// returning.
pub trait InputSink {
    fn notify(&mut self, notification: Notification);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`OvenEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &OvenEvent);
}

// ───────────────────────────────────────────────────────────────
// Cook delegate (decouples the sequencer from the coordinator)
// ───────────────────────────────────────────────────────────────

/// Callback the [`CookSequencer`](crate::control::sequencer::CookSequencer)
/// invokes when a cycle ends by natural expiry.
///
/// The sequencer knows nothing about states or mailboxes.  The
/// coordinator implements this by queueing
/// [`Notification::CookingDone`] for itself.
pub trait CookDelegate {
    fn on_cycle_ended(&mut self, power_w: u16, duration_secs: u32);
}
