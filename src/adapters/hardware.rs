//! Hardware adapter: bridges the actuator drivers to the port traits.
//!
//! Owns the light, display, power tube and countdown timer, exposing
//! them through [`LightPort`], [`DisplayPort`], [`PowerTubePort`],
//! [`TimerPort`] and [`TimerSource`].  Port calls are fire-and-forget:
//! a driver error is logged here and goes no further.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::commands::Notification;
use crate::app::ports::{
    DisplayPort, LightPort, LineOutput, PowerTubePort, TimerPort, TimerSource,
};
use crate::drivers::display::DisplayDriver;
use crate::drivers::light::LightDriver;
use crate::drivers::power_tube::PowerTubeDriver;
use crate::drivers::timer::CountdownTimer;

/// Concrete adapter that combines all oven hardware behind port traits.
pub struct HardwareAdapter<L, P, O> {
    light: LightDriver<L>,
    display: DisplayDriver<O>,
    tube: PowerTubeDriver<P>,
    timer: CountdownTimer,
}

impl<L, P, O> HardwareAdapter<L, P, O>
where
    L: OutputPin,
    P: SetDutyCycle,
    O: LineOutput,
{
    pub fn new(
        light: LightDriver<L>,
        display: DisplayDriver<O>,
        tube: PowerTubeDriver<P>,
        timer: CountdownTimer,
    ) -> Self {
        Self {
            light,
            display,
            tube,
            timer,
        }
    }

    pub fn light(&self) -> &LightDriver<L> {
        &self.light
    }

    pub fn display(&self) -> &DisplayDriver<O> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayDriver<O> {
        &mut self.display
    }

    pub fn tube(&self) -> &PowerTubeDriver<P> {
        &self.tube
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }
}

// ── LightPort implementation ──────────────────────────────────

impl<L: OutputPin, P, O> LightPort for HardwareAdapter<L, P, O> {
    fn turn_on(&mut self) {
        if let Err(e) = self.light.turn_on() {
            warn!("Light on failed: {}", e);
        }
    }

    fn turn_off(&mut self) {
        if let Err(e) = self.light.turn_off() {
            warn!("Light off failed: {}", e);
        }
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<L, P, O: LineOutput> DisplayPort for HardwareAdapter<L, P, O> {
    fn show_power(&mut self, watts: u16) {
        self.display.show_power(watts);
    }

    fn show_time(&mut self, minutes: u32, seconds: u8) {
        self.display.show_time(minutes, seconds);
    }

    fn clear(&mut self) {
        self.display.clear();
    }
}

// ── PowerTubePort implementation ──────────────────────────────

impl<L, P: SetDutyCycle, O> PowerTubePort for HardwareAdapter<L, P, O> {
    fn turn_on(&mut self, power_w: u16) {
        if let Err(e) = self.tube.turn_on(power_w) {
            warn!("PowerTube on({} W) failed: {}", power_w, e);
        }
    }

    fn turn_off(&mut self) {
        if let Err(e) = self.tube.turn_off() {
            warn!("PowerTube off failed: {}", e);
        }
    }
}

// ── Timer ports ───────────────────────────────────────────────

impl<L, P, O> TimerPort for HardwareAdapter<L, P, O> {
    fn start(&mut self, duration_secs: u32) {
        self.timer.start(duration_secs);
    }

    fn stop(&mut self) {
        self.timer.stop();
    }
}

impl<L, P, O> TimerSource for HardwareAdapter<L, P, O> {
    fn on_second(&mut self) -> Option<Notification> {
        self.timer.on_second()
    }
}
