//! Magnetron power tube driver.
//!
//! Output power is set through a PWM channel on the inverter board:
//! duty = requested watts / rated watts.
//!
//! ## Safety contract
//!
//! The tube must never be energised with the door open.  That is
//! enforced by the coordinator's state machine; this driver is a dumb
//! actuator.  It does refuse out-of-range power and a second `turn_on`
//! while already on, so a wiring bug cannot silently change power
//! mid-cycle.
//!
//! ## Dual-target design
//!
//! Generic over `embedded_hal::pwm::SetDutyCycle`: a HAL PWM channel on
//! the board, a [`SimPwm`](crate::adapters::sim::SimPwm) on the host.

use embedded_hal::pwm::SetDutyCycle;
use log::info;

use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTubeState {
    Off,
    On { power_w: u16 },
}

pub struct PowerTubeDriver<P> {
    pwm: P,
    rated_power_w: u16,
    state: PowerTubeState,
}

impl<P: SetDutyCycle> PowerTubeDriver<P> {
    pub fn new(pwm: P, rated_power_w: u16) -> Self {
        Self {
            pwm,
            rated_power_w,
            state: PowerTubeState::Off,
        }
    }

    pub fn turn_on(&mut self, power_w: u16) -> Result<(), ActuatorError> {
        if power_w == 0 || power_w > self.rated_power_w {
            return Err(ActuatorError::PowerOutOfRange(power_w));
        }
        if self.is_on() {
            return Err(ActuatorError::AlreadyOn);
        }

        self.pwm
            .set_duty_cycle_fraction(power_w, self.rated_power_w)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;

        self.state = PowerTubeState::On { power_w };
        info!("PowerTube works with {} W", power_w);
        Ok(())
    }

    /// Turn the tube off.  No-op when already off.
    pub fn turn_off(&mut self) -> Result<(), ActuatorError> {
        if !self.is_on() {
            return Ok(());
        }

        self.pwm
            .set_duty_cycle_fully_off()
            .map_err(|_| ActuatorError::PwmWriteFailed)?;

        self.state = PowerTubeState::Off;
        info!("PowerTube turned off");
        Ok(())
    }

    pub fn state(&self) -> PowerTubeState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, PowerTubeState::On { .. })
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}
