//! Cavity light driver.
//!
//! A single active-high GPIO switching the lamp relay.  The driver
//! tracks the commanded state and only touches the pin on an actual
//! change.
//!
//! ## Dual-target design
//!
//! Generic over `embedded_hal::digital::OutputPin`: a HAL pin on the
//! board, a [`SimPin`](crate::adapters::sim::SimPin) on the host.

use embedded_hal::digital::OutputPin;
use log::info;

use crate::error::ActuatorError;

pub struct LightDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> LightDriver<P> {
    /// Wrap `pin`.  The light is assumed off.
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn turn_on(&mut self) -> Result<(), ActuatorError> {
        if self.on {
            return Ok(());
        }
        self.pin
            .set_high()
            .map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = true;
        info!("Light is turned on");
        Ok(())
    }

    pub fn turn_off(&mut self) -> Result<(), ActuatorError> {
        if !self.on {
            return Ok(());
        }
        self.pin
            .set_low()
            .map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = false;
        info!("Light is turned off");
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}
