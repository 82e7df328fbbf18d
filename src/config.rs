//! Oven configuration parameters
//!
//! The selection constants for the oven: power step and range, time
//! step, and the rated power of the magnetron tube.  The defaults are
//! the factory values; a JSON override can be loaded for bench rigs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core oven configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvenConfig {
    // --- Power selection ---
    /// Increment applied per power-button press (W)
    pub power_step_w: u16,
    /// First power level offered, and the value after wrap-around (W)
    pub min_power_w: u16,
    /// Highest selectable power level (W)
    pub max_power_w: u16,

    // --- Time selection ---
    /// Increment applied per time-button press (minutes)
    pub time_step_minutes: u32,

    // --- Power tube ---
    /// Rated output of the power tube; 100% PWM duty (W)
    pub tube_rated_power_w: u16,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            // Power
            power_step_w: 50,
            min_power_w: 50,
            max_power_w: 1000,

            // Time
            time_step_minutes: 1,

            // Tube
            tube_rated_power_w: 1000,
        }
    }
}

impl OvenConfig {
    /// Check every field for a usable range.
    ///
    /// Rejects rather than clamps: a config that cannot reach its own
    /// maximum in whole steps is a configuration bug.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_step_w == 0 {
            return Err(ConfigError::ValidationFailed("power_step_w must be > 0"));
        }
        if self.min_power_w == 0 {
            return Err(ConfigError::ValidationFailed("min_power_w must be > 0"));
        }
        if self.max_power_w < self.min_power_w {
            return Err(ConfigError::ValidationFailed(
                "max_power_w must be >= min_power_w",
            ));
        }
        if (self.max_power_w - self.min_power_w) % self.power_step_w != 0 {
            return Err(ConfigError::ValidationFailed(
                "power range must be a whole number of steps",
            ));
        }
        if self.time_step_minutes == 0 {
            return Err(ConfigError::ValidationFailed(
                "time_step_minutes must be > 0",
            ));
        }
        if self.tube_rated_power_w < self.max_power_w {
            return Err(ConfigError::ValidationFailed(
                "tube_rated_power_w must cover max_power_w",
            ));
        }
        Ok(())
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }
}
