//! Notification sources and actuator drivers.

pub mod button;
pub mod display;
pub mod door;
pub mod light;
pub mod power_tube;
pub mod timer;
