//! Application core: pure oven logic, zero I/O.
//!
//! This module contains the coordination rules for the oven: routing
//! notifications into the state machine, applying its actions, and
//! driving the cook sequencer.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
