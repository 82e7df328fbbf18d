//! Microwave oven control core.
//!
//! Exposes the pure-logic modules (state machine, cook sequencer,
//! coordinator) together with the actuator drivers and host adapters
//! used for integration testing and simulation.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod events;
pub mod fsm;

pub mod error;

pub mod adapters;
pub mod drivers;

pub use error::{Error, Result};
