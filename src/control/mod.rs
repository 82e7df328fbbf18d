//! Cook-cycle control.

pub mod sequencer;
