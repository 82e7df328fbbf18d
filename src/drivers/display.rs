//! Front-panel display driver.
//!
//! Renders power and time into fixed-size text lines and hands them to a
//! [`LineOutput`] (segment controller, serial console, test recorder).
//!
//! | Command              | Line                    |
//! |----------------------|-------------------------|
//! | `show_power(250)`    | `Display shows: 250 W`  |
//! | `show_time(5, 0)`    | `Display shows: 05:00`  |
//! | `clear()`            | `Display cleared`       |

use core::fmt::Write;

use log::warn;

use crate::app::ports::LineOutput;

/// Longest rendered line, with headroom for a ten-digit minute count.
const LINE_CAP: usize = 32;

pub struct DisplayDriver<O> {
    output: O,
}

impl<O: LineOutput> DisplayDriver<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }

    pub fn show_power(&mut self, watts: u16) {
        let mut line = heapless::String::<LINE_CAP>::new();
        if write!(line, "Display shows: {} W", watts).is_err() {
            warn!("Display: power line overflow");
            return;
        }
        self.output.output_line(&line);
    }

    pub fn show_time(&mut self, minutes: u32, seconds: u8) {
        let mut line = heapless::String::<LINE_CAP>::new();
        if write!(line, "Display shows: {:02}:{:02}", minutes, seconds).is_err() {
            warn!("Display: time line overflow");
            return;
        }
        self.output.output_line(&line);
    }

    pub fn clear(&mut self) {
        self.output.output_line("Display cleared");
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
