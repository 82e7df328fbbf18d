//! Host-side peripherals.
//!
//! In-memory stand-ins for the board's GPIO, PWM and text outputs so the
//! full driver stack runs on the host: under test, and in the `ovensim`
//! binary.

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::app::ports::LineOutput;

// ── GPIO ──────────────────────────────────────────────────────

/// Output pin that remembers its level.
#[derive(Debug, Default)]
pub struct SimPin {
    high: bool,
    writes: u32,
    fail: bool,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin whose every write fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Number of successful level writes.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn write(&mut self, high: bool) -> Result<(), digital::ErrorKind> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.high = high;
        self.writes += 1;
        Ok(())
    }
}

impl digital::ErrorType for SimPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

// ── PWM ───────────────────────────────────────────────────────

/// PWM channel that remembers its duty.
#[derive(Debug)]
pub struct SimPwm {
    max_duty: u16,
    duty: u16,
    writes: u32,
    fail: bool,
}

impl SimPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duty: 0,
            writes: 0,
            fail: false,
        }
    }

    /// A channel whose every write fails.
    pub fn failing(max_duty: u16) -> Self {
        Self {
            fail: true,
            ..Self::new(max_duty)
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Number of successful duty writes.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl pwm::ErrorType for SimPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail {
            return Err(pwm::ErrorKind::Other);
        }
        self.duty = duty.min(self.max_duty);
        self.writes += 1;
        Ok(())
    }
}

// ── Text output ───────────────────────────────────────────────

/// Keeps every line written.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Vec<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LineOutput for RecordingOutput {
    fn output_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

/// Writes each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl LineOutput for ConsoleOutput {
    fn output_line(&mut self, line: &str) {
        println!("{line}");
    }
}
