//! Fuzz target: `Coordinator::notify` / `Coordinator::tick`
//!
//! Decodes each input byte into a notification or a clock tick, drives
//! the coordinator over the simulated driver stack, and checks the
//! safety invariants after every step: the tube is on only while
//! cooking, and never while the door is open.
//!
//! cargo fuzz run fuzz_notification_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use ovenctl::adapters::hardware::HardwareAdapter;
use ovenctl::adapters::log_sink::LogEventSink;
use ovenctl::adapters::sim::{RecordingOutput, SimPin, SimPwm};
use ovenctl::app::commands::Notification;
use ovenctl::app::ports::InputSink;
use ovenctl::app::service::Coordinator;
use ovenctl::config::OvenConfig;
use ovenctl::drivers::display::DisplayDriver;
use ovenctl::drivers::light::LightDriver;
use ovenctl::drivers::power_tube::PowerTubeDriver;
use ovenctl::drivers::timer::CountdownTimer;
use ovenctl::fsm::StateId;

fuzz_target!(|data: &[u8]| {
    let config = OvenConfig::default();
    let hw = HardwareAdapter::new(
        LightDriver::new(SimPin::new()),
        DisplayDriver::new(RecordingOutput::new()),
        PowerTubeDriver::new(SimPwm::new(1000), config.tube_rated_power_w),
        CountdownTimer::new(),
    );
    let mut oven =
        Coordinator::new(config, hw, LogEventSink::new()).expect("default config is valid");
    oven.start();

    for &byte in data {
        match byte % 10 {
            0 => oven.notify(Notification::PowerPressed),
            1 => oven.notify(Notification::TimePressed),
            2 => oven.notify(Notification::StartCancelPressed),
            3 => oven.notify(Notification::DoorOpened),
            4 => oven.notify(Notification::DoorClosed),
            5 => oven.notify(Notification::CookingDone),
            6 => oven.notify(Notification::TimerExpired),
            7 => oven.notify(Notification::TimerTick {
                remaining_secs: u32::from(byte),
            }),
            // Runs of ticks so cycles actually expire.
            _ => {
                for _ in 0..=(byte >> 2) {
                    oven.tick();
                }
            }
        }

        let tube_on = oven.hardware().tube().is_on();
        assert_eq!(tube_on, oven.state() == StateId::Cooking);
        if oven.state() == StateId::DoorOpen {
            assert!(!tube_on, "tube energised with the door open");
        }
    }
});
