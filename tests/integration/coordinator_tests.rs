//! Integration tests for the Button/Door/Timer → Coordinator → ports
//! pipeline.
//!
//! Every test drives the coordinator the way the panel does (through
//! `Button::press`, `Door::open/close` and `Coordinator::tick`) and then
//! asserts on the exact port call history recorded by `MockHardware`.

use crate::mock_hw::{HwCall, LogSink, MockHardware};

use ovenctl::app::commands::Notification;
use ovenctl::app::events::OvenEvent;
use ovenctl::app::ports::InputSink;
use ovenctl::app::service::Coordinator;
use ovenctl::config::OvenConfig;
use ovenctl::drivers::button::{Button, ButtonKind};
use ovenctl::drivers::door::Door;
use ovenctl::error::ConfigError;
use ovenctl::Error;
use ovenctl::fsm::{OvenState, StateId};

type Oven = Coordinator<MockHardware, LogSink>;

fn make_oven() -> Oven {
    let mut oven = Coordinator::new(OvenConfig::default(), MockHardware::new(), LogSink::new())
        .expect("default config is valid");
    oven.start();
    oven
}

fn press(oven: &mut Oven, kind: ButtonKind, times: usize) {
    let button = Button::new(kind);
    for _ in 0..times {
        button.press(oven);
    }
}

/// Power once, time once, start: 50 W for one minute.
fn start_default_cook(oven: &mut Oven) {
    press(oven, ButtonKind::Power, 1);
    press(oven, ButtonKind::Time, 1);
    press(oven, ButtonKind::StartCancel, 1);
    assert_eq!(oven.state(), StateId::Cooking);
}

fn ticks(oven: &mut Oven, n: u32) {
    for _ in 0..n {
        oven.tick();
    }
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn uneven_power_range_is_rejected_at_construction() {
    let config = OvenConfig {
        power_step_w: 40_000,
        min_power_w: 30_000,
        max_power_w: 65_000,
        tube_rated_power_w: 65_000,
        ..OvenConfig::default()
    };
    let result = Coordinator::new(config, MockHardware::new(), LogSink::new());
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ValidationFailed(_)))
    ));
}

// ── Door ──────────────────────────────────────────────────────

#[test]
fn door_open_in_ready_turns_light_on() {
    let mut oven = make_oven();
    let mut door = Door::new();

    assert!(door.open(&mut oven));

    assert_eq!(oven.state(), StateId::DoorOpen);
    assert_eq!(oven.hardware().calls, vec![HwCall::LightOn]);
}

#[test]
fn door_close_turns_light_off_and_returns_to_ready() {
    let mut oven = make_oven();
    let mut door = Door::new();

    door.open(&mut oven);
    door.close(&mut oven);

    assert_eq!(oven.state(), StateId::Ready);
    assert_eq!(
        oven.hardware().calls,
        vec![HwCall::LightOn, HwCall::LightOff]
    );
}

#[test]
fn closing_a_closed_door_does_nothing() {
    let mut oven = make_oven();
    let mut door = Door::new();

    assert!(!door.close(&mut oven));
    assert!(oven.hardware().calls.is_empty());
    assert_eq!(oven.state(), StateId::Ready);
}

#[test]
fn door_closed_notification_outside_door_open_is_ignored() {
    let mut oven = make_oven();
    oven.notify(Notification::DoorClosed);

    assert_eq!(oven.state(), StateId::Ready);
    assert!(oven.hardware().calls.is_empty());
    assert_eq!(
        oven.sink().events.last(),
        Some(&OvenEvent::InputIgnored {
            notification: Notification::DoorClosed,
            state: StateId::Ready,
        })
    );
}

#[test]
fn opening_an_open_door_twice_notifies_once() {
    let mut oven = make_oven();
    let mut door = Door::new();

    door.open(&mut oven);
    assert!(!door.open(&mut oven));

    assert_eq!(oven.hardware().count(HwCall::LightOn), 1);
}

#[test]
fn buttons_are_ignored_while_door_open() {
    let mut oven = make_oven();
    let mut door = Door::new();
    door.open(&mut oven);
    oven.hardware_mut().reset();

    press(&mut oven, ButtonKind::Power, 1);
    press(&mut oven, ButtonKind::Time, 1);
    press(&mut oven, ButtonKind::StartCancel, 1);

    assert_eq!(oven.state(), StateId::DoorOpen);
    assert!(oven.hardware().calls.is_empty());
    let ignored = oven
        .sink()
        .count(|e| matches!(e, OvenEvent::InputIgnored { .. }));
    assert_eq!(ignored, 3);
}

#[test]
fn door_open_during_selection_resets_on_close() {
    let mut oven = make_oven();
    let mut door = Door::new();

    press(&mut oven, ButtonKind::Power, 3);
    press(&mut oven, ButtonKind::Time, 2);
    door.open(&mut oven);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::LightOn));

    door.close(&mut oven);
    assert_eq!(*oven.oven_state(), OvenState::Ready);

    press(&mut oven, ButtonKind::Power, 1);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ShowPower(50)));
}

#[test]
fn door_open_during_selection_leaves_the_display_alone() {
    let mut oven = make_oven();
    let mut door = Door::new();

    press(&mut oven, ButtonKind::Power, 1);
    door.open(&mut oven);
    assert_eq!(
        oven.hardware().calls,
        vec![HwCall::ShowPower(50), HwCall::LightOn]
    );

    door.close(&mut oven);
    press(&mut oven, ButtonKind::Power, 1);
    press(&mut oven, ButtonKind::Time, 1);
    door.open(&mut oven);
    assert!(!oven.hardware().calls.contains(&HwCall::ClearDisplay));
}

// ── Buttons ───────────────────────────────────────────────────

#[test]
fn power_button_steps_by_fifty() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 3);

    assert_eq!(
        oven.hardware().calls,
        vec![
            HwCall::ShowPower(50),
            HwCall::ShowPower(100),
            HwCall::ShowPower(150)
        ]
    );
    assert_eq!(oven.oven_state().power_w(), Some(150));
}

#[test]
fn power_wraps_from_max_to_min() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 20);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ShowPower(1000)));

    press(&mut oven, ButtonKind::Power, 1);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ShowPower(50)));
}

#[test]
fn time_button_in_ready_is_ignored() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Time, 1);

    assert_eq!(oven.state(), StateId::Ready);
    assert!(oven.hardware().calls.is_empty());
}

#[test]
fn start_in_ready_is_ignored() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::StartCancel, 1);

    assert_eq!(oven.state(), StateId::Ready);
    assert!(oven.hardware().calls.is_empty());
}

#[test]
fn time_button_shows_whole_minutes() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 1);
    press(&mut oven, ButtonKind::Time, 3);

    assert_eq!(
        oven.hardware().display_calls(),
        vec![
            HwCall::ShowPower(50),
            HwCall::ShowTime(1, 0),
            HwCall::ShowTime(2, 0),
            HwCall::ShowTime(3, 0)
        ]
    );
}

#[test]
fn start_with_only_power_selected_cancels() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 2);
    press(&mut oven, ButtonKind::StartCancel, 1);

    assert_eq!(oven.state(), StateId::Ready);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ClearDisplay));
    assert!(!oven.hardware().tube_on());
}

// ── Cook cycle ────────────────────────────────────────────────

#[test]
fn start_turns_on_light_tube_and_timer() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 1);
    press(&mut oven, ButtonKind::Time, 1);
    oven.hardware_mut().reset();

    press(&mut oven, ButtonKind::StartCancel, 1);

    assert_eq!(
        oven.hardware().calls,
        vec![
            HwCall::ClearDisplay,
            HwCall::LightOn,
            HwCall::TubeOn(50),
            HwCall::TimerStart(60)
        ]
    );
    assert!(oven.is_cooking());
}

#[test]
fn cancel_while_cooking_stops_everything() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    oven.hardware_mut().reset();

    press(&mut oven, ButtonKind::StartCancel, 1);

    assert_eq!(
        oven.hardware().calls,
        vec![
            HwCall::TubeOff,
            HwCall::TimerStop,
            HwCall::LightOff,
            HwCall::ClearDisplay
        ]
    );
    assert_eq!(oven.state(), StateId::Ready);
    assert!(!oven.is_cooking());
    assert!(!oven.hardware().timer().is_running());
}

#[test]
fn door_open_while_cooking_stops_and_lights() {
    let mut oven = make_oven();
    let mut door = Door::new();
    start_default_cook(&mut oven);
    oven.hardware_mut().reset();

    door.open(&mut oven);

    assert_eq!(
        oven.hardware().calls,
        vec![
            HwCall::TubeOff,
            HwCall::TimerStop,
            HwCall::ClearDisplay,
            HwCall::LightOn
        ]
    );
    assert_eq!(oven.state(), StateId::DoorOpen);
    assert!(!oven.is_cooking());

    door.close(&mut oven);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::LightOff));
    assert_eq!(oven.state(), StateId::Ready);
}

#[test]
fn timer_ticks_show_remaining_time() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 1);
    press(&mut oven, ButtonKind::Time, 2);
    press(&mut oven, ButtonKind::StartCancel, 1);
    oven.hardware_mut().reset();

    ticks(&mut oven, 1);
    assert_eq!(oven.hardware().calls, vec![HwCall::ShowTime(1, 59)]);

    ticks(&mut oven, 59);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ShowTime(1, 0)));
    assert_eq!(oven.state(), StateId::Cooking);
}

#[test]
fn timer_expiry_ends_the_cycle() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    oven.hardware_mut().reset();

    ticks(&mut oven, 59);
    assert_eq!(oven.hardware().calls.len(), 59);
    assert_eq!(oven.hardware().last_call(), Some(&HwCall::ShowTime(0, 1)));
    oven.hardware_mut().reset();

    ticks(&mut oven, 1);

    assert_eq!(
        oven.hardware().calls,
        vec![
            HwCall::TubeOff,
            HwCall::TimerStop,
            HwCall::LightOff,
            HwCall::ClearDisplay
        ]
    );
    assert_eq!(oven.state(), StateId::Ready);
    assert!(!oven.is_cooking());
}

#[test]
fn ticks_after_the_cycle_do_nothing() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    ticks(&mut oven, 60);
    oven.hardware_mut().reset();

    ticks(&mut oven, 10);

    assert!(oven.hardware().calls.is_empty());
}

#[test]
fn ticks_after_cancel_do_nothing() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    press(&mut oven, ButtonKind::StartCancel, 1);
    oven.hardware_mut().reset();

    ticks(&mut oven, 120);

    assert!(oven.hardware().calls.is_empty());
}

#[test]
fn stray_timer_notifications_outside_cooking_are_no_ops() {
    let mut oven = make_oven();
    press(&mut oven, ButtonKind::Power, 1);
    oven.hardware_mut().reset();

    oven.notify(Notification::TimerTick { remaining_secs: 30 });
    oven.notify(Notification::TimerExpired);

    assert!(oven.hardware().calls.is_empty());
    assert_eq!(oven.state(), StateId::PowerSelected);
}

#[test]
fn oven_can_cook_again_after_a_cycle() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    ticks(&mut oven, 60);

    press(&mut oven, ButtonKind::Power, 2);
    press(&mut oven, ButtonKind::Time, 1);
    oven.hardware_mut().reset();
    press(&mut oven, ButtonKind::StartCancel, 1);

    assert!(oven.hardware().calls.contains(&HwCall::TubeOn(100)));
    assert!(oven.is_cooking());
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn full_cycle_emits_state_changes_in_order() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    ticks(&mut oven, 60);

    let changes: Vec<(StateId, StateId)> = oven
        .sink()
        .events
        .iter()
        .filter_map(|e| match e {
            OvenEvent::StateChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();

    assert_eq!(
        changes,
        vec![
            (StateId::Ready, StateId::PowerSelected),
            (StateId::PowerSelected, StateId::TimeSelected),
            (StateId::TimeSelected, StateId::Cooking),
            (StateId::Cooking, StateId::Ready),
        ]
    );
}

#[test]
fn cook_events_bracket_the_cycle() {
    let mut oven = make_oven();
    start_default_cook(&mut oven);
    ticks(&mut oven, 60);

    let sink = oven.sink();
    assert_eq!(
        sink.count(|e| *e
            == OvenEvent::CookStarted {
                power_w: 50,
                duration_secs: 60
            }),
        1
    );
    assert_eq!(
        sink.count(|e| *e
            == OvenEvent::CookFinished {
                power_w: 50,
                duration_secs: 60
            }),
        1
    );
    assert_eq!(sink.count(|e| *e == OvenEvent::CookCancelled), 0);
}
