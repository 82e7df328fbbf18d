//! Concrete state handlers.
//!
//! One plain `fn` per state, dispatched by [`step`].  Each handler lists
//! only the inputs meaningful to its state; everything else falls
//! through to `None` (ignored).
//!
//! ```text
//!  READY ──[power]──▶ POWER_SELECTED ──[time]──▶ TIME_SELECTED
//!    ▲  ◀──[start/cancel]──┘ ⟲ power            ⟲ time │
//!    │                                         [start/cancel]
//!    │                                                 ▼
//!    └────────[start/cancel | cooking done]───────── COOKING
//!
//!  READY | POWER_SELECTED | TIME_SELECTED | COOKING ──[door opened]──▶ DOOR_OPEN
//!  DOOR_OPEN ──[door closed]──▶ READY
//! ```

use super::{Action, Actions, Input, OvenState, Transition};
use crate::config::OvenConfig;

/// Route `input` to the handler for `state`.
///
/// Returns `None` when the input is ignored.
pub fn step(state: &OvenState, input: Input, config: &OvenConfig) -> Option<Transition> {
    match *state {
        OvenState::Ready => ready(input, config),
        OvenState::PowerSelected { power_w } => power_selected(power_w, input, config),
        OvenState::TimeSelected { power_w, minutes } => {
            time_selected(power_w, minutes, input, config)
        }
        OvenState::Cooking { .. } => cooking(input),
        OvenState::DoorOpen => door_open(input),
    }
}

/// Next power level after one press: `+step`, wrapping `max -> min`.
///
/// Never exceeds `max_power_w`, even for a range that is not a whole
/// number of steps.
pub fn next_power(power_w: u16, config: &OvenConfig) -> u16 {
    if power_w >= config.max_power_w {
        config.min_power_w
    } else {
        power_w
            .saturating_add(config.power_step_w)
            .min(config.max_power_w)
    }
}

fn go(next: OvenState, actions: &[Action]) -> Option<Transition> {
    let mut list = Actions::new();
    for action in actions {
        let pushed = list.push(*action);
        debug_assert!(pushed.is_ok(), "action list exceeds MAX_ACTIONS");
    }
    Some(Transition {
        next,
        actions: list,
    })
}

fn show_time(minutes: u32) -> Action {
    Action::ShowTime {
        minutes,
        seconds: 0,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY
// ═══════════════════════════════════════════════════════════════════════════

fn ready(input: Input, config: &OvenConfig) -> Option<Transition> {
    match input {
        Input::PowerPressed => {
            let power_w = config.min_power_w;
            go(
                OvenState::PowerSelected { power_w },
                &[Action::ShowPower(power_w)],
            )
        }
        Input::DoorOpened => go(OvenState::DoorOpen, &[Action::LightOn]),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  POWER_SELECTED
// ═══════════════════════════════════════════════════════════════════════════

fn power_selected(power_w: u16, input: Input, config: &OvenConfig) -> Option<Transition> {
    match input {
        Input::PowerPressed => {
            let power_w = next_power(power_w, config);
            go(
                OvenState::PowerSelected { power_w },
                &[Action::ShowPower(power_w)],
            )
        }
        Input::TimePressed => {
            let minutes = config.time_step_minutes;
            go(
                OvenState::TimeSelected { power_w, minutes },
                &[show_time(minutes)],
            )
        }
        // No cook data yet: start/cancel acts as cancel.
        Input::StartCancelPressed => go(OvenState::Ready, &[Action::ClearDisplay]),
        Input::DoorOpened => go(OvenState::DoorOpen, &[Action::LightOn]),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  TIME_SELECTED
// ═══════════════════════════════════════════════════════════════════════════

fn time_selected(
    power_w: u16,
    minutes: u32,
    input: Input,
    config: &OvenConfig,
) -> Option<Transition> {
    match input {
        Input::TimePressed => {
            let minutes = minutes.saturating_add(config.time_step_minutes);
            go(
                OvenState::TimeSelected { power_w, minutes },
                &[show_time(minutes)],
            )
        }
        Input::StartCancelPressed => go(
            OvenState::Cooking { power_w, minutes },
            &[
                Action::ClearDisplay,
                Action::LightOn,
                Action::StartCooking {
                    power_w,
                    duration_secs: minutes.saturating_mul(60),
                },
            ],
        ),
        Input::DoorOpened => go(OvenState::DoorOpen, &[Action::LightOn]),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  COOKING
// ═══════════════════════════════════════════════════════════════════════════

fn cooking(input: Input) -> Option<Transition> {
    match input {
        Input::StartCancelPressed => go(
            OvenState::Ready,
            &[Action::CancelCooking, Action::LightOff, Action::ClearDisplay],
        ),
        // Sequencer has already turned the tube off.
        Input::CookingDone => go(OvenState::Ready, &[Action::LightOff, Action::ClearDisplay]),
        Input::DoorOpened => go(
            OvenState::DoorOpen,
            &[Action::CancelCooking, Action::ClearDisplay, Action::LightOn],
        ),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DOOR_OPEN
// ═══════════════════════════════════════════════════════════════════════════

fn door_open(input: Input) -> Option<Transition> {
    match input {
        Input::DoorClosed => go(OvenState::Ready, &[Action::LightOff]),
        _ => None,
    }
}
