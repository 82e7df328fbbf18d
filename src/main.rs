//! ovensim: host simulator for the oven controller.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     main(): stdin loop                   │
//! │                                                          │
//! │  power / time / start ──▶ Button::press ─┐               │
//! │  open / close ──────────▶ Door ──────────┤               │
//! │  tick [n] ──────────────▶ Coordinator::tick              │
//! │                                          ▼               │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │              Coordinator (pure logic)              │  │
//! │  │   FSM · CookSequencer · mailbox                    │  │
//! │  └───────────────┬────────────────────────────────────┘  │
//! │                  │ port traits                           │
//! │  ┌───────────────▼────────────────────────────────────┐  │
//! │  │ HardwareAdapter<SimPin, SimPwm, ConsoleOutput>     │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `ovensim [config.json]`.  Set `RUST_LOG=info` to see state
//! transitions and actuator logs on stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use log::info;

use ovenctl::adapters::hardware::HardwareAdapter;
use ovenctl::adapters::log_sink::LogEventSink;
use ovenctl::adapters::sim::{ConsoleOutput, SimPin, SimPwm};
use ovenctl::app::service::Coordinator;
use ovenctl::config::OvenConfig;
use ovenctl::drivers::button::{Button, ButtonKind};
use ovenctl::drivers::display::DisplayDriver;
use ovenctl::drivers::door::Door;
use ovenctl::drivers::light::LightDriver;
use ovenctl::drivers::power_tube::PowerTubeDriver;
use ovenctl::drivers::timer::CountdownTimer;

/// Simulated PWM resolution.
const PWM_MAX_DUTY: u16 = 1000;

/// Upper bound for a single `tick n`.
const MAX_TICKS: u32 = 24 * 60 * 60;

type SimHardware = HardwareAdapter<SimPin, SimPwm, ConsoleOutput>;

// ── Commands ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimCommand {
    Press(ButtonKind),
    Open,
    Close,
    Tick(u32),
    State,
    Help,
    Quit,
}

impl SimCommand {
    fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let cmd = match word {
            "power" | "p" => Self::Press(ButtonKind::Power),
            "time" | "t" => Self::Press(ButtonKind::Time),
            "start" | "cancel" | "s" => Self::Press(ButtonKind::StartCancel),
            "open" => Self::Open,
            "close" => Self::Close,
            "tick" => {
                let n = match words.next() {
                    Some(arg) => arg
                        .parse::<u32>()
                        .with_context(|| format!("invalid tick count '{arg}'"))?,
                    None => 1,
                };
                if n > MAX_TICKS {
                    bail!("tick count {n} exceeds {MAX_TICKS}");
                }
                Self::Tick(n)
            }
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        if words.next().is_some() {
            bail!("unexpected arguments after '{word}'");
        }
        Ok(Some(cmd))
    }
}

const HELP: &str = "\
commands:
  power | p          press the power button
  time | t           press the time button
  start | s          press start/cancel
  open / close       open or close the door
  tick [n]           advance the clock n seconds (default 1)
  state              print the controller state
  quit               exit";

// ── Panel ─────────────────────────────────────────────────────

/// The oven as the user sees it: buttons, door, and the controller.
struct Panel {
    power: Button,
    time: Button,
    start_cancel: Button,
    door: Door,
    oven: Coordinator<SimHardware, LogEventSink>,
}

impl Panel {
    fn new(config: OvenConfig) -> Result<Self> {
        let hw = HardwareAdapter::new(
            LightDriver::new(SimPin::new()),
            DisplayDriver::new(ConsoleOutput),
            PowerTubeDriver::new(SimPwm::new(PWM_MAX_DUTY), config.tube_rated_power_w),
            CountdownTimer::new(),
        );
        let mut oven = Coordinator::new(config, hw, LogEventSink::new())?;
        oven.start();
        Ok(Self {
            power: Button::new(ButtonKind::Power),
            time: Button::new(ButtonKind::Time),
            start_cancel: Button::new(ButtonKind::StartCancel),
            door: Door::new(),
            oven,
        })
    }

    fn run(&mut self, cmd: SimCommand) {
        match cmd {
            SimCommand::Press(ButtonKind::Power) => self.power.press(&mut self.oven),
            SimCommand::Press(ButtonKind::Time) => self.time.press(&mut self.oven),
            SimCommand::Press(ButtonKind::StartCancel) => {
                self.start_cancel.press(&mut self.oven);
            }
            SimCommand::Open => {
                if !self.door.open(&mut self.oven) {
                    println!("(door already open)");
                }
            }
            SimCommand::Close => {
                if !self.door.close(&mut self.oven) {
                    println!("(door already closed)");
                }
            }
            SimCommand::Tick(n) => {
                for _ in 0..n {
                    self.oven.tick();
                }
            }
            SimCommand::State => self.print_state(),
            SimCommand::Help => println!("{HELP}"),
            SimCommand::Quit => {}
        }
    }

    fn print_state(&self) {
        let hw = self.oven.hardware();
        println!("state:  {:?}", self.oven.oven_state());
        println!("door:   {}", if self.door.is_open() { "open" } else { "closed" });
        println!("light:  {}", if hw.light().is_on() { "on" } else { "off" });
        println!("tube:   {:?}", hw.tube().state());
        match hw.timer().remaining_secs() {
            Some(secs) => println!("timer:  {secs}s remaining"),
            None => println!("timer:  stopped"),
        }
    }
}

fn load_config() -> Result<OvenConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(OvenConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config from {path}"))?;
    let config = OvenConfig::from_json(&json).with_context(|| format!("loading {path}"))?;
    info!("Config loaded from {}", path);
    Ok(config)
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("ovensim v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let mut panel = Panel::new(config).context("building the oven")?;

    println!("{HELP}");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match SimCommand::parse(&line) {
            Ok(Some(SimCommand::Quit)) => break,
            Ok(Some(cmd)) => panel.run(cmd),
            Ok(None) => {}
            Err(e) => println!("error: {e:#}"),
        }
    }

    info!("ovensim exiting");
    Ok(())
}
