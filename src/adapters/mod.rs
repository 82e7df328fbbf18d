//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements                    | Connects to               |
//! |--------------|-------------------------------|---------------------------|
//! | `hardware`   | LightPort, DisplayPort        | Light / display drivers   |
//! |              | PowerTubePort, TimerPort      | Power tube / countdown    |
//! |              | TimerSource                   |                           |
//! | `log_sink`   | EventSink                     | `log` facade              |
//! | `sim`        | OutputPin, SetDutyCycle       | In-memory host peripherals|
//! |              | LineOutput                    | stdout / recorder         |

pub mod hardware;
pub mod log_sink;
pub mod sim;
