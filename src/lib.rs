#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockBox`**: The top-level controller, stepped once per clock edge
//! - **`Inputs` / `Outputs`**: Button levels sampled per tick, and the displayed digits plus hold flags
//! - **`HoldDetector`**: Debounces one button and reports press edges and long holds
//! - **`ModeController`**: Run/set mode (long hold) and clock/stopwatch face (short press)
//! - **`DigitBank`**: Four BCD digits with carry propagation and per-position rollover
//! - **`Clock`**: Time of day with a hidden seconds counter
//! - **`StopwatchController`**: Start/stop/clear state machine over a `MM:SS` bank
//! - **`ClockConfig`**: Tick rate, hold duration, debounce window, hour format and reset time
//! - **`ClockEvent`**: What happened on a tick
//!
//! Time is measured in ticks. One simulated second is `ticks_per_second`
//! ticks (10 000 by default), and a long hold is two simulated seconds.

/// Logs through `defmt` when the `defmt` feature is enabled, otherwise compiles out.
macro_rules! log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "defmt")]
        defmt::$level!($($arg)+);
    };
}
pub(crate) use log;

pub mod types;
pub mod config;
pub mod digits;
pub mod button;
pub mod mode;
pub mod clock;
pub mod stopwatch;
pub mod command;
pub mod event;
pub mod clockbox;

pub use types::{DigitError, Face, HourFormat, Mode, RunState};
pub use config::{ClockConfig, ClockConfigBuilder, ConfigError};
pub use digits::{DigitBank, DigitLayout, TimeDigits};
pub use button::{ButtonEvents, HoldDetector};
pub use mode::ModeController;
pub use clock::Clock;
pub use stopwatch::{StopOutcome, StopwatchController, StopwatchError};
pub use command::{ClockAction, StopwatchAction};
pub use event::{ClockEvent, EventLog, MAX_EVENTS};
pub use clockbox::{ClockBox, Inputs, Outputs};
