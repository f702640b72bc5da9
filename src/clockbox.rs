//! Top-level controller combining buttons, mode, clock and stopwatch.
//!
//! [`ClockBox`] is a synchronous machine: every call to [`ClockBox::step`]
//! is one clock edge. Inputs are sampled once, every component reads the
//! previous tick's state, and the next state is committed as a whole.
//! [`ClockBox::next`] exposes the same transition as a pure function.
//!
//! Start and stop are routed by mode and face:
//!
//! | Mode  | Face        | start / stop                         |
//! |-------|-------------|--------------------------------------|
//! | `Run` | `Clock`     | ignored, the clock always counts     |
//! | `Run` | `Stopwatch` | start, stop (clear when stopped), hold stop to clear |
//! | `Set` | `Clock`     | advance minutes / advance hours      |

use crate::button::{ButtonEvents, HoldDetector};
use crate::clock::Clock;
use crate::command::{ClockAction, StopwatchAction};
use crate::config::ClockConfig;
use crate::digits::TimeDigits;
use crate::event::{ClockEvent, EventLog, record};
use crate::mode::ModeController;
use crate::stopwatch::StopwatchController;
use crate::types::{Face, Mode, RunState};

/// Input levels sampled on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Synchronous reset, active high.
    pub reset: bool,
    /// Power-cycle request, active high. Behaves like `reset`.
    pub power: bool,
    /// Mode button.
    pub mode: bool,
    /// Start button.
    pub start: bool,
    /// Stop button.
    pub stop: bool,
}

impl Inputs {
    /// All inputs released.
    pub const IDLE: Self = Self {
        reset: false,
        power: false,
        mode: false,
        start: false,
        stop: false,
    };
}

/// Signals exposed after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    /// Displayed digits, `cur_time3` through `cur_time0`.
    pub cur_time: TimeDigits,
    /// Mode button has been held past the hold threshold.
    pub mode_held: bool,
    /// Stop button has been held past the hold threshold.
    pub stop_held: bool,
    /// Current mode.
    pub mode: Mode,
    /// Current face.
    pub face: Face,
    /// Stopwatch run state.
    pub run_state: RunState,
    /// Events raised on this tick.
    pub events: EventLog,
}

impl Outputs {
    /// Returns one displayed digit, 3 (leftmost) down to 0.
    #[inline]
    pub fn cur_time(&self, position: usize) -> u8 {
        self.cur_time.digit(position)
    }
}

/// The clock-and-stopwatch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockBox {
    config: ClockConfig,
    mode_button: HoldDetector,
    start_button: HoldDetector,
    stop_button: HoldDetector,
    modes: ModeController,
    clock: Clock,
    stopwatch: StopwatchController,
}

impl ClockBox {
    /// Creates a controller in its reset state.
    pub fn new(config: ClockConfig) -> Self {
        let button = HoldDetector::new(config.debounce_ticks(), config.hold_ticks());

        Self {
            config,
            mode_button: button,
            start_button: button,
            stop_button: button,
            modes: ModeController::new(),
            clock: Clock::new(&config),
            stopwatch: StopwatchController::new(config.ticks_per_second()),
        }
    }

    /// Computes the state after one tick without modifying `self`.
    pub fn next(&self, inputs: Inputs) -> (Self, Outputs) {
        let mut next = *self;
        let outputs = next.apply(inputs);
        (next, outputs)
    }

    /// Advances one tick and returns the outputs.
    pub fn step(&mut self, inputs: Inputs) -> Outputs {
        let (next, outputs) = self.next(inputs);
        *self = next;
        outputs
    }

    /// Steps `ticks` times with the same inputs, returning the last outputs.
    ///
    /// Events from earlier ticks are discarded. Returns `None` if `ticks` is zero.
    pub fn run(&mut self, inputs: Inputs, ticks: u32) -> Option<Outputs> {
        (0..ticks).fold(None, |_, _| Some(self.step(inputs)))
    }

    /// Forces every component to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
        crate::log!(info, "reset to {}", self.clock.digits());
    }

    fn apply(&mut self, inputs: Inputs) -> Outputs {
        let mut events = EventLog::new();

        if inputs.reset || inputs.power {
            self.reset();
            record(&mut events, ClockEvent::Reset);
            return self.outputs(events);
        }

        let mode_button = self.mode_button.sample(inputs.mode);
        let start_button = self.start_button.sample(inputs.start);
        let stop_button = self.stop_button.sample(inputs.stop);

        let previous_mode = self.modes.mode();
        self.modes.update(&mode_button, &mut events);
        if previous_mode == Mode::Set && self.modes.mode() == Mode::Run {
            self.clock.zero_seconds();
        }

        match (self.modes.mode(), self.modes.face()) {
            (Mode::Set, _) => self.route_set(&start_button, &stop_button, &mut events),
            (Mode::Run, Face::Stopwatch) => {
                self.route_stopwatch(&start_button, &stop_button, &mut events)
            }
            (Mode::Run, Face::Clock) => {}
        }

        if self.modes.mode() == Mode::Run && self.clock.tick() {
            record(&mut events, ClockEvent::MinuteElapsed(self.clock.digits()));
        }
        self.stopwatch.tick();

        self.outputs(events)
    }

    fn route_set(&mut self, start: &ButtonEvents, stop: &ButtonEvents, events: &mut EventLog) {
        if start.pressed {
            let digits = self.clock.handle_action(ClockAction::AdvanceMinute);
            record(events, ClockEvent::ClockAdjusted(digits));
        }
        if stop.pressed {
            let digits = self.clock.handle_action(ClockAction::AdvanceHour);
            record(events, ClockEvent::ClockAdjusted(digits));
        }
    }

    fn route_stopwatch(
        &mut self,
        start: &ButtonEvents,
        stop: &ButtonEvents,
        events: &mut EventLog,
    ) {
        let actions = [
            (start.pressed, StopwatchAction::Start),
            (stop.pressed, StopwatchAction::Stop),
            (stop.held_long_edge, StopwatchAction::Clear),
        ];

        for (_, action) in actions.into_iter().filter(|(active, _)| *active) {
            if let Some(event) = self.stopwatch.handle_action(action) {
                record(events, event);
            }
        }
    }

    fn outputs(&self, events: EventLog) -> Outputs {
        Outputs {
            cur_time: self.displayed(),
            mode_held: self.mode_button.is_held_long(),
            stop_held: self.stop_button.is_held_long(),
            mode: self.modes.mode(),
            face: self.modes.face(),
            run_state: self.stopwatch.state(),
            events,
        }
    }

    /// Digits of the currently displayed face.
    pub fn displayed(&self) -> TimeDigits {
        match (self.modes.mode(), self.modes.face()) {
            (Mode::Run, Face::Stopwatch) => self.stopwatch.digits(),
            _ => self.clock.digits(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    /// Current face.
    pub fn face(&self) -> Face {
        self.modes.face()
    }

    /// The time-of-day clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The stopwatch.
    pub fn stopwatch(&self) -> &StopwatchController {
        &self.stopwatch
    }

    /// Mode button detector, for observing its hold counter.
    pub fn mode_button(&self) -> &HoldDetector {
        &self.mode_button
    }

    /// Start button detector.
    pub fn start_button(&self) -> &HoldDetector {
        &self.start_button
    }

    /// Stop button detector.
    pub fn stop_button(&self) -> &HoldDetector {
        &self.stop_button
    }

    /// Configuration this controller was built with.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }
}

impl Default for ClockBox {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}
