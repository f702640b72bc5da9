//! Stopwatch state machine driving a minutes:seconds digit bank.
//!
//! Provides [`StopwatchController`], which counts one second per
//! `ticks_per_second` ticks while running. A stop request while already
//! stopped clears the digits, so a second press of stop acts as a reset.

use crate::command::StopwatchAction;
use crate::digits::{DigitBank, DigitLayout, TimeDigits};
use crate::event::ClockEvent;
use crate::types::RunState;

/// Errors that can occur during stopwatch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchError {
    /// Operation called from an invalid state.
    InvalidState {
        /// State the operation requires.
        expected: RunState,
        /// The actual current state.
        actual: RunState,
    },
}

impl core::fmt::Display for StopwatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StopwatchError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but stopwatch is {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StopwatchError {}

/// What a stop request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopOutcome {
    /// Was running; digits are now frozen.
    Stopped,
    /// Was already stopped; digits were cleared.
    Cleared,
}

/// Counts elapsed `MM:SS` while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchController {
    state: RunState,
    bank: DigitBank,
    prescaler: u32,
    ticks_per_second: u32,
}

impl StopwatchController {
    /// Creates a stopped stopwatch showing `00:00`.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            state: RunState::IdleStopped,
            bank: DigitBank::zeroed(DigitLayout::MinutesSeconds),
            prescaler: 0,
            ticks_per_second: ticks_per_second.max(1),
        }
    }

    /// Handles a stopwatch action by dispatching to the matching method.
    ///
    /// Returns the event the action produced, or `None` if it had no effect
    /// (starting an already running stopwatch).
    pub fn handle_action(&mut self, action: StopwatchAction) -> Option<ClockEvent> {
        match action {
            StopwatchAction::Start => self.start().ok().map(|_| ClockEvent::StopwatchStarted),
            StopwatchAction::Stop => match self.stop() {
                StopOutcome::Stopped => Some(ClockEvent::StopwatchStopped(self.digits())),
                StopOutcome::Cleared => Some(ClockEvent::StopwatchCleared),
            },
            StopwatchAction::Clear => {
                self.clear();
                Some(ClockEvent::StopwatchCleared)
            }
        }
    }

    /// Starts counting from the current digits.
    ///
    /// The seconds prescaler restarts, so the first increment lands one full
    /// second after the start.
    ///
    /// # Errors
    /// Returns `InvalidState` if already running.
    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.state != RunState::IdleStopped {
            return Err(StopwatchError::InvalidState {
                expected: RunState::IdleStopped,
                actual: self.state,
            });
        }

        self.prescaler = 0;
        self.state = RunState::Running;
        crate::log!(debug, "stopwatch started at {}", self.bank.digits());
        Ok(())
    }

    /// Stops counting. If already stopped, clears the digits instead.
    pub fn stop(&mut self) -> StopOutcome {
        match self.state {
            RunState::Running => {
                self.state = RunState::IdleStopped;
                self.prescaler = 0;
                crate::log!(debug, "stopwatch stopped at {}", self.bank.digits());
                StopOutcome::Stopped
            }
            RunState::IdleStopped => {
                self.clear();
                StopOutcome::Cleared
            }
        }
    }

    /// Stops and clears to `00:00`. Valid from any state.
    pub fn clear(&mut self) {
        self.state = RunState::IdleStopped;
        self.prescaler = 0;
        self.bank.clear();
        crate::log!(debug, "stopwatch cleared");
    }

    /// Advances one tick. Returns true if a second was counted.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        self.prescaler += 1;
        if self.prescaler < self.ticks_per_second {
            return false;
        }

        self.prescaler = 0;
        self.bank.increment();
        true
    }

    /// Returns the current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Returns true if the stopwatch is counting.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Returns the current digits.
    pub fn digits(&self) -> TimeDigits {
        self.bank.digits()
    }

    /// Ticks counted toward the next second.
    pub fn prescaler(&self) -> u32 {
        self.prescaler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    fn run_ticks(stopwatch: &mut StopwatchController, ticks: u32) -> u32 {
        (0..ticks).filter(|_| stopwatch.tick()).count() as u32
    }

    #[test]
    fn start_requires_stopped_state() {
        let mut stopwatch = StopwatchController::new(10);
        stopwatch.start().unwrap();

        let result = stopwatch.start();
        assert!(matches!(
            result,
            Err(StopwatchError::InvalidState {
                actual: RunState::Running,
                ..
            })
        ));
    }

    #[test]
    fn counts_one_second_per_prescaler_period() {
        let mut stopwatch = StopwatchController::new(10);
        stopwatch.start().unwrap();

        assert_eq!(run_ticks(&mut stopwatch, 9), 0);
        assert!(stopwatch.tick());
        assert_eq!(stopwatch.digits(), TimeDigits::new(0, 0, 0, 1));
        assert_eq!(stopwatch.prescaler(), 0);
    }

    #[test]
    fn idle_stopwatch_ignores_ticks() {
        let mut stopwatch = StopwatchController::new(10);
        assert_eq!(run_ticks(&mut stopwatch, 100), 0);
        assert_eq!(stopwatch.digits(), TimeDigits::ZERO);
    }

    #[test]
    fn handle_action_reports_outcomes() {
        let mut stopwatch = StopwatchController::new(1);

        assert_eq!(
            stopwatch.handle_action(StopwatchAction::Start),
            Some(ClockEvent::StopwatchStarted)
        );
        assert_eq!(stopwatch.handle_action(StopwatchAction::Start), None);

        stopwatch.tick();
        stopwatch.tick();

        assert_eq!(
            stopwatch.handle_action(StopwatchAction::Stop),
            Some(ClockEvent::StopwatchStopped(TimeDigits::new(0, 0, 0, 2)))
        );
        assert_eq!(
            stopwatch.handle_action(StopwatchAction::Stop),
            Some(ClockEvent::StopwatchCleared)
        );
        assert_eq!(stopwatch.digits(), TimeDigits::ZERO);
    }

    #[test]
    fn invalid_state_error_displays_states() {
        let err = StopwatchError::InvalidState {
            expected: RunState::IdleStopped,
            actual: RunState::Running,
        };
        assert_eq!(
            err.to_string(),
            "invalid state: expected IdleStopped, but stopwatch is Running"
        );
    }
}
