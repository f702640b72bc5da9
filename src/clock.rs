//! Free-running time-of-day clock.

use crate::command::ClockAction;
use crate::config::ClockConfig;
use crate::digits::{DigitBank, TimeDigits};

/// `HH:MM` clock with a hidden seconds counter.
///
/// The owner decides when the clock counts: [`Clock::tick`] is only called
/// in run mode, which is how set mode freezes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    bank: DigitBank,
    seconds: u8,
    prescaler: u32,
    ticks_per_second: u32,
}

impl Clock {
    /// Creates a clock showing the configured reset time.
    pub fn new(config: &ClockConfig) -> Self {
        let layout = config.clock_layout();
        // ClockConfig validates the reset time when built.
        let bank = DigitBank::new(layout, config.reset_time())
            .unwrap_or_else(|_| DigitBank::zeroed(layout));

        Self {
            bank,
            seconds: 0,
            prescaler: 0,
            ticks_per_second: config.ticks_per_second(),
        }
    }

    /// Advances one tick. Returns true when a minute rolled over.
    pub fn tick(&mut self) -> bool {
        self.prescaler += 1;
        if self.prescaler < self.ticks_per_second {
            return false;
        }
        self.prescaler = 0;

        self.seconds += 1;
        if self.seconds < 60 {
            return false;
        }
        self.seconds = 0;

        self.bank.increment();
        true
    }

    /// Applies a set-mode adjustment and returns the resulting digits.
    pub fn handle_action(&mut self, action: ClockAction) -> TimeDigits {
        match action {
            ClockAction::AdvanceHour => self.bank.increment_major(),
            ClockAction::AdvanceMinute => self.bank.increment_minor(),
            ClockAction::Reset => self.reset(),
        }
        crate::log!(debug, "clock adjusted to {}", self.bank.digits());
        self.bank.digits()
    }

    /// Restarts the current minute from zero seconds.
    pub fn zero_seconds(&mut self) {
        self.seconds = 0;
        self.prescaler = 0;
    }

    /// Restores the reset time.
    pub fn reset(&mut self) {
        self.bank.reset();
        self.zero_seconds();
    }

    /// Returns the displayed digits.
    pub fn digits(&self) -> TimeDigits {
        self.bank.digits()
    }

    /// Seconds elapsed in the current minute.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}
