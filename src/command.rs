//! Command-based control for the stopwatch and clock.

/// Actions understood by [`StopwatchController::handle_action`](crate::StopwatchController::handle_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchAction {
    /// Start counting.
    Start,
    /// Stop counting, or clear if already stopped.
    Stop,
    /// Stop and clear to zero.
    Clear,
}

/// Adjustments understood by [`Clock::handle_action`](crate::Clock::handle_action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockAction {
    /// Advance the hour field by one.
    AdvanceHour,
    /// Advance the minute field by one.
    AdvanceMinute,
    /// Restore the reset time.
    Reset,
}
