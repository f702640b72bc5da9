//! Events raised while stepping the controller.

use crate::digits::TimeDigits;
use crate::types::{Face, Mode};

/// Capacity of the per-tick event list.
pub const MAX_EVENTS: usize = 8;

/// Events raised during a single tick.
pub type EventLog = heapless::Vec<ClockEvent, MAX_EVENTS>;

/// Something observable that happened on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// Reset or power input held the controller at its initial state.
    Reset,
    /// A long hold of the mode button switched modes.
    ModeChanged(Mode),
    /// A short press of the mode button switched the displayed face.
    FaceChanged(Face),
    /// Stopwatch began counting.
    StopwatchStarted,
    /// Stopwatch stopped; digits are frozen at this value.
    StopwatchStopped(TimeDigits),
    /// Stopwatch cleared to zero.
    StopwatchCleared,
    /// Clock digits were adjusted in set mode.
    ClockAdjusted(TimeDigits),
    /// A full minute elapsed on the clock.
    MinuteElapsed(TimeDigits),
}

/// Appends an event, dropping it if the tick's list is already full.
#[inline]
pub(crate) fn record(log: &mut EventLog, event: ClockEvent) {
    let _ = log.push(event);
}
