//! Mode and face selection driven by the mode button.

use crate::button::ButtonEvents;
use crate::event::{ClockEvent, EventLog, record};
use crate::types::{Face, Mode};

/// Tracks run/set mode and the displayed face.
///
/// A long hold toggles the mode once per hold, on the rising edge of
/// `held_long`. A short press (released before the hold threshold) toggles
/// the face, but only in run mode. Entering set mode always shows the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeController {
    mode: Mode,
    face: Face,
}

impl ModeController {
    /// Creates a controller in run mode showing the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one tick of mode button events.
    pub fn update(&mut self, button: &ButtonEvents, events: &mut EventLog) {
        if button.held_long_edge {
            self.mode = self.mode.toggled();
            crate::log!(info, "mode -> {}", self.mode);
            record(events, ClockEvent::ModeChanged(self.mode));

            if self.mode == Mode::Set && self.face != Face::Clock {
                self.face = Face::Clock;
                record(events, ClockEvent::FaceChanged(self.face));
            }
            return;
        }

        if button.short_release && self.mode == Mode::Run {
            self.face = self.face.toggled();
            crate::log!(debug, "face -> {}", self.face);
            record(events, ClockEvent::FaceChanged(self.face));
        }
    }

    /// Forces run mode and the clock face.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current face.
    pub fn face(&self) -> Face {
        self.face
    }
}
