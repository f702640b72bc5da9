//! Debounce and long-hold detection for a single button.

/// Per-tick edges and levels reported by [`HoldDetector::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvents {
    /// Debounced level rose on this tick.
    pub pressed: bool,
    /// Debounced level fell on this tick.
    pub released: bool,
    /// Released on this tick without ever reaching the hold threshold.
    pub short_release: bool,
    /// Hold threshold reached, stays set until release.
    pub held_long: bool,
    /// `held_long` rose on this tick.
    pub held_long_edge: bool,
}

/// Converts a raw, possibly bouncing, level into clean press and hold signals.
///
/// The detector keeps a saturating counter that increments on every tick the
/// raw input is asserted and drops to zero the moment it is released. The
/// debounced level rises once the counter reaches the debounce window, and
/// `held_long` rises once it reaches the hold threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldDetector {
    raw: bool,
    debounced: bool,
    held_long: bool,
    count: u32,
    debounce_ticks: u32,
    hold_ticks: u32,
}

impl HoldDetector {
    /// Creates a released detector.
    ///
    /// # Arguments
    /// * `debounce_ticks` - Consecutive asserted ticks before a press registers (0 is treated as 1)
    /// * `hold_ticks` - Consecutive asserted ticks before `held_long` asserts
    pub fn new(debounce_ticks: u32, hold_ticks: u32) -> Self {
        let debounce_ticks = debounce_ticks.max(1);
        Self {
            raw: false,
            debounced: false,
            held_long: false,
            count: 0,
            debounce_ticks,
            hold_ticks: hold_ticks.max(debounce_ticks),
        }
    }

    /// Samples the raw input for one tick.
    pub fn sample(&mut self, raw: bool) -> ButtonEvents {
        self.raw = raw;

        if !raw {
            let events = ButtonEvents {
                released: self.debounced,
                short_release: self.debounced && !self.held_long,
                ..ButtonEvents::default()
            };
            self.count = 0;
            self.debounced = false;
            self.held_long = false;
            return events;
        }

        self.count = self.count.saturating_add(1);

        let pressed = !self.debounced && self.count >= self.debounce_ticks;
        if pressed {
            self.debounced = true;
        }

        let held_long_edge = !self.held_long && self.count >= self.hold_ticks;
        if held_long_edge {
            self.held_long = true;
        }

        ButtonEvents {
            pressed,
            held_long: self.held_long,
            held_long_edge,
            ..ButtonEvents::default()
        }
    }

    /// Forces the detector back to the released state.
    pub fn reset(&mut self) {
        self.raw = false;
        self.debounced = false;
        self.held_long = false;
        self.count = 0;
    }

    /// Last raw level sampled.
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.debounced
    }

    /// True once the hold threshold is reached, until release.
    pub fn is_held_long(&self) -> bool {
        self.held_long
    }

    /// Ticks the input has been continuously asserted.
    pub fn hold_count(&self) -> u32 {
        self.count
    }

    /// Tick count at which `held_long` asserts.
    pub fn hold_threshold(&self) -> u32 {
        self.hold_ticks
    }

    /// Tick count at which a press registers.
    pub fn debounce_window(&self) -> u32 {
        self.debounce_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_debounce_still_needs_one_asserted_tick() {
        let mut button = HoldDetector::new(0, 10);
        assert_eq!(button.debounce_window(), 1);
        assert!(button.sample(true).pressed);
    }

    #[test]
    fn hold_threshold_is_never_below_debounce() {
        let button = HoldDetector::new(8, 3);
        assert_eq!(button.hold_threshold(), 8);
    }

    #[test]
    fn counter_saturates() {
        let mut button = HoldDetector::new(1, 2);
        button.count = u32::MAX - 1;
        button.debounced = true;
        button.held_long = true;

        button.sample(true);
        button.sample(true);
        assert_eq!(button.hold_count(), u32::MAX);
        assert!(button.is_held_long());
    }
}
