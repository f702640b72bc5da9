//! Core enums shared across the controller.

/// Operating mode, toggled by holding the mode button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Normal operation. The clock counts and the selected face is displayed.
    #[default]
    Run,

    /// Clock setting. Counting freezes and start/stop adjust the clock digits.
    Set,
}

impl Mode {
    /// Returns the other mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Run => Mode::Set,
            Mode::Set => Mode::Run,
        }
    }
}

/// Which digit bank is shown on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Face {
    /// Time of day, `HH:MM`.
    #[default]
    Clock,

    /// Stopwatch, `MM:SS`.
    Stopwatch,
}

impl Face {
    /// Returns the other face.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Face::Clock => Face::Stopwatch,
            Face::Stopwatch => Face::Clock,
        }
    }
}

/// Run state of the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Not counting. Digits hold their last value.
    #[default]
    IdleStopped,

    /// Counting one unit per simulated second.
    Running,
}

/// Hour convention used by the clock's upper digit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// Hours 00 through 23.
    #[default]
    TwentyFour,

    /// Hours 01 through 12.
    Twelve,
}

impl HourFormat {
    /// Smallest valid hour.
    #[inline]
    pub fn first_hour(self) -> u8 {
        match self {
            HourFormat::TwentyFour => 0,
            HourFormat::Twelve => 1,
        }
    }

    /// Largest valid hour.
    #[inline]
    pub fn last_hour(self) -> u8 {
        match self {
            HourFormat::TwentyFour => 23,
            HourFormat::Twelve => 12,
        }
    }
}

/// Digit validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// A single digit exceeds the range of its display position.
    OutOfRange {
        /// Display position, 3 (most significant) down to 0.
        position: u8,
        /// Offending value.
        value: u8,
        /// Largest value allowed at this position.
        max: u8,
    },

    /// The digit pair is individually in range but names an invalid field value (e.g. hour 24).
    InvalidField {
        /// Either 1 (upper pair) or 0 (lower pair).
        pair: u8,
        /// Combined two-digit value.
        value: u8,
    },
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange {
                position,
                value,
                max,
            } => {
                write!(
                    f,
                    "digit {} holds {}, but the position allows at most {}",
                    position, value, max
                )
            }
            DigitError::InvalidField { pair, value } => {
                let name = if *pair == 1 { "upper" } else { "lower" };
                write!(f, "{} digit pair {:02} is not a valid field value", name, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}
