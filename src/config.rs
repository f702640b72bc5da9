//! Controller configuration and its validating builder.

use crate::digits::{DigitLayout, TimeDigits};
use crate::types::{DigitError, HourFormat};

/// Ticks per simulated second used by the reference test bench.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10_000;

/// Seconds a button must stay asserted to count as held.
pub const DEFAULT_HOLD_SECONDS: u32 = 2;

/// Clock digits after reset, `10:34`.
pub const DEFAULT_RESET_TIME: TimeDigits = TimeDigits::new(1, 0, 3, 4);

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick rate of zero.
    ZeroTicksPerSecond,

    /// Hold duration of zero seconds.
    ZeroHoldSeconds,

    /// Debounce window is not shorter than the hold threshold.
    DebounceExceedsHold {
        debounce_ticks: u32,
        hold_ticks: u32,
    },

    /// Hold threshold does not fit in the tick counter.
    HoldOverflow,

    /// Reset time is not a valid clock time for the hour format.
    InvalidResetTime(DigitError),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTicksPerSecond => {
                write!(f, "ticks per second must be non-zero")
            }
            ConfigError::ZeroHoldSeconds => {
                write!(f, "hold duration must be at least one second")
            }
            ConfigError::DebounceExceedsHold {
                debounce_ticks,
                hold_ticks,
            } => {
                write!(
                    f,
                    "debounce window of {} ticks must be shorter than the hold threshold of {} ticks",
                    debounce_ticks, hold_ticks
                )
            }
            ConfigError::HoldOverflow => {
                write!(f, "hold threshold overflows the tick counter")
            }
            ConfigError::InvalidResetTime(err) => {
                write!(f, "invalid reset time: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl From<DigitError> for ConfigError {
    fn from(err: DigitError) -> Self {
        ConfigError::InvalidResetTime(err)
    }
}

/// Validated controller configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    ticks_per_second: u32,
    hold_seconds: u32,
    debounce_ticks: u32,
    hour_format: HourFormat,
    reset_time: TimeDigits,
}

impl ClockConfig {
    /// Creates a configuration builder with the defaults.
    pub fn builder() -> ClockConfigBuilder {
        ClockConfigBuilder::new()
    }

    /// Ticks that make up one simulated second.
    #[inline]
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Seconds a button must be held.
    pub fn hold_seconds(&self) -> u32 {
        self.hold_seconds
    }

    /// Hold threshold in ticks.
    #[inline]
    pub fn hold_ticks(&self) -> u32 {
        // Checked at build time.
        self.ticks_per_second * self.hold_seconds
    }

    /// Debounce window in ticks.
    #[inline]
    pub fn debounce_ticks(&self) -> u32 {
        self.debounce_ticks
    }

    /// Hour convention of the clock face.
    pub fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    /// Clock digits after reset.
    pub fn reset_time(&self) -> TimeDigits {
        self.reset_time
    }

    /// Digit layout of the clock face.
    pub fn clock_layout(&self) -> DigitLayout {
        DigitLayout::HoursMinutes(self.hour_format)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            hold_seconds: DEFAULT_HOLD_SECONDS,
            debounce_ticks: 1,
            hour_format: HourFormat::TwentyFour,
            reset_time: DEFAULT_RESET_TIME,
        }
    }
}

/// Builder for [`ClockConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ClockConfigBuilder {
    config: ClockConfig,
}

impl ClockConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: ClockConfig::default(),
        }
    }

    /// Sets the number of ticks per simulated second.
    pub fn ticks_per_second(mut self, ticks: u32) -> Self {
        self.config.ticks_per_second = ticks;
        self
    }

    /// Sets how many seconds make a long hold.
    ///
    /// Default is 2.
    pub fn hold_seconds(mut self, seconds: u32) -> Self {
        self.config.hold_seconds = seconds;
        self
    }

    /// Sets the debounce window in ticks.
    ///
    /// Default is 1, which registers a press on the first asserted tick.
    pub fn debounce_ticks(mut self, ticks: u32) -> Self {
        self.config.debounce_ticks = ticks;
        self
    }

    /// Sets the hour convention.
    pub fn hour_format(mut self, format: HourFormat) -> Self {
        self.config.hour_format = format;
        self
    }

    /// Sets the clock digits loaded on reset.
    pub fn reset_time(mut self, digits: TimeDigits) -> Self {
        self.config.reset_time = digits;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTicksPerSecond` - Tick rate is zero
    /// * `ZeroHoldSeconds` - Hold duration is zero
    /// * `HoldOverflow` - `ticks_per_second * hold_seconds` does not fit in `u32`
    /// * `DebounceExceedsHold` - Debounce window reaches the hold threshold
    /// * `InvalidResetTime` - Reset time is not valid for the hour format
    pub fn build(self) -> Result<ClockConfig, ConfigError> {
        let config = self.config;

        if config.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTicksPerSecond);
        }
        if config.hold_seconds == 0 {
            return Err(ConfigError::ZeroHoldSeconds);
        }

        let hold_ticks = config
            .ticks_per_second
            .checked_mul(config.hold_seconds)
            .ok_or(ConfigError::HoldOverflow)?;

        if config.debounce_ticks >= hold_ticks {
            return Err(ConfigError::DebounceExceedsHold {
                debounce_ticks: config.debounce_ticks,
                hold_ticks,
            });
        }

        config.reset_time.validate(config.clock_layout())?;

        Ok(config)
    }
}

impl Default for ClockConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
