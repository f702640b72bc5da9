//! BCD time digits and the counter bank that advances them.
//!
//! A [`DigitBank`] holds four BCD digits laid out as two fields, an upper
//! pair (`cur_time3`, `cur_time2`) and a lower pair (`cur_time1`,
//! `cur_time0`). Incrementing advances the lowest digit and ripples carries
//! up the chain, with each position wrapping at its own modulus. The bank
//! never holds a digit outside the range of its position.

use crate::types::{DigitError, HourFormat};

/// How the four digits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitLayout {
    /// `HH:MM` time of day.
    HoursMinutes(HourFormat),

    /// `MM:SS` elapsed time, wrapping after 59:59.
    MinutesSeconds,
}

impl DigitLayout {
    /// Inclusive range of the upper field.
    #[inline]
    pub fn upper_range(self) -> (u8, u8) {
        match self {
            DigitLayout::HoursMinutes(format) => (format.first_hour(), format.last_hour()),
            DigitLayout::MinutesSeconds => (0, 59),
        }
    }

    /// Inclusive range of the lower field. Always minutes or seconds.
    #[inline]
    pub fn lower_range(self) -> (u8, u8) {
        (0, 59)
    }

    /// Largest digit allowed at a display position (3 down to 0).
    pub fn max_digit(self, position: u8) -> u8 {
        match position {
            3 => self.upper_range().1 / 10,
            1 => self.lower_range().1 / 10,
            _ => 9,
        }
    }

    /// Lowest valid time in this layout (`00:00`, or `01:00` on a 12-hour clock).
    pub fn minimum(self) -> TimeDigits {
        let (first, _) = self.upper_range();
        TimeDigits::new(first / 10, first % 10, 0, 0)
    }
}

/// Four BCD display digits, most significant first when constructed.
///
/// This is plain data; range guarantees come from the [`DigitBank`] that
/// produced it, or from [`TimeDigits::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDigits {
    // Indexed by display position: [cur_time0, cur_time1, cur_time2, cur_time3].
    digits: [u8; 4],
}

impl TimeDigits {
    /// All-zero digits.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates digits from `cur_time3` down to `cur_time0`.
    #[inline]
    pub const fn new(d3: u8, d2: u8, d1: u8, d0: u8) -> Self {
        Self {
            digits: [d0, d1, d2, d3],
        }
    }

    /// Returns the digit at a display position, 3 (leftmost) down to 0.
    ///
    /// # Panics
    /// Panics if `position > 3`.
    #[inline]
    pub fn digit(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Returns the digits as `[cur_time3, cur_time2, cur_time1, cur_time0]`.
    pub fn as_array(&self) -> [u8; 4] {
        let [d0, d1, d2, d3] = self.digits;
        [d3, d2, d1, d0]
    }

    /// Two-digit value of the upper field (hours or minutes).
    #[inline]
    pub fn upper(&self) -> u8 {
        self.digits[3] * 10 + self.digits[2]
    }

    /// Two-digit value of the lower field (minutes or seconds).
    #[inline]
    pub fn lower(&self) -> u8 {
        self.digits[1] * 10 + self.digits[0]
    }

    /// Packs the digits into 16 bits, one nibble each, `cur_time3` highest.
    pub fn to_bcd(&self) -> u16 {
        self.digits
            .iter()
            .enumerate()
            .fold(0u16, |acc, (position, &digit)| {
                acc | ((digit as u16) << (position * 4))
            })
    }

    /// Unpacks 16-bit packed BCD and validates it against a layout.
    pub fn from_bcd(bcd: u16, layout: DigitLayout) -> Result<Self, DigitError> {
        let nibble = |position: usize| ((bcd >> (position * 4)) & 0xF) as u8;
        let digits = Self::new(nibble(3), nibble(2), nibble(1), nibble(0));
        digits.validate(layout)?;
        Ok(digits)
    }

    /// Checks every digit and both fields against a layout.
    ///
    /// # Errors
    /// * `OutOfRange` - A digit exceeds the maximum for its position
    /// * `InvalidField` - A digit pair forms a value outside its field (e.g. hour 00 on a 12-hour clock)
    pub fn validate(&self, layout: DigitLayout) -> Result<(), DigitError> {
        for position in (0..4u8).rev() {
            let value = self.digits[position as usize];
            let max = layout.max_digit(position);
            if value > max {
                return Err(DigitError::OutOfRange {
                    position,
                    value,
                    max,
                });
            }
        }

        let (first, last) = layout.upper_range();
        if self.upper() < first || self.upper() > last {
            return Err(DigitError::InvalidField {
                pair: 1,
                value: self.upper(),
            });
        }

        let (first, last) = layout.lower_range();
        if self.lower() < first || self.lower() > last {
            return Err(DigitError::InvalidField {
                pair: 0,
                value: self.lower(),
            });
        }

        Ok(())
    }

    fn set_upper(&mut self, value: u8) {
        self.digits[3] = value / 10;
        self.digits[2] = value % 10;
    }

    fn set_lower(&mut self, value: u8) {
        self.digits[1] = value / 10;
        self.digits[0] = value % 10;
    }
}

impl core::fmt::Display for TimeDigits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [d3, d2, d1, d0] = self.as_array();
        write!(f, "{}{}:{}{}", d3, d2, d1, d0)
    }
}

/// Ripples a one-unit increment through a tens/ones pair.
#[inline]
fn bump_pair(tens: &mut u8, ones: &mut u8) {
    *ones += 1;
    if *ones > 9 {
        *ones = 0;
        *tens += 1;
    }
}

/// Four BCD digits with carry propagation and a reset vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBank {
    layout: DigitLayout,
    current: TimeDigits,
    reset_vector: TimeDigits,
}

impl DigitBank {
    /// Creates a bank holding its reset vector.
    ///
    /// # Errors
    /// Returns the validation error if `reset_vector` is not a valid time in `layout`.
    pub fn new(layout: DigitLayout, reset_vector: TimeDigits) -> Result<Self, DigitError> {
        reset_vector.validate(layout)?;
        Ok(Self {
            layout,
            current: reset_vector,
            reset_vector,
        })
    }

    /// Creates a bank that resets to the layout's minimum (`00:00` for a stopwatch).
    pub fn zeroed(layout: DigitLayout) -> Self {
        let minimum = layout.minimum();
        Self {
            layout,
            current: minimum,
            reset_vector: minimum,
        }
    }

    /// Advances by one unit of the lowest field, carrying into the upper field.
    ///
    /// Returns `true` when the whole bank rolled over (e.g. 23:59 to 00:00).
    pub fn increment(&mut self) -> bool {
        let [d0, d1, d2, d3] = &mut self.current.digits;

        bump_pair(d1, d0);
        if *d1 * 10 + *d0 <= self.layout.lower_range().1 {
            return false;
        }
        *d1 = 0;
        *d0 = 0;

        bump_pair(d3, d2);
        let (first, last) = self.layout.upper_range();
        if *d3 * 10 + *d2 <= last {
            return false;
        }
        self.current.set_upper(first);
        true
    }

    /// Advances the upper field by one, wrapping within the field.
    pub fn increment_major(&mut self) {
        let (first, last) = self.layout.upper_range();
        let next = self.current.upper() + 1;
        self.current.set_upper(if next > last { first } else { next });
    }

    /// Advances the lower field by one, wrapping within the field without carry.
    pub fn increment_minor(&mut self) {
        let (first, last) = self.layout.lower_range();
        let next = self.current.lower() + 1;
        self.current.set_lower(if next > last { first } else { next });
    }

    /// Forces the digits back to the reset vector.
    pub fn reset(&mut self) {
        self.current = self.reset_vector;
    }

    /// Forces the digits to the layout's minimum.
    pub fn clear(&mut self) {
        self.current = self.layout.minimum();
    }

    /// Loads arbitrary digits after validating them.
    pub fn load(&mut self, digits: TimeDigits) -> Result<(), DigitError> {
        digits.validate(self.layout)?;
        self.current = digits;
        Ok(())
    }

    /// Returns the current digits.
    #[inline]
    pub fn digits(&self) -> TimeDigits {
        self.current
    }

    /// Returns the configured reset vector.
    pub fn reset_vector(&self) -> TimeDigits {
        self.reset_vector
    }

    /// Returns the layout.
    pub fn layout(&self) -> DigitLayout {
        self.layout
    }

    /// Returns true if the digits equal the layout's minimum.
    pub fn is_cleared(&self) -> bool {
        self.current == self.layout.minimum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK_24: DigitLayout = DigitLayout::HoursMinutes(HourFormat::TwentyFour);
    const CLOCK_12: DigitLayout = DigitLayout::HoursMinutes(HourFormat::Twelve);

    fn assert_in_range(digits: TimeDigits, layout: DigitLayout) {
        assert_eq!(digits.validate(layout), Ok(()), "invalid digits {:?}", digits);
    }

    #[test]
    fn every_minute_of_a_day_stays_in_range() {
        let mut bank = DigitBank::zeroed(CLOCK_24);
        let mut rollovers = 0;

        for _ in 0..24 * 60 {
            if bank.increment() {
                rollovers += 1;
            }
            assert_in_range(bank.digits(), CLOCK_24);
        }

        assert_eq!(rollovers, 1);
        assert_eq!(bank.digits(), TimeDigits::ZERO);
    }

    #[test]
    fn every_second_of_an_hour_stays_in_range() {
        let mut bank = DigitBank::zeroed(DigitLayout::MinutesSeconds);

        for _ in 0..60 * 60 - 1 {
            assert!(!bank.increment());
            assert_in_range(bank.digits(), DigitLayout::MinutesSeconds);
        }

        assert_eq!(bank.digits(), TimeDigits::new(5, 9, 5, 9));
        assert!(bank.increment());
        assert_eq!(bank.digits(), TimeDigits::ZERO);
    }

    #[test]
    fn twelve_hour_clock_rolls_from_twelve_to_one() {
        let mut bank = DigitBank::new(CLOCK_12, TimeDigits::new(1, 2, 5, 9)).unwrap();

        assert!(bank.increment());
        assert_eq!(bank.digits(), TimeDigits::new(0, 1, 0, 0));

        for _ in 0..12 * 60 {
            bank.increment();
            assert_in_range(bank.digits(), CLOCK_12);
        }
        assert_eq!(bank.digits(), TimeDigits::new(0, 1, 0, 0));
    }

    #[test]
    fn ones_carry_into_tens() {
        let mut bank = DigitBank::new(CLOCK_24, TimeDigits::new(0, 9, 5, 9)).unwrap();
        bank.increment();
        assert_eq!(bank.digits(), TimeDigits::new(1, 0, 0, 0));
    }

    #[test]
    fn reset_restores_vector_and_clear_zeroes() {
        let mut bank = DigitBank::new(CLOCK_24, TimeDigits::new(1, 0, 3, 4)).unwrap();
        bank.increment();
        assert_eq!(bank.digits(), TimeDigits::new(1, 0, 3, 5));

        bank.clear();
        assert!(bank.is_cleared());
        assert_eq!(bank.digits(), TimeDigits::ZERO);

        bank.reset();
        assert_eq!(bank.digits(), TimeDigits::new(1, 0, 3, 4));
    }

    #[test]
    fn major_and_minor_wrap_without_carry() {
        let mut bank = DigitBank::new(CLOCK_24, TimeDigits::new(2, 3, 5, 9)).unwrap();

        bank.increment_minor();
        assert_eq!(bank.digits(), TimeDigits::new(2, 3, 0, 0));

        bank.increment_major();
        assert_eq!(bank.digits(), TimeDigits::new(0, 0, 0, 0));
    }

    #[test]
    fn new_rejects_invalid_reset_vector() {
        let result = DigitBank::new(CLOCK_24, TimeDigits::new(2, 4, 0, 0));
        assert_eq!(
            result.unwrap_err(),
            DigitError::InvalidField { pair: 1, value: 24 }
        );

        let result = DigitBank::new(CLOCK_24, TimeDigits::new(1, 0, 6, 0));
        assert_eq!(
            result.unwrap_err(),
            DigitError::OutOfRange {
                position: 1,
                value: 6,
                max: 5
            }
        );

        let result = DigitBank::new(CLOCK_12, TimeDigits::ZERO);
        assert_eq!(
            result.unwrap_err(),
            DigitError::InvalidField { pair: 1, value: 0 }
        );
    }
}
