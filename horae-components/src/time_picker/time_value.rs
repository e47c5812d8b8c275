use std::fmt;

use thiserror::Error;

/// Hours in a day.
pub const HOURS_PER_DAY: u8 = 24;
/// Hours in one AM/PM period.
pub const HOURS_PER_PERIOD: u8 = 12;
/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Indicates whether a time is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl DayPeriod {
    /// Returns the other period.
    pub fn toggled(self) -> Self {
        match self {
            DayPeriod::Am => DayPeriod::Pm,
            DayPeriod::Pm => DayPeriod::Am,
        }
    }
}

/// Errors produced by [`TimeValue::new`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// The hour is not in `0..=23`.
    #[error("hour {0} is out of range 0..=23")]
    HourOutOfRange(u8),
    /// The minute is not in `0..=59`.
    #[error("minute {0} is out of range 0..=59")]
    MinuteOutOfRange(u8),
}

/// An immutable time of day with minute precision.
///
/// The hour is stored in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// 00:00.
    pub const MIDNIGHT: TimeValue = TimeValue::from_hm(0, 0);
    /// 12:00.
    pub const NOON: TimeValue = TimeValue::from_hm(12, 0);

    /// Creates a time, validating both fields.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour >= HOURS_PER_DAY {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Creates a time from fields already known to be in range.
    ///
    /// # Panics
    ///
    /// Panics when `hour > 23` or `minute > 59`.
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour < HOURS_PER_DAY, "hour out of range");
        assert!(minute < MINUTES_PER_HOUR, "minute out of range");
        Self { hour, minute }
    }

    /// The hour in 24-hour form (0-23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute (0-59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// The hour as shown on a 12-hour clock (1-12).
    pub fn hour_of_period(self) -> u8 {
        match self.hour % HOURS_PER_PERIOD {
            0 => HOURS_PER_PERIOD,
            hour => hour,
        }
    }

    /// Whether the time is before or after noon.
    pub fn period(self) -> DayPeriod {
        if self.hour < HOURS_PER_PERIOD {
            DayPeriod::Am
        } else {
            DayPeriod::Pm
        }
    }

    /// The hour offset of the current period: 0 for AM, 12 for PM.
    pub fn period_offset(self) -> u8 {
        match self.period() {
            DayPeriod::Am => 0,
            DayPeriod::Pm => HOURS_PER_PERIOD,
        }
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// # Panics
    ///
    /// Panics when a replacement is out of range.
    pub fn replacing(self, hour: Option<u8>, minute: Option<u8>) -> Self {
        Self::from_hm(hour.unwrap_or(self.hour), minute.unwrap_or(self.minute))
    }

    /// Moves the time into `period`, keeping the hour of period.
    pub fn with_period(self, period: DayPeriod) -> Self {
        if self.period() == period {
            return self;
        }
        let hour = match period {
            DayPeriod::Am => self.hour - HOURS_PER_PERIOD,
            DayPeriod::Pm => self.hour + HOURS_PER_PERIOD,
        };
        self.replacing(Some(hour), None)
    }

    /// The next hour.
    ///
    /// 24-hour clocks wrap around the day; 12-hour clocks stay in the current
    /// period.
    pub fn next_hour(self, use_24_hour: bool) -> Self {
        self.shift_hour(1, use_24_hour)
    }

    /// The previous hour, wrapping like [`next_hour`](Self::next_hour).
    pub fn previous_hour(self, use_24_hour: bool) -> Self {
        self.shift_hour(-1, use_24_hour)
    }

    /// The next minute, wrapping within the hour.
    pub fn next_minute(self) -> Self {
        self.shift_minute(1)
    }

    /// The previous minute, wrapping within the hour.
    pub fn previous_minute(self) -> Self {
        self.shift_minute(-1)
    }

    fn shift_hour(self, delta: i16, use_24_hour: bool) -> Self {
        let hour = if use_24_hour {
            (self.hour as i16 + delta).rem_euclid(HOURS_PER_DAY as i16) as u8
        } else {
            let hour_of_period = self.hour_of_period() as i16;
            (hour_of_period + delta).rem_euclid(HOURS_PER_PERIOD as i16) as u8
                + self.period_offset()
        };
        self.replacing(Some(hour), None)
    }

    fn shift_minute(self, delta: i16) -> Self {
        let minute = (self.minute as i16 + delta).rem_euclid(MINUTES_PER_HOUR as i16) as u8;
        self.replacing(None, Some(minute))
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_fields() {
        assert_eq!(TimeValue::new(24, 0), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(TimeValue::new(3, 60), Err(TimeError::MinuteOutOfRange(60)));
        assert_eq!(TimeValue::new(23, 59), Ok(TimeValue::from_hm(23, 59)));
    }

    #[test]
    fn period_derivations() {
        let midnight = TimeValue::from_hm(0, 5);
        assert_eq!(midnight.hour_of_period(), 12);
        assert_eq!(midnight.period(), DayPeriod::Am);
        assert_eq!(midnight.period_offset(), 0);

        let noon = TimeValue::from_hm(12, 0);
        assert_eq!(noon.hour_of_period(), 12);
        assert_eq!(noon.period(), DayPeriod::Pm);
        assert_eq!(noon.period_offset(), 12);

        assert_eq!(TimeValue::from_hm(19, 0).hour_of_period(), 7);
    }

    #[test]
    fn replacing_keeps_unspecified_fields() {
        let time = TimeValue::from_hm(9, 41);
        assert_eq!(time.replacing(Some(10), None), TimeValue::from_hm(10, 41));
        assert_eq!(time.replacing(None, Some(0)), TimeValue::from_hm(9, 0));
        assert_eq!(time.replacing(None, None), time);
    }

    #[test]
    #[should_panic]
    fn replacing_with_invalid_hour_panics() {
        let _ = TimeValue::MIDNIGHT.replacing(Some(24), None);
    }

    #[test]
    fn with_period_moves_between_halves() {
        let time = TimeValue::from_hm(7, 30);
        assert_eq!(time.with_period(DayPeriod::Pm), TimeValue::from_hm(19, 30));
        assert_eq!(time.with_period(DayPeriod::Am), time);
        assert_eq!(
            TimeValue::from_hm(12, 0).with_period(DayPeriod::Am),
            TimeValue::from_hm(0, 0)
        );
    }

    #[test]
    fn twelve_hour_steps_stay_in_period() {
        let eleven_am = TimeValue::from_hm(11, 0);
        assert_eq!(eleven_am.next_hour(false), TimeValue::from_hm(0, 0));
        assert_eq!(TimeValue::from_hm(0, 0).next_hour(false).hour(), 1);
        assert_eq!(TimeValue::from_hm(1, 0).previous_hour(false).hour(), 0);
        assert_eq!(TimeValue::from_hm(0, 0).previous_hour(false).hour(), 11);
        assert_eq!(TimeValue::from_hm(23, 0).next_hour(false).hour(), 12);
    }

    #[test]
    fn twenty_four_hour_steps_wrap_the_day() {
        assert_eq!(TimeValue::from_hm(23, 0).next_hour(true).hour(), 0);
        assert_eq!(TimeValue::from_hm(0, 0).previous_hour(true).hour(), 23);
    }

    #[test]
    fn minute_steps_wrap_without_touching_hour() {
        assert_eq!(
            TimeValue::from_hm(8, 59).next_minute(),
            TimeValue::from_hm(8, 0)
        );
        assert_eq!(
            TimeValue::from_hm(8, 0).previous_minute(),
            TimeValue::from_hm(8, 59)
        );
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeValue::from_hm(7, 5).to_string(), "07:05");
    }
}
