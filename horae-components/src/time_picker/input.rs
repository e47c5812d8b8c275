//! Text entry for the time picker.
//!
//! In input entry mode the dialog shows two text fields instead of the dial.
//! The text is only validated when the dialog is confirmed.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use super::{DayPeriod, HOURS_PER_DAY, HOURS_PER_PERIOD, MINUTES_PER_HOUR, TimeValue};

/// The longest text accepted by either field, in grapheme clusters.
pub const MAX_FIELD_LENGTH: usize = 2;

/// Errors produced when validating entered text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeInputError {
    /// The field is empty.
    #[error("the field is empty")]
    Empty,
    /// The field holds more than two characters.
    #[error("the field holds more than two characters")]
    TooLong,
    /// The field holds something other than ASCII digits.
    #[error("`{0}` is not a number")]
    NotANumber(String),
    /// The hour is not valid for the clock in use.
    #[error("hour {0} is out of range")]
    HourOutOfRange(u8),
    /// The minute is not in `0..=59`.
    #[error("minute {0} is out of range")]
    MinuteOutOfRange(u8),
}

fn parse_field(text: &str) -> Result<u8, TimeInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimeInputError::Empty);
    }
    if text.graphemes(true).count() > MAX_FIELD_LENGTH {
        return Err(TimeInputError::TooLong);
    }
    if !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(TimeInputError::NotANumber(text.to_string()));
    }
    text.parse::<u8>()
        .map_err(|_| TimeInputError::NotANumber(text.to_string()))
}

/// Parses an hour field.
///
/// On a 24-hour clock the text is the hour itself (0-23). On a 12-hour
/// clock it is the hour of `period` (1-12), and the result is in 24-hour
/// form.
pub fn parse_hour(text: &str, use_24_hour: bool, period: DayPeriod) -> Result<u8, TimeInputError> {
    let hour = parse_field(text)?;
    if use_24_hour {
        if hour >= HOURS_PER_DAY {
            return Err(TimeInputError::HourOutOfRange(hour));
        }
        return Ok(hour);
    }
    if !(1..=HOURS_PER_PERIOD).contains(&hour) {
        return Err(TimeInputError::HourOutOfRange(hour));
    }
    let offset = match period {
        DayPeriod::Am => 0,
        DayPeriod::Pm => HOURS_PER_PERIOD,
    };
    Ok(hour % HOURS_PER_PERIOD + offset)
}

/// Parses a minute field (0-59).
pub fn parse_minute(text: &str) -> Result<u8, TimeInputError> {
    let minute = parse_field(text)?;
    if minute >= MINUTES_PER_HOUR {
        return Err(TimeInputError::MinuteOutOfRange(minute));
    }
    Ok(minute)
}

/// The text of both input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeInputState {
    hour_text: String,
    minute_text: String,
}

impl TimeInputState {
    /// Fills both fields from `time`.
    pub fn from_time(time: TimeValue, use_24_hour: bool) -> Self {
        let hour = if use_24_hour {
            time.hour()
        } else {
            time.hour_of_period()
        };
        Self {
            hour_text: hour.to_string(),
            minute_text: format!("{:02}", time.minute()),
        }
    }

    /// The hour field.
    pub fn hour_text(&self) -> &str {
        &self.hour_text
    }

    /// The minute field.
    pub fn minute_text(&self) -> &str {
        &self.minute_text
    }

    /// Replaces the hour field.
    pub fn set_hour_text(&mut self, text: impl Into<String>) {
        self.hour_text = text.into();
    }

    /// Replaces the minute field.
    pub fn set_minute_text(&mut self, text: impl Into<String>) {
        self.minute_text = text.into();
    }

    /// Validates both fields.
    ///
    /// `period` supplies AM/PM on 12-hour clocks.
    pub fn validate(&self, use_24_hour: bool, period: DayPeriod) -> Result<TimeValue, TimeInputError> {
        let hour = parse_hour(&self.hour_text, use_24_hour, period)?;
        let minute = parse_minute(&self.minute_text)?;
        Ok(TimeValue::from_hm(hour, minute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_text_keeps_the_period() {
        assert_eq!(parse_hour("7", false, DayPeriod::Pm), Ok(19));
        assert_eq!(parse_hour("12", false, DayPeriod::Am), Ok(0));
        assert_eq!(parse_hour("12", false, DayPeriod::Pm), Ok(12));
        assert_eq!(
            parse_hour("0", false, DayPeriod::Am),
            Err(TimeInputError::HourOutOfRange(0))
        );
        assert_eq!(
            parse_hour("13", false, DayPeriod::Am),
            Err(TimeInputError::HourOutOfRange(13))
        );
    }

    #[test]
    fn twenty_four_hour_text() {
        assert_eq!(parse_hour(" 0 ", true, DayPeriod::Am), Ok(0));
        assert_eq!(parse_hour("23", true, DayPeriod::Am), Ok(23));
        assert_eq!(
            parse_hour("24", true, DayPeriod::Am),
            Err(TimeInputError::HourOutOfRange(24))
        );
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(parse_minute(""), Err(TimeInputError::Empty));
        assert_eq!(parse_minute("   "), Err(TimeInputError::Empty));
        assert_eq!(parse_minute("123"), Err(TimeInputError::TooLong));
        assert_eq!(
            parse_minute("4a"),
            Err(TimeInputError::NotANumber("4a".to_string()))
        );
        assert_eq!(
            parse_minute("-1"),
            Err(TimeInputError::NotANumber("-1".to_string()))
        );
        // Two full-width digits are two graphemes but not ASCII.
        assert_eq!(
            parse_minute("１２"),
            Err(TimeInputError::NotANumber("１２".to_string()))
        );
        assert_eq!(parse_minute("60"), Err(TimeInputError::MinuteOutOfRange(60)));
        assert_eq!(parse_minute("07"), Ok(7));
    }

    #[test]
    fn state_round_trips_a_time() {
        let state = TimeInputState::from_time(TimeValue::from_hm(19, 5), false);
        assert_eq!(state.hour_text(), "7");
        assert_eq!(state.minute_text(), "05");
        assert_eq!(state.validate(false, DayPeriod::Pm), Ok(TimeValue::from_hm(19, 5)));

        let mut state = TimeInputState::from_time(TimeValue::from_hm(0, 30), true);
        assert_eq!(state.hour_text(), "0");
        state.set_minute_text("75");
        assert_eq!(
            state.validate(true, DayPeriod::Am),
            Err(TimeInputError::MinuteOutOfRange(75))
        );
    }
}
