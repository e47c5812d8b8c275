//! Time-of-day formats and the localization seam.
//!
//! Picking a format for a locale is the host's job. The picker only needs to
//! know which of the supported shapes to lay out and how to spell the
//! individual pieces, which it asks a [`TimeFormatter`] for.

use std::str::FromStr;

use thiserror::Error;

use super::{DayPeriod, DialMode, TimeValue};

/// The header shapes the time picker can lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeOfDayFormat {
    /// `h:mm a`, e.g. `7:05 PM`.
    #[default]
    HColonMmSpaceA,
    /// `H:mm`, e.g. `19:05`.
    HColonMm,
    /// `HH.mm`, e.g. `19.05`.
    HhDotMm,
    /// `a h:mm`, e.g. `PM 7:05`.
    ASpaceHColonMm,
    /// `h'h'mm` as used in French Canada, e.g. `19 h 05`.
    FrenchCanadian,
    /// `HH:mm`, e.g. `07:05`.
    HhColonMm,
}

/// Errors produced when parsing a [`TimeOfDayFormat`] pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The pattern is not one of the supported shapes.
    #[error("unsupported time of day pattern `{0}`")]
    UnknownPattern(String),
}

impl TimeOfDayFormat {
    /// Every supported format.
    pub const ALL: [TimeOfDayFormat; 6] = [
        TimeOfDayFormat::HColonMmSpaceA,
        TimeOfDayFormat::HColonMm,
        TimeOfDayFormat::HhDotMm,
        TimeOfDayFormat::ASpaceHColonMm,
        TimeOfDayFormat::FrenchCanadian,
        TimeOfDayFormat::HhColonMm,
    ];

    /// The pattern string of this format.
    pub fn pattern(self) -> &'static str {
        match self {
            TimeOfDayFormat::HColonMmSpaceA => "h:mm a",
            TimeOfDayFormat::HColonMm => "H:mm",
            TimeOfDayFormat::HhDotMm => "HH.mm",
            TimeOfDayFormat::ASpaceHColonMm => "a h:mm",
            TimeOfDayFormat::FrenchCanadian => "h'h'mm",
            TimeOfDayFormat::HhColonMm => "HH:mm",
        }
    }

    /// Whether hours are shown on a 24-hour clock.
    ///
    /// This also decides whether the dial shows two hour rings.
    pub fn uses_24_hour_clock(self) -> bool {
        !self.has_day_period()
    }

    /// Whether the format shows an AM/PM marker.
    pub fn has_day_period(self) -> bool {
        matches!(
            self,
            TimeOfDayFormat::HColonMmSpaceA | TimeOfDayFormat::ASpaceHColonMm
        )
    }

    /// This format, or the closest one on the requested clock.
    ///
    /// Dropping the day period yields [`TimeOfDayFormat::HColonMm`]; adding
    /// one yields [`TimeOfDayFormat::HColonMmSpaceA`].
    pub fn with_clock(self, use_24_hour: bool) -> Self {
        match (use_24_hour, self.uses_24_hour_clock()) {
            (true, false) => TimeOfDayFormat::HColonMm,
            (false, true) => TimeOfDayFormat::HColonMmSpaceA,
            _ => self,
        }
    }

    /// Whether the hour is zero padded to two digits.
    pub fn pads_hour(self) -> bool {
        matches!(self, TimeOfDayFormat::HhDotMm | TimeOfDayFormat::HhColonMm)
    }
}

impl FromStr for TimeOfDayFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = s.trim();
        TimeOfDayFormat::ALL
            .into_iter()
            .find(|format| format.pattern() == pattern)
            .ok_or_else(|| FormatError::UnknownPattern(pattern.to_string()))
    }
}

/// Localized strings used by the time picker.
///
/// Every method has an English default, so an implementation only overrides
/// what its locale spells differently.
pub trait TimeFormatter {
    /// Formats the hour field for the header and the text input.
    fn format_hour(&self, time: TimeValue, format: TimeOfDayFormat) -> String {
        let hour = if format.uses_24_hour_clock() {
            time.hour()
        } else {
            time.hour_of_period()
        };
        if format.pads_hour() {
            format!("{hour:02}")
        } else {
            hour.to_string()
        }
    }

    /// Formats the minute field.
    fn format_minute(&self, time: TimeValue) -> String {
        format!("{:02}", time.minute())
    }

    /// Formats a plain number for dial labels and announcements.
    fn format_decimal(&self, value: u8) -> String {
        value.to_string()
    }

    /// The label of an AM/PM marker.
    fn period_label(&self, period: DayPeriod) -> String {
        match period {
            DayPeriod::Am => "AM".to_string(),
            DayPeriod::Pm => "PM".to_string(),
        }
    }

    /// The literal between hours and minutes in [`TimeOfDayFormat::FrenchCanadian`].
    fn hour_minute_literal(&self) -> String {
        "h".to_string()
    }

    /// Formats a whole time the way the format spells it.
    fn format_time(&self, time: TimeValue, format: TimeOfDayFormat) -> String {
        let hour = self.format_hour(time, format);
        let minute = self.format_minute(time);
        let period = self.period_label(time.period());
        match format {
            TimeOfDayFormat::HColonMmSpaceA => format!("{hour}:{minute} {period}"),
            TimeOfDayFormat::ASpaceHColonMm => format!("{period} {hour}:{minute}"),
            TimeOfDayFormat::HColonMm | TimeOfDayFormat::HhColonMm => format!("{hour}:{minute}"),
            TimeOfDayFormat::HhDotMm => format!("{hour}.{minute}"),
            TimeOfDayFormat::FrenchCanadian => {
                format!("{hour} {} {minute}", self.hour_minute_literal())
            }
        }
    }

    /// Announced when the dial switches to `mode`.
    fn mode_announcement(&self, mode: DialMode) -> String {
        match mode {
            DialMode::Hour => "Select hours".to_string(),
            DialMode::Minute => "Select minutes".to_string(),
        }
    }

    /// The default dialog title.
    fn help_text(&self) -> String {
        "Select time".to_string()
    }
}

/// The built-in English formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishTimeFormatter;

impl TimeFormatter for EnglishTimeFormatter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_round_trip_through_from_str() {
        for format in TimeOfDayFormat::ALL {
            assert_eq!(format.pattern().parse::<TimeOfDayFormat>(), Ok(format));
        }
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        assert_eq!(
            "hh:mm:ss".parse::<TimeOfDayFormat>(),
            Err(FormatError::UnknownPattern("hh:mm:ss".to_string()))
        );
    }

    #[test]
    fn clock_kind_follows_day_period() {
        assert!(!TimeOfDayFormat::HColonMmSpaceA.uses_24_hour_clock());
        assert!(!TimeOfDayFormat::ASpaceHColonMm.uses_24_hour_clock());
        assert!(TimeOfDayFormat::HhDotMm.uses_24_hour_clock());
        assert!(TimeOfDayFormat::FrenchCanadian.uses_24_hour_clock());
    }

    #[test]
    fn with_clock_swaps_only_on_mismatch() {
        assert_eq!(
            TimeOfDayFormat::ASpaceHColonMm.with_clock(true),
            TimeOfDayFormat::HColonMm
        );
        assert_eq!(
            TimeOfDayFormat::HhColonMm.with_clock(false),
            TimeOfDayFormat::HColonMmSpaceA
        );
        for format in TimeOfDayFormat::ALL {
            assert_eq!(format.with_clock(format.uses_24_hour_clock()), format);
        }
    }

    #[test]
    fn english_formatting() {
        let f = EnglishTimeFormatter;
        let time = TimeValue::from_hm(19, 5);
        assert_eq!(f.format_time(time, TimeOfDayFormat::HColonMmSpaceA), "7:05 PM");
        assert_eq!(f.format_time(time, TimeOfDayFormat::ASpaceHColonMm), "PM 7:05");
        assert_eq!(f.format_time(time, TimeOfDayFormat::HhDotMm), "19.05");
        assert_eq!(f.format_time(time, TimeOfDayFormat::FrenchCanadian), "19 h 05");
        assert_eq!(
            f.format_time(TimeValue::from_hm(7, 5), TimeOfDayFormat::HhColonMm),
            "07:05"
        );
        assert_eq!(
            f.format_time(TimeValue::from_hm(7, 5), TimeOfDayFormat::HColonMm),
            "7:05"
        );
    }
}
