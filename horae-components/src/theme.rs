//! Theme data for the time picker.
//!
//! ## Usage
//!
//! Override individual colors or metrics on a [`TimePickerTheme`] and resolve
//! it against the defaults of a [`DialStyle`] before laying out or painting.

use derive_setters::Setters;
use horae_ui::{Color, Dp};

use crate::time_picker::header::HeaderMetrics;

/// Visual family of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialStyle {
    /// Material 2 look: solid header band, compact period toggle.
    Classic,
    /// Material 3 look: tonal surfaces and large hour/minute boxes.
    #[default]
    Modern,
}

/// Optional overrides for the time picker's colors and metrics.
///
/// Unset values fall back to [`TimePickerDefaults::for_style`] when
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
#[setters(strip_option, into)]
pub struct TimePickerTheme {
    /// Background of the header.
    pub header_color: Option<Color>,
    /// Background of the dial face.
    pub dial_background_color: Option<Color>,
    /// Color of the needle and the selected label background.
    pub dial_hand_color: Option<Color>,
    /// Color of unselected dial labels.
    pub dial_text_color: Option<Color>,
    /// Color of the entry mode toggle icon.
    pub entry_mode_icon_color: Option<Color>,
    /// Background of the hour and minute controls.
    pub hour_minute_color: Option<Color>,
    /// Background of the selected day period.
    pub day_period_color: Option<Color>,
    /// Diameter of the dial.
    pub dial_size: Option<Dp>,
    /// Height of the hour and minute controls.
    pub hour_minute_height: Option<Dp>,
    /// Space between the hour/minute group and the day period.
    pub period_gap: Option<Dp>,
    /// Space between stacked header pieces.
    pub vertical_gap: Option<Dp>,
    /// Space around a localized literal in the header.
    pub fragment_gap: Option<Dp>,
}

/// A theme with every value filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTimePickerTheme {
    /// Background of the header.
    pub header_color: Color,
    /// Background of the dial face.
    pub dial_background_color: Color,
    /// Color of the needle and the selected label background.
    pub dial_hand_color: Color,
    /// Color of unselected dial labels.
    pub dial_text_color: Color,
    /// Color of the entry mode toggle icon.
    pub entry_mode_icon_color: Color,
    /// Background of the hour and minute controls.
    pub hour_minute_color: Color,
    /// Background of the selected day period.
    pub day_period_color: Color,
    /// Diameter of the dial.
    pub dial_size: Dp,
    /// Height of the hour and minute controls.
    pub hour_minute_height: Dp,
    /// Space between the hour/minute group and the day period.
    pub period_gap: Dp,
    /// Space between stacked header pieces.
    pub vertical_gap: Dp,
    /// Space around a localized literal in the header.
    pub fragment_gap: Dp,
    /// Radius of the outer label ring as a fraction of the dial radius.
    pub label_ratio: f32,
    /// Radius of the inner label ring as a fraction of the dial radius.
    pub inner_label_ratio: f32,
    /// Minimum touch target of header controls.
    pub min_tap_size: Dp,
}

impl ResolvedTimePickerTheme {
    /// Header spacing in pixels.
    pub fn header_metrics(&self) -> HeaderMetrics {
        HeaderMetrics {
            period_gap: self.period_gap.to_px(),
            vertical_gap: self.vertical_gap.to_px(),
            fragment_gap: self.fragment_gap.to_px(),
        }
    }
}

impl TimePickerTheme {
    /// Fills unset values from the defaults of `style`.
    pub fn resolve(&self, style: DialStyle) -> ResolvedTimePickerTheme {
        let d = TimePickerDefaults::for_style(style);
        ResolvedTimePickerTheme {
            header_color: self.header_color.unwrap_or(d.header_color),
            dial_background_color: self
                .dial_background_color
                .unwrap_or(d.dial_background_color),
            dial_hand_color: self.dial_hand_color.unwrap_or(d.dial_hand_color),
            dial_text_color: self.dial_text_color.unwrap_or(d.dial_text_color),
            entry_mode_icon_color: self
                .entry_mode_icon_color
                .unwrap_or(d.entry_mode_icon_color),
            hour_minute_color: self.hour_minute_color.unwrap_or(d.hour_minute_color),
            day_period_color: self.day_period_color.unwrap_or(d.day_period_color),
            dial_size: self.dial_size.unwrap_or(d.dial_size),
            hour_minute_height: self.hour_minute_height.unwrap_or(d.hour_minute_height),
            period_gap: self.period_gap.unwrap_or(d.period_gap),
            vertical_gap: self.vertical_gap.unwrap_or(d.vertical_gap),
            fragment_gap: self.fragment_gap.unwrap_or(d.fragment_gap),
            ..d
        }
    }

    /// Interpolates between two themes.
    ///
    /// Values set on both sides are blended. A value set on one side only
    /// snaps from `a` to `b` at `t = 0.5`.
    pub fn lerp(a: &TimePickerTheme, b: &TimePickerTheme, t: f32) -> TimePickerTheme {
        let color = |x: Option<Color>, y: Option<Color>| lerp_option(x, y, t, Color::lerp);
        let dp = |x: Option<Dp>, y: Option<Dp>| {
            lerp_option(x, y, t, |x, y, t| Dp::lerp(x, y, t as f64))
        };
        TimePickerTheme {
            header_color: color(a.header_color, b.header_color),
            dial_background_color: color(a.dial_background_color, b.dial_background_color),
            dial_hand_color: color(a.dial_hand_color, b.dial_hand_color),
            dial_text_color: color(a.dial_text_color, b.dial_text_color),
            entry_mode_icon_color: color(a.entry_mode_icon_color, b.entry_mode_icon_color),
            hour_minute_color: color(a.hour_minute_color, b.hour_minute_color),
            day_period_color: color(a.day_period_color, b.day_period_color),
            dial_size: dp(a.dial_size, b.dial_size),
            hour_minute_height: dp(a.hour_minute_height, b.hour_minute_height),
            period_gap: dp(a.period_gap, b.period_gap),
            vertical_gap: dp(a.vertical_gap, b.vertical_gap),
            fragment_gap: dp(a.fragment_gap, b.fragment_gap),
        }
    }
}

fn lerp_option<T: Copy>(
    a: Option<T>,
    b: Option<T>,
    t: f32,
    lerp: impl Fn(T, T, f32) -> T,
) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        _ if t < 0.5 => a,
        _ => b,
    }
}

/// Default colors and metrics per [`DialStyle`].
pub struct TimePickerDefaults;

impl TimePickerDefaults {
    /// Material 2 dial diameter.
    pub const CLASSIC_DIAL_SIZE: Dp = Dp(256.0);
    /// Material 3 dial diameter.
    pub const MODERN_DIAL_SIZE: Dp = Dp(256.0);
    /// Minimum touch target of header controls.
    pub const MIN_TAP_SIZE: Dp = Dp(48.0);

    /// The fully resolved defaults of `style`.
    pub fn for_style(style: DialStyle) -> ResolvedTimePickerTheme {
        match style {
            DialStyle::Classic => ResolvedTimePickerTheme {
                header_color: Color::from_rgb_u8(0x21, 0x96, 0xF3),
                dial_background_color: Color::BLACK.with_alpha(0.12),
                dial_hand_color: Color::from_rgb_u8(0x21, 0x96, 0xF3),
                dial_text_color: Color::BLACK.with_alpha(0.87),
                entry_mode_icon_color: Color::BLACK.with_alpha(0.6),
                hour_minute_color: Color::TRANSPARENT,
                day_period_color: Color::TRANSPARENT,
                dial_size: Self::CLASSIC_DIAL_SIZE,
                hour_minute_height: Dp(56.0),
                period_gap: Dp(8.0),
                vertical_gap: Dp(8.0),
                fragment_gap: Dp(4.0),
                label_ratio: 0.8,
                inner_label_ratio: 0.5,
                min_tap_size: Self::MIN_TAP_SIZE,
            },
            DialStyle::Modern => ResolvedTimePickerTheme {
                header_color: Color::TRANSPARENT,
                dial_background_color: Color::from_rgb_u8(0xE6, 0xE0, 0xE9),
                dial_hand_color: Color::from_rgb_u8(0x67, 0x50, 0xA4),
                dial_text_color: Color::from_rgb_u8(0x1D, 0x1B, 0x20),
                entry_mode_icon_color: Color::from_rgb_u8(0x49, 0x45, 0x4F),
                hour_minute_color: Color::from_rgb_u8(0xEA, 0xDD, 0xFF),
                day_period_color: Color::from_rgb_u8(0xFF, 0xD8, 0xE4),
                dial_size: Self::MODERN_DIAL_SIZE,
                hour_minute_height: Dp(80.0),
                period_gap: Dp(12.0),
                vertical_gap: Dp(12.0),
                fragment_gap: Dp(6.0),
                label_ratio: 0.82,
                inner_label_ratio: 0.55,
                min_tap_size: Self::MIN_TAP_SIZE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_overrides() {
        let theme = TimePickerTheme::default()
            .dial_hand_color(Color::WHITE)
            .period_gap(Dp(20.0));
        let resolved = theme.resolve(DialStyle::Modern);
        let defaults = TimePickerDefaults::for_style(DialStyle::Modern);
        assert_eq!(resolved.dial_hand_color, Color::WHITE);
        assert_eq!(resolved.period_gap, Dp(20.0));
        assert_eq!(resolved.dial_background_color, defaults.dial_background_color);
        assert_eq!(resolved.label_ratio, defaults.label_ratio);
    }

    #[test]
    fn styles_differ_in_metrics() {
        let classic = TimePickerDefaults::for_style(DialStyle::Classic);
        let modern = TimePickerDefaults::for_style(DialStyle::Modern);
        assert_ne!(classic.hour_minute_height, modern.hour_minute_height);
        assert!(modern.label_ratio > modern.inner_label_ratio);
        assert_eq!(classic.min_tap_size, Dp(48.0));
    }

    #[test]
    fn lerp_blends_present_values() {
        let a = TimePickerTheme::default()
            .dial_size(Dp(200.0))
            .header_color(Color::BLACK);
        let b = TimePickerTheme::default()
            .dial_size(Dp(300.0))
            .header_color(Color::WHITE)
            .period_gap(Dp(10.0));
        let mid = TimePickerTheme::lerp(&a, &b, 0.5);
        assert_eq!(mid.dial_size, Some(Dp(250.0)));
        assert_eq!(mid.header_color, Some(Color::new(0.5, 0.5, 0.5, 1.0)));
        assert_eq!(mid.period_gap, Some(Dp(10.0)));

        let early = TimePickerTheme::lerp(&a, &b, 0.25);
        assert_eq!(early.period_gap, None);
        assert_eq!(early.vertical_gap, None);
    }

    #[test]
    fn header_metrics_use_pixels() {
        let resolved = TimePickerTheme::default()
            .period_gap(Dp(8.0))
            .vertical_gap(Dp(10.0))
            .fragment_gap(Dp(2.0))
            .resolve(DialStyle::Classic);
        let metrics = resolved.header_metrics();
        assert_eq!(metrics.period_gap, Dp(8.0).to_px());
        assert_eq!(metrics.vertical_gap, Dp(10.0).to_px());
        assert_eq!(metrics.fragment_gap, Dp(2.0).to_px());
    }
}
