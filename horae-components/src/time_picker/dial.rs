//! Mapping between clock values and dial angles.
//!
//! Angles follow the math convention rotated so that 12 o'clock (and `:00`)
//! sits at `π/2`: moving the hand clockwise decreases the angle. Every angle
//! returned from this module is normalized to `[0, 2π)`.

use std::f32::consts::{FRAC_PI_2, TAU};

use horae_ui::{PxPosition, PxSize};

use super::{HOURS_PER_PERIOD, MINUTES_PER_HOUR, TimeValue};

/// Which clock field the dial currently edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialMode {
    /// The dial shows hours.
    #[default]
    Hour,
    /// The dial shows minutes.
    Minute,
}

/// The concentric ring edited on a 24-hour dial.
///
/// The inner ring carries 1-12, the outer ring 13-23 and 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveRing {
    /// The outer ring.
    #[default]
    Outer,
    /// The inner ring.
    Inner,
}

/// Center and radius of a dial in the dial's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    /// Center of the dial.
    pub center: PxPosition,
    /// Radius of the dial face.
    pub radius: f32,
}

impl DialGeometry {
    /// Creates a dial geometry.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not a positive finite number.
    pub fn new(center: PxPosition, radius: f32) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "dial radius must be positive and finite, got {radius}"
        );
        Self { center, radius }
    }

    /// The largest dial that fits a box of the given size.
    pub fn from_size(size: PxSize) -> Self {
        Self::new(size.center(), size.width.min(size.height) / 2.0)
    }
}

/// One number painted on the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialLabel {
    /// The value selected when the label is activated.
    ///
    /// Hours are in 24-hour form on 24-hour dials and 1-12 otherwise.
    pub value: u8,
    /// The ring the label sits on.
    pub ring: ActiveRing,
    /// Center of the label.
    pub position: PxPosition,
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// The dial angle of `time` for the given mode.
pub fn angle_for_time(time: TimeValue, mode: DialMode) -> f32 {
    let fraction = match mode {
        DialMode::Hour => (time.hour() % HOURS_PER_PERIOD) as f32 / HOURS_PER_PERIOD as f32,
        DialMode::Minute => time.minute() as f32 / MINUTES_PER_HOUR as f32,
    };
    normalize_angle(FRAC_PI_2 - fraction * TAU)
}

/// The time selected by pointing the hand at `angle`.
///
/// The field not edited by `mode` is taken from `selected`, as is the AM/PM
/// period on 12-hour dials. `ring` only matters for hours on 24-hour dials.
pub fn time_for_angle(
    angle: f32,
    mode: DialMode,
    selected: TimeValue,
    use_24_hour_dials: bool,
    ring: ActiveRing,
    round_to_five_minutes: bool,
) -> TimeValue {
    let fraction = (0.25 - normalize_angle(angle) / TAU).rem_euclid(1.0);
    match mode {
        DialMode::Hour => {
            let mut hour = (fraction * HOURS_PER_PERIOD as f32).round() as u8 % HOURS_PER_PERIOD;
            if use_24_hour_dials {
                match ring {
                    ActiveRing::Outer if hour != 0 => hour += HOURS_PER_PERIOD,
                    ActiveRing::Inner if hour == 0 => hour = HOURS_PER_PERIOD,
                    _ => {}
                }
            } else {
                hour += selected.period_offset();
            }
            selected.replacing(Some(hour), None)
        }
        DialMode::Minute => {
            let mut minute = (fraction * MINUTES_PER_HOUR as f32).round() as u8 % MINUTES_PER_HOUR;
            if round_to_five_minutes {
                minute = ((minute as f32 / 5.0).round() as u8 * 5) % MINUTES_PER_HOUR;
            }
            selected.replacing(None, Some(minute))
        }
    }
}

/// The ring that displays `hour`.
pub fn ring_for_hour(hour: u8, use_24_hour_dials: bool) -> ActiveRing {
    if use_24_hour_dials && (1..=HOURS_PER_PERIOD).contains(&hour) {
        ActiveRing::Inner
    } else {
        ActiveRing::Outer
    }
}

/// The ring under a pointer `distance` away from the center of a dial with
/// the given radius.
pub fn ring_for_distance(distance: f32, radius: f32) -> ActiveRing {
    if distance * 1.5 < radius {
        ActiveRing::Inner
    } else {
        ActiveRing::Outer
    }
}

/// The dial angle pointing at `position`.
pub fn angle_for_position(position: PxPosition, geometry: DialGeometry) -> f32 {
    let offset = position - geometry.center;
    normalize_angle(offset.x.atan2(offset.y) - FRAC_PI_2)
}

/// The point at `radius` from `center` along `angle`.
pub fn position_for_angle(angle: f32, radius: f32, center: PxPosition) -> PxPosition {
    center.offset(radius * angle.cos(), -radius * angle.sin())
}

/// The start angle for animating towards `target` along the shorter arc.
///
/// Picks whichever of `current`, `current + 2π` and `current - 2π` is
/// numerically closest to `target`.
pub fn shortest_path_begin(current: f32, target: f32) -> f32 {
    let mut result = current;
    let lower = current - TAU;
    let upper = current + TAU;
    if (target - lower).abs() < (target - result).abs() {
        result = lower;
    }
    if (target - upper).abs() < (target - result).abs() {
        result = upper;
    }
    result
}

/// Lays out the labels of a dial.
///
/// `label_ratio` and `inner_label_ratio` are fractions of the dial radius.
pub fn dial_labels(
    mode: DialMode,
    use_24_hour_dials: bool,
    geometry: DialGeometry,
    label_ratio: f32,
    inner_label_ratio: f32,
) -> Vec<DialLabel> {
    let outer_radius = geometry.radius * label_ratio;
    let inner_radius = geometry.radius * inner_label_ratio;
    let mut labels = Vec::with_capacity(24);

    for index in 0..HOURS_PER_PERIOD {
        match mode {
            DialMode::Hour => {
                let angle = angle_for_time(TimeValue::from_hm(index, 0), DialMode::Hour);
                let outer_value = match (use_24_hour_dials, index) {
                    (true, 0) => 0,
                    (true, hour) => hour + HOURS_PER_PERIOD,
                    (false, 0) => HOURS_PER_PERIOD,
                    (false, hour) => hour,
                };
                labels.push(DialLabel {
                    value: outer_value,
                    ring: ActiveRing::Outer,
                    position: position_for_angle(angle, outer_radius, geometry.center),
                });
                if use_24_hour_dials {
                    labels.push(DialLabel {
                        value: if index == 0 { HOURS_PER_PERIOD } else { index },
                        ring: ActiveRing::Inner,
                        position: position_for_angle(angle, inner_radius, geometry.center),
                    });
                }
            }
            DialMode::Minute => {
                let minute = index * 5;
                let angle = angle_for_time(TimeValue::from_hm(0, minute), DialMode::Minute);
                labels.push(DialLabel {
                    value: minute,
                    ring: ActiveRing::Outer,
                    position: position_for_angle(angle, outer_radius, geometry.center),
                });
            }
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn twelve_and_zero_minutes_point_up() {
        assert!(approx_eq(
            angle_for_time(TimeValue::from_hm(12, 0), DialMode::Hour),
            FRAC_PI_2
        ));
        assert!(approx_eq(
            angle_for_time(TimeValue::from_hm(5, 0), DialMode::Minute),
            FRAC_PI_2
        ));
        assert!(approx_eq(
            angle_for_time(TimeValue::from_hm(3, 0), DialMode::Hour),
            0.0
        ));
        assert!(approx_eq(
            angle_for_time(TimeValue::from_hm(0, 45), DialMode::Minute),
            PI
        ));
    }

    #[test]
    fn hours_round_trip_on_24_hour_dials() {
        for hour in 0..24 {
            let time = TimeValue::from_hm(hour, 17);
            let angle = angle_for_time(time, DialMode::Hour);
            let ring = ring_for_hour(hour, true);
            let back = time_for_angle(
                angle,
                DialMode::Hour,
                TimeValue::MIDNIGHT.replacing(None, Some(17)),
                true,
                ring,
                false,
            );
            assert_eq!(back, time, "hour {hour}");
        }
    }

    #[test]
    fn hours_round_trip_on_12_hour_dials() {
        for hour in 0..24 {
            let time = TimeValue::from_hm(hour, 0);
            let angle = angle_for_time(time, DialMode::Hour);
            // The selected time supplies the period.
            let selected = TimeValue::from_hm(if hour < 12 { 6 } else { 18 }, 0);
            let back = time_for_angle(
                angle,
                DialMode::Hour,
                selected,
                false,
                ring_for_hour(hour, false),
                false,
            );
            assert_eq!(back.hour(), hour);
        }
    }

    #[test]
    fn minutes_round_trip() {
        for minute in 0..60 {
            let time = TimeValue::from_hm(4, minute);
            let angle = angle_for_time(time, DialMode::Minute);
            let back = time_for_angle(angle, DialMode::Minute, time, false, ActiveRing::Outer, false);
            assert_eq!(back, time);
        }
    }

    #[test]
    fn rounded_minutes_are_multiples_of_five() {
        for minute in 0..60 {
            let time = TimeValue::from_hm(4, minute);
            let angle = angle_for_time(time, DialMode::Minute);
            let back = time_for_angle(angle, DialMode::Minute, time, false, ActiveRing::Outer, true);
            assert_eq!(back.minute() % 5, 0, "minute {minute}");
            assert_eq!(back.hour(), 4);
        }
        let almost_hour = angle_for_time(TimeValue::from_hm(4, 58), DialMode::Minute);
        let back = time_for_angle(
            almost_hour,
            DialMode::Minute,
            TimeValue::from_hm(4, 58),
            false,
            ActiveRing::Outer,
            true,
        );
        assert_eq!(back, TimeValue::from_hm(4, 0));
    }

    #[test]
    fn ring_selection_by_hour() {
        assert_eq!(ring_for_hour(0, true), ActiveRing::Outer);
        assert_eq!(ring_for_hour(6, true), ActiveRing::Inner);
        assert_eq!(ring_for_hour(12, true), ActiveRing::Inner);
        assert_eq!(ring_for_hour(13, true), ActiveRing::Outer);
        assert_eq!(ring_for_hour(6, false), ActiveRing::Outer);
    }

    #[test]
    fn ring_selection_by_distance() {
        assert_eq!(ring_for_distance(60.0, 100.0), ActiveRing::Inner);
        assert_eq!(ring_for_distance(70.0, 100.0), ActiveRing::Outer);
    }

    #[test]
    fn position_and_angle_are_inverse() {
        let geometry = DialGeometry::new(PxPosition::new(100.0, 100.0), 100.0);
        let top = PxPosition::new(100.0, 10.0);
        assert!(approx_eq(angle_for_position(top, geometry), FRAC_PI_2));
        let right = PxPosition::new(190.0, 100.0);
        assert!(approx_eq(angle_for_position(right, geometry), 0.0));
        let left = PxPosition::new(10.0, 100.0);
        assert!(approx_eq(angle_for_position(left, geometry), PI));

        for step in 0..16 {
            let angle = step as f32 * TAU / 16.0;
            let pos = position_for_angle(angle, 50.0, geometry.center);
            let back = angle_for_position(pos, geometry);
            let diff = (back - angle).abs();
            assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "step {step}");
        }
    }

    #[test]
    fn shortest_path_crosses_zero() {
        let begin = shortest_path_begin(0.1, 6.2);
        assert!((begin - 6.2).abs() <= PI);
        assert!(approx_eq(begin, 0.1 + TAU));

        let begin = shortest_path_begin(6.2, 0.1);
        assert!((begin - 0.1).abs() <= PI);

        assert_eq!(shortest_path_begin(1.0, 2.0), 1.0);
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert!(approx_eq(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2));
        assert!(approx_eq(normalize_angle(TAU + 1.0), 1.0));
        let tiny = normalize_angle(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn label_layout() {
        let geometry = DialGeometry::from_size(PxSize::new(200.0, 200.0));
        let hours = dial_labels(DialMode::Hour, false, geometry, 0.8, 0.5);
        assert_eq!(hours.len(), 12);
        assert_eq!(hours[0].value, 12);
        assert!(approx_eq(hours[0].position.x, 100.0));
        assert!(approx_eq(hours[0].position.y, 20.0));

        let hours_24 = dial_labels(DialMode::Hour, true, geometry, 0.8, 0.5);
        assert_eq!(hours_24.len(), 24);
        assert_eq!(hours_24[0].value, 0);
        assert_eq!(hours_24[1].value, 12);
        assert_eq!(hours_24[1].ring, ActiveRing::Inner);
        assert!(approx_eq(hours_24[1].position.y, 50.0));
        assert_eq!(hours_24[2].value, 13);

        let minutes = dial_labels(DialMode::Minute, true, geometry, 0.8, 0.5);
        assert_eq!(minutes.len(), 12);
        assert_eq!(minutes[9].value, 45);
        assert!(approx_eq(minutes[9].position.x, 20.0));
    }

    #[test]
    #[should_panic]
    fn zero_radius_is_rejected() {
        let _ = DialGeometry::new(PxPosition::ZERO, 0.0);
    }
}
