//! Gesture handling and needle animation for the time picker dial.
//!
//! [`DialController`] is a plain state object. The host forwards pointer
//! events and frame instants to it and reacts to the returned
//! [`DialEvent`]s.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use horae_ui::{DebounceTimer, PointerEvent, PointerEventContent, PxPosition};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::{
    HOURS_PER_DAY, HOURS_PER_PERIOD, MINUTES_PER_HOUR, TimeValue,
    dial::{
        ActiveRing, DialGeometry, DialMode, angle_for_position, angle_for_time, normalize_angle,
        ring_for_distance, ring_for_hour, shortest_path_begin, time_for_angle,
    },
};
use crate::animation::AngleTween;

/// Duration of the needle animation after a drag, a tap or an external
/// value change.
pub const DIAL_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Delay between the last value change and the haptic commit feedback.
pub const HAPTIC_COMMIT_DELAY: Duration = Duration::from_millis(100);

/// Pointer travel (in pixels) after which a press turns into a drag.
pub const TOUCH_SLOP: f32 = 18.0;

/// Inputs the host pushes into a [`DialController`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct DialProps {
    /// The currently selected time.
    pub selected_time: TimeValue,
    /// Which field the dial edits.
    pub mode: DialMode,
    /// Whether hours use the two-ring 24-hour dial.
    pub use_24_hour_dials: bool,
    /// Whether taps round minutes to five-minute steps.
    pub round_minutes_on_tap: bool,
}

impl Default for DialProps {
    fn default() -> Self {
        Self {
            selected_time: TimeValue::MIDNIGHT,
            mode: DialMode::Hour,
            use_24_hour_dials: false,
            round_minutes_on_tap: true,
        }
    }
}

/// Something the dial wants the host to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialEvent {
    /// The selected time changed.
    TimeChanged(TimeValue),
    /// An hour was committed by a finished drag or a tap.
    HourSelected,
    /// The haptic commit delay elapsed after the last change.
    HapticFeedback,
    /// A value was picked by a tap or a discrete selection and should be
    /// announced.
    ValueAnnounced {
        /// The mode the value belongs to.
        mode: DialMode,
        /// The hour (24-hour form on 24-hour dials) or minute.
        value: u8,
    },
}

/// Events produced by one call into the dial.
pub type DialEvents = SmallVec<[DialEvent; 4]>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Pointer is down but has not moved past the touch slop yet.
    Pressed { origin: PxPosition },
    Dragging,
}

/// State of the dial: the needle angle, the gesture in progress and the
/// pending haptic feedback.
#[derive(Debug)]
pub struct DialController {
    props: DialProps,
    theta: f32,
    tween: Option<AngleTween>,
    drag: DragState,
    active_ring: ActiveRing,
    haptics: DebounceTimer,
    disposed: bool,
}

impl DialController {
    /// Creates a dial pointing at `props.selected_time`.
    pub fn new(props: DialProps) -> Self {
        Self {
            props,
            theta: angle_for_time(props.selected_time, props.mode),
            tween: None,
            drag: DragState::Idle,
            active_ring: Self::ring_for_props(&props),
            haptics: DebounceTimer::new(HAPTIC_COMMIT_DELAY),
            disposed: false,
        }
    }

    fn ring_for_props(props: &DialProps) -> ActiveRing {
        match props.mode {
            DialMode::Hour => {
                ring_for_hour(props.selected_time.hour(), props.use_24_hour_dials)
            }
            DialMode::Minute => ActiveRing::Outer,
        }
    }

    /// The current props.
    pub fn props(&self) -> &DialProps {
        &self.props
    }

    /// The last time reported through [`DialEvent::TimeChanged`] or pushed
    /// by the host.
    pub fn selected_time(&self) -> TimeValue {
        self.props.selected_time
    }

    /// The needle angle, normalized to `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        normalize_angle(self.theta)
    }

    /// The ring currently being edited.
    pub fn active_ring(&self) -> ActiveRing {
        self.active_ring
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Whether the needle is animating.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether a haptic commit is pending.
    pub fn has_pending_haptic(&self) -> bool {
        self.haptics.is_pending()
    }

    /// Applies new props from the host.
    ///
    /// Outside a drag, any change re-derives the active ring, and a new
    /// selected time or mode also animates the needle to it.
    pub fn update(&mut self, props: DialProps, now: Instant) {
        self.assert_alive();
        let old = std::mem::replace(&mut self.props, props);
        if old == props || self.is_dragging() {
            return;
        }
        self.active_ring = Self::ring_for_props(&props);
        if old.mode != props.mode || old.selected_time != props.selected_time {
            self.animate_to(angle_for_time(props.selected_time, props.mode), now);
        }
    }

    /// Restarts the haptic commit delay.
    pub fn schedule_haptic(&mut self, now: Instant) {
        self.assert_alive();
        self.haptics.restart(now);
    }

    /// Routes a raw pointer event.
    ///
    /// A press inside the dial followed by a release is a tap; moving past
    /// [`TOUCH_SLOP`] first turns the gesture into a drag.
    pub fn handle_pointer(&mut self, event: &PointerEvent, geometry: DialGeometry) -> DialEvents {
        self.assert_alive();
        let now = event.timestamp;
        match (event.content, self.drag) {
            (PointerEventContent::Pressed, DragState::Idle) => {
                if event.position.distance_to(geometry.center) <= geometry.radius {
                    self.drag = DragState::Pressed {
                        origin: event.position,
                    };
                }
                DialEvents::new()
            }
            (PointerEventContent::Moved, DragState::Pressed { origin }) => {
                if event.position.distance_to(origin) < TOUCH_SLOP {
                    return DialEvents::new();
                }
                let mut events = self.pan_start(origin, geometry, now);
                events.extend(self.pan_update(event.position, geometry, now));
                events
            }
            (PointerEventContent::Moved, DragState::Dragging) => {
                self.pan_update(event.position, geometry, now)
            }
            (PointerEventContent::Released, DragState::Pressed { .. }) => {
                self.drag = DragState::Idle;
                self.tap(event.position, geometry, now)
            }
            (PointerEventContent::Released, DragState::Dragging) => self.pan_end(now),
            (PointerEventContent::Cancelled, DragState::Dragging) => self.finish_drag(false, now),
            (PointerEventContent::Cancelled, DragState::Pressed { .. }) => {
                self.drag = DragState::Idle;
                DialEvents::new()
            }
            _ => DialEvents::new(),
        }
    }

    /// Starts a drag at `position`.
    pub fn pan_start(
        &mut self,
        position: PxPosition,
        geometry: DialGeometry,
        now: Instant,
    ) -> DialEvents {
        self.assert_alive();
        debug!(mode = ?self.props.mode, "dial drag started");
        self.drag = DragState::Dragging;
        self.tween = None;
        self.update_theta_for_pan(position, geometry, false);
        let mut events = DialEvents::new();
        self.notify_if_needed(false, now, &mut events);
        events
    }

    /// Moves an active drag to `position`.
    pub fn pan_update(
        &mut self,
        position: PxPosition,
        geometry: DialGeometry,
        now: Instant,
    ) -> DialEvents {
        self.assert_alive();
        let mut events = DialEvents::new();
        if !self.is_dragging() {
            return events;
        }
        self.update_theta_for_pan(position, geometry, false);
        self.notify_if_needed(false, now, &mut events);
        events
    }

    /// Ends an active drag and animates to the committed value.
    pub fn pan_end(&mut self, now: Instant) -> DialEvents {
        self.assert_alive();
        self.finish_drag(true, now)
    }

    /// A cancelled drag keeps the value reached so far but does not count
    /// as an hour pick.
    fn finish_drag(&mut self, completed: bool, now: Instant) -> DialEvents {
        let mut events = DialEvents::new();
        if !self.is_dragging() {
            return events;
        }
        debug!(time = %self.props.selected_time, completed, "dial drag ended");
        self.drag = DragState::Idle;
        self.animate_to(
            angle_for_time(self.props.selected_time, self.props.mode),
            now,
        );
        if completed && self.props.mode == DialMode::Hour {
            events.push(DialEvent::HourSelected);
        }
        events
    }

    /// Handles a tap at `position`.
    pub fn tap(&mut self, position: PxPosition, geometry: DialGeometry, now: Instant) -> DialEvents {
        self.assert_alive();
        let round = self.props.round_minutes_on_tap;
        self.tween = None;
        self.update_theta_for_pan(position, geometry, round);
        let mut events = DialEvents::new();
        let time = self.notify_if_needed(round, now, &mut events);
        let mode = self.props.mode;
        let value = match mode {
            DialMode::Hour if self.props.use_24_hour_dials => time.hour(),
            DialMode::Hour => time.hour_of_period(),
            DialMode::Minute => time.minute(),
        };
        events.push(DialEvent::ValueAnnounced { mode, value });
        if mode == DialMode::Hour {
            events.push(DialEvent::HourSelected);
        }
        self.animate_to(angle_for_time(time, mode), now);
        events
    }

    /// Selects a value directly, as from a dial label or an assistive
    /// technology action.
    ///
    /// Hours are 0-23 on 24-hour dials and 1-12 (keeping the period)
    /// otherwise; minutes are 0-59. The needle jumps without animating.
    ///
    /// # Panics
    ///
    /// Panics when `value` is out of range for the current mode.
    pub fn select_value(&mut self, value: u8, now: Instant) -> DialEvents {
        self.assert_alive();
        let selected = self.props.selected_time;
        let time = match self.props.mode {
            DialMode::Hour if self.props.use_24_hour_dials => {
                assert!(value < HOURS_PER_DAY, "hour {value} out of range");
                self.active_ring = ring_for_hour(value, true);
                selected.replacing(Some(value), None)
            }
            DialMode::Hour => {
                assert!(
                    (1..=HOURS_PER_PERIOD).contains(&value),
                    "hour of period {value} out of range"
                );
                self.active_ring = ActiveRing::Outer;
                selected.replacing(
                    Some(value % HOURS_PER_PERIOD + selected.period_offset()),
                    None,
                )
            }
            DialMode::Minute => {
                assert!(value < MINUTES_PER_HOUR, "minute {value} out of range");
                selected.replacing(None, Some(value))
            }
        };
        self.tween = None;
        self.theta = angle_for_time(time, self.props.mode);
        let mut events = DialEvents::new();
        events.push(DialEvent::ValueAnnounced {
            mode: self.props.mode,
            value,
        });
        self.notify_if_needed(false, now, &mut events);
        events
    }

    /// Advances the needle animation and the haptic timer.
    pub fn tick(&mut self, now: Instant) -> DialEvents {
        let mut events = DialEvents::new();
        if self.disposed {
            return events;
        }
        if let Some(tween) = self.tween {
            if tween.is_finished(now) {
                self.theta = normalize_angle(tween.end());
                self.tween = None;
            } else {
                self.theta = tween.sample(now);
            }
        }
        if self.haptics.poll(now) {
            trace!("haptic commit fired");
            events.push(DialEvent::HapticFeedback);
        }
        events
    }

    /// Stops the animation and cancels the pending haptic feedback.
    ///
    /// Any further interaction panics.
    pub fn dispose(&mut self) {
        self.haptics.cancel();
        self.tween = None;
        self.drag = DragState::Idle;
        self.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn assert_alive(&self) {
        assert!(!self.disposed, "dial controller used after dispose");
    }

    fn update_theta_for_pan(&mut self, position: PxPosition, geometry: DialGeometry, round: bool) {
        if self.props.use_24_hour_dials && self.props.mode == DialMode::Hour {
            let distance = position.distance_to(geometry.center);
            self.active_ring = ring_for_distance(distance, geometry.radius);
        }
        let mut angle = angle_for_position(position, geometry);
        if round {
            angle = angle_for_time(self.time_for_theta(angle, true), self.props.mode);
        }
        self.theta = angle;
    }

    fn time_for_theta(&self, theta: f32, round: bool) -> TimeValue {
        time_for_angle(
            theta,
            self.props.mode,
            self.props.selected_time,
            self.props.use_24_hour_dials,
            self.active_ring,
            round,
        )
    }

    fn notify_if_needed(&mut self, round: bool, now: Instant, events: &mut DialEvents) -> TimeValue {
        let current = self.time_for_theta(self.theta, round);
        if current != self.props.selected_time {
            trace!(from = %self.props.selected_time, to = %current, "dial value changed");
            self.props.selected_time = current;
            self.haptics.restart(now);
            events.push(DialEvent::TimeChanged(current));
        }
        current
    }

    fn animate_to(&mut self, target: f32, now: Instant) {
        let begin = shortest_path_begin(self.theta, target);
        self.tween = Some(AngleTween::new(
            begin,
            target,
            now,
            DIAL_ANIMATION_DURATION,
        ));
    }
}
