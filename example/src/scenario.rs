use std::{
    f32::consts::FRAC_PI_2,
    time::{Duration, Instant},
};

use horae_components::time_picker::{
    DialGeometry, DialMode, EntryMode, TimeOfDayFormat, TimePickerConfig, TimePickerDialog,
    TimePickerEvent, TimePickerEvents, TimeValue, dial::position_for_angle,
};
use horae_ui::{PointerEvent, PointerEventContent, PxPosition, PxSize};
use tracing::{info, warn};

const FRAME: Duration = Duration::from_millis(16);

/// Simulated clock for the host frame loop.
struct Clock {
    now: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}

fn log_events(step: &str, events: &TimePickerEvents) {
    for event in events {
        match event {
            TimePickerEvent::Announce(announcement) => {
                info!(step, message = %announcement.message, "announce")
            }
            other => info!(step, event = ?other, "event"),
        }
    }
}

/// A point on the dial face at a clock-face angle (0 is 12 o'clock,
/// growing clockwise).
fn on_dial(geometry: DialGeometry, clock_angle: f32, ratio: f32) -> PxPosition {
    position_for_angle(
        FRAC_PI_2 - clock_angle,
        geometry.radius * ratio,
        geometry.center,
    )
}

fn pointer(now: Instant, position: PxPosition, content: PointerEventContent) -> PointerEvent {
    PointerEvent::new(now, position, content)
}

fn run_frames(dialog: &mut TimePickerDialog, clock: &mut Clock, frames: u32) {
    for _ in 0..frames {
        let now = clock.advance(FRAME);
        let events = dialog.tick(now);
        log_events("frame", &events);
    }
}

/// Taps seven o'clock, then drags the minute hand to a quarter to.
pub fn pick_alarm_time() {
    let mut clock = Clock::new();
    let mut dialog = TimePickerDialog::new(
        TimeValue::from_hm(6, 30),
        TimePickerConfig::default().time_format(TimeOfDayFormat::HColonMmSpaceA),
    );
    let geometry = DialGeometry::from_size(PxSize::new(256.0, 256.0));
    if let Some(announcement) = dialog.announce_initial_time() {
        info!(message = %announcement.message, "initial announcement");
    }

    let seven = on_dial(geometry, 7.0 / 12.0 * std::f32::consts::TAU, 0.8);
    let now = clock.advance(FRAME);
    let mut events = dialog.handle_dial_pointer(&pointer(now, seven, PointerEventContent::Pressed), geometry);
    let now = clock.advance(FRAME);
    events.extend(dialog.handle_dial_pointer(
        &pointer(now, seven, PointerEventContent::Released),
        geometry,
    ));
    log_events("tap hour", &events);
    run_frames(&mut dialog, &mut clock, 15);

    let top = on_dial(geometry, 0.0, 0.8);
    let nine = on_dial(geometry, 3.0 * FRAC_PI_2, 0.8);
    let now = clock.advance(FRAME);
    let mut events = dialog.handle_dial_pointer(&pointer(now, top, PointerEventContent::Pressed), geometry);
    for step in 1..=6 {
        let angle = 3.0 * FRAC_PI_2 * step as f32 / 6.0;
        let now = clock.advance(FRAME);
        events.extend(dialog.handle_dial_pointer(
            &pointer(now, on_dial(geometry, angle, 0.8), PointerEventContent::Moved),
            geometry,
        ));
    }
    let now = clock.advance(FRAME);
    events.extend(dialog.handle_dial_pointer(&pointer(now, nine, PointerEventContent::Released), geometry));
    log_events("drag minutes", &events);
    run_frames(&mut dialog, &mut clock, 15);

    debug_assert_eq!(dialog.mode(), DialMode::Minute);
    match dialog.confirm() {
        Ok(time) => info!(%time, "alarm set"),
        Err(error) => warn!(%error, "alarm not set"),
    }
}

/// Switches to text entry, types an invalid hour, fixes it and confirms.
pub fn type_meeting_time() {
    let mut clock = Clock::new();
    let mut dialog = TimePickerDialog::new(
        TimeValue::from_hm(9, 0),
        TimePickerConfig::default()
            .time_format(TimeOfDayFormat::HhColonMm)
            .entry_mode(EntryMode::Dial),
    );
    let events = dialog.toggle_entry_mode(clock.advance(FRAME));
    log_events("toggle entry", &events);

    dialog.set_hour_text("25");
    dialog.set_minute_text("30");
    if let Err(error) = dialog.confirm() {
        warn!(%error, "rejected entry");
    }

    dialog.set_hour_text("14");
    match dialog.confirm() {
        Ok(time) => info!(%time, "meeting set"),
        Err(error) => warn!(%error, "meeting not set"),
    }
}
