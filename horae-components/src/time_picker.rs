//! Time picker dialog state for selecting a clock time.
//!
//! ## Usage
//!
//! Create a [`TimePickerDialog`] when the dialog opens, forward pointer
//! events, header taps and frame instants to it, and react to the returned
//! [`TimePickerEvent`]s. [`confirm`](TimePickerDialog::confirm) or
//! [`cancel`](TimePickerDialog::cancel) closes it.
//!
//! ```
//! use std::time::Instant;
//!
//! use horae_components::time_picker::{DialMode, TimePickerConfig, TimePickerDialog, TimeValue};
//!
//! let now = Instant::now();
//! let mut dialog = TimePickerDialog::new(TimeValue::from_hm(9, 30), TimePickerConfig::default());
//! dialog.select_mode(DialMode::Minute, now);
//! dialog.increment(now);
//! assert_eq!(dialog.confirm(), Ok(TimeValue::from_hm(9, 31)));
//! ```

pub mod dial;
pub mod format;
pub mod gesture;
pub mod header;
pub mod input;
mod time_value;

use std::time::Instant;

use derive_setters::Setters;
use horae_ui::{
    Announcement, CallbackWith, Orientation, PointerEvent, PxPosition, PxSize, TextDirection,
};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

pub use dial::{ActiveRing, DialGeometry, DialLabel, DialMode};
pub use format::{EnglishTimeFormatter, FormatError, TimeFormatter, TimeOfDayFormat};
pub use gesture::{DialController, DialEvent, DialEvents, DialProps};
pub use header::{HeaderFormat, HeaderFragment, HeaderFragmentId, HeaderLayout};
pub use input::{TimeInputError, TimeInputState};
pub use time_value::{
    DayPeriod, HOURS_PER_DAY, HOURS_PER_PERIOD, MINUTES_PER_HOUR, TimeError, TimeValue,
};

use crate::theme::{DialStyle, ResolvedTimePickerTheme, TimePickerTheme};
use header::{HeaderContent, layout_header};

/// Which body the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryMode {
    /// The clock dial.
    #[default]
    Dial,
    /// Hour and minute text fields.
    Input,
}

impl EntryMode {
    /// Returns the other entry mode.
    pub fn toggled(self) -> Self {
        match self {
            EntryMode::Dial => EntryMode::Input,
            EntryMode::Input => EntryMode::Dial,
        }
    }
}

/// Lifecycle of a [`TimePickerDialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// The dialog accepts input.
    Open,
    /// The user confirmed the time.
    Confirmed(TimeValue),
    /// The user dismissed the dialog.
    Cancelled,
}

/// Configuration options for [`TimePickerDialog`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct TimePickerConfig {
    /// Header format; also decides the clock kind.
    pub time_format: TimeOfDayFormat,
    /// Forces the 24-hour clock on or off. `None` follows `time_format`.
    ///
    /// The override drives the dial rings, text entry, AM/PM handling and
    /// the header alike; see [`TimePickerConfig::resolved_time_format`].
    #[setters(strip_option)]
    pub use_24_hour_dials: Option<bool>,
    /// Visual family used for default colors and metrics.
    pub dial_style: DialStyle,
    /// Whether taps on the minute dial round to five minutes.
    pub round_minutes_on_tap: bool,
    /// Reading direction of the surrounding locale.
    pub text_direction: TextDirection,
    /// Header flow.
    pub orientation: Orientation,
    /// Initial entry mode.
    pub entry_mode: EntryMode,
    /// Theme overrides.
    pub theme: TimePickerTheme,
    /// Optional override for the dialog title.
    #[setters(strip_option, into)]
    pub help_text: Option<String>,
    /// Called with the selected time when the dialog is confirmed.
    #[setters(skip)]
    pub on_confirm: Option<CallbackWith<TimeValue>>,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            time_format: TimeOfDayFormat::default(),
            use_24_hour_dials: None,
            dial_style: DialStyle::default(),
            round_minutes_on_tap: true,
            text_direction: TextDirection::default(),
            orientation: Orientation::default(),
            entry_mode: EntryMode::default(),
            theme: TimePickerTheme::default(),
            help_text: None,
            on_confirm: None,
        }
    }
}

impl TimePickerConfig {
    /// Sets the confirm handler.
    pub fn on_confirm<F>(mut self, on_confirm: F) -> Self
    where
        F: Fn(TimeValue) + Send + Sync + 'static,
    {
        self.on_confirm = Some(CallbackWith::new(on_confirm));
        self
    }

    /// Sets the confirm handler using a shared callback.
    pub fn on_confirm_shared(mut self, on_confirm: impl Into<CallbackWith<TimeValue>>) -> Self {
        self.on_confirm = Some(on_confirm.into());
        self
    }

    /// Whether hours use the two-ring 24-hour dial.
    pub fn uses_24_hour_dials(&self) -> bool {
        self.use_24_hour_dials
            .unwrap_or_else(|| self.time_format.uses_24_hour_clock())
    }

    /// The header format actually shown: `time_format` adjusted to the
    /// clock chosen by [`uses_24_hour_dials`](Self::uses_24_hour_dials).
    pub fn resolved_time_format(&self) -> TimeOfDayFormat {
        self.time_format.with_clock(self.uses_24_hour_dials())
    }
}

/// Something the dialog wants the host to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum TimePickerEvent {
    /// The selected time changed.
    TimeChanged(TimeValue),
    /// The dial switched between hours and minutes.
    ModeChanged(DialMode),
    /// The dialog switched between the dial and text entry.
    EntryModeChanged(EntryMode),
    /// Play the selection haptic.
    HapticFeedback,
    /// Read a message to assistive technology users.
    Announce(Announcement),
}

/// Events produced by one call into the dialog.
pub type TimePickerEvents = SmallVec<[TimePickerEvent; 4]>;

/// State of an open time picker dialog.
pub struct TimePickerDialog {
    config: TimePickerConfig,
    theme: ResolvedTimePickerTheme,
    mode: DialMode,
    selected: TimeValue,
    entry_mode: EntryMode,
    dial: DialController,
    input: TimeInputState,
    formatter: Box<dyn TimeFormatter>,
    phase: DialogPhase,
    initial_announced: bool,
}

impl std::fmt::Debug for TimePickerDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimePickerDialog")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("selected", &self.selected)
            .field("entry_mode", &self.entry_mode)
            .field("dial", &self.dial)
            .field("input", &self.input)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl TimePickerDialog {
    /// Opens a dialog showing `initial` with the English formatter.
    pub fn new(initial: TimeValue, config: TimePickerConfig) -> Self {
        Self::with_formatter(initial, config, EnglishTimeFormatter)
    }

    /// Opens a dialog using a custom formatter.
    pub fn with_formatter(
        initial: TimeValue,
        config: TimePickerConfig,
        formatter: impl TimeFormatter + 'static,
    ) -> Self {
        let theme = config.theme.resolve(config.dial_style);
        let use_24 = config.uses_24_hour_dials();
        let dial = DialController::new(
            DialProps::default()
                .selected_time(initial)
                .mode(DialMode::Hour)
                .use_24_hour_dials(use_24)
                .round_minutes_on_tap(config.round_minutes_on_tap),
        );
        debug!(
            time = %initial,
            format = config.resolved_time_format().pattern(),
            "time picker opened"
        );
        Self {
            entry_mode: config.entry_mode,
            input: TimeInputState::from_time(initial, use_24),
            config,
            theme,
            mode: DialMode::Hour,
            selected: initial,
            dial,
            formatter: Box::new(formatter),
            phase: DialogPhase::Open,
            initial_announced: false,
        }
    }

    /// The selected time.
    pub fn selected_time(&self) -> TimeValue {
        self.selected
    }

    /// The field the dial edits.
    pub fn mode(&self) -> DialMode {
        self.mode
    }

    /// The body currently shown.
    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// Where the dialog is in its lifecycle.
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    /// Whether the dialog still accepts input.
    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    /// The current configuration.
    pub fn config(&self) -> &TimePickerConfig {
        &self.config
    }

    /// The resolved theme.
    pub fn theme(&self) -> &ResolvedTimePickerTheme {
        &self.theme
    }

    /// The dial state, for painting the needle and the active ring.
    pub fn dial(&self) -> &DialController {
        &self.dial
    }

    /// The text entry state.
    pub fn input(&self) -> &TimeInputState {
        &self.input
    }

    /// The dialog title.
    pub fn help_text(&self) -> String {
        self.config
            .help_text
            .clone()
            .unwrap_or_else(|| self.formatter.help_text())
    }

    /// The labels of the dial for the current mode.
    pub fn dial_labels(&self, geometry: DialGeometry) -> Vec<DialLabel> {
        dial::dial_labels(
            self.mode,
            self.config.uses_24_hour_dials(),
            geometry,
            self.theme.label_ratio,
            self.theme.inner_label_ratio,
        )
    }

    /// The announcement of the initial time.
    ///
    /// Returns `Some` only on the first call.
    pub fn announce_initial_time(&mut self) -> Option<Announcement> {
        if self.initial_announced {
            return None;
        }
        self.initial_announced = true;
        let message = self
            .formatter
            .format_time(self.selected, self.config.resolved_time_format());
        Some(Announcement::polite(message, self.config.text_direction))
    }

    /// Switches the dial between hours and minutes.
    pub fn select_mode(&mut self, mode: DialMode, now: Instant) -> TimePickerEvents {
        self.assert_open();
        let mut events = TimePickerEvents::new();
        if self.mode == mode {
            return events;
        }
        debug!(from = ?self.mode, to = ?mode, "time picker mode changed");
        self.mode = mode;
        self.dial.update(self.dial_props(), now);
        self.dial.schedule_haptic(now);
        events.push(TimePickerEvent::ModeChanged(mode));
        events.push(self.announce(self.formatter.mode_announcement(mode)));
        events
    }

    /// Routes a pointer event over the dial.
    ///
    /// Ignored while the text entry is shown.
    pub fn handle_dial_pointer(
        &mut self,
        event: &PointerEvent,
        geometry: DialGeometry,
    ) -> TimePickerEvents {
        self.assert_open();
        if self.entry_mode != EntryMode::Dial {
            return TimePickerEvents::new();
        }
        let dial_events = self.dial.handle_pointer(event, geometry);
        self.absorb(dial_events, event.timestamp)
    }

    /// Selects a dial value directly, as when a label is activated.
    ///
    /// See [`DialController::select_value`] for the accepted ranges.
    pub fn select_dial_value(&mut self, value: u8, now: Instant) -> TimePickerEvents {
        self.assert_open();
        let dial_events = self.dial.select_value(value, now);
        self.absorb(dial_events, now)
    }

    /// Advances animations and timers.
    ///
    /// Does nothing once the dialog is closed.
    pub fn tick(&mut self, now: Instant) -> TimePickerEvents {
        if !self.is_open() {
            return TimePickerEvents::new();
        }
        let dial_events = self.dial.tick(now);
        self.absorb(dial_events, now)
    }

    /// Moves the selected time to `period`.
    ///
    /// Ignored when the header shows no day period.
    pub fn set_period(&mut self, period: DayPeriod, now: Instant) -> TimePickerEvents {
        self.assert_open();
        let mut events = TimePickerEvents::new();
        if !self.config.resolved_time_format().has_day_period() {
            return events;
        }
        let time = self.selected.with_period(period);
        if time == self.selected {
            return events;
        }
        self.set_selected(time, now);
        events.push(TimePickerEvent::TimeChanged(time));
        events.push(self.announce(self.formatter.period_label(period)));
        events
    }

    /// Steps the active field up by one.
    pub fn increment(&mut self, now: Instant) -> TimePickerEvents {
        let next = match self.mode {
            DialMode::Hour => self.selected.next_hour(self.config.uses_24_hour_dials()),
            DialMode::Minute => self.selected.next_minute(),
        };
        self.step_to(next, now)
    }

    /// Steps the active field down by one.
    pub fn decrement(&mut self, now: Instant) -> TimePickerEvents {
        let previous = match self.mode {
            DialMode::Hour => self.selected.previous_hour(self.config.uses_24_hour_dials()),
            DialMode::Minute => self.selected.previous_minute(),
        };
        self.step_to(previous, now)
    }

    fn step_to(&mut self, time: TimeValue, now: Instant) -> TimePickerEvents {
        self.assert_open();
        let value = match self.mode {
            DialMode::Hour if self.config.uses_24_hour_dials() => time.hour(),
            DialMode::Hour => time.hour_of_period(),
            DialMode::Minute => time.minute(),
        };
        let dial_events = self.dial.select_value(value, now);
        self.absorb(dial_events, now)
    }

    /// Switches between the dial and text entry.
    ///
    /// Leaving text entry applies the entered time when it is valid.
    pub fn toggle_entry_mode(&mut self, now: Instant) -> TimePickerEvents {
        self.assert_open();
        let mut events = TimePickerEvents::new();
        let use_24 = self.config.uses_24_hour_dials();
        match self.entry_mode {
            EntryMode::Dial => {
                self.input = TimeInputState::from_time(self.selected, use_24);
            }
            EntryMode::Input => match self.input.validate(use_24, self.selected.period()) {
                Ok(time) if time != self.selected => {
                    self.set_selected(time, now);
                    events.push(TimePickerEvent::TimeChanged(time));
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(%error, "discarding invalid text entry");
                }
            },
        }
        self.entry_mode = self.entry_mode.toggled();
        debug!(entry_mode = ?self.entry_mode, "time picker entry mode changed");
        events.push(TimePickerEvent::EntryModeChanged(self.entry_mode));
        events
    }

    /// Replaces the hour text field.
    pub fn set_hour_text(&mut self, text: impl Into<String>) {
        self.assert_open();
        self.input.set_hour_text(text);
    }

    /// Replaces the minute text field.
    pub fn set_minute_text(&mut self, text: impl Into<String>) {
        self.assert_open();
        self.input.set_minute_text(text);
    }

    /// The header arrangement for the selected time.
    pub fn header_format(&self) -> HeaderFormat {
        let format = self.config.resolved_time_format();
        let content = HeaderContent::new(self.selected, format, self.formatter.as_ref());
        HeaderFormat::build(
            format,
            self.config.text_direction,
            &content,
            &self.theme.header_metrics(),
        )
    }

    /// Lays out the header in a box of `size`.
    ///
    /// `measure` returns the size of a fragment's content.
    pub fn header_layout<F>(&self, size: PxSize, measure: F) -> HeaderLayout
    where
        F: Fn(&HeaderFragment) -> PxSize,
    {
        layout_header(&self.header_format(), size, self.config.orientation, measure)
    }

    /// Routes a tap on the header.
    ///
    /// Hour and minute fragments switch the dial mode; the period fragment
    /// toggles AM/PM.
    pub fn handle_header_tap(
        &mut self,
        point: PxPosition,
        layout: &HeaderLayout,
        now: Instant,
    ) -> TimePickerEvents {
        self.assert_open();
        let min = self.theme.min_tap_size.to_px();
        match layout.fragment_at(point, PxSize::new(min, min)) {
            Some(HeaderFragmentId::Period) => {
                let period = self.selected.period().toggled();
                self.set_period(period, now)
            }
            Some(fragment) => match fragment.mode() {
                Some(mode) => self.select_mode(mode, now),
                None => TimePickerEvents::new(),
            },
            None => TimePickerEvents::new(),
        }
    }

    /// Applies a new configuration.
    ///
    /// Switching the clock kind refills the text fields for the new clock.
    pub fn update_config(&mut self, config: TimePickerConfig, now: Instant) {
        self.assert_open();
        let use_24 = config.uses_24_hour_dials();
        if use_24 != self.config.uses_24_hour_dials() {
            self.input = TimeInputState::from_time(self.selected, use_24);
        }
        self.theme = config.theme.resolve(config.dial_style);
        self.config = config;
        self.dial.update(self.dial_props(), now);
    }

    /// Confirms the dialog and returns the selected time.
    ///
    /// In text entry mode the fields are validated first; on error the
    /// dialog stays open.
    pub fn confirm(&mut self) -> Result<TimeValue, TimeInputError> {
        self.assert_open();
        if self.entry_mode == EntryMode::Input {
            let use_24 = self.config.uses_24_hour_dials();
            match self.input.validate(use_24, self.selected.period()) {
                Ok(time) => self.selected = time,
                Err(error) => {
                    warn!(%error, "time picker confirm rejected");
                    return Err(error);
                }
            }
        }
        info!(time = %self.selected, "time picker confirmed");
        self.phase = DialogPhase::Confirmed(self.selected);
        self.dial.dispose();
        if let Some(on_confirm) = &self.config.on_confirm {
            on_confirm.call(self.selected);
        }
        Ok(self.selected)
    }

    /// Dismisses the dialog without a result.
    pub fn cancel(&mut self) {
        self.assert_open();
        info!("time picker cancelled");
        self.phase = DialogPhase::Cancelled;
        self.dial.dispose();
    }

    /// Releases the dial's timers. A still open dialog counts as cancelled.
    pub fn dispose(&mut self) {
        if self.is_open() {
            self.phase = DialogPhase::Cancelled;
        }
        self.dial.dispose();
    }

    fn assert_open(&self) {
        assert!(
            self.is_open(),
            "time picker dialog used after it was closed ({:?})",
            self.phase
        );
    }

    fn dial_props(&self) -> DialProps {
        DialProps::default()
            .selected_time(self.selected)
            .mode(self.mode)
            .use_24_hour_dials(self.config.uses_24_hour_dials())
            .round_minutes_on_tap(self.config.round_minutes_on_tap)
    }

    fn set_selected(&mut self, time: TimeValue, now: Instant) {
        self.selected = time;
        self.dial.update(self.dial_props(), now);
    }

    fn announce(&self, message: String) -> TimePickerEvent {
        TimePickerEvent::Announce(Announcement::polite(message, self.config.text_direction))
    }

    fn absorb(&mut self, dial_events: DialEvents, now: Instant) -> TimePickerEvents {
        let mut events = TimePickerEvents::new();
        let mut hour_selected = false;
        for event in dial_events {
            match event {
                DialEvent::TimeChanged(time) => {
                    self.selected = time;
                    events.push(TimePickerEvent::TimeChanged(time));
                }
                DialEvent::HourSelected => hour_selected = true,
                DialEvent::HapticFeedback => events.push(TimePickerEvent::HapticFeedback),
                DialEvent::ValueAnnounced { value, .. } => {
                    events.push(self.announce(self.formatter.format_decimal(value)));
                }
            }
        }
        if hour_selected && self.mode == DialMode::Hour {
            events.extend(self.select_mode(DialMode::Minute, now));
        }
        events
    }
}
