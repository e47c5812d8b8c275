//! Scripted walkthrough of the horae time picker.
//!
//! There is no window here: the demo plays the part of the host UI layer,
//! feeding synthetic pointer events and frame instants into a dialog and
//! logging what comes back.

mod header_preview;
mod scenario;

/// Fallback log filter for the demo.
const LOG_DIRECTIVES: &str = "error,horae_components=info,example=info";

/// Runs every demo scenario.
pub fn run() {
    horae_ui::init_tracing_with_default(LOG_DIRECTIVES);
    header_preview::preview_all_formats();
    scenario::pick_alarm_time();
    scenario::type_meeting_time();
}
