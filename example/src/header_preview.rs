use horae_components::{
    theme::DialStyle,
    time_picker::{
        HeaderFragment, TimeOfDayFormat, TimePickerConfig, TimePickerDialog, TimeValue,
    },
};
use horae_ui::{Orientation, PxSize, TextDirection};
use tracing::info;

/// Width of one character in the fake monospace font.
const GLYPH_WIDTH: f32 = 14.0;
const LINE_HEIGHT: f32 = 40.0;

fn measure(fragment: &HeaderFragment) -> PxSize {
    PxSize::new(
        fragment.content.chars().count() as f32 * GLYPH_WIDTH,
        LINE_HEIGHT,
    )
}

/// Logs the header layout of every format in both directions and
/// orientations.
pub fn preview_all_formats() {
    let time = TimeValue::from_hm(19, 5);
    for format in TimeOfDayFormat::ALL {
        for direction in [TextDirection::Ltr, TextDirection::Rtl] {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let config = TimePickerConfig::default()
                    .time_format(format)
                    .text_direction(direction)
                    .orientation(orientation)
                    .dial_style(DialStyle::Modern);
                let dialog = TimePickerDialog::new(time, config);
                let layout = dialog.header_layout(PxSize::new(320.0, 160.0), measure);
                let placed: Vec<String> = layout
                    .fragments
                    .iter()
                    .map(|fragment| {
                        format!(
                            "{:?}@({:.0},{:.0})",
                            fragment.id, fragment.rect.x, fragment.rect.y
                        )
                    })
                    .collect();
                info!(
                    pattern = format.pattern(),
                    ?direction,
                    ?orientation,
                    "{}",
                    placed.join(" ")
                );
            }
        }
    }
}
