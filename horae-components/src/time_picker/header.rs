//! Header fragment arrangement and layout.
//!
//! The header shows the selected time split into fragments (hour, separator,
//! minute, day period). Fragments are grouped into pieces, and one fragment
//! of one piece is the pivot: it stays centered no matter how wide the
//! fragments after it are.
//!
//! Building a [`HeaderFormat`] and laying it out are both pure, so hosts can
//! memoize the result per format, direction and displayed time.

use horae_ui::{Orientation, PxPosition, PxRect, PxSize, TextDirection};
use smallvec::{SmallVec, smallvec};

use super::{DialMode, TimeValue, format::TimeFormatter, format::TimeOfDayFormat};
use crate::button::input_padding_hit_test;

/// Identifies a header fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFragmentId {
    /// The hour control.
    Hour,
    /// The `:` separator.
    Colon,
    /// The minute control.
    Minute,
    /// The AM/PM control.
    Period,
    /// The `.` separator.
    Dot,
    /// A locale specific literal between hours and minutes.
    LocalizedLiteral,
}

impl HeaderFragmentId {
    /// The dial mode a tap on this fragment selects, if any.
    pub fn mode(self) -> Option<DialMode> {
        match self {
            HeaderFragmentId::Hour => Some(DialMode::Hour),
            HeaderFragmentId::Minute => Some(DialMode::Minute),
            _ => None,
        }
    }

    /// Whether the fragment reacts to taps.
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            HeaderFragmentId::Hour | HeaderFragmentId::Minute | HeaderFragmentId::Period
        )
    }
}

/// One atomic piece of the header text.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFragment {
    /// Which fragment this is.
    pub id: HeaderFragmentId,
    /// The text to render.
    pub content: String,
    /// Space before the fragment, in pixels.
    pub start_margin: f32,
}

impl HeaderFragment {
    fn new(id: HeaderFragmentId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            start_margin: 0.0,
        }
    }

    fn with_start_margin(mut self, start_margin: f32) -> Self {
        self.start_margin = start_margin;
        self
    }
}

/// A group of fragments laid out together.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPiece {
    /// Index of the pivot fragment inside this piece.
    pub pivot_index: Option<usize>,
    /// Fragments in visual order.
    pub fragments: SmallVec<[HeaderFragment; 3]>,
    /// Space below the piece in vertical layouts, in pixels.
    pub bottom_margin: f32,
}

impl HeaderPiece {
    fn hour_minute(fragments: SmallVec<[HeaderFragment; 3]>) -> Self {
        let pivot_index = fragments
            .iter()
            .position(|fragment| fragment.id == HeaderFragmentId::Hour);
        Self {
            pivot_index,
            fragments,
            bottom_margin: 0.0,
        }
    }

    fn period(fragment: HeaderFragment) -> Self {
        Self {
            pivot_index: None,
            fragments: smallvec![fragment],
            bottom_margin: 0.0,
        }
    }
}

/// Text of every fragment the header can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContent {
    /// Formatted hour.
    pub hour: String,
    /// Formatted minute.
    pub minute: String,
    /// AM/PM label.
    pub period: String,
    /// Literal used by [`TimeOfDayFormat::FrenchCanadian`].
    pub literal: String,
}

impl HeaderContent {
    /// Formats `time` for `format` through `formatter`.
    pub fn new(time: TimeValue, format: TimeOfDayFormat, formatter: &dyn TimeFormatter) -> Self {
        Self {
            hour: formatter.format_hour(time, format),
            minute: formatter.format_minute(time),
            period: formatter.period_label(time.period()),
            literal: formatter.hour_minute_literal(),
        }
    }
}

/// Spacing used when building a header, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderMetrics {
    /// Space between the hour/minute group and the day period.
    pub period_gap: f32,
    /// Space between stacked pieces in vertical layouts.
    pub vertical_gap: f32,
    /// Space around a localized literal.
    pub fragment_gap: f32,
}

/// The arrangement of the header for one format and text direction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFormat {
    /// Index of the piece that holds the pivot.
    pub centerpiece_index: usize,
    /// Pieces in visual order.
    pub pieces: SmallVec<[HeaderPiece; 2]>,
}

impl HeaderFormat {
    /// Arranges the header fragments for `format`.
    ///
    /// Pieces are built in logical order and reversed for right-to-left
    /// text.
    pub fn build(
        format: TimeOfDayFormat,
        direction: TextDirection,
        content: &HeaderContent,
        metrics: &HeaderMetrics,
    ) -> Self {
        use HeaderFragmentId as Id;

        let hour = HeaderFragment::new(Id::Hour, content.hour.as_str());
        let minute = HeaderFragment::new(Id::Minute, content.minute.as_str());
        let colon = || HeaderFragment::new(Id::Colon, ":");

        let mut pieces: SmallVec<[HeaderPiece; 2]> = match format {
            TimeOfDayFormat::HColonMmSpaceA => smallvec![
                HeaderPiece::hour_minute(smallvec![hour, colon(), minute]),
                HeaderPiece::period(
                    HeaderFragment::new(Id::Period, content.period.as_str())
                        .with_start_margin(metrics.period_gap)
                ),
            ],
            TimeOfDayFormat::ASpaceHColonMm => smallvec![
                HeaderPiece::period(HeaderFragment::new(Id::Period, content.period.as_str())),
                HeaderPiece::hour_minute(smallvec![
                    hour.with_start_margin(metrics.period_gap),
                    colon(),
                    minute
                ]),
            ],
            TimeOfDayFormat::HColonMm | TimeOfDayFormat::HhColonMm => {
                smallvec![HeaderPiece::hour_minute(smallvec![hour, colon(), minute])]
            }
            TimeOfDayFormat::HhDotMm => smallvec![HeaderPiece::hour_minute(smallvec![
                hour,
                HeaderFragment::new(Id::Dot, "."),
                minute
            ])],
            TimeOfDayFormat::FrenchCanadian => smallvec![HeaderPiece::hour_minute(smallvec![
                hour,
                HeaderFragment::new(Id::LocalizedLiteral, content.literal.as_str())
                    .with_start_margin(metrics.fragment_gap),
                minute.with_start_margin(metrics.fragment_gap),
            ])],
        };

        if direction.is_rtl() {
            pieces.reverse();
        }
        let last = pieces.len() - 1;
        for (index, piece) in pieces.iter_mut().enumerate() {
            piece.bottom_margin = if index < last {
                metrics.vertical_gap
            } else {
                0.0
            };
        }
        let centerpiece_index = pieces
            .iter()
            .position(|piece| piece.pivot_index.is_some())
            .unwrap_or(0);

        Self {
            centerpiece_index,
            pieces,
        }
    }

    /// All fragments in visual order.
    pub fn fragments(&self) -> impl Iterator<Item = &HeaderFragment> {
        self.pieces.iter().flat_map(|piece| piece.fragments.iter())
    }

    fn global_pivot_index(&self) -> usize {
        let before: usize = self.pieces[..self.centerpiece_index]
            .iter()
            .map(|piece| piece.fragments.len())
            .sum();
        before + self.pieces[self.centerpiece_index].pivot_index.unwrap_or(0)
    }
}

/// A fragment with its laid-out bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedFragment {
    /// Which fragment.
    pub id: HeaderFragmentId,
    /// Bounds in header coordinates.
    pub rect: PxRect,
}

/// The result of [`layout_header`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderLayout {
    /// Positioned fragments in the order of [`HeaderFormat::fragments`].
    pub fragments: Vec<PositionedFragment>,
}

impl HeaderLayout {
    /// The bounds of the fragment `id`.
    pub fn rect_of(&self, id: HeaderFragmentId) -> Option<PxRect> {
        self.fragments
            .iter()
            .find(|fragment| fragment.id == id)
            .map(|fragment| fragment.rect)
    }

    /// The interactive fragment under `point`.
    ///
    /// Exact hits win. Otherwise a fragment smaller than `min_tap_size` also
    /// claims the padding around it.
    pub fn fragment_at(&self, point: PxPosition, min_tap_size: PxSize) -> Option<HeaderFragmentId> {
        let interactive = || {
            self.fragments
                .iter()
                .filter(|fragment| fragment.id.is_interactive())
        };
        if let Some(hit) = interactive().find(|fragment| fragment.rect.contains(point)) {
            return Some(hit.id);
        }
        interactive()
            .find(|fragment| {
                input_padding_hit_test(
                    point - fragment.rect.position(),
                    fragment.rect.size(),
                    min_tap_size,
                )
                .is_some()
            })
            .map(|fragment| fragment.id)
    }
}

/// Positions the fragments of `format` inside a header of `size`.
///
/// Portrait flows every fragment on one line around the pivot. Landscape
/// stacks pieces in bands. `measure` returns the size of a fragment's
/// content.
#[tracing::instrument(level = "trace", skip(format, measure))]
pub fn layout_header<F>(
    format: &HeaderFormat,
    size: PxSize,
    orientation: Orientation,
    measure: F,
) -> HeaderLayout
where
    F: Fn(&HeaderFragment) -> PxSize,
{
    assert!(
        format.pivot_is_valid(),
        "header centerpiece must hold a pivot fragment"
    );
    let fragments = match orientation {
        Orientation::Portrait => layout_horizontal(format, size, &measure),
        Orientation::Landscape => layout_vertical(format, size, &measure),
    };
    HeaderLayout { fragments }
}

impl HeaderFormat {
    fn pivot_is_valid(&self) -> bool {
        self.pieces
            .get(self.centerpiece_index)
            .and_then(|piece| piece.pivot_index.map(|pivot| pivot < piece.fragments.len()))
            .unwrap_or(false)
    }
}

fn layout_horizontal<F>(format: &HeaderFormat, size: PxSize, measure: &F) -> Vec<PositionedFragment>
where
    F: Fn(&HeaderFragment) -> PxSize,
{
    let fragments: Vec<&HeaderFragment> = format.fragments().collect();
    let sizes: Vec<PxSize> = fragments.iter().map(|fragment| measure(*fragment)).collect();
    place_pivoted(
        &fragments,
        &sizes,
        format.global_pivot_index(),
        size.width,
        0.0,
        size.height,
    )
}

fn layout_vertical<F>(format: &HeaderFormat, size: PxSize, measure: &F) -> Vec<PositionedFragment>
where
    F: Fn(&HeaderFragment) -> PxSize,
{
    let bands: Vec<(Vec<&HeaderFragment>, Vec<PxSize>)> = format
        .pieces
        .iter()
        .map(|piece| {
            let fragments: Vec<&HeaderFragment> = piece.fragments.iter().collect();
            let sizes = fragments.iter().map(|fragment| measure(*fragment)).collect();
            (fragments, sizes)
        })
        .collect();
    let last = format.pieces.len() - 1;
    let total: f32 = format
        .pieces
        .iter()
        .zip(&bands)
        .enumerate()
        .map(|(index, (piece, (_, sizes)))| {
            let margin = if index < last { piece.bottom_margin } else { 0.0 };
            band_height(sizes) + margin
        })
        .sum();

    let mut top = (size.height - total) / 2.0;
    let mut placed = Vec::new();
    for (index, (piece, (fragments, sizes))) in format.pieces.iter().zip(&bands).enumerate() {
        let height = band_height(sizes);
        if index == format.centerpiece_index {
            let pivot = piece.pivot_index.unwrap_or(0);
            placed.extend(place_pivoted(fragments, sizes, pivot, size.width, top, height));
        } else {
            placed.extend(place_centered(fragments, sizes, size.width, top, height));
        }
        top += height + piece.bottom_margin;
    }
    placed
}

fn band_height(sizes: &[PxSize]) -> f32 {
    sizes.iter().fold(0.0_f32, |acc, size| acc.max(size.height))
}

/// Places fragments right to left so that the pivot straddles the center
/// of `width`, without overflowing the right edge.
fn place_pivoted(
    fragments: &[&HeaderFragment],
    sizes: &[PxSize],
    pivot: usize,
    width: f32,
    top: f32,
    height: f32,
) -> Vec<PositionedFragment> {
    let tail = sizes[pivot].width / 2.0
        + fragments[pivot + 1..]
            .iter()
            .zip(&sizes[pivot + 1..])
            .map(|(fragment, size)| size.width + fragment.start_margin)
            .sum::<f32>();
    let mut x = (width / 2.0 + tail).min(width);

    let mut placed: Vec<PositionedFragment> = fragments
        .iter()
        .zip(sizes)
        .rev()
        .map(|(fragment, size)| {
            x -= size.width;
            let rect = PxRect::new(x, top + (height - size.height) / 2.0, size.width, size.height);
            x -= fragment.start_margin;
            PositionedFragment {
                id: fragment.id,
                rect,
            }
        })
        .collect();
    placed.reverse();
    placed
}

/// Centers the fragments as one group within `width`.
fn place_centered(
    fragments: &[&HeaderFragment],
    sizes: &[PxSize],
    width: f32,
    top: f32,
    height: f32,
) -> Vec<PositionedFragment> {
    let group: f32 = fragments
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(index, (fragment, size))| {
            let margin = if index == 0 { 0.0 } else { fragment.start_margin };
            size.width + margin
        })
        .sum();
    let mut x = (width - group) / 2.0;
    fragments
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(index, (fragment, size))| {
            if index > 0 {
                x += fragment.start_margin;
            }
            let rect = PxRect::new(x, top + (height - size.height) / 2.0, size.width, size.height);
            x += size.width;
            PositionedFragment {
                id: fragment.id,
                rect,
            }
        })
        .collect()
}
