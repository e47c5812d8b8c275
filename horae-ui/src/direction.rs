//! Text direction and screen orientation.

/// The reading direction of the surrounding locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDirection {
    /// Returns true for [`TextDirection::Rtl`].
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

/// The orientation the picker is laid out for.
///
/// Portrait stacks the header above the dial and flows header fragments
/// horizontally. Landscape puts the header beside the dial and stacks header
/// pieces vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Orientation {
    /// Taller than wide.
    #[default]
    Portrait,
    /// Wider than tall.
    Landscape,
}
