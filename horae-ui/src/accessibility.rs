//! # Accessibility announcements
//!
//! Components request spoken announcements (for example "Select minutes"
//! after the dial switches mode) by returning [`Announcement`] values. The
//! host forwards them to its screen reader bridge; delivery is not handled
//! here.

use accesskit::Live;

use crate::TextDirection;

/// A request to announce a message to assistive technology.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    /// The text to speak.
    pub message: String,
    /// Direction of the message text.
    pub direction: TextDirection,
    /// Politeness of the announcement.
    pub live: Live,
}

impl Announcement {
    /// Creates a polite announcement.
    pub fn polite(message: impl Into<String>, direction: TextDirection) -> Self {
        Self {
            message: message.into(),
            direction,
            live: Live::Polite,
        }
    }
}
