//! # Pointer events
//!
//! Pointer input as delivered by the host UI layer. Positions are relative
//! to the component receiving the event.
//!
//! ```
//! use std::time::Instant;
//!
//! use horae_ui::{PointerEvent, PointerEventContent, PxPosition};
//!
//! let event = PointerEvent::new(
//!     Instant::now(),
//!     PxPosition::new(12.0, 4.0),
//!     PointerEventContent::Pressed,
//! );
//! assert!(event.is_press());
//! ```

use std::time::Instant;

use crate::PxPosition;

/// A single pointer (mouse or touch) event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Timestamp indicating when this event occurred.
    pub timestamp: Instant,
    /// Pointer position relative to the receiving component.
    pub position: PxPosition,
    /// The specific type of this pointer event.
    pub content: PointerEventContent,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub fn new(timestamp: Instant, position: PxPosition, content: PointerEventContent) -> Self {
        Self {
            timestamp,
            position,
            content,
        }
    }

    /// Returns true for [`PointerEventContent::Pressed`].
    pub fn is_press(&self) -> bool {
        self.content == PointerEventContent::Pressed
    }

    /// Returns true for [`PointerEventContent::Released`].
    pub fn is_release(&self) -> bool {
        self.content == PointerEventContent::Released
    }
}

/// Enumeration of pointer event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventContent {
    /// A button or touch point went down.
    Pressed,
    /// The pointer moved.
    Moved,
    /// A button or touch point went up.
    Released,
    /// The platform cancelled the gesture (for example a system gesture took
    /// over the touch stream).
    Cancelled,
}
