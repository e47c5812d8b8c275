//! Foundation primitives for the horae time picker.
//!
//! `horae-ui` holds the framework-agnostic pieces the components crate is
//! built on: density independent units, float geometry, pointer events,
//! callbacks, a debounce timer and accessibility announcements. Nothing here
//! owns a render loop; the host UI layer feeds events and clock instants in.
//!
//! # Example
//!
//! ```
//! use horae_ui::{Dp, PxPosition, PxRect, PxSize};
//!
//! let rect = PxRect::from_position_size(PxPosition::new(10.0, 10.0), PxSize::new(20.0, 20.0));
//! assert!(rect.contains(PxPosition::new(15.0, 25.0)));
//! assert_eq!(Dp(48.0).to_px(), 48.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod color;
pub mod cursor;
pub mod direction;
pub mod dp;
mod entry_point;
pub mod prop;
pub mod px;
pub mod timer;

pub use accesskit;

pub use crate::{
    accessibility::Announcement,
    color::Color,
    cursor::{PointerEvent, PointerEventContent},
    direction::{Orientation, TextDirection},
    dp::{Dp, SCALE_FACTOR},
    entry_point::{init_tracing, init_tracing_with_default},
    prop::{Callback, CallbackWith},
    px::{PxPosition, PxRect, PxSize},
    timer::DebounceTimer,
};
