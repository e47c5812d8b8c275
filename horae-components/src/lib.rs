//! Time picker components for horae.
//!
//! # Usage
//!
//! Open a dialog, feed it input and frame instants, and react to the events
//! it returns.
//!
//! ```
//! use std::time::Instant;
//!
//! use horae_components::{
//!     theme::DialStyle,
//!     time_picker::{TimeOfDayFormat, TimePickerConfig, TimePickerDialog, TimePickerEvent, TimeValue},
//! };
//!
//! let config = TimePickerConfig::default()
//!     .time_format(TimeOfDayFormat::HColonMm)
//!     .dial_style(DialStyle::Classic);
//! let mut dialog = TimePickerDialog::new(TimeValue::from_hm(18, 0), config);
//!
//! let events = dialog.increment(Instant::now());
//! assert!(events.contains(&TimePickerEvent::TimeChanged(TimeValue::from_hm(19, 0))));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;

pub mod button;
pub mod theme;
pub mod time_picker;
