//! A generic tappable button and the input padding hit test.
//!
//! ## Usage
//!
//! Wrap small controls (header fragments, the period toggle, the entry mode
//! icon) so that they react to taps inside a minimum touch target even when
//! their painted content is smaller.

use derive_setters::Setters;
use horae_ui::{Callback, Dp, PointerEvent, PointerEventContent, PxPosition, PxRect, PxSize};
use tracing::trace;

/// Material state-layer opacities.
pub struct StateLayerAlpha;

impl StateLayerAlpha {
    /// Opacity while hovered.
    pub const HOVER: f32 = 0.08;
    /// Opacity while pressed.
    pub const PRESSED: f32 = 0.10;
}

/// Arguments for [`ButtonState::handle_pointer`].
#[derive(Clone, PartialEq, Setters)]
#[setters(into)]
pub struct ButtonArgs {
    /// Whether the button reacts to input.
    pub enabled: bool,
    /// The minimum touch target. Smaller content is padded up to it.
    pub min_tap_size: Dp,
    /// Called when the button is clicked.
    #[setters(skip)]
    pub on_press: Option<Callback>,
    /// Label exposed to assistive technologies.
    #[setters(strip_option)]
    pub semantics_label: Option<String>,
}

impl ButtonArgs {
    /// Sets the click handler.
    pub fn on_press<F>(mut self, on_press: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Callback::new(on_press));
        self
    }

    /// Sets the click handler using a shared callback.
    pub fn on_press_shared(mut self, on_press: impl Into<Callback>) -> Self {
        self.on_press = Some(on_press.into());
        self
    }
}

impl Default for ButtonArgs {
    fn default() -> Self {
        Self {
            enabled: true,
            min_tap_size: ButtonDefaults::MIN_TAP_SIZE,
            on_press: None,
            semantics_label: None,
        }
    }
}

impl std::fmt::Debug for ButtonArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonArgs")
            .field("enabled", &self.enabled)
            .field("min_tap_size", &self.min_tap_size)
            .field("has_on_press", &self.on_press.is_some())
            .field("semantics_label", &self.semantics_label)
            .finish()
    }
}

/// Default button metrics.
pub struct ButtonDefaults;

impl ButtonDefaults {
    /// The Material minimum interactive size.
    pub const MIN_TAP_SIZE: Dp = Dp(48.0);
}

/// Hover and press tracking for one button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    is_hovered: bool,
    is_pressed: bool,
}

impl ButtonState {
    /// Creates a state with all flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the pointer is over the tappable area.
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Returns whether the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Returns the state-layer alpha derived from the current interactions.
    pub fn state_layer_alpha(&self) -> f32 {
        if self.is_pressed {
            StateLayerAlpha::PRESSED
        } else if self.is_hovered {
            StateLayerAlpha::HOVER
        } else {
            0.0
        }
    }

    /// Feeds a pointer event in the button's local coordinates.
    ///
    /// Returns true when the event completed a click. The click handler has
    /// already been called at that point.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        content_size: PxSize,
        args: &ButtonArgs,
    ) -> bool {
        if !args.enabled {
            self.is_pressed = false;
            self.is_hovered = false;
            return false;
        }
        let min_px = args.min_tap_size.to_px();
        let inside = input_padding_hit_test(
            event.position,
            content_size,
            PxSize::new(min_px, min_px),
        )
        .is_some();

        match event.content {
            PointerEventContent::Pressed => {
                self.is_hovered = inside;
                self.is_pressed = inside;
                false
            }
            PointerEventContent::Moved => {
                self.is_hovered = inside;
                false
            }
            PointerEventContent::Released => {
                let clicked = self.is_pressed && inside;
                self.is_pressed = false;
                self.is_hovered = inside;
                if clicked {
                    trace!(label = ?args.semantics_label, "button clicked");
                    if let Some(on_press) = &args.on_press {
                        on_press.call();
                    }
                }
                clicked
            }
            PointerEventContent::Cancelled => {
                self.is_pressed = false;
                self.is_hovered = false;
                false
            }
        }
    }
}

/// Adjusts a hit test for content smaller than the minimum touch target.
///
/// `point` is relative to the content's top-left corner. The tappable area
/// is the content grown symmetrically to at least `min_size`. Points on the
/// content come back unchanged, points in the added padding are redirected
/// to the content center and points outside the tappable area give `None`.
pub fn input_padding_hit_test(
    point: PxPosition,
    content_size: PxSize,
    min_size: PxSize,
) -> Option<PxPosition> {
    let content = PxRect::from_position_size(PxPosition::ZERO, content_size);
    if content.contains(point) {
        return Some(point);
    }
    let dx = ((min_size.width - content_size.width) / 2.0).max(0.0);
    let dy = ((min_size.height - content_size.height) / 2.0).max(0.0);
    if content.inflate(dx, dy).contains(point) {
        Some(content.center())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Instant,
    };

    use super::*;

    fn event(x: f32, y: f32, content: PointerEventContent) -> PointerEvent {
        PointerEvent::new(Instant::now(), PxPosition::new(x, y), content)
    }

    #[test]
    fn padding_redirects_to_center() {
        let content = PxSize::new(20.0, 10.0);
        let min = PxSize::new(48.0, 48.0);
        assert_eq!(
            input_padding_hit_test(PxPosition::new(5.0, 5.0), content, min),
            Some(PxPosition::new(5.0, 5.0))
        );
        assert_eq!(
            input_padding_hit_test(PxPosition::new(-10.0, 20.0), content, min),
            Some(PxPosition::new(10.0, 5.0))
        );
        assert_eq!(
            input_padding_hit_test(PxPosition::new(-15.0, 5.0), content, min),
            None
        );
        assert_eq!(
            input_padding_hit_test(PxPosition::new(5.0, 30.0), content, min),
            None
        );
    }

    #[test]
    fn large_content_gets_no_padding() {
        let content = PxSize::new(100.0, 60.0);
        let min = PxSize::new(48.0, 48.0);
        assert_eq!(
            input_padding_hit_test(PxPosition::new(-1.0, 10.0), content, min),
            None
        );
    }

    #[test]
    fn click_calls_handler() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let args = ButtonArgs::default()
            .min_tap_size(Dp(0.0))
            .on_press(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let size = PxSize::new(40.0, 40.0);
        let mut state = ButtonState::new();

        assert!(!state.handle_pointer(&event(10.0, 10.0, PointerEventContent::Pressed), size, &args));
        assert!(state.is_pressed());
        assert_eq!(state.state_layer_alpha(), StateLayerAlpha::PRESSED);
        assert!(state.handle_pointer(&event(12.0, 10.0, PointerEventContent::Released), size, &args));
        assert!(!state.is_pressed());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn release_outside_cancels_click() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let args = ButtonArgs::default()
            .min_tap_size(Dp(0.0))
            .on_press(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let size = PxSize::new(40.0, 40.0);
        let mut state = ButtonState::new();

        state.handle_pointer(&event(10.0, 10.0, PointerEventContent::Pressed), size, &args);
        assert!(!state.handle_pointer(&event(90.0, 10.0, PointerEventContent::Released), size, &args));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!state.is_hovered());
    }

    #[test]
    fn disabled_button_ignores_input() {
        let args = ButtonArgs::default().enabled(false).min_tap_size(Dp(0.0));
        let size = PxSize::new(40.0, 40.0);
        let mut state = ButtonState::new();
        state.handle_pointer(&event(10.0, 10.0, PointerEventContent::Pressed), size, &args);
        assert!(!state.is_pressed());
        assert!(!state.handle_pointer(&event(10.0, 10.0, PointerEventContent::Released), size, &args));
    }

    #[test]
    fn hover_follows_moves() {
        let args = ButtonArgs::default().min_tap_size(Dp(0.0));
        let size = PxSize::new(40.0, 40.0);
        let mut state = ButtonState::new();
        state.handle_pointer(&event(10.0, 10.0, PointerEventContent::Moved), size, &args);
        assert!(state.is_hovered());
        assert_eq!(state.state_layer_alpha(), StateLayerAlpha::HOVER);
        state.handle_pointer(&event(-10.0, 10.0, PointerEventContent::Moved), size, &args);
        assert!(!state.is_hovered());
    }
}
