// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating ZoomState and its handlers.

use crate::ui::state::{PanOffset, ZoomState};

/// Zoom sub-component state.
/// Encapsulates the ZoomState and applies the `allow_zoom` policy.
#[derive(Debug, Clone)]
pub struct State {
    /// The underlying zoom state.
    pub inner: ZoomState,
    /// Whether zoom-increasing operations are permitted.
    allow_zoom: bool,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Reset zoom to default.
    Reset,
    /// Click-to-zoom at a fraction of the displayed image; resets when zoomed.
    ZoomAtPoint { fx: f32, fy: f32 },
    /// Double-click toggle, decided on the zoom state before the first click.
    DoubleClick { was_zoomed: bool },
    /// Move the zoomed image by a raw pointer delta.
    Pan { dx: f32, dy: f32 },
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Zoom level or pan offset changed.
    ZoomChanged,
}

impl Default for State {
    fn default() -> Self {
        Self::new(true)
    }
}

impl State {
    #[must_use]
    pub fn new(allow_zoom: bool) -> Self {
        Self {
            inner: ZoomState::default(),
            allow_zoom,
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner;
        match msg {
            Message::ZoomIn => {
                if self.allow_zoom {
                    self.inner.zoom_in();
                }
            }
            Message::ZoomOut => self.inner.zoom_out(),
            Message::Reset => self.inner.reset(),
            Message::ZoomAtPoint { fx, fy } => {
                if self.inner.is_zoomed() {
                    self.inner.reset();
                } else if self.allow_zoom {
                    self.inner.zoom_at_point(fx, fy);
                }
            }
            Message::DoubleClick { was_zoomed } => {
                if was_zoomed {
                    self.inner.reset();
                } else if self.allow_zoom {
                    self.inner.zoom_to_double_click_level();
                }
            }
            Message::Pan { dx, dy } => {
                self.inner.pan_by(dx, dy);
            }
        }

        if self.inner == before {
            Effect::None
        } else {
            Effect::ZoomChanged
        }
    }

    /// Get the current zoom level.
    #[must_use]
    pub fn level(&self) -> f32 {
        self.inner.level().value()
    }

    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.inner.pan()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.inner.is_zoomed()
    }

    #[must_use]
    pub fn allow_zoom(&self) -> bool {
        self.allow_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLICK_ZOOM_LEVEL, DOUBLE_CLICK_ZOOM_LEVEL};
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn zoom_in_reports_change() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ZoomIn), Effect::ZoomChanged);
        assert_abs_diff_eq!(state.level(), 1.5);
    }

    #[test]
    fn zoom_out_at_minimum_is_noop() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ZoomOut), Effect::None);
    }

    #[test]
    fn click_toggles_between_point_zoom_and_reset() {
        let mut state = State::default();
        state.handle(Message::ZoomAtPoint { fx: 0.5, fy: 0.5 });
        assert_abs_diff_eq!(state.level(), CLICK_ZOOM_LEVEL);

        state.handle(Message::ZoomAtPoint { fx: 0.1, fy: 0.9 });
        assert!(!state.is_zoomed());
        assert!(state.pan().is_zero());
    }

    #[test]
    fn double_click_uses_state_before_first_click() {
        let mut state = State::default();
        // First click of the pair zoomed in; the pair started unzoomed.
        state.handle(Message::ZoomAtPoint { fx: 0.2, fy: 0.2 });
        state.handle(Message::DoubleClick { was_zoomed: false });
        assert_abs_diff_eq!(state.level(), DOUBLE_CLICK_ZOOM_LEVEL);
        assert!(state.pan().is_zero());

        // First click reset the zoom; the pair started zoomed.
        state.handle(Message::ZoomAtPoint { fx: 0.2, fy: 0.2 });
        state.handle(Message::DoubleClick { was_zoomed: true });
        assert!(!state.is_zoomed());
    }

    #[test]
    fn disallowed_zoom_ignores_increasing_operations() {
        let mut state = State::new(false);
        assert_eq!(state.handle(Message::ZoomIn), Effect::None);
        assert_eq!(
            state.handle(Message::ZoomAtPoint { fx: 0.3, fy: 0.3 }),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::DoubleClick { was_zoomed: false }),
            Effect::None
        );
        assert!(!state.is_zoomed());
    }

    #[test]
    fn pan_while_unzoomed_is_noop() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Pan { dx: 30.0, dy: 30.0 }), Effect::None);
    }
}
