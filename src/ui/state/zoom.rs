// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - Zoom level bounded to `[1, 3]`
//! - Pan offset in percentage units, bounded by the zoom level
//! - Zoom-at-point (scale-then-translate)

pub use crate::config::{
    CLICK_ZOOM_LEVEL, DOUBLE_CLICK_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, PAN_DAMPING,
    PAN_PERCENT_PER_ZOOM, ZOOM_STEP,
};

/// Zoom level, guaranteed to be within valid range (1.0–3.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(level: f32) -> Self {
        Self(level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL))
    }

    /// Returns the raw zoom factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the zoom is at the minimum value (image not zoomed).
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_LEVEL
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_LEVEL
    }

    /// Increases zoom by the given step.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases zoom by the given step.
    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }

    /// Largest pan offset (percent, per axis) allowed at this level.
    #[must_use]
    pub fn max_pan(self) -> f32 {
        (self.0 - MIN_ZOOM_LEVEL) * PAN_PERCENT_PER_ZOOM
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(MIN_ZOOM_LEVEL)
    }
}

/// Translation of the zoomed image, in percent of the displayed image size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamps both axes to `[-max, max]`.
    #[must_use]
    pub fn clamped(self, max: f32) -> Self {
        Self {
            x: self.x.clamp(-max, max),
            y: self.y.clamp(-max, max),
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Manages zoom and pan for the displayed image.
///
/// Invariant: when the level is 1 the offset is zero, and otherwise each axis
/// stays within `level.max_pan()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    level: ZoomLevel,
    pan: PanOffset,
}

impl ZoomState {
    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.level.is_min()
    }

    /// Sets the zoom level and re-clamps the pan offset to the new bounds.
    pub fn set_level(&mut self, level: ZoomLevel) {
        self.level = level;
        self.pan = if level.is_min() {
            PanOffset::ZERO
        } else {
            self.pan.clamped(level.max_pan())
        };
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) {
        self.set_level(self.level.zoom_in(ZOOM_STEP));
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) {
        self.set_level(self.level.zoom_out(ZOOM_STEP));
    }

    /// Resets zoom to the unzoomed, centered view
    pub fn reset(&mut self) {
        self.level = ZoomLevel::default();
        self.pan = PanOffset::ZERO;
    }

    /// Zooms to [`CLICK_ZOOM_LEVEL`] centered on the point at fractions
    /// `(fx, fy)` of the displayed image.
    ///
    /// Scale-then-translate: the offset moves the clicked point towards the
    /// center of the view. Fractions outside `[0, 1]` are clamped.
    pub fn zoom_at_point(&mut self, fx: f32, fy: f32) {
        let fx = clamp_fraction(fx);
        let fy = clamp_fraction(fy);
        self.level = ZoomLevel::new(CLICK_ZOOM_LEVEL);
        self.pan = PanOffset::new((0.5 - fx) * 100.0, (0.5 - fy) * 100.0)
            .clamped(self.level.max_pan());
    }

    /// Zooms to [`DOUBLE_CLICK_ZOOM_LEVEL`] keeping the image centered.
    pub fn zoom_to_double_click_level(&mut self) {
        self.level = ZoomLevel::new(DOUBLE_CLICK_ZOOM_LEVEL);
        self.pan = PanOffset::ZERO;
    }

    /// Moves the zoomed image by a raw pointer delta.
    ///
    /// Does nothing while not zoomed. Returns whether the offset changed.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> bool {
        if !self.is_zoomed() {
            return false;
        }
        let previous = self.pan;
        self.pan = PanOffset::new(
            self.pan.x + dx * PAN_DAMPING,
            self.pan.y + dy * PAN_DAMPING,
        )
        .clamped(self.level.max_pan());
        self.pan != previous
    }
}

fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.5
    } else {
        value.clamp(0.0, 1.0)
    }
}
