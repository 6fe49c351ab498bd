// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom level bounds and steps
//! - **Pan**: Pan damping and range
//! - **Gesture**: Swipe threshold and click timing
//! - **Autoplay**: Slideshow delay bounds
//! - **Loading**: Load timeout

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom level of an unzoomed image (1.0 = fitted size).
pub const MIN_ZOOM_LEVEL: f32 = 1.0;

/// Maximum allowed zoom level.
pub const MAX_ZOOM_LEVEL: f32 = 3.0;

/// Zoom step for zoom in/out operations.
pub const ZOOM_STEP: f32 = 0.5;

/// Zoom level applied by a single click on an unzoomed image.
pub const CLICK_ZOOM_LEVEL: f32 = 2.0;

/// Zoom level applied by a double-click on an unzoomed image.
pub const DOUBLE_CLICK_ZOOM_LEVEL: f32 = 2.5;

// ==========================================================================
// Pan Defaults
// ==========================================================================

/// Fraction of the raw pointer delta applied to the pan offset.
pub const PAN_DAMPING: f32 = 0.5;

/// Pan range (in percent) gained per zoom level above 1.
pub const PAN_PERCENT_PER_ZOOM: f32 = 50.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance a swipe must exceed to navigate.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Pointer travel (px) tolerated before a press stops counting as a tap.
pub const TAP_SLOP: f32 = 8.0;

/// Window after a drag during which a click is ignored (milliseconds).
pub const CLICK_SUPPRESSION_MS: u64 = 100;

/// Maximum interval between two clicks forming a double-click (milliseconds).
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 350;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default delay between two autoplay advances (milliseconds).
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 5000;

/// Minimum autoplay delay (milliseconds).
pub const MIN_AUTOPLAY_DELAY_MS: u64 = 500;

/// Maximum autoplay delay (milliseconds).
pub const MAX_AUTOPLAY_DELAY_MS: u64 = 600_000;

/// Resolution of the tick driving autoplay and load timeouts (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Time after which a pending image load is treated as failed (seconds).
pub const LOADING_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_LEVEL == 1.0);
    assert!(MAX_ZOOM_LEVEL > MIN_ZOOM_LEVEL);
    assert!(ZOOM_STEP > 0.0);
    assert!(CLICK_ZOOM_LEVEL > MIN_ZOOM_LEVEL);
    assert!(CLICK_ZOOM_LEVEL <= MAX_ZOOM_LEVEL);
    assert!(DOUBLE_CLICK_ZOOM_LEVEL > MIN_ZOOM_LEVEL);
    assert!(DOUBLE_CLICK_ZOOM_LEVEL <= MAX_ZOOM_LEVEL);

    // Pan validation
    assert!(PAN_DAMPING > 0.0);
    assert!(PAN_PERCENT_PER_ZOOM > 0.0);

    // Gesture validation
    assert!(SWIPE_THRESHOLD > 0.0);
    assert!(TAP_SLOP > 0.0 && TAP_SLOP < SWIPE_THRESHOLD);
    assert!(CLICK_SUPPRESSION_MS < DOUBLE_CLICK_THRESHOLD_MS);

    // Autoplay validation
    assert!(MIN_AUTOPLAY_DELAY_MS > 0);
    assert!(MAX_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);
    assert!(TICK_INTERVAL_MS < MIN_AUTOPLAY_DELAY_MS);

    // Loading validation
    assert!(LOADING_TIMEOUT_SECS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(MAX_ZOOM_LEVEL, 3.0);
        assert_eq!(ZOOM_STEP, 0.5);
        assert!(CLICK_ZOOM_LEVEL < DOUBLE_CLICK_ZOOM_LEVEL);
    }

    #[test]
    fn pan_range_at_click_zoom_covers_full_recentering() {
        // At the click zoom level a click on the image edge must still be
        // representable without clamping.
        let max_pan = (CLICK_ZOOM_LEVEL - 1.0) * PAN_PERCENT_PER_ZOOM;
        assert!(max_pan >= 50.0);
    }

    #[test]
    fn autoplay_defaults_are_valid() {
        assert_eq!(DEFAULT_AUTOPLAY_DELAY_MS, 5000);
        assert!(DEFAULT_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
        assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);
    }
}
