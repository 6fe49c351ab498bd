// SPDX-License-Identifier: MPL-2.0
//! Autoplay delay domain type.
//!
//! This module provides a type-safe wrapper for the interval between two
//! automatic advances of the gallery, in milliseconds.

use crate::config::{DEFAULT_AUTOPLAY_DELAY_MS, MAX_AUTOPLAY_DELAY_MS, MIN_AUTOPLAY_DELAY_MS};
use std::time::Duration;

/// Delay between autoplay advances.
///
/// This newtype enforces validity at the type level: zero, negative-looking
/// or absurdly large configuration values are clamped to 500 ms–10 min.
///
/// # Example
///
/// ```
/// use iced_gallery::ui::state::AutoplayDelay;
///
/// let delay = AutoplayDelay::new(2000);
/// assert_eq!(delay.millis(), 2000);
///
/// // Values outside range are clamped
/// let too_short = AutoplayDelay::new(0);
/// assert_eq!(too_short.millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayDelay(u64);

impl AutoplayDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_DELAY_MS, MAX_AUTOPLAY_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_AUTOPLAY_DELAY_MS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_AUTOPLAY_DELAY_MS
    }
}

impl Default for AutoplayDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoplayDelay::new(0).millis(), MIN_AUTOPLAY_DELAY_MS);
        assert_eq!(AutoplayDelay::new(u64::MAX).millis(), MAX_AUTOPLAY_DELAY_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(AutoplayDelay::new(500).millis(), 500);
        assert_eq!(AutoplayDelay::new(3000).millis(), 3000);
    }

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(AutoplayDelay::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn bounds_are_detected() {
        assert!(AutoplayDelay::new(1).is_min());
        assert!(!AutoplayDelay::default().is_min());
        assert!(AutoplayDelay::new(MAX_AUTOPLAY_DELAY_MS).is_max());
        assert!(!AutoplayDelay::default().is_max());
    }
}
