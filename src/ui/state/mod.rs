// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types shared by the viewer sub-components, kept free of
//! message handling so they can be tested in isolation.

pub mod autoplay_delay;
pub mod gesture;
pub mod scroll_lock;
pub mod zoom;

// Re-export commonly used types for convenience
pub use autoplay_delay::AutoplayDelay;
pub use gesture::{GestureSession, Outcome as GestureOutcome};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use zoom::{PanOffset, ZoomLevel, ZoomState};
