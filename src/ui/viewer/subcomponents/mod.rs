// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Current index with wraparound
//!     ├── loading    - Pending load, stale rejection, timeout
//!     ├── zoom       - Encapsulates ZoomState, allow_zoom policy
//!     ├── drag       - Gesture session, click suppression, double-click
//!     ├── autoplay   - Repeating deadline scheduler
//!     ├── session    - Modal/fullscreen presentation, scroll lock
//!     └── keyboard   - Key routing while open
//! ```

pub mod autoplay;
pub mod drag;
pub mod keyboard;
pub mod loading;
pub mod navigation;
pub mod session;
pub mod zoom;
