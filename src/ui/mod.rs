// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`state`] - Reusable state primitives (zoom, gestures, autoplay delay, scroll lock)
//! - [`viewer`] - Gallery viewer component and its widgets

pub mod state;
pub mod viewer;
