// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery viewer widget built with the Iced GUI
//! framework.
//!
//! The widget navigates an ordered list of images with wraparound, zooms and
//! pans the current image, tells pans, swipes and taps apart, runs a
//! slideshow, and presents itself in a modal or fullscreen session that holds
//! a process-wide scroll lock. A small desktop host in [`app`] embeds it.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod image_navigation;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
