// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::{Config, ViewerConfig};
use crate::media::ImageRef;
use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// A window event revealed the id of the main window.
    WindowDiscovered(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Ordered image list handed to the viewer.
    pub images: Vec<ImageRef>,
    /// Persisted preferences as loaded from disk.
    pub config: Config,
    /// Effective viewer configuration (preferences plus command-line overrides).
    pub viewer: ViewerConfig,
    /// Open the viewer in fullscreen right away.
    pub fullscreen: bool,
}
