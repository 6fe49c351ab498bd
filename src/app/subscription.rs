// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, window, Subscription};

/// Learns the main window id from the first window event it sees.
pub fn create_window_subscription(known: bool) -> Subscription<Message> {
    if known {
        return Subscription::none();
    }
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(
            window::Event::Opened { .. } | window::Event::Resized(_) | window::Event::Focused,
        ) => Some(Message::WindowDiscovered(window_id)),
        _ => None,
    })
}

/// Viewer listeners (keyboard, pointer tracking, timers) lifted to app messages.
pub fn create_viewer_subscription(viewer: &component::State) -> Subscription<Message> {
    viewer.subscription().map(Message::Viewer)
}
