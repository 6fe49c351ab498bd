// SPDX-License-Identifier: MPL-2.0
//! Viewer session sub-component: modal/fullscreen presentation and the page
//! scroll lock held while fullscreen.

use crate::ui::state::{ScrollLock, ScrollLockGuard};

/// Session sub-component state.
///
/// Not `Clone`: the scroll lock guard has a single owner.
#[derive(Debug, Default)]
pub struct State {
    is_viewer_open: bool,
    is_fullscreen: bool,
    scroll_lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

/// Messages for the session sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Open the modal viewer.
    OpenViewer,
    /// Open the viewer fullscreen and lock page scrolling.
    OpenFullscreen,
    /// Leave fullscreen; this also closes the viewer.
    ExitFullscreen,
    /// Close the viewer.
    Close,
    /// Escape pressed: exit fullscreen if set, otherwise close.
    Escape,
}

/// Effects produced by session changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Presentation changed while still open.
    Opened { fullscreen: bool },
    /// The viewer was closed; zoom must be reset.
    Closed,
}

impl State {
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            scroll_lock,
            ..Self::default()
        }
    }

    /// Handle a session message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::OpenViewer => {
                if self.is_viewer_open {
                    return Effect::None;
                }
                self.is_viewer_open = true;
                tracing::info!("Viewer opened");
                Effect::Opened { fullscreen: false }
            }
            Message::OpenFullscreen => {
                if self.is_fullscreen {
                    return Effect::None;
                }
                self.is_fullscreen = true;
                self.is_viewer_open = true;
                self.guard = self.scroll_lock.try_acquire();
                if self.guard.is_none() {
                    tracing::warn!("Page scroll lock already held; entering fullscreen without it");
                }
                tracing::info!("Viewer entered fullscreen");
                Effect::Opened { fullscreen: true }
            }
            Message::ExitFullscreen | Message::Close => self.close(),
            Message::Escape => {
                if self.is_fullscreen {
                    self.handle(Message::ExitFullscreen)
                } else {
                    self.handle(Message::Close)
                }
            }
        }
    }

    fn close(&mut self) -> Effect {
        if !self.is_viewer_open && !self.is_fullscreen {
            return Effect::None;
        }
        // Dropping the guard releases exactly the lock taken on open.
        self.guard = None;
        self.is_fullscreen = false;
        self.is_viewer_open = false;
        tracing::info!("Viewer closed");
        Effect::Closed
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.is_viewer_open
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Whether keyboard input should be routed to the viewer.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_viewer_open || self.is_fullscreen
    }

    /// Whether this session currently owns the scroll lock.
    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}
