// SPDX-License-Identifier: MPL-2.0
//! Drag/swipe sub-component with click suppression and double-click detection.

use crate::config::{CLICK_SUPPRESSION_MS, DOUBLE_CLICK_THRESHOLD_MS};
use crate::ui::state::gesture::Phase;
use crate::ui::state::{GestureOutcome, GestureSession};
use iced::Point;
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(DOUBLE_CLICK_THRESHOLD_MS);

/// Clicks arriving this soon after a drag ended are ignored.
const CLICK_SUPPRESSION: Duration = Duration::from_millis(CLICK_SUPPRESSION_MS);

/// Drag sub-component state.
/// Owns the active gesture session and adds cursor tracking and click timing.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The running interaction, if any.
    session: Option<GestureSession>,
    /// Current cursor position within the viewer.
    cursor_position: Option<Point>,
    /// When the last drag (pan or swipe movement) ended.
    last_drag_end: Option<Instant>,
    /// Last accepted click and whether the image was zoomed before it.
    last_click: Option<(Instant, bool)>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer/touch pressed over the image.
    Press { position: Point, zoomed: bool },
    /// Pointer moved (cursor tracking, and gesture update when pressed).
    Move(Point),
    /// Pointer released; `zoomed` is used if the release turns out to be a tap.
    Release { at: Instant, zoomed: bool },
    /// Interaction lost (pointer left the window, touch cancelled).
    Cancel { at: Instant },
    /// Click at a position.
    Click {
        position: Point,
        zoomed: bool,
        at: Instant,
    },
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Pan the zoomed image by a raw delta.
    Pan { dx: f32, dy: f32 },
    /// Swipe to the right: show the previous image.
    SwipePrevious,
    /// Swipe to the left: show the next image.
    SwipeNext,
    /// Accepted single click at a position.
    Click(Point),
    /// Double-click detected; `was_zoomed` is the state before the first click.
    DoubleClick { was_zoomed: bool },
}

impl State {
    /// Handle a drag message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Press { position, zoomed } => {
                self.cursor_position = Some(position);
                // A new press supersedes a session that never saw its release.
                self.session = Some(GestureSession::begin(position, zoomed));
                Effect::None
            }
            Message::Move(position) => {
                self.cursor_position = Some(position);
                match self.session.as_mut().and_then(|s| s.update(position)) {
                    Some((dx, dy)) => Effect::Pan { dx, dy },
                    None => Effect::None,
                }
            }
            Message::Release { at, zoomed } => {
                let Some(session) = self.session.take() else {
                    return Effect::None;
                };
                let position = self.cursor_position.unwrap_or_else(|| session.start());
                let outcome = session.finish(position);
                if outcome.is_drag() {
                    self.last_drag_end = Some(at);
                }
                match outcome {
                    GestureOutcome::Tap(point) => self.click(point, zoomed, at),
                    GestureOutcome::SwipeNext => Effect::SwipeNext,
                    GestureOutcome::SwipePrevious => Effect::SwipePrevious,
                    GestureOutcome::PanEnded | GestureOutcome::Dragged => Effect::None,
                }
            }
            Message::Cancel { at } => {
                if let Some(session) = self.session.take() {
                    if !matches!(session.phase(), Phase::Pending(_)) {
                        self.last_drag_end = Some(at);
                    }
                }
                Effect::None
            }
            Message::Click {
                position,
                zoomed,
                at,
            } => {
                self.cursor_position = Some(position);
                self.click(position, zoomed, at)
            }
        }
    }

    fn click(&mut self, position: Point, zoomed: bool, at: Instant) -> Effect {
        let suppressed = self
            .last_drag_end
            .is_some_and(|end| at.saturating_duration_since(end) < CLICK_SUPPRESSION);
        if suppressed {
            tracing::debug!("Click suppressed right after a drag");
            return Effect::None;
        }

        let first = self
            .last_click
            .filter(|(t, _)| at.saturating_duration_since(*t) < DOUBLE_CLICK_THRESHOLD);

        if let Some((_, was_zoomed)) = first {
            self.last_click = None; // Reset to avoid triple-click
            Effect::DoubleClick { was_zoomed }
        } else {
            self.last_click = Some((at, zoomed));
            Effect::Click(position)
        }
    }

    /// Drops the running session without producing any effect.
    pub fn reset(&mut self) {
        self.session = None;
        self.last_click = None;
    }

    /// Check if a gesture is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Get the current cursor position (if known).
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}
