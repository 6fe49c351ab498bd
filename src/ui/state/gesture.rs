// SPDX-License-Identifier: MPL-2.0
//! Gesture session state
//!
//! Classifies one pointer/touch interaction over the image as a pan, a
//! swipe or a tap. A session lives from press to release (or cancellation).

use crate::config::{SWIPE_THRESHOLD, TAP_SLOP};
use iced::Point;

/// What a press is expected to turn into, decided at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The image is zoomed: movement pans it.
    Pan,
    /// The image is not zoomed: a horizontal fling navigates.
    Swipe,
}

/// Classification of the running interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pressed, not moved beyond the tap slop yet.
    Pending(Intent),
    Panning,
    Swiping,
}

/// How a finished interaction should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Released within the tap slop: handle as a click at the press point.
    Tap(Point),
    /// A pan ended.
    PanEnded,
    /// Horizontal swipe to the right (towards the previous image).
    SwipePrevious,
    /// Horizontal swipe to the left (towards the next image).
    SwipeNext,
    /// Movement that matched neither a pan nor a navigating swipe.
    Dragged,
}

impl Outcome {
    /// Whether a drag took place (used for click suppression).
    #[must_use]
    pub fn is_drag(self) -> bool {
        !matches!(self, Self::Tap(_))
    }
}

/// One active pointer/touch interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    start: Point,
    last_pan_point: Point,
    phase: Phase,
}

impl GestureSession {
    /// Starts a session at `position`.
    #[must_use]
    pub fn begin(position: Point, zoomed: bool) -> Self {
        let intent = if zoomed { Intent::Pan } else { Intent::Swipe };
        Self {
            start: position,
            last_pan_point: position,
            phase: Phase::Pending(intent),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn is_pan(&self) -> bool {
        matches!(self.phase, Phase::Pending(Intent::Pan) | Phase::Panning)
    }

    /// Records pointer movement.
    ///
    /// Returns the pan delta since the previous pan point for pan sessions,
    /// `None` for swipe sessions (which never mutate the view while moving).
    /// Jitter within [`TAP_SLOP`] of the press point keeps the session pending.
    pub fn update(&mut self, position: Point) -> Option<(f32, f32)> {
        if matches!(self.phase, Phase::Pending(_)) && self.start.distance(position) <= TAP_SLOP {
            return None;
        }
        if self.is_pan() {
            let delta = (
                position.x - self.last_pan_point.x,
                position.y - self.last_pan_point.y,
            );
            self.last_pan_point = position;
            self.phase = Phase::Panning;
            Some(delta)
        } else {
            self.last_pan_point = position;
            self.phase = Phase::Swiping;
            None
        }
    }

    /// Ends the session at `position` and classifies it.
    #[must_use]
    pub fn finish(self, position: Point) -> Outcome {
        match self.phase {
            Phase::Pending(_) => Outcome::Tap(self.start),
            Phase::Panning => Outcome::PanEnded,
            Phase::Swiping => {
                let dx = position.x - self.start.x;
                let dy = position.y - self.start.y;
                if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
                    if dx > 0.0 {
                        Outcome::SwipePrevious
                    } else {
                        Outcome::SwipeNext
                    }
                } else {
                    Outcome::Dragged
                }
            }
        }
    }
}
