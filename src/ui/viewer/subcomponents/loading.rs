// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component: tracks the pending image load, rejects stale
//! completions and detects stuck loads.

use crate::config::LOADING_TIMEOUT_SECS;
use crate::error::Error;
use crate::image_navigation::LoadTicket;
use crate::media::{ImageData, ImageRef};
use std::time::{Duration, Instant};

/// Timeout before a pending load is treated as failed.
const LOADING_TIMEOUT: Duration = Duration::from_secs(LOADING_TIMEOUT_SECS);

/// Request for the host to resolve and decode an image.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub image: ImageRef,
}

/// Loading state for the viewer.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ticket of the load whose completion is awaited.
    pending: Option<LoadTicket>,
    /// When loading started (for timeout detection).
    started_at: Option<Instant>,
    /// Image currently on screen.
    displayed: Option<ImageData>,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new load was requested; older completions become stale.
    Start { ticket: LoadTicket, at: Instant },
    /// The host finished a load.
    Completed {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    /// Periodic check for stuck loads.
    Tick(Instant),
    /// Forget everything (empty list or teardown).
    Clear,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The loaded image is now displayed.
    Displayed,
    /// The load failed or timed out; the slot must fall back.
    Failed { ticket: LoadTicket },
    /// The completion belonged to an older request and was dropped.
    Stale,
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start { ticket, at } => {
                self.pending = Some(ticket);
                self.started_at = Some(at);
                Effect::None
            }
            Message::Completed { ticket, result } => {
                if self.pending != Some(ticket) {
                    tracing::debug!(
                        "Dropping stale load completion for image {} (generation {})",
                        ticket.index,
                        ticket.generation
                    );
                    return Effect::Stale;
                }
                self.stop();
                match result {
                    Ok(image) => {
                        self.displayed = Some(image);
                        Effect::Displayed
                    }
                    Err(err) => {
                        tracing::warn!("Failed to load image {}: {}", ticket.index, err);
                        self.show_placeholder();
                        Effect::Failed { ticket }
                    }
                }
            }
            Message::Tick(now) => {
                let (Some(ticket), Some(started)) = (self.pending, self.started_at) else {
                    return Effect::None;
                };
                if now.saturating_duration_since(started) > LOADING_TIMEOUT {
                    tracing::warn!(
                        "Loading image {} timed out after {}s",
                        ticket.index,
                        LOADING_TIMEOUT_SECS
                    );
                    self.stop();
                    self.show_placeholder();
                    return Effect::Failed { ticket };
                }
                Effect::None
            }
            Message::Clear => {
                self.stop();
                self.displayed = None;
                Effect::None
            }
        }
    }

    fn stop(&mut self) {
        self.pending = None;
        self.started_at = None;
    }

    fn show_placeholder(&mut self) {
        self.displayed = Some(ImageData::placeholder());
    }

    /// Check if currently loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<LoadTicket> {
        self.pending
    }

    /// Get when loading started (if currently loading).
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&ImageData> {
        self.displayed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(index: usize, generation: u64) -> LoadTicket {
        LoadTicket { index, generation }
    }

    fn image() -> ImageData {
        ImageData::from_rgba(2, 1, vec![0; 8])
    }

    #[test]
    fn start_loading_sets_state() {
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::Start {
            ticket: ticket(0, 1),
            at: Instant::now(),
        });

        assert!(state.is_loading());
        assert!(state.started_at().is_some());
    }

    #[test]
    fn matching_completion_displays_image() {
        let mut state = State::default();
        state.handle(Message::Start {
            ticket: ticket(0, 1),
            at: Instant::now(),
        });

        let effect = state.handle(Message::Completed {
            ticket: ticket(0, 1),
            result: Ok(image()),
        });

        assert_eq!(effect, Effect::Displayed);
        assert!(!state.is_loading());
        assert_eq!(state.displayed().map(|d| d.width), Some(2));
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = State::default();
        state.handle(Message::Start {
            ticket: ticket(1, 2),
            at: Instant::now(),
        });

        let effect = state.handle(Message::Completed {
            ticket: ticket(0, 1),
            result: Ok(image()),
        });

        assert_eq!(effect, Effect::Stale);
        assert!(state.is_loading());
        assert!(state.displayed().is_none());
    }

    #[test]
    fn failed_completion_shows_placeholder() {
        let mut state = State::default();
        state.handle(Message::Start {
            ticket: ticket(0, 1),
            at: Instant::now(),
        });

        let effect = state.handle(Message::Completed {
            ticket: ticket(0, 1),
            result: Err(Error::Image("corrupt".into())),
        });

        assert_eq!(effect, Effect::Failed { ticket: ticket(0, 1) });
        assert!(!state.is_loading());
        assert!(state.displayed().is_some());
    }

    #[test]
    fn tick_after_timeout_fails_the_load() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle(Message::Start {
            ticket: ticket(0, 1),
            at: start,
        });

        assert_eq!(state.handle(Message::Tick(start + Duration::from_secs(5))), Effect::None);
        let effect = state.handle(Message::Tick(start + Duration::from_secs(11)));

        assert_eq!(effect, Effect::Failed { ticket: ticket(0, 1) });
        assert!(!state.is_loading());

        // The late completion is now stale.
        let late = state.handle(Message::Completed {
            ticket: ticket(0, 1),
            result: Ok(image()),
        });
        assert_eq!(late, Effect::Stale);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut state = State::default();
        state.handle(Message::Start {
            ticket: ticket(0, 1),
            at: Instant::now(),
        });
        state.handle(Message::Clear);

        assert!(!state.is_loading());
        assert!(state.displayed().is_none());
    }
}
