// SPDX-License-Identifier: MPL-2.0
//! Autoplay sub-component: a cancellable repeating deadline that advances the
//! gallery.
//!
//! The scheduler never reads the clock itself. Every message carries the
//! instant it refers to, so the same code runs against the iced tick
//! subscription and against simulated time in tests.

use crate::ui::state::AutoplayDelay;
use std::time::Instant;

/// Autoplay sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether autoplay is switched on.
    enabled: bool,
    /// Period between two advances.
    delay: AutoplayDelay,
    /// Next deadline; `Some` exactly while the timer is armed.
    next_due: Option<Instant>,
}

/// Messages for the autoplay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Arm the timer if enabled and there is something to advance to.
    Start { at: Instant, len: usize },
    /// Disarm the timer.
    Stop,
    /// Restart the period after a manual navigation.
    Reset { at: Instant, len: usize },
    /// Flip the enabled flag and arm or disarm accordingly.
    Toggle { at: Instant, len: usize },
    /// Poll the deadline.
    Tick(Instant),
}

/// Effects produced by the autoplay scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The deadline passed: advance to the next image.
    Advance,
}

impl State {
    #[must_use]
    pub fn new(enabled: bool, delay: AutoplayDelay) -> Self {
        Self {
            enabled,
            delay,
            next_due: None,
        }
    }

    /// Handle an autoplay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start { at, len } => {
                self.start(at, len);
                Effect::None
            }
            Message::Stop => {
                self.stop();
                Effect::None
            }
            Message::Reset { at, len } => {
                if self.is_running() {
                    self.stop();
                    self.start(at, len);
                }
                Effect::None
            }
            Message::Toggle { at, len } => {
                self.enabled = !self.enabled;
                if self.enabled {
                    self.start(at, len);
                } else {
                    self.stop();
                }
                tracing::info!("Autoplay {}", if self.enabled { "enabled" } else { "disabled" });
                Effect::None
            }
            Message::Tick(now) => {
                let Some(due) = self.next_due else {
                    return Effect::None;
                };
                if now < due {
                    return Effect::None;
                }
                let period = self.delay.as_duration();
                let mut next = due + period;
                if next <= now {
                    // Polling fell behind; skip the missed deadlines.
                    next = now + period;
                }
                self.next_due = Some(next);
                Effect::Advance
            }
        }
    }

    fn start(&mut self, at: Instant, len: usize) {
        if !self.enabled || len <= 1 || self.is_running() {
            return;
        }
        self.next_due = Some(at + self.delay.as_duration());
        tracing::debug!("Autoplay armed ({} ms)", self.delay.millis());
    }

    fn stop(&mut self) {
        if self.next_due.take().is_some() {
            tracing::debug!("Autoplay disarmed");
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the timer is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    #[must_use]
    pub fn delay(&self) -> AutoplayDelay {
        self.delay
    }
}
