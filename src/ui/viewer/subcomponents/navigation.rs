// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: moves through the image sequence with wraparound.

use crate::image_navigation::{ImageSequence, LoadTicket};
use crate::media::ImageRef;

/// Direction of a relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to next image.
    Next,
    /// Navigate to previous image.
    Previous,
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    sequence: ImageSequence,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the whole image list.
    SetImages(Vec<ImageRef>),
    /// Jump to an index.
    Select(usize),
    /// Move one step in a direction.
    Step(Direction),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The current index changed; the new image must be loaded.
    IndexChanged(LoadTicket),
    /// The list was replaced. Carries the ticket of the first image, if any.
    ListReplaced(Option<LoadTicket>),
}

impl State {
    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetImages(images) => {
                self.sequence.replace(images);
                tracing::debug!("Image list replaced ({} image(s))", self.sequence.len());
                Effect::ListReplaced(self.sequence.ticket())
            }
            Message::Select(index) => {
                let index = self.sequence.select(index);
                self.changed(index)
            }
            Message::Step(Direction::Next) => {
                let index = self.sequence.advance();
                self.changed(index)
            }
            Message::Step(Direction::Previous) => {
                let index = self.sequence.retreat();
                self.changed(index)
            }
        }
    }

    fn changed(&self, index: Option<usize>) -> Effect {
        match (index, self.sequence.ticket()) {
            (Some(index), Some(ticket)) => {
                tracing::debug!("Navigated to image {} of {}", index + 1, self.sequence.len());
                Effect::IndexChanged(ticket)
            }
            _ => Effect::None,
        }
    }

    /// Replaces a failed slot with the fallback reference.
    pub fn substitute_fallback(&mut self, index: usize) -> bool {
        self.sequence.substitute(index, ImageRef::fallback())
    }

    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.sequence.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether a previous image exists (navigation wraps, so any list of two or more).
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.sequence.previous_index().is_some()
    }

    /// Whether a next image exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.sequence.next_index().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(count: usize) -> State {
        let mut state = State::default();
        state.handle(Message::SetImages(
            (0..count).map(|i| ImageRef::new(format!("{i}.png"))).collect(),
        ));
        state
    }

    #[test]
    fn set_images_reports_first_ticket() {
        let mut state = State::default();
        let effect = state.handle(Message::SetImages(vec![ImageRef::from("a.png")]));
        assert!(matches!(effect, Effect::ListReplaced(Some(t)) if t.index == 0));
    }

    #[test]
    fn set_empty_images_has_no_ticket() {
        let mut state = state_with(3);
        let effect = state.handle(Message::SetImages(Vec::new()));
        assert_eq!(effect, Effect::ListReplaced(None));
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn step_next_wraps() {
        let mut state = state_with(3);
        let indices: Vec<_> = (0..3)
            .map(|_| match state.handle(Message::Step(Direction::Next)) {
                Effect::IndexChanged(ticket) => ticket.index,
                other => panic!("unexpected effect: {other:?}"),
            })
            .collect();
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn step_previous_wraps_to_last() {
        let mut state = state_with(3);
        let effect = state.handle(Message::Step(Direction::Previous));
        assert!(matches!(effect, Effect::IndexChanged(t) if t.index == 2));
    }

    #[test]
    fn single_image_produces_no_effect() {
        let mut state = state_with(1);
        assert_eq!(state.handle(Message::Step(Direction::Next)), Effect::None);
        assert_eq!(state.handle(Message::Step(Direction::Previous)), Effect::None);
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn select_out_of_range_or_current_is_noop() {
        let mut state = state_with(2);
        assert_eq!(state.handle(Message::Select(0)), Effect::None);
        assert_eq!(state.handle(Message::Select(2)), Effect::None);
        assert!(matches!(
            state.handle(Message::Select(1)),
            Effect::IndexChanged(t) if t.index == 1
        ));
    }

    #[test]
    fn substitute_fallback_marks_slot() {
        let mut state = state_with(2);
        assert!(state.substitute_fallback(1));
        assert!(state
            .sequence()
            .get(1)
            .is_some_and(ImageRef::is_fallback));
    }
}
