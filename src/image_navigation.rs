// SPDX-License-Identifier: MPL-2.0
//! Image sequence store: the ordered image list, the current index and the
//! load generation used to tag asynchronous load requests.

use crate::media::ImageRef;

/// Identifies the load a completion belongs to.
///
/// The generation increases on every index change and every list replacement,
/// so two tickets are equal only if no navigation happened in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub index: usize,
    pub generation: u64,
}

/// Ordered image list with a current position.
///
/// Invariant: `current < images.len()` whenever the list is non-empty, and
/// `current == 0` when it is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageSequence {
    images: Vec<ImageRef>,
    current: usize,
    generation: u64,
}

impl ImageSequence {
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence positioned on its first image.
    pub fn from_images(images: Vec<ImageRef>) -> Self {
        Self {
            images,
            current: 0,
            generation: 0,
        }
    }

    /// Replaces the list and moves back to the first image.
    pub fn replace(&mut self, images: Vec<ImageRef>) {
        self.images = images;
        self.current = 0;
        self.generation += 1;
    }

    /// Moves to `index`.
    ///
    /// Returns `None` (and changes nothing) when `index` is out of range or
    /// already current.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.images.len() || index == self.current {
            return None;
        }
        self.current = index;
        self.generation += 1;
        Some(index)
    }

    /// Moves to the next image, wrapping to the first after the last one.
    ///
    /// Returns `None` when there is nothing to navigate to (fewer than two images).
    pub fn advance(&mut self) -> Option<usize> {
        let next = self.next_index()?;
        self.select(next)
    }

    /// Moves to the previous image, wrapping to the last before the first one.
    pub fn retreat(&mut self) -> Option<usize> {
        let previous = self.previous_index()?;
        self.select(previous)
    }

    /// Index `next()` would move to.
    pub fn next_index(&self) -> Option<usize> {
        if self.images.len() <= 1 {
            return None;
        }
        Some((self.current + 1) % self.images.len())
    }

    /// Index `previous()` would move to.
    pub fn previous_index(&self) -> Option<usize> {
        let len = self.images.len();
        if len <= 1 {
            return None;
        }
        Some((self.current + len - 1) % len)
    }

    /// Replaces the reference stored at `index`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn substitute(&mut self, index: usize, image: ImageRef) -> bool {
        match self.images.get_mut(index) {
            Some(slot) => {
                *slot = image;
                true
            }
            None => false,
        }
    }

    /// Ticket describing the image that is currently expected to load.
    pub fn ticket(&self) -> Option<LoadTicket> {
        if self.images.is_empty() {
            return None;
        }
        Some(LoadTicket {
            index: self.current,
            generation: self.generation,
        })
    }

    /// Returns the current index, or `None` when the list is empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.images.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Returns the current image reference.
    pub fn current(&self) -> Option<&ImageRef> {
        self.images.get(self.current)
    }

    /// Returns the reference at `index`.
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Checks if the current image is the first in the list.
    pub fn is_at_first(&self) -> bool {
        !self.images.is_empty() && self.current == 0
    }

    /// Checks if the current image is the last in the list.
    pub fn is_at_last(&self) -> bool {
        !self.images.is_empty() && self.current == self.images.len() - 1
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(names: &[&str]) -> ImageSequence {
        ImageSequence::from_images(names.iter().map(|name| ImageRef::from(*name)).collect())
    }

    #[test]
    fn new_sequence_is_empty() {
        let seq = ImageSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.current_index(), None);
        assert_eq!(seq.current(), None);
        assert_eq!(seq.ticket(), None);
    }

    #[test]
    fn select_moves_to_valid_index() {
        let mut seq = sequence(&["a", "b", "c"]);
        assert_eq!(seq.select(2), Some(2));
        assert_eq!(seq.current_index(), Some(2));
        assert_eq!(seq.current(), Some(&ImageRef::from("c")));
    }

    #[test]
    fn select_ignores_out_of_range_and_current_index() {
        let mut seq = sequence(&["a", "b"]);
        let generation = seq.generation();

        assert_eq!(seq.select(5), None);
        assert_eq!(seq.select(0), None);
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.generation(), generation);
    }

    #[test]
    fn advance_wraps_around() {
        let mut seq = sequence(&["a", "b", "c"]);
        assert_eq!(seq.advance(), Some(1));
        assert_eq!(seq.advance(), Some(2));
        assert_eq!(seq.advance(), Some(0));
    }

    #[test]
    fn retreat_wraps_around() {
        let mut seq = sequence(&["a", "b", "c"]);
        assert_eq!(seq.retreat(), Some(2));
        assert_eq!(seq.retreat(), Some(1));
    }

    #[test]
    fn single_image_never_navigates() {
        let mut seq = sequence(&["a"]);
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.retreat(), None);
        assert_eq!(seq.current_index(), Some(0));
    }

    #[test]
    fn cycling_through_every_image_returns_to_start() {
        for len in 2..8 {
            let names: Vec<String> = (0..len).map(|i| format!("img{i}")).collect();
            let mut seq = ImageSequence::from_images(names.into_iter().map(ImageRef::from).collect());
            seq.select(len / 2);
            let start = seq.current_index();
            for _ in 0..len {
                seq.advance();
            }
            assert_eq!(seq.current_index(), start);
        }
    }

    #[test]
    fn replace_resets_position_and_bumps_generation() {
        let mut seq = sequence(&["a", "b", "c"]);
        seq.select(2);
        let before = seq.ticket().expect("non-empty");

        seq.replace(vec![ImageRef::from("x"), ImageRef::from("y")]);

        let after = seq.ticket().expect("non-empty");
        assert_eq!(after.index, 0);
        assert!(after.generation > before.generation);
    }

    #[test]
    fn ticket_changes_on_every_navigation() {
        let mut seq = sequence(&["a", "b"]);
        let first = seq.ticket();
        seq.advance();
        seq.retreat();
        assert_eq!(seq.current_index(), Some(0));
        assert_ne!(seq.ticket(), first);
    }

    #[test]
    fn substitute_replaces_only_valid_slots() {
        let mut seq = sequence(&["a", "b"]);
        assert!(seq.substitute(1, ImageRef::fallback()));
        assert!(!seq.substitute(7, ImageRef::fallback()));
        assert!(seq.get(1).is_some_and(ImageRef::is_fallback));
    }

    #[test]
    fn boundaries_are_detected() {
        let mut seq = sequence(&["a", "b"]);
        assert!(seq.is_at_first());
        assert!(!seq.is_at_last());
        seq.advance();
        assert!(!seq.is_at_first());
        assert!(seq.is_at_last());
    }
}
