// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing while the viewer is open.

use iced::keyboard::{self, key::Named, Key, Modifiers};

/// Viewer operation bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    /// Exit fullscreen if set, otherwise close the modal.
    Escape,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// Maps a key press to a viewer command.
///
/// Returns `None` when the viewer is inactive, when command/alt modifiers are
/// held (those belong to the host), or when the key is not bound. A `Some`
/// result means the key is captured and its default behavior suppressed.
#[must_use]
pub fn route(key: &Key, modifiers: Modifiers, active: bool, allow_zoom: bool) -> Option<Command> {
    if !active || modifiers.command() || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Named(Named::Escape) => Some(Command::Escape),
        Key::Character(c) => match c.as_str() {
            "+" | "=" if allow_zoom => Some(Command::ZoomIn),
            "-" => Some(Command::ZoomOut),
            "0" => Some(Command::ResetZoom),
            _ => None,
        },
        _ => None,
    }
}

/// Extracts the pressed key from a raw keyboard event.
#[must_use]
pub fn key_pressed(event: &keyboard::Event) -> Option<(Key, Modifiers)> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Some((key.clone(), *modifiers)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn arrows_navigate() {
        assert_eq!(
            route(&Key::Named(Named::ArrowLeft), Modifiers::empty(), true, true),
            Some(Command::Previous)
        );
        assert_eq!(
            route(&Key::Named(Named::ArrowRight), Modifiers::empty(), true, true),
            Some(Command::Next)
        );
    }

    #[test]
    fn escape_is_routed() {
        assert_eq!(
            route(&Key::Named(Named::Escape), Modifiers::empty(), true, false),
            Some(Command::Escape)
        );
    }

    #[test]
    fn zoom_keys_are_routed() {
        for key in ["+", "="] {
            assert_eq!(
                route(&character(key), Modifiers::empty(), true, true),
                Some(Command::ZoomIn)
            );
        }
        assert_eq!(
            route(&character("-"), Modifiers::empty(), true, true),
            Some(Command::ZoomOut)
        );
        assert_eq!(
            route(&character("0"), Modifiers::empty(), true, true),
            Some(Command::ResetZoom)
        );
    }

    #[test]
    fn zoom_in_requires_allow_zoom() {
        assert_eq!(route(&character("+"), Modifiers::empty(), true, false), None);
        assert_eq!(
            route(&character("-"), Modifiers::empty(), true, false),
            Some(Command::ZoomOut)
        );
    }

    #[test]
    fn inactive_viewer_ignores_keys() {
        assert_eq!(
            route(&Key::Named(Named::ArrowRight), Modifiers::empty(), false, true),
            None
        );
    }

    #[test]
    fn command_and_alt_chords_are_not_routed() {
        assert_eq!(route(&character("0"), Modifiers::COMMAND, true, true), None);
        assert_eq!(
            route(&Key::Named(Named::ArrowLeft), Modifiers::ALT, true, true),
            None
        );
    }

    #[test]
    fn only_presses_are_extracted() {
        let modifiers_changed = keyboard::Event::ModifiersChanged(Modifiers::SHIFT);
        assert_eq!(key_pressed(&modifiers_changed), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(route(&character("x"), Modifiers::empty(), true, true), None);
        assert_eq!(
            route(&Key::Named(Named::Space), Modifiers::empty(), true, true),
            None
        );
    }
}
