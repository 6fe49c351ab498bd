// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer widget and the
//! desktop window.
//!
//! The `App` struct wires together the gallery viewer and persisted
//! preferences, translates viewer effects into runtime tasks (image decoding,
//! window mode changes), and owns the main `update`/`view` loops.

pub mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::viewer::component::{self, LoadRequest};
use crate::ui::viewer;
use iced::{window, Element, Subscription, Task, Theme};

/// Root Iced application state.
pub struct App {
    viewer: component::State,
    config: Config,
    window_id: Option<window::Id>,
    start_fullscreen: bool,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the viewer and hands it the initial image list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            viewer: component::State::new(flags.viewer),
            config: flags.config,
            window_id: None,
            start_fullscreen: flags.fullscreen,
        };

        tracing::info!("Starting gallery with {} image(s)", flags.images.len());
        let effect = app
            .viewer
            .handle(component::Message::SetImages(flags.images));
        let task = app.perform(effect);
        (app, task)
    }

    fn title(&self) -> String {
        match self
            .viewer
            .current_index()
            .and_then(|index| self.viewer.images().get(index))
        {
            Some(image) => format!("{} - Iced Gallery", image.display_name()),
            None => "Iced Gallery".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(self.window_id.is_some()),
            subscription::create_viewer_subscription(&self.viewer),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                let toggles_autoplay =
                    matches!(viewer_message, component::Message::ToggleAutoplay);
                let effect = self.viewer.handle(viewer_message);
                if toggles_autoplay {
                    self.persist_autoplay();
                }
                self.perform(effect)
            }
            Message::WindowDiscovered(id) => {
                if self.window_id.is_some() {
                    return Task::none();
                }
                self.window_id = Some(id);
                if self.start_fullscreen {
                    self.start_fullscreen = false;
                    let effect = self.viewer.handle(component::Message::OpenFullscreen);
                    return self.perform(effect);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        viewer::view(&self.viewer).map(Message::Viewer)
    }

    /// Translates a viewer effect into runtime work.
    fn perform(&self, effect: component::Effect) -> Task<Message> {
        match effect {
            component::Effect::None => Task::none(),
            component::Effect::IndexChanged(request) => load_task(request),
            component::Effect::SessionChanged { open, fullscreen } => {
                tracing::info!(open, fullscreen, "Viewer session changed");
                self.window_mode_task(fullscreen)
            }
        }
    }

    fn window_mode_task(&self, fullscreen: bool) -> Task<Message> {
        let Some(window_id) = self.window_id else {
            return Task::none();
        };
        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    /// Remembers the autoplay choice for the next launch.
    fn persist_autoplay(&mut self) {
        self.config.autoplay.enabled = Some(self.viewer.autoplay_enabled());
        if let Err(err) = config::save(&self.config) {
            tracing::warn!("Failed to save preferences: {err}");
        }
    }
}

/// Decodes the requested image off the update loop.
fn load_task(request: LoadRequest) -> Task<Message> {
    let LoadRequest { ticket, image } = request;
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_image(&image))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result: Result<ImageData, Error>| {
            Message::Viewer(component::Message::ImageLoaded { ticket, result })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::media::ImageRef;

    fn app_with(images: &[&str]) -> App {
        let (app, _task) = App::new(Flags {
            images: images.iter().map(|name| ImageRef::from(*name)).collect(),
            config: Config::default(),
            viewer: ViewerConfig::default(),
            fullscreen: false,
        });
        app
    }

    #[test]
    fn boot_selects_first_image() {
        let app = app_with(&["a.png", "b.png"]);
        assert_eq!(app.viewer.current_index(), Some(0));
        assert!(app.viewer.is_loading());
        assert_eq!(app.title(), "a.png - Iced Gallery");
    }

    #[test]
    fn title_without_images() {
        let app = app_with(&[]);
        assert_eq!(app.title(), "Iced Gallery");
    }

    #[test]
    fn fullscreen_waits_for_window() {
        let (mut app, _task) = App::new(Flags {
            images: vec![ImageRef::from("a.png")],
            fullscreen: true,
            ..Flags::default()
        });
        assert!(!app.viewer.is_fullscreen());

        let _ = app.update(Message::WindowDiscovered(window::Id::unique()));
        assert!(app.viewer.is_fullscreen());
        assert!(app.viewer.holds_scroll_lock());
    }

    #[test]
    fn viewer_messages_are_forwarded() {
        let mut app = app_with(&["a.png", "b.png", "c.png"]);
        let _ = app.update(Message::Viewer(component::Message::Next));
        assert_eq!(app.viewer.current_index(), Some(1));
    }
}
