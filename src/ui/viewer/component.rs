// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the single viewer state and composes the nested
//! sub-components. All mutation happens in [`State::handle_at`]; the host
//! feeds it messages and performs the returned [`Effect`]s.

use crate::config::{ViewerConfig, TICK_INTERVAL_MS};
use crate::error::Error;
use crate::image_navigation::{ImageSequence, LoadTicket};
use crate::media::{ImageData, ImageRef};
use crate::ui::state::{PanOffset, ScrollLock};
use crate::ui::viewer::state as geometry;
use crate::ui::viewer::subcomponents::keyboard::{self as keys, Command};
use crate::ui::viewer::subcomponents::navigation::Direction;
use crate::ui::viewer::subcomponents::{autoplay, drag, loading, navigation, session, zoom};
use iced::{event, keyboard, mouse, time, touch, Point, Rectangle, Size, Subscription};
use std::time::{Duration, Instant};

pub use crate::ui::viewer::subcomponents::loading::LoadRequest;

/// Messages accepted by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the image list; resets to the first image with zoom cleared.
    SetImages(Vec<ImageRef>),
    SelectIndex(usize),
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Click-to-zoom at fractions of the displayed image.
    ZoomAtPoint { fx: f32, fy: f32 },
    /// Pan the zoomed image by a raw pointer delta.
    Pan { dx: f32, dy: f32 },
    /// Pointer moved over the image area of the given size.
    PointerMoved { position: Point, area: Size },
    /// Pointer or finger pressed at a position inside the image area.
    PointerPressed(Point),
    PointerReleased,
    /// The interaction was lost (pointer left the window, touch cancelled).
    PointerCancelled,
    /// Click at a position inside the image area.
    Clicked(Point),
    /// Timer tick driving autoplay and the load timeout.
    Tick(Instant),
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    },
    OpenViewer,
    OpenFullscreen,
    ExitFullscreen,
    Close,
    ToggleAutoplay,
    /// Tear the widget down; every later message is ignored.
    Dispose,
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The current index changed; load the requested image and refresh
    /// thumbnail highlighting and arrows.
    IndexChanged(LoadRequest),
    /// Presentation changed (modal open/closed, fullscreen on/off).
    SessionChanged { open: bool, fullscreen: bool },
}

/// Global listeners the viewer currently needs.
///
/// The iced subscription is derived from this, so a listener exists exactly
/// while its flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Listeners {
    /// Key presses, while the viewer is open.
    pub keyboard: bool,
    /// Release/cancel tracking outside the image, while a gesture runs.
    /// Moves outside the image are reported by the pane itself.
    pub pointer_tracking: bool,
    /// Periodic tick for the autoplay deadline.
    pub autoplay_timer: bool,
    /// Periodic tick for the load timeout.
    pub load_timer: bool,
}

impl Listeners {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Complete viewer state.
///
/// Not `Clone`: it may own the page scroll lock. Dropping it disposes it.
#[derive(Debug)]
pub struct State {
    config: ViewerConfig,
    navigation: navigation::State,
    loading: loading::State,
    zoom: zoom::State,
    drag: drag::State,
    autoplay: autoplay::State,
    session: session::State,
    /// Last known size of the image area.
    area: Option<Size>,
    disposed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl State {
    /// Creates a viewer with its own scroll lock.
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_scroll_lock(config, ScrollLock::new())
    }

    /// Creates a viewer sharing the host's page scroll lock.
    #[must_use]
    pub fn with_scroll_lock(config: ViewerConfig, scroll_lock: ScrollLock) -> Self {
        Self {
            config,
            navigation: navigation::State::default(),
            loading: loading::State::default(),
            zoom: zoom::State::new(config.allow_zoom),
            drag: drag::State::default(),
            autoplay: autoplay::State::new(config.auto_play, config.autoplay_delay),
            session: session::State::new(scroll_lock),
            area: None,
            disposed: false,
        }
    }

    /// Handles a message at the current time.
    pub fn handle(&mut self, message: Message) -> Effect {
        self.handle_at(message, Instant::now())
    }

    /// Handles a message as if it arrived at `now`.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Effect {
        if self.disposed {
            return Effect::None;
        }

        match message {
            Message::SetImages(images) => {
                let effect = self.navigation.handle(navigation::Message::SetImages(images));
                self.zoom.handle(zoom::Message::Reset);
                self.drag.reset();
                self.autoplay.handle(autoplay::Message::Stop);
                self.autoplay.handle(autoplay::Message::Start {
                    at: now,
                    len: self.navigation.len(),
                });
                match effect {
                    navigation::Effect::ListReplaced(Some(ticket)) => {
                        self.request_load(ticket, now)
                    }
                    _ => {
                        self.loading.handle(loading::Message::Clear);
                        Effect::None
                    }
                }
            }
            Message::SelectIndex(index) => {
                self.navigate(navigation::Message::Select(index), now, true)
            }
            Message::Next => self.navigate(navigation::Message::Step(Direction::Next), now, true),
            Message::Previous => {
                self.navigate(navigation::Message::Step(Direction::Previous), now, true)
            }
            Message::ZoomIn => self.apply_zoom(zoom::Message::ZoomIn),
            Message::ZoomOut => self.apply_zoom(zoom::Message::ZoomOut),
            Message::ResetZoom => self.apply_zoom(zoom::Message::Reset),
            Message::ZoomAtPoint { fx, fy } => self.apply_zoom(zoom::Message::ZoomAtPoint { fx, fy }),
            Message::Pan { dx, dy } => self.apply_zoom(zoom::Message::Pan { dx, dy }),
            Message::PointerMoved { position, area } => {
                self.area = Some(area);
                let effect = self.drag.handle(drag::Message::Move(position));
                self.apply_gesture(effect, now)
            }
            Message::PointerPressed(position) => {
                self.drag.handle(drag::Message::Press {
                    position,
                    zoomed: self.zoom.is_zoomed(),
                });
                Effect::None
            }
            Message::PointerReleased => {
                let effect = self.drag.handle(drag::Message::Release {
                    at: now,
                    zoomed: self.zoom.is_zoomed(),
                });
                self.apply_gesture(effect, now)
            }
            Message::PointerCancelled => {
                self.drag.handle(drag::Message::Cancel { at: now });
                Effect::None
            }
            Message::Clicked(position) => {
                let effect = self.drag.handle(drag::Message::Click {
                    position,
                    zoomed: self.zoom.is_zoomed(),
                    at: now,
                });
                self.apply_gesture(effect, now)
            }
            Message::Tick(at) => {
                if let loading::Effect::Failed { ticket } =
                    self.loading.handle(loading::Message::Tick(at))
                {
                    self.apply_fallback(ticket);
                }
                match self.autoplay.handle(autoplay::Message::Tick(at)) {
                    autoplay::Effect::Advance => {
                        self.navigate(navigation::Message::Step(Direction::Next), at, false)
                    }
                    autoplay::Effect::None => Effect::None,
                }
            }
            Message::ImageLoaded { ticket, result } => {
                if let loading::Effect::Failed { ticket } =
                    self.loading.handle(loading::Message::Completed { ticket, result })
                {
                    self.apply_fallback(ticket);
                }
                Effect::None
            }
            Message::KeyPressed { key, modifiers } => {
                let command = keys::route(
                    &key,
                    modifiers,
                    self.session.is_active(),
                    self.config.allow_zoom,
                );
                match command {
                    Some(Command::Previous) => self.handle_at(Message::Previous, now),
                    Some(Command::Next) => self.handle_at(Message::Next, now),
                    Some(Command::Escape) => self.apply_session(session::Message::Escape),
                    Some(Command::ZoomIn) => self.apply_zoom(zoom::Message::ZoomIn),
                    Some(Command::ZoomOut) => self.apply_zoom(zoom::Message::ZoomOut),
                    Some(Command::ResetZoom) => self.apply_zoom(zoom::Message::Reset),
                    None => Effect::None,
                }
            }
            Message::OpenViewer => self.apply_session(session::Message::OpenViewer),
            Message::OpenFullscreen => self.apply_session(session::Message::OpenFullscreen),
            Message::ExitFullscreen => self.apply_session(session::Message::ExitFullscreen),
            Message::Close => self.apply_session(session::Message::Close),
            Message::ToggleAutoplay => {
                self.autoplay.handle(autoplay::Message::Toggle {
                    at: now,
                    len: self.navigation.len(),
                });
                Effect::None
            }
            Message::Dispose => {
                self.dispose();
                Effect::None
            }
        }
    }

    fn navigate(&mut self, message: navigation::Message, now: Instant, manual: bool) -> Effect {
        let navigation::Effect::IndexChanged(ticket) = self.navigation.handle(message) else {
            return Effect::None;
        };
        self.zoom.handle(zoom::Message::Reset);
        if manual {
            self.autoplay.handle(autoplay::Message::Reset {
                at: now,
                len: self.navigation.len(),
            });
        }
        self.request_load(ticket, now)
    }

    fn request_load(&mut self, ticket: LoadTicket, now: Instant) -> Effect {
        let Some(image) = self.navigation.sequence().get(ticket.index).cloned() else {
            return Effect::None;
        };
        self.loading.handle(loading::Message::Start { ticket, at: now });
        Effect::IndexChanged(LoadRequest { ticket, image })
    }

    fn apply_fallback(&mut self, ticket: LoadTicket) {
        if self.navigation.substitute_fallback(ticket.index) {
            tracing::warn!("Image {} replaced by the fallback image", ticket.index);
        }
    }

    fn apply_gesture(&mut self, effect: drag::Effect, now: Instant) -> Effect {
        match effect {
            drag::Effect::None => Effect::None,
            drag::Effect::Pan { dx, dy } => self.apply_zoom(zoom::Message::Pan { dx, dy }),
            drag::Effect::SwipeNext => {
                self.navigate(navigation::Message::Step(Direction::Next), now, true)
            }
            drag::Effect::SwipePrevious => {
                self.navigate(navigation::Message::Step(Direction::Previous), now, true)
            }
            drag::Effect::Click(position) => {
                let (fx, fy) = self.image_fractions(position);
                self.apply_zoom(zoom::Message::ZoomAtPoint { fx, fy })
            }
            drag::Effect::DoubleClick { was_zoomed } => {
                self.apply_zoom(zoom::Message::DoubleClick { was_zoomed })
            }
        }
    }

    fn apply_zoom(&mut self, message: zoom::Message) -> Effect {
        self.zoom.handle(message);
        Effect::None
    }

    fn apply_session(&mut self, message: session::Message) -> Effect {
        match self.session.handle(message) {
            session::Effect::None => Effect::None,
            session::Effect::Opened { fullscreen } => Effect::SessionChanged {
                open: true,
                fullscreen,
            },
            session::Effect::Closed => {
                self.zoom.handle(zoom::Message::Reset);
                self.drag.reset();
                Effect::SessionChanged {
                    open: false,
                    fullscreen: false,
                }
            }
        }
    }

    /// Position of a click as fractions of the displayed (unzoomed) image.
    fn image_fractions(&self, position: Point) -> (f32, f32) {
        match self.image_rect() {
            Some(rect) => geometry::fractions_in(rect, position),
            None => (0.5, 0.5),
        }
    }

    /// Fitted (unzoomed) rectangle of the displayed image in the image area.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rectangle> {
        let area = self.area?;
        Some(match self.loading.displayed() {
            Some(image) => geometry::fit_rect(area, image_size(image)),
            None => Rectangle::with_size(area),
        })
    }

    /// Stops autoplay, drops any gesture, closes the session (releasing the
    /// scroll lock) and ignores every later message. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.autoplay.handle(autoplay::Message::Stop);
        self.drag.reset();
        self.session.handle(session::Message::Close);
        self.loading.handle(loading::Message::Clear);
        self.disposed = true;
        tracing::debug!("Viewer disposed");
    }

    /// Global listeners currently required.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        if self.disposed {
            return Listeners::default();
        }
        Listeners {
            keyboard: self.session.is_active(),
            pointer_tracking: self.drag.is_dragging(),
            autoplay_timer: self.autoplay.is_running(),
            load_timer: self.loading.is_loading(),
        }
    }

    /// Returns the subscriptions for keyboard routing, drag tracking and timers.
    pub fn subscription(&self) -> Subscription<Message> {
        let listeners = self.listeners();

        let keyboard_subscription = if listeners.keyboard {
            event::listen_with(|event, status, _window| match (event, status) {
                (event::Event::Keyboard(keyboard_event), event::Status::Ignored) => {
                    keys::key_pressed(&keyboard_event)
                        .map(|(key, modifiers)| Message::KeyPressed { key, modifiers })
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let pointer_subscription = if listeners.pointer_tracking {
            // Releases outside the image area still end the gesture.
            event::listen_with(|event, _status, _window| match event {
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                | event::Event::Touch(touch::Event::FingerLifted { .. }) => {
                    Some(Message::PointerReleased)
                }
                event::Event::Mouse(mouse::Event::CursorLeft)
                | event::Event::Touch(touch::Event::FingerLost { .. }) => {
                    Some(Message::PointerCancelled)
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let timer_subscription = if listeners.autoplay_timer || listeners.load_timer {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_subscription, pointer_subscription, timer_subscription])
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        self.navigation.sequence()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        self.navigation.sequence().images()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigation.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.navigation.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.navigation.is_empty()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.navigation.has_previous()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigation.has_next()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f32 {
        self.zoom.level()
    }

    #[must_use]
    pub fn pan_offset(&self) -> PanOffset {
        self.zoom.pan()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.session.is_fullscreen()
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        self.session.is_viewer_open()
    }

    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.session.holds_scroll_lock()
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_enabled()
    }

    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn show_thumbnails(&self) -> bool {
        self.config.show_thumbnails
    }

    #[must_use]
    pub fn show_navigation_arrows(&self) -> bool {
        self.config.show_navigation_arrows
    }

    #[must_use]
    pub fn show_fullscreen_button(&self) -> bool {
        self.config.show_fullscreen_button
    }

    /// Image currently on screen (the placeholder after a failed load).
    #[must_use]
    pub fn displayed_image(&self) -> Option<&ImageData> {
        self.loading.displayed()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[allow(clippy::cast_precision_loss)]
fn image_size(image: &ImageData) -> Size {
    Size::new(image.width as f32, image.height as f32)
}
