// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the image on a canvas with zoom/pan applied,
//! pointer interaction, and the navigation arrows.
//!
//! Pointer positions are reported relative to the image area. While a
//! gesture runs, moves outside the area keep being reported.

use crate::media::ImageData;
use crate::ui::state::PanOffset;
use crate::ui::viewer::component::Message;
use crate::ui::viewer::state as geometry;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::{button, Action, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, touch, Background, Color, Element, Event, Length, Point, Rectangle, Renderer, Size,
    Theme,
};

const SURFACE_COLOR: Color = Color::from_rgb(0.08, 0.08, 0.08);
const ARROW_SIZE: f32 = 28.0;

pub struct ViewModel<'a> {
    pub image: Option<&'a ImageData>,
    pub zoom: f32,
    pub pan: PanOffset,
    pub is_dragging: bool,
    pub is_zoomed: bool,
    pub is_loading: bool,
    pub show_arrows: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let cursor_interaction = if model.is_dragging && model.is_zoomed {
        mouse::Interaction::Grabbing
    } else if model.is_zoomed {
        mouse::Interaction::Grab
    } else if model.image.is_some() {
        mouse::Interaction::ZoomIn
    } else {
        mouse::Interaction::default()
    };

    let interactive = Canvas::new(ImageCanvas {
        image: model.image,
        zoom: model.zoom,
        pan: model.pan,
        is_dragging: model.is_dragging,
        interaction: cursor_interaction,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let surface = Container::new(interactive)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(SURFACE_COLOR)),
            ..Default::default()
        });

    let mut stack = Stack::new().push(surface);

    if model.is_loading {
        stack = stack.push(
            Container::new(Text::new("Loading…").color(Color::WHITE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    if model.show_arrows {
        if model.has_previous {
            stack = stack.push(arrow("◀", Message::Previous, Horizontal::Left));
        }
        if model.has_next {
            stack = stack.push(arrow("▶", Message::Next, Horizontal::Right));
        }
    }

    stack.into()
}

fn arrow<'a>(label: &'a str, message: Message, side: Horizontal) -> Element<'a, Message> {
    let arrow_button = button(Text::new(label).size(ARROW_SIZE))
        .padding(8)
        .on_press(message);

    Container::new(arrow_button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(12)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

/// Draws the image fitted to the canvas, scaled by the zoom level around its
/// center and translated by the pan offset.
struct ImageCanvas<'a> {
    image: Option<&'a ImageData>,
    zoom: f32,
    pan: PanOffset,
    is_dragging: bool,
    interaction: mouse::Interaction,
}

impl canvas::Program<Message> for ImageCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = pointer_message(event, bounds, cursor, self.is_dragging)?;
        let press = matches!(message, Message::PointerPressed(_));
        let action = Action::publish(message);
        Some(if press { action.and_capture() } else { action })
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            self.interaction
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(image) = self.image {
            #[allow(clippy::cast_precision_loss)]
            let image_size = Size::new(image.width as f32, image.height as f32);
            let fitted = geometry::fit_rect(bounds.size(), image_size);
            let target = geometry::zoomed_rect(fitted, self.zoom, self.pan);

            frame.draw_image(
                target,
                iced::advanced::image::Image {
                    handle: image.handle.clone(),
                    filter_method: iced::advanced::image::FilterMethod::Linear,
                    rotation: iced::Radians(0.0),
                    opacity: 1.0,
                    snap: true,
                    border_radius: iced::border::Radius::default(),
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Translates a window event into a viewer message with a position relative
/// to the image area at `bounds`.
///
/// Presses count only over the area. Moves are reported over the area, and
/// anywhere while a gesture is running. Releases are left to the viewer's
/// drag listener.
fn pointer_message(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    is_dragging: bool,
) -> Option<Message> {
    let relative = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_in(bounds).map(Message::PointerPressed)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => bounds
            .contains(*position)
            .then(|| Message::PointerPressed(relative(*position))),
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            (is_dragging || bounds.contains(*position)).then(|| Message::PointerMoved {
                position: relative(*position),
                area: bounds.size(),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 50.0,
        width: 400.0,
        height: 300.0,
    };

    fn moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn mouse_press_carries_area_relative_position() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(130.0, 90.0));

        match pointer_message(&event, BOUNDS, cursor, false) {
            Some(Message::PointerPressed(position)) => {
                assert_abs_diff_eq!(position.x, 30.0);
                assert_abs_diff_eq!(position.y, 40.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn press_outside_the_area_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(20.0, 20.0));
        assert!(pointer_message(&event, BOUNDS, cursor, false).is_none());
        assert!(pointer_message(&event, BOUNDS, mouse::Cursor::Unavailable, false).is_none());
    }

    #[test]
    fn finger_press_uses_the_touch_position() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(300.0, 200.0),
        });

        // No cursor for touch input: the event position is used.
        match pointer_message(&event, BOUNDS, mouse::Cursor::Unavailable, false) {
            Some(Message::PointerPressed(position)) => {
                assert_abs_diff_eq!(position.x, 200.0);
                assert_abs_diff_eq!(position.y, 150.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn moves_outside_are_reported_only_while_dragging() {
        let cursor = mouse::Cursor::Available(Point::new(600.0, 100.0));
        assert!(pointer_message(&moved(600.0, 100.0), BOUNDS, cursor, false).is_none());

        match pointer_message(&moved(600.0, 100.0), BOUNDS, cursor, true) {
            Some(Message::PointerMoved { position, area }) => {
                assert_abs_diff_eq!(position.x, 500.0);
                assert_abs_diff_eq!(position.y, 50.0);
                assert_eq!(area, BOUNDS.size());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn finger_moves_are_translated_like_mouse_moves() {
        let event = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(90.0, 60.0),
        });

        match pointer_message(&event, BOUNDS, mouse::Cursor::Unavailable, true) {
            Some(Message::PointerMoved { position, .. }) => {
                assert_abs_diff_eq!(position.x, -10.0);
                assert_abs_diff_eq!(position.y, 10.0);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn releases_are_not_handled_by_the_pane() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(130.0, 90.0));
        assert!(pointer_message(&event, BOUNDS, cursor, true).is_none());
    }
}
