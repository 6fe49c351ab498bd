// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer: image pane, controls and thumbnail strip.

pub mod component;
pub mod controls;
pub mod pane;
pub mod state;
pub mod subcomponents;

use self::component::Message;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Renders the whole viewer from its state.
pub fn view(viewer: &component::State) -> Element<'_, Message> {
    if viewer.is_empty() {
        return Container::new(Text::new("No images"))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let pane = pane::view(pane::ViewModel {
        image: viewer.displayed_image(),
        zoom: viewer.zoom_level(),
        pan: viewer.pan_offset(),
        is_dragging: viewer.is_dragging(),
        is_zoomed: viewer.is_zoomed(),
        is_loading: viewer.is_loading(),
        show_arrows: viewer.show_navigation_arrows(),
        has_previous: viewer.has_previous(),
        has_next: viewer.has_next(),
    });

    let controls = controls::view(controls::ViewModel {
        current_index: viewer.current_index(),
        total_count: viewer.len(),
        zoom: viewer.zoom_level(),
        allow_zoom: viewer.config().allow_zoom,
        autoplay_enabled: viewer.autoplay_enabled(),
        is_fullscreen: viewer.is_fullscreen(),
        show_fullscreen_button: viewer.show_fullscreen_button(),
    });

    let mut layout = Column::new()
        .push(session_bar(viewer))
        .push(pane)
        .push(controls);

    if viewer.show_thumbnails() {
        layout = layout.push(controls::thumbnails(
            viewer.images(),
            viewer.current_index(),
        ));
    }

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::dark)
        .into()
}

fn session_bar(viewer: &component::State) -> Element<'_, Message> {
    let title = viewer
        .current_index()
        .and_then(|index| viewer.images().get(index))
        .map(|image| image.display_name().to_string())
        .unwrap_or_default();

    let toggle = if viewer.is_viewer_open() {
        button(Text::new("Close")).on_press(Message::Close)
    } else {
        button(Text::new("Open viewer")).on_press(Message::OpenViewer)
    };

    Row::new()
        .spacing(10)
        .padding(10)
        .align_y(Vertical::Center)
        .push(Text::new(title))
        .push(Space::new().width(Length::Fill))
        .push(toggle.padding([6, 12]))
        .into()
}
