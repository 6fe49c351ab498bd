// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom buttons, position counter, autoplay and fullscreen
//! toggles, and the thumbnail strip.

use crate::media::ImageRef;
use crate::ui::viewer::component::Message;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, Row, Space, Text},
    Element, Length,
};

/// Longest thumbnail label before it is shortened.
const THUMBNAIL_LABEL_MAX_CHARS: usize = 16;

pub struct ViewModel {
    pub current_index: Option<usize>,
    pub total_count: usize,
    pub zoom: f32,
    pub allow_zoom: bool,
    pub autoplay_enabled: bool,
    pub is_fullscreen: bool,
    pub show_fullscreen_button: bool,
}

pub fn view<'a>(model: ViewModel) -> Element<'a, Message> {
    let counter = match model.current_index {
        Some(index) => format!("{} / {}", index + 1, model.total_count),
        None => "0 / 0".to_string(),
    };

    let zoom_out = button(Text::new("−")).padding([6, 12]);
    let zoom_out = if model.zoom > 1.0 {
        zoom_out.on_press(Message::ZoomOut)
    } else {
        zoom_out
    };

    let zoom_in = button(Text::new("+")).padding([6, 12]);
    let zoom_in = if model.allow_zoom {
        zoom_in.on_press(Message::ZoomIn)
    } else {
        zoom_in
    };

    let reset = button(Text::new(format!("{:.0}%", model.zoom * 100.0)))
        .on_press(Message::ResetZoom)
        .padding([6, 12]);

    let autoplay_label = if model.autoplay_enabled {
        "⏸ Autoplay"
    } else {
        "▶ Autoplay"
    };
    let autoplay = button(Text::new(autoplay_label))
        .on_press(Message::ToggleAutoplay)
        .padding([6, 12]);

    let mut row = Row::new()
        .spacing(10)
        .padding(10)
        .align_y(Vertical::Center)
        .push(Text::new(counter))
        .push(Space::new().width(Length::Fixed(16.0)))
        .push(zoom_out)
        .push(reset)
        .push(zoom_in)
        .push(Space::new().width(Length::Fill))
        .push(autoplay);

    if model.show_fullscreen_button {
        let (label, message) = if model.is_fullscreen {
            ("Exit fullscreen", Message::ExitFullscreen)
        } else {
            ("Fullscreen", Message::OpenFullscreen)
        };
        row = row.push(button(Text::new(label)).on_press(message).padding([6, 12]));
    }

    row.into()
}

/// Horizontal strip with one entry per image; the current one is highlighted.
pub fn thumbnails<'a>(images: &'a [ImageRef], current: Option<usize>) -> Element<'a, Message> {
    let strip = images
        .iter()
        .enumerate()
        .fold(Row::new().spacing(6).padding(6), |row, (index, image)| {
            let label = Text::new(thumbnail_label(image)).size(12);
            let entry = if Some(index) == current {
                button(label).style(button::primary)
            } else {
                button(label).style(button::secondary)
            };
            row.push(entry.on_press(Message::SelectIndex(index)).padding([4, 8]))
        });

    scrollable(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}

fn thumbnail_label(image: &ImageRef) -> String {
    if image.is_fallback() {
        return "⚠".to_string();
    }
    let name = image.display_name();
    if name.chars().count() <= THUMBNAIL_LABEL_MAX_CHARS {
        name.to_string()
    } else {
        let short: String = name.chars().take(THUMBNAIL_LABEL_MAX_CHARS - 1).collect();
        format!("{short}…")
    }
}
