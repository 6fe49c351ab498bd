// SPDX-License-Identifier: MPL-2.0
//! Derived viewer geometry used by the orchestrator and the pane.
//!
//! The image is fitted inside the viewer area ("contain"), then scaled by the
//! zoom level around its center and translated by the pan offset, expressed
//! in percent of the fitted image size.

use crate::ui::state::PanOffset;
use iced::{Point, Rectangle, Size, Vector};

/// Rectangle of an image of `image` size fitted inside `area`, centered.
///
/// Degenerate sizes yield the whole area.
#[must_use]
pub fn fit_rect(area: Size, image: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 || area.width <= 0.0 || area.height <= 0.0 {
        return Rectangle::with_size(area);
    }
    let scale = (area.width / image.width).min(area.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);
    Rectangle::new(
        Point::new((area.width - size.width) / 2.0, (area.height - size.height) / 2.0),
        size,
    )
}

/// Position of `point` as fractions of `rect` (`0.0` left/top, `1.0` right/bottom).
///
/// Values outside the rectangle fall outside `[0, 1]`; the zoom engine clamps them.
#[must_use]
pub fn fractions_in(rect: Rectangle, point: Point) -> (f32, f32) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.5, 0.5);
    }
    (
        (point.x - rect.x) / rect.width,
        (point.y - rect.y) / rect.height,
    )
}

/// Rectangle where the zoomed and panned image is drawn.
///
/// Scale-then-translate: the fitted rectangle is scaled by `zoom` around its
/// center, then moved by `zoom * pan%` of the fitted size.
#[must_use]
pub fn zoomed_rect(fitted: Rectangle, zoom: f32, pan: PanOffset) -> Rectangle {
    let size = Size::new(fitted.width * zoom, fitted.height * zoom);
    let center = fitted.center();
    let offset = Vector::new(
        zoom * pan.x / 100.0 * fitted.width,
        zoom * pan.y / 100.0 * fitted.height,
    );
    Rectangle::new(
        Point::new(
            center.x - size.width / 2.0 + offset.x,
            center.y - size.height / 2.0 + offset.y,
        ),
        size,
    )
}
