// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the host: turns an [`ImageRef`] into displayable data.

use super::ImageRef;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// Side length of the built-in placeholder shown for failed images.
const PLACEHOLDER_SIZE: u32 = 64;

/// Gray tones of the placeholder checker pattern.
const PLACEHOLDER_LIGHT: [u8; 4] = [0x9e, 0x9e, 0x9e, 0xff];
const PLACEHOLDER_DARK: [u8; 4] = [0x61, 0x61, 0x61, 0xff];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// The image displayed for the fallback reference.
    #[must_use]
    pub fn placeholder() -> Self {
        let tile = PLACEHOLDER_SIZE / 8;
        let mut pixels = Vec::with_capacity((PLACEHOLDER_SIZE * PLACEHOLDER_SIZE * 4) as usize);
        for y in 0..PLACEHOLDER_SIZE {
            for x in 0..PLACEHOLDER_SIZE {
                let color = if (x / tile + y / tile) % 2 == 0 {
                    PLACEHOLDER_LIGHT
                } else {
                    PLACEHOLDER_DARK
                };
                pixels.extend_from_slice(&color);
            }
        }
        Self::from_rgba(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, pixels)
    }
}

/// Resolves an image reference into decoded image data.
///
/// The fallback reference resolves to the built-in placeholder; any other
/// reference is read as a file path and decoded.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its content cannot be decoded.
pub fn load_image(image_ref: &ImageRef) -> Result<ImageData> {
    if image_ref.is_fallback() {
        return Ok(ImageData::placeholder());
    }
    load_image_from_path(image_ref.as_path())
}

/// Reads and decodes an image file.
pub fn load_image_from_path<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    tracing::debug!("Loading image: {:?}", path);

    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("Image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image.save(&image_path).expect("failed to write png");

        let data = load_image(&ImageRef::from(image_path)).expect("failed to load png");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing.png");

        let result = load_image(&ImageRef::from(missing));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_corrupted_file_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("failed to write file");

        let result = load_image(&ImageRef::from(path));
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn fallback_reference_resolves_to_placeholder() {
        let data = load_image(&ImageRef::fallback()).expect("fallback never fails");
        assert_eq!(data.width, PLACEHOLDER_SIZE);
        assert_eq!(data.height, PLACEHOLDER_SIZE);
    }
}
