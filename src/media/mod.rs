// SPDX-License-Identifier: MPL-2.0
//! Image references and host-side image resolution.

pub mod image;

pub use image::{load_image, ImageData};

use std::fmt;
use std::path::{Path, PathBuf};

/// Reference substituted into a slot whose image failed to load.
pub const FALLBACK_IMAGE_REF: &str = "builtin:fallback";

/// Opaque reference to one image of the gallery.
///
/// The viewer never interprets the reference; only the host resolves it.
/// Sequences may contain the same reference more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates a reference from any string-like value.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The fixed reference used in place of images that failed to load.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_IMAGE_REF.to_string())
    }

    /// Returns true if this is the fallback reference.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_IMAGE_REF
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the reference as a filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Short display name (file name when the reference is a path).
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.as_path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}
