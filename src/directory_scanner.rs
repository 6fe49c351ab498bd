// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for turning command-line inputs into an image sequence.
//!
//! Files are kept in the order given; directories are scanned for supported
//! image formats and their entries sorted alphabetically by file name.

use crate::error::Result;
use crate::media::ImageRef;
use std::path::{Path, PathBuf};

/// Image file extensions the host can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Expands files and directories into an ordered image sequence.
///
/// Explicit file arguments are kept even if their extension is unknown; the
/// viewer's load-failure policy handles undecodable files.
///
/// # Errors
///
/// Returns an error if a directory argument cannot be read.
pub fn collect_images<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<ImageRef>> {
    let mut images = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            images.extend(scan_directory(input)?.into_iter().map(ImageRef::from));
        } else {
            images.push(ImageRef::from(input.to_path_buf()));
        }
    }

    Ok(images)
}

/// Scans a directory for supported image files, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(
        "Found {} image(s) in {:?}",
        image_files.len(),
        directory
    );
    Ok(image_files)
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let c = create_test_image(temp_dir.path(), "c.gif");
        let a = create_test_image(temp_dir.path(), "a.jpg");
        let b = create_test_image(temp_dir.path(), "b.PNG");

        let found = scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(found, vec![a, b, c]);
    }

    #[test]
    fn scan_directory_skips_unsupported_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "notes.txt");
        create_test_image(temp_dir.path(), "clip.mp4");
        let image = create_test_image(temp_dir.path(), "photo.webp");

        let found = scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(found, vec![image]);
    }

    #[test]
    fn collect_images_keeps_file_order_and_expands_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("album");
        fs::create_dir(&nested).expect("failed to create nested dir");
        let inner_b = create_test_image(&nested, "b.png");
        let inner_a = create_test_image(&nested, "a.png");
        let outer = create_test_image(temp_dir.path(), "z.jpg");

        let images =
            collect_images(&[outer.clone(), nested.clone(), outer.clone()]).expect("collect failed");

        assert_eq!(
            images,
            vec![
                ImageRef::from(outer.clone()),
                ImageRef::from(inner_a),
                ImageRef::from(inner_b),
                ImageRef::from(outer),
            ]
        );
    }

    #[test]
    fn scan_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = scan_directory(&temp_dir.path().join("missing"));
        assert!(result.is_err());
    }
}
