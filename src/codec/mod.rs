// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image loading and writing, dispatched on the file extension.
//!
//! Only the literal, case sensitive suffixes `.png` and `.qoi` are recognized.
//! The file content is never sniffed.

pub mod png;
pub mod qoi;

use log::debug;
use std::path::{Path, PathBuf};

use crate::core::buffer::ImageBuffer;
use crate::error::CodecError;

/// File formats known to the loader and the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Qoi,
    Unsupported,
}

impl Format {
    /// Resolve the format of a path from its suffix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().to_str() {
            Some(p) if p.ends_with(".png") => Format::Png,
            Some(p) if p.ends_with(".qoi") => Format::Qoi,
            _ => Format::Unsupported,
        }
    }
}

/// Decode the image at `path` into an RGBA buffer, reporting why it failed.
pub fn try_load<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, CodecError> {
    let path = path.as_ref();
    match Format::from_path(path) {
        Format::Png => png::read_rgba(path),
        Format::Qoi => qoi::read_rgba(path),
        Format::Unsupported => Err(CodecError::UnsupportedFormat(PathBuf::from(path))),
    }
}

/// Decode the image at `path` into an RGBA buffer.
/// Any failure gives the empty buffer.
pub fn load<P: AsRef<Path>>(path: P) -> ImageBuffer {
    let path = path.as_ref();
    try_load(path).unwrap_or_else(|error| {
        debug!("cannot load {}: {}", path.display(), error);
        ImageBuffer::empty()
    })
}

/// Encode `img` into the file at `path`, reporting why it failed.
///
/// Nothing is created on disk for an unsupported extension or an empty image.
pub fn try_write<P: AsRef<Path>>(img: &ImageBuffer, path: P) -> Result<(), CodecError> {
    let path = path.as_ref();
    let format = Format::from_path(path);
    if format != Format::Unsupported && img.is_empty() {
        return Err(CodecError::EmptyImage);
    }
    match format {
        Format::Png => png::write_rgba(img, path),
        Format::Qoi => qoi::write_rgba(img, path),
        Format::Unsupported => Err(CodecError::UnsupportedFormat(PathBuf::from(path))),
    }
}

/// Encode `img` into the file at `path`, true on success.
pub fn write<P: AsRef<Path>>(img: &ImageBuffer, path: P) -> bool {
    let path = path.as_ref();
    match try_write(img, path) {
        Ok(()) => true,
        Err(error) => {
            debug!("cannot write {}: {}", path.display(), error);
            false
        }
    }
}

// TESTS #############################################################

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn suffix_dispatch() {
        assert_eq!(Format::from_path("a/b/c.png"), Format::Png);
        assert_eq!(Format::from_path("c.qoi"), Format::Qoi);
        assert_eq!(Format::from_path("c.bmp"), Format::Unsupported);
        assert_eq!(Format::from_path("png"), Format::Unsupported);
        assert_eq!(Format::from_path(""), Format::Unsupported);
    }

    #[test]
    fn suffix_is_case_sensitive() {
        assert_eq!(Format::from_path("photo.PNG"), Format::Unsupported);
        assert_eq!(Format::from_path("photo.Qoi"), Format::Unsupported);
    }

    #[test]
    fn unsupported_load_is_empty() {
        let img = load("does/not/matter.bmp");
        assert!(img.is_empty());
        assert_eq!(img.dimensions(), (0, 0));
    }

    #[test]
    fn missing_file_load_is_empty() {
        assert!(load("does/not/exist.png").is_empty());
        assert!(load("does/not/exist.qoi").is_empty());
    }

    #[test]
    fn unsupported_write_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.jpg");
        let img = ImageBuffer::from_fn(2, 2, |_, _| [1, 2, 3, 4]);
        assert!(!write(&img, &out));
        assert!(!out.exists());
    }

    #[test]
    fn empty_write_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        assert!(matches!(
            try_write(&ImageBuffer::empty(), &out),
            Err(CodecError::EmptyImage)
        ));
        assert!(!out.exists());
    }

    #[test]
    fn png_and_qoi_agree() {
        let dir = tempfile::tempdir().unwrap();
        let img = ImageBuffer::from_fn(7, 5, |x, y| [x as u8 * 30, y as u8 * 40, 128, 255 - x as u8]);
        let png_path = dir.path().join("a.png");
        let qoi_path = dir.path().join("a.qoi");
        assert!(write(&img, &png_path));
        assert!(write(&img, &qoi_path));
        assert_eq!(load(&png_path), img);
        assert_eq!(load(&qoi_path), img);
    }
}
