// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types of every fallible stage of the pipeline.
//!
//! None of them ever reaches the process exit status,
//! the pipeline turns each one into a printed message.

use std::{io, path::PathBuf};
use thiserror::Error;

/// The pixel vector does not hold `width * height * 4` bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("{len} bytes cannot hold a {width}x{height} RGBA image")]
    LengthMismatch { width: u32, height: u32, len: usize },
}

/// Failure to decode or encode an image file.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported image extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("refusing to encode an empty image")]
    EmptyImage,

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("png decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("png encode error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("qoi error: {0}")]
    Qoi(#[from] qoi::Error),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// The mask cannot be packed into the base image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("base image is {}x{} but mask is {}x{}", .base.0, .base.1, .mask.0, .mask.1)]
    DimensionMismatch { base: (u32, u32), mask: (u32, u32) },
}

/// The resize stage cannot produce an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResizeError {
    #[error("resize factor must be greater than 1, got {0}")]
    InvalidFactor(u32),

    #[error("dividing {width}x{height} by {factor} leaves no pixel")]
    EmptyTarget { width: u32, height: u32, factor: u32 },

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// A required command line key is missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing required argument: {0}=")]
    MissingKey(&'static str),
}
