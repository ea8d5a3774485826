// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integer factor downscaling in linear light.

use image::imageops::{self, FilterType};
use log::debug;

use crate::core::buffer::ImageBuffer;
use crate::error::ResizeError;
use crate::misc::interop;

/// Dimensions of `src` divided by `factor`, truncated.
pub fn target_dimensions(src: &ImageBuffer, factor: u32) -> (u32, u32) {
    (src.width() / factor, src.height() / factor)
}

/// Downscale `src` to `floor(width / factor) x floor(height / factor)`.
///
/// Color channels are converted to linear light before filtering
/// and back to sRGB afterwards. Alpha is filtered straight
/// (not premultiplied) with the same triangle kernel,
/// so a sharp mask edge gets blurred like the colors.
///
/// Fails if `factor <= 1` or if the target would have no pixel.
pub fn resize(src: &ImageBuffer, factor: u32) -> Result<ImageBuffer, ResizeError> {
    if factor <= 1 {
        return Err(ResizeError::InvalidFactor(factor));
    }
    let (width, height) = target_dimensions(src, factor);
    if width == 0 || height == 0 {
        return Err(ResizeError::EmptyTarget {
            width: src.width(),
            height: src.height(),
            factor,
        });
    }
    debug!(
        "resize {}x{} -> {}x{} (factor {})",
        src.width(),
        src.height(),
        width,
        height,
        factor
    );
    let linear = interop::linear_from_buffer(src);
    let resized = imageops::resize(&linear, width, height, FilterType::Triangle);
    Ok(interop::buffer_from_linear(&resized)?)
}

// TESTS #############################################################
