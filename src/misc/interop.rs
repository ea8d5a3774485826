// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Interoperability conversions between our buffer and the image crate types.

use image::{Rgba, RgbaImage};

use crate::core::buffer::{ImageBuffer, CHANNELS};
use crate::error::BufferError;
use crate::misc::colorspace;
use crate::misc::type_aliases::{Float, LinearRgbaImage};

/// Take ownership of an `RgbaImage` pixel storage without copy.
pub fn buffer_from_rgba(img: RgbaImage) -> Result<ImageBuffer, BufferError> {
    let (width, height) = img.dimensions();
    ImageBuffer::from_raw(width, height, img.into_raw())
}

/// Convert an 8 bits sRGB buffer into linear light floats.
///
/// Color channels go through the sRGB decoding curve,
/// alpha is only normalized since it is already linear.
pub fn linear_from_buffer(img: &ImageBuffer) -> LinearRgbaImage {
    let width = img.width() as usize;
    LinearRgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let start = (y as usize * width + x as usize) * CHANNELS;
        let p = &img.pixels()[start..start + CHANNELS];
        Rgba([
            colorspace::decode_u8(p[0]),
            colorspace::decode_u8(p[1]),
            colorspace::decode_u8(p[2]),
            Float::from(p[3]) / 255.0,
        ])
    })
}

/// Inverse operation of `linear_from_buffer`, rounding to the nearest code.
pub fn buffer_from_linear(img: &LinearRgbaImage) -> Result<ImageBuffer, BufferError> {
    let (width, height) = img.dimensions();
    let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for Rgba([r, g, b, a]) in img.pixels() {
        pixels.extend_from_slice(&[
            colorspace::encode_u8(*r),
            colorspace::encode_u8(*g),
            colorspace::encode_u8(*b),
            colorspace::quantize(*a),
        ]);
    }
    ImageBuffer::from_raw(width, height, pixels)
}

// TESTS #############################################################
