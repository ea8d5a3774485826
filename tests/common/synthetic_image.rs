// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::{Rgba, RgbaImage};
use pkimage::core::buffer::ImageBuffer;
use std::path::Path;

/// Opaque-ish gradient with every channel varying.
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 7) as u8,
            200 + (x % 50) as u8,
        ])
    })
}

/// Mask whose red channel encodes the column, other channels are noise.
pub fn column_mask(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([(x * 20) as u8, 99, (y * 3) as u8, 17]))
}

/// Save an image through the image crate, format from the extension.
pub fn save_png(img: &RgbaImage, path: &Path) {
    img.save(path).expect("cannot save png fixture");
}

/// Save an RGBA image as qoi, independently of the crate writer.
pub fn save_qoi(img: &RgbaImage, path: &Path) {
    let encoded = qoi::encode_to_vec(img.as_raw(), img.width(), img.height())
        .expect("cannot encode qoi fixture");
    std::fs::write(path, encoded).expect("cannot save qoi fixture");
}

/// Decode a png fixture directly with the image crate.
pub fn decode_png(path: &Path) -> RgbaImage {
    image::open(path).expect("cannot open png").into_rgba8()
}

/// Convert to the crate buffer type.
pub fn to_buffer(img: &RgbaImage) -> ImageBuffer {
    ImageBuffer::from_raw(img.width(), img.height(), img.as_raw().clone())
        .expect("valid fixture size")
}
