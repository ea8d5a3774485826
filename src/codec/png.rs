// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! PNG files.

use image::{io::Reader, ImageFormat};
use std::{fs::File, io::BufWriter, path::Path};

use crate::core::buffer::ImageBuffer;
use crate::error::CodecError;
use crate::misc::interop;

/// Read a png image from a file, whatever its color type and bit depth,
/// into 8 bits RGBA.
pub fn read_rgba<P: AsRef<Path>>(file_path: P) -> Result<ImageBuffer, CodecError> {
    // The suffix already decided the format, do not guess it again.
    let mut reader = Reader::open(file_path)?;
    reader.set_format(ImageFormat::Png);
    let rgba = reader.decode()?.into_rgba8();
    Ok(interop::buffer_from_rgba(rgba)?)
}

/// Write an 8 bits RGBA png image with default compression and filtering.
pub fn write_rgba<P: AsRef<Path>>(img: &ImageBuffer, file_path: P) -> Result<(), CodecError> {
    let file = File::create(file_path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.pixels())?;
    writer.finish()?;
    Ok(())
}

// TESTS #############################################################
