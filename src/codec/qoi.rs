// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! QOI ("Quite OK Image") files.

use qoi::{Channels, ColorSpace, Decoder, Encoder};
use std::{fs, path::Path};

use crate::core::buffer::ImageBuffer;
use crate::error::CodecError;

/// Read a qoi image from a file into RGBA,
/// RGB files are expanded with an opaque alpha.
pub fn read_rgba<P: AsRef<Path>>(file_path: P) -> Result<ImageBuffer, CodecError> {
    let data = fs::read(file_path)?;
    let mut decoder = Decoder::new(&data)?.with_channels(Channels::Rgba);
    let header = *decoder.header();
    let pixels = decoder.decode_to_vec()?;
    Ok(ImageBuffer::from_raw(header.width, header.height, pixels)?)
}

/// Write an RGBA qoi image tagged as sRGB.
///
/// The whole file is encoded in memory first,
/// so an encoding failure leaves nothing on disk.
pub fn write_rgba<P: AsRef<Path>>(img: &ImageBuffer, file_path: P) -> Result<(), CodecError> {
    let encoded = Encoder::new(img.pixels(), img.width(), img.height())?
        .with_colorspace(ColorSpace::Srgb)
        .encode_to_vec()?;
    fs::write(file_path, encoded)?;
    Ok(())
}

// TESTS #############################################################
