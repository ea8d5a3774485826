// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! In-memory RGBA image, the only data exchanged between pipeline stages.

use crate::error::BufferError;

/// Number of interleaved bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Row-major, top row first, 8 bits RGBA image.
///
/// A buffer is either empty (0x0, no allocation), meaning "no image",
/// or holds exactly `width * height * 4` bytes with both sizes non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// The "no image" value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap raw RGBA bytes, checking the length invariant.
    ///
    /// An empty vector with zero dimensions is accepted as the empty buffer,
    /// any other combination must match `width * height * 4` exactly.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let is_empty = width == 0 || height == 0;
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        match expected {
            Some(len) if !is_empty && len == pixels.len() => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ if is_empty && pixels.is_empty() => Ok(Self::empty()),
            _ => Err(BufferError::LengthMismatch {
                width,
                height,
                len: pixels.len(),
            }),
        }
    }

    /// Build a buffer by evaluating `f(x, y)` at every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// True for the "no image" value.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// RGBA value of the pixel at column `x`, row `y`, None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let p = &self.pixels[start..start + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Give back the pixel bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

// TESTS #############################################################
