// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! sRGB transfer functions.
//!
//! Channel values in 8 bits images are gamma encoded.
//! Averaging them directly darkens edges and fine patterns,
//! so filtering happens on linear light values in `[0, 1]`.

use std::sync::OnceLock;

use crate::misc::type_aliases::Float;

/// Decode one normalized sRGB value into linear light.
#[inline]
pub fn srgb_to_linear(srgb: Float) -> Float {
    if srgb <= 0.040_45 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear light value into normalized sRGB.
#[inline]
pub fn linear_to_srgb(linear: Float) -> Float {
    if linear <= 0.040_45 / 12.92 {
        linear * 12.92
    } else {
        1.055 * linear.max(0.0).powf(1.0 / 2.4) - 0.055
    }
}

/// Linear light value of an 8 bits sRGB code, through a lookup table.
#[inline]
pub fn decode_u8(code: u8) -> Float {
    static TABLE: OnceLock<[Float; 256]> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut table = [0.0; 256];
        for (code, value) in table.iter_mut().enumerate() {
            *value = srgb_to_linear(code as Float / 255.0);
        }
        table
    });
    table[usize::from(code)]
}

/// Nearest 8 bits sRGB code of a linear light value.
#[inline]
pub fn encode_u8(linear: Float) -> u8 {
    quantize(linear_to_srgb(linear.clamp(0.0, 1.0)))
}

/// Round a normalized value in `[0, 1]` to an 8 bits code.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(value: Float) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// TESTS #############################################################
