// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Type aliases for common types used all over the code base.

use image::{ImageBuffer, Rgba};

/// Linear light computations are done in f32.
pub type Float = f32;

/// RGBA image with one linear light Float per channel,
/// the working representation of the resizer.
pub type LinearRgbaImage = ImageBuffer<Rgba<Float>, Vec<Float>>;
