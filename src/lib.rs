// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # pkimage
//!
//! Load a PNG or QOI image, optionally replace its alpha channel
//! by the red channel of a mask image, optionally downscale it
//! by an integer factor in linear light, and write it as PNG or QOI.
//!
//! The file format is always chosen from the `.png` / `.qoi` suffix.
//!
//! ```text
//! pkimage in=path/to/image out=output/image [mask=path/to/maskimage] [r=resize_factor]
//! ```

pub mod cli;
pub mod codec;
pub mod core;
pub mod error;
pub mod misc;
