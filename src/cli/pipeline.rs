// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Load, pack, resize and write, in that order.
//!
//! Every failure prints one line on `out` and either skips
//! the optional stage or stops the run. None of them is an error
//! for the caller: only a failure to print itself is returned.

use log::{info, warn};
use std::io::{self, Write};

use crate::cli::args::{self, Args, Config, USAGE};
use crate::codec;
use crate::core::{buffer::ImageBuffer, pack, resize};
use crate::error::ResizeError;

/// How far the pipeline went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A required key is missing, usage was printed.
    Usage,
    /// The input image could not be loaded.
    LoadFailed,
    /// Every stage ran, the output file was written.
    Written,
    /// Every stage ran but the output file could not be written.
    WriteFailed,
}

/// Run the whole pipeline described by `config`, printing progress on `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<Outcome> {
    // Check that the arguments are correct.
    let args = match args::check_args(config) {
        Ok(args) => args,
        Err(error) => {
            info!("{}", error);
            writeln!(out, "{}", USAGE)?;
            return Ok(Outcome::Usage);
        }
    };

    let img = codec::load(&args.input);
    if img.is_empty() {
        warn!("cannot load input image {}", args.input.display());
        writeln!(out, "Failed to load input image!")?;
        return Ok(Outcome::LoadFailed);
    }
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        img.width(),
        img.height()
    );

    let img = apply_mask(img, &args, out)?;
    let img = apply_resize(img, &args, out)?;

    let outcome = if codec::write(&img, &args.output) {
        info!("wrote {}", args.output.display());
        Outcome::Written
    } else {
        warn!("cannot write output image {}", args.output.display());
        writeln!(out, "Failed to write image!")?;
        Outcome::WriteFailed
    };
    drop(img);

    writeln!(out, "Done.")?;
    Ok(outcome)
}

/// Pack the mask red channel into the alpha channel, if a mask was given.
/// The mask is dropped as soon as it has been used.
fn apply_mask<W: Write>(mut img: ImageBuffer, args: &Args, out: &mut W) -> io::Result<ImageBuffer> {
    if let Some(mask_path) = &args.mask {
        let mask = codec::load(mask_path);
        if mask.is_empty() {
            warn!("cannot load mask image {}", mask_path.display());
            writeln!(out, "Failed to load mask image!")?;
        } else if let Err(error) = pack::pack_red_into_alpha(&mut img, &mask) {
            warn!("{}", error);
            writeln!(out, "Error: Image dimensions do not match!")?;
        }
    }
    Ok(img)
}

/// Downscale the image, if a factor greater than 1 was given.
/// The original is dropped once the resized image exists.
fn apply_resize<W: Write>(img: ImageBuffer, args: &Args, out: &mut W) -> io::Result<ImageBuffer> {
    let factor = match args.resize_factor {
        None => return Ok(img),
        Some(factor) if factor > 1 => factor.unsigned_abs(),
        Some(factor) => {
            info!("ignoring resize factor {}", factor);
            writeln!(out, "Resize factor must be greater than 1. Skipping resizing.")?;
            return Ok(img);
        }
    };

    writeln!(out, "Resizing image...")?;
    match resize::resize(&img, factor) {
        Ok(resized) => Ok(resized),
        Err(error @ ResizeError::EmptyTarget { .. }) => {
            warn!("{}", error);
            writeln!(out, "Resize target is empty. Skipping resizing.")?;
            Ok(img)
        }
        Err(error) => {
            warn!("{}", error);
            writeln!(out, "Failed to resize image. Skipping resizing.")?;
            Ok(img)
        }
    }
}

// TESTS #############################################################
