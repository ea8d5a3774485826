// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Channel packing: the red channel of a mask becomes the alpha of an image.

use crate::core::buffer::{ImageBuffer, CHANNELS};
use crate::error::PackError;

/// Overwrite the alpha channel of `base` with the red channel of `mask`.
///
/// Both images must be non-empty and of identical dimensions,
/// otherwise `base` is left untouched and an error is returned.
/// Only the alpha byte of each `base` pixel is written.
pub fn pack_red_into_alpha(base: &mut ImageBuffer, mask: &ImageBuffer) -> Result<(), PackError> {
    if base.is_empty() || mask.is_empty() || base.dimensions() != mask.dimensions() {
        return Err(PackError::DimensionMismatch {
            base: base.dimensions(),
            mask: mask.dimensions(),
        });
    }
    base.pixels_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(mask.pixels().chunks_exact(CHANNELS))
        .for_each(|(dst, src)| dst[3] = src[0]);
    Ok(())
}

// TESTS #############################################################

#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck_macros;

    /// Fill a `w x h` image cycling through `seed` bytes.
    fn patterned(w: u32, h: u32, seed: &[u8], offset: u8) -> ImageBuffer {
        let mut i = 0_usize;
        ImageBuffer::from_fn(w, h, |_, _| {
            let mut px = [0_u8; 4];
            for c in px.iter_mut() {
                *c = seed.get(i % seed.len().max(1)).copied().unwrap_or(0).wrapping_add(offset);
                i += 1;
            }
            px
        })
    }

    #[test]
    fn copies_red_into_alpha() {
        let mut base = ImageBuffer::from_fn(2, 1, |_, _| [10, 20, 30, 255]);
        let mask = ImageBuffer::from_fn(2, 1, |x, _| [x as u8 * 100, 1, 2, 3]);
        assert_eq!(pack_red_into_alpha(&mut base, &mask), Ok(()));
        assert_eq!(base.pixels(), &[10, 20, 30, 0, 10, 20, 30, 100]);
    }

    #[test]
    fn empty_mask_is_rejected() {
        let mut base = ImageBuffer::from_fn(2, 2, |_, _| [1, 2, 3, 4]);
        let before = base.clone();
        let result = pack_red_into_alpha(&mut base, &ImageBuffer::empty());
        assert_eq!(
            result,
            Err(PackError::DimensionMismatch {
                base: (2, 2),
                mask: (0, 0)
            })
        );
        assert_eq!(base, before);
    }

    #[test]
    fn empty_base_is_rejected() {
        let mut base = ImageBuffer::empty();
        let mask = ImageBuffer::from_fn(1, 1, |_, _| [1, 2, 3, 4]);
        assert!(pack_red_into_alpha(&mut base, &mask).is_err());
        assert!(base.is_empty());
    }

    // PROPERTY TESTS ################################################

    #[quickcheck_macros::quickcheck]
    fn alpha_comes_from_mask_red(w: u8, h: u8, seed: Vec<u8>) -> bool {
        let (w, h) = (u32::from(w % 24) + 1, u32::from(h % 24) + 1);
        let original = patterned(w, h, &seed, 0);
        let mask = patterned(w, h, &seed, 97);
        let mut base = original.clone();
        if pack_red_into_alpha(&mut base, &mask).is_err() {
            return false;
        }
        base.pixels()
            .chunks_exact(CHANNELS)
            .zip(original.pixels().chunks_exact(CHANNELS))
            .zip(mask.pixels().chunks_exact(CHANNELS))
            .all(|((packed, orig), m)| packed[3] == m[0] && packed[..3] == orig[..3])
    }

    #[quickcheck_macros::quickcheck]
    fn mismatch_is_a_no_op(w: u8, h: u8, dw: u8, dh: u8, seed: Vec<u8>) -> bool {
        let (w, h) = (u32::from(w % 24) + 1, u32::from(h % 24) + 1);
        let (mw, mh) = (w + u32::from(dw % 4), h + u32::from(dh % 4));
        if (mw, mh) == (w, h) {
            return true;
        }
        let original = patterned(w, h, &seed, 3);
        let mask = patterned(mw, mh, &seed, 5);
        let mut base = original.clone();
        pack_red_into_alpha(&mut base, &mask).is_err() && base == original
    }
}
