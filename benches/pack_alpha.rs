// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{criterion_group, criterion_main, Criterion};
use pkimage::core::{buffer::ImageBuffer, pack, resize};

fn criterion_benchmark(c: &mut Criterion) {
    let mask = ImageBuffer::from_fn(640, 480, |x, _| [x as u8, 0, 0, 255]);
    c.bench_function("pack_red_into_alpha 640x480", |b| {
        let mut img = ImageBuffer::from_fn(640, 480, |_, y| [1, 2, y as u8, 255]);
        b.iter(|| pack::pack_red_into_alpha(&mut img, &mask))
    });
    c.bench_function("resize 640x480 by 4", |b| {
        b.iter(|| resize::resize(&mask, 4))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
