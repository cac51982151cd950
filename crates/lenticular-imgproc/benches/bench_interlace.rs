use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::hint::black_box;

use lenticular_image::{Image, ImageSize};
use lenticular_imgproc::interlace::{interlace, InterlaceLayout};
use lenticular_imgproc::interpolation::InterpolationMode;

fn random_views(layout: &InterlaceLayout) -> Vec<Image<u8, 3>> {
    let mut rng = rand::rng();
    let size = layout.view_size();
    (0..layout.n_views)
        .map(|_| {
            let data = (0..size.width * size.height * 3)
                .map(|_| rng.random::<u8>())
                .collect();
            Image::new(size, data).unwrap()
        })
        .collect()
}

fn bench_interlace(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interlace");

    let screen_size = ImageSize {
        width: 1920,
        height: 1080,
    };

    for n_views in [2usize, 5, 8].iter() {
        group.throughput(criterion::Throughput::Elements(
            (screen_size.width * screen_size.height) as u64,
        ));

        let layout = InterlaceLayout::new(*n_views, screen_size).unwrap();
        let views = random_views(&layout);

        group.bench_with_input(BenchmarkId::new("nearest", n_views), &views, |b, v| {
            b.iter(|| {
                interlace(
                    black_box(v),
                    black_box(&layout),
                    black_box(InterpolationMode::Nearest),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("bilinear", n_views), &views, |b, v| {
            b.iter(|| {
                interlace(
                    black_box(v),
                    black_box(&layout),
                    black_box(InterpolationMode::Bilinear),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interlace);
criterion_main!(benches);
