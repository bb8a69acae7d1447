use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tg_ascii::edge::extract_edges;
use tg_ascii::pipeline::FramePipeline;
use tg_core::charset::GlyphRamp;
use tg_core::frame::{ColorRaster, IntensityRaster};

fn synthetic_frame(width: u32, height: u32) -> ColorRaster {
    ColorRaster::from_fn(width, height, |x, y| {
        let v = ((x ^ y) & 0xFF) as u8;
        (v, v.wrapping_mul(3), 255 - v, 255)
    })
}

fn bench_pipeline(c: &mut Criterion) {
    let frame = synthetic_frame(1920, 1080);
    let pipeline = FramePipeline::new(GlyphRamp::default());

    c.bench_function("render_1080p_to_200x60", |b| {
        b.iter(|| pipeline.render(black_box(&frame), 200, 60));
    });

    let plain = pipeline.clone().with_edge_detection(false);
    c.bench_function("render_1080p_to_200x60_no_edges", |b| {
        b.iter(|| plain.render(black_box(&frame), 200, 60));
    });
}

fn bench_edges(c: &mut Criterion) {
    let gray = IntensityRaster::from_fn(320, 90, |x, y| ((x * 7 + y * 13) % 256) as u8);
    c.bench_function("sobel_320x90", |b| {
        b.iter(|| extract_edges(black_box(&gray)));
    });
}

criterion_group!(benches, bench_pipeline, bench_edges);
criterion_main!(benches);
