use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use outline_stepper::visitors::{circle, DEFAULT_ROUNDNESS};
use outline_stepper::{step_outline, DashVisitor, FlattenVisitor, Outline, Pacing};
use std::hint::black_box;

fn bench_glyph_parsing(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/glyph_o.json");

    c.bench_function("outline_json_parse_glyph_o", |b| {
        b.iter(|| {
            let outline = Outline::from_json_str(black_box(json)).expect("JSON parse failed");
            black_box(outline.len())
        })
    });
}

/// Raster aus Kreisen, je eine Kontur aus vier kubischen Segmenten.
fn build_synthetic_outline(contour_count: usize) -> Outline {
    let mut outline = Outline::new();
    for index in 0..contour_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        let center = Vec2::new(column * 120.0, row * 120.0);
        circle(&mut outline, center, 50.0, DEFAULT_ROUNDNESS);
    }
    outline
}

fn bench_step_visitors(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_visitors");
    let pacing = Pacing::by_distance(5.0);

    for &contour_count in &[100usize, 1_000usize] {
        let outline = build_synthetic_outline(contour_count);

        group.bench_with_input(
            BenchmarkId::new("flatten", contour_count),
            &outline,
            |b, outline| {
                b.iter(|| {
                    let result = step_outline(black_box(outline), pacing, FlattenVisitor::new())
                        .expect("flatten failed");
                    black_box(result.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("dash_normal", contour_count),
            &outline,
            |b, outline| {
                b.iter(|| {
                    let dash = DashVisitor::new(8.0).with_normal(true);
                    let result =
                        step_outline(black_box(outline), pacing, dash).expect("dash failed");
                    black_box(result.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(step_benches, bench_glyph_parsing, bench_step_visitors);
criterion_main!(step_benches);
