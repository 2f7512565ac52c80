// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the geometry crate: closest-handle resolution and
// the full overlay -> output commit chain.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use scanquad_geometry::pipeline::{default_quad, image_to_overlay, overlay_to_output};
use scanquad_geometry::{Point, Size, closest_handle};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Resolve the closest of the eight handles for a grid of touch points.
fn bench_closest_handle(c: &mut Criterion) {
    let quad = default_quad(Size::new(390.0, 844.0), 0.05);
    let touches: Vec<Point> = (0..10)
        .flat_map(|i| (0..10).map(move |j| Point::new(i as f64 * 39.0, j as f64 * 84.4)))
        .collect();

    c.bench_function("closest_handle (100 touches)", |b| {
        b.iter(|| {
            for &touch in &touches {
                black_box(closest_handle(black_box(touch), &quad));
            }
        });
    });
}

/// Scale an overlay quad back to a 12MP image and compute filter corners.
fn bench_commit_chain(c: &mut Criterion) {
    let image = Size::new(3024.0, 4032.0);
    let overlay = Size::new(390.0, 520.0);
    let shown = image_to_overlay(&default_quad(image, 0.05), image, overlay);

    c.bench_function("overlay_to_output", |b| {
        b.iter(|| black_box(overlay_to_output(black_box(&shown), overlay, image)));
    });
}

criterion_group!(benches, bench_closest_handle, bench_commit_chain);
criterion_main!(benches);
