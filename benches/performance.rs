// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use cabinetkit::io::{render_svg, to_glb, SvgOptions};
use cabinetkit::views::{build_mesh, cut_list, schematic, SchematicOptions};
use cabinetkit::{compute_many, compute_panels, normalize, CabinetSpec, RawCabinetSpec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn spec_with(primary: i64, secondary: i64) -> CabinetSpec {
    normalize(&RawCabinetSpec {
        width: 2400.0,
        height: 2400.0,
        primary_count: primary,
        secondary_counts: vec![Some(secondary); primary as usize + 1],
        has_doors: true,
        door_count: 4,
        ..Default::default()
    })
    .unwrap()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_panels");

    for (primary, secondary) in [(0, 0), (3, 2), (20, 10)] {
        let spec = spec_with(primary, secondary);
        group.bench_with_input(
            BenchmarkId::new("members", format!("{}x{}", primary, secondary)),
            &spec,
            |b, spec| b.iter(|| compute_panels(black_box(spec)).unwrap()),
        );
    }

    let batch: Vec<CabinetSpec> = (0..64).map(|n| spec_with(n % 8, n % 5)).collect();
    group.bench_function("compute_many_64", |b| {
        b.iter(|| compute_many(black_box(&batch)))
    });

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    let list = compute_panels(&spec_with(6, 3)).unwrap();

    group.bench_function("mesh", |b| b.iter(|| build_mesh(black_box(&list))));
    group.bench_function("cut_list", |b| b.iter(|| cut_list(black_box(&list))));
    group.bench_function("schematic", |b| {
        b.iter(|| schematic(black_box(&list), &SchematicOptions::default()))
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    let list = compute_panels(&spec_with(6, 3)).unwrap();
    let mesh = build_mesh(&list);
    let drawing = schematic(&list, &SchematicOptions::default());

    group.bench_function("glb", |b| b.iter(|| to_glb(black_box(&mesh)).unwrap()));
    group.bench_function("svg", |b| {
        b.iter(|| render_svg(black_box(&drawing), &SvgOptions::default()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_views, bench_export);
criterion_main!(benches);
