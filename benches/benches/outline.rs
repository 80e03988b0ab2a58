// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vantage_outline::{NodeData, Outline, RowLayout};

/// A complete tree with the given fan-out and depth.
fn tree(fan_out: usize, depth: usize) -> NodeData {
    fn build(name: String, fan_out: usize, depth: usize) -> NodeData {
        if depth == 0 {
            return NodeData::leaf(name);
        }
        NodeData::branch(
            name.clone(),
            (0..fan_out).map(|i| build(format!("{name}.{i}"), fan_out, depth - 1)),
        )
    }
    build("root".into(), fan_out, depth)
}

fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline/expansion");
    for (fan_out, depth) in [(4usize, 4usize), (8, 4), (16, 3)] {
        let data = tree(fan_out, depth);
        let label = format!("{fan_out}x{depth}");

        group.bench_with_input(BenchmarkId::new("expand_all", &label), &data, |b, data| {
            b.iter_batched(
                || Outline::with_first_level(data.clone()),
                |mut outline| {
                    let root = outline.root();
                    outline.expand_all(root);
                    black_box(outline);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("collapse_all", &label), &data, |b, data| {
            b.iter_batched(
                || {
                    let mut outline = Outline::from_data(data.clone());
                    let root = outline.root();
                    outline.expand_all(root);
                    outline
                },
                |mut outline| {
                    outline.collapse_all();
                    black_box(outline);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("relayout_expanded", &label), &data, |b, data| {
            let mut outline = Outline::from_data(data.clone());
            let mut layout = RowLayout::default();
            let root = outline.root();
            b.iter(|| {
                outline.relayout(&mut layout, root);
                black_box(outline.layout_extent());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expansion);
criterion_main!(benches);
