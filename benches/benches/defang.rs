// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vantage_defang::{Pipeline, RuleConfig, SubstitutionRule, count_differences};

fn indicator_text(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "Visit https://host{i}.example.com:8080/path?id={i} or http://10.0.{}.{}\n",
                i % 256,
                i % 7
            )
        })
        .collect()
}

fn bench_builtin_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("defang/builtin");
    let config = RuleConfig::builtin();
    let defang = Pipeline::compile(&config.defang_rules);
    let undefang = Pipeline::compile(&config.undefang_rules);

    for lines in [1usize, 64, 1_024] {
        let text = indicator_text(lines);
        let defanged = defang.apply(&text).text;
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("defang", lines), &text, |b, text| {
            b.iter(|| black_box(defang.apply(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("undefang", lines), &defanged, |b, text| {
            b.iter(|| black_box(undefang.apply(black_box(text))));
        });
        group.bench_with_input(
            BenchmarkId::new("count_differences", lines),
            &(text.clone(), defanged.clone()),
            |b, (a, d)| {
                b.iter(|| black_box(count_differences(a, d)));
            },
        );
    }
    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let rules: Vec<_> = (0..32)
        .map(|i| {
            SubstitutionRule::new(
                format!("rule {i}"),
                format!(r"(\w+)@host{i}\.(?<tld>\w+)"),
                "$1 at $<tld>",
                "gi",
            )
        })
        .collect();
    c.bench_function("defang/compile_32_templated", |b| {
        b.iter(|| black_box(Pipeline::compile(black_box(&rules))));
    });
}

criterion_group!(benches, bench_builtin_rules, bench_compile);
criterion_main!(benches);
