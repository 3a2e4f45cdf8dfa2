use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;

use pathroot::normalize::{normalize_separators, resolve_components};
use pathroot::resolve_full_path;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("separators_mixed", |b| {
        b.iter(|| normalize_separators(black_box("a\\b/c\\d/e\\f")));
    });

    group.bench_function("separators_clean", |b| {
        b.iter(|| normalize_separators(black_box("/already/clean/path")));
    });

    group.bench_function("components_with_dots", |b| {
        b.iter(|| resolve_components(black_box(Path::new("/a/b/../c/./d/../../e"))));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_full_path");

    group.bench_function("single_fragment", |b| {
        b.iter(|| resolve_full_path(black_box(["/tmp/pathroot/bench"])));
    });

    group.bench_function("trailing_separators", |b| {
        b.iter(|| resolve_full_path(black_box(["/tmp/pathroot/bench///"])));
    });

    for fragments in [2usize, 4, 8] {
        let parts: Vec<String> = std::iter::once("/tmp".to_string())
            .chain((0..fragments - 1).map(|i| format!("part{i}")))
            .collect();
        group.bench_with_input(
            BenchmarkId::new("fragments", fragments),
            &parts,
            |b, parts| {
                b.iter(|| resolve_full_path(black_box(parts.iter().map(String::as_str))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve);
criterion_main!(benches);
