//! Benchmarks for path construction and traversal.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use trellis_path::{Path, PathCursor};

/// Benchmark building a deep field/index chain.
fn bench_append_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_append");

    for depth in [4_usize, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64 * 2));
        group.bench_function(format!("append_{depth}"), |b| {
            b.iter(|| {
                let mut path = Path::root();
                for i in 0..depth {
                    path = path.append_field("field").append_index(i);
                }
                black_box(path)
            });
        });
    }

    group.finish();
}

/// Benchmark walking a 1000-element list, repositioning the tail segment
/// versus pushing and popping a fresh one per element.
fn bench_list_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_list_traversal");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("set_index", |b| {
        b.iter(|| {
            let mut cursor = PathCursor::new();
            cursor.push_field("items");
            cursor.push_index(0);
            for i in 1..1000 {
                cursor.set_index(i);
            }
            black_box(cursor.capture())
        });
    });

    group.bench_function("push_pop", |b| {
        b.iter(|| {
            let mut cursor = PathCursor::new();
            cursor.push_field("items");
            for i in 0..1000 {
                cursor.push_index(i);
                cursor.pop();
            }
            black_box(cursor.capture())
        });
    });

    group.finish();
}

/// Benchmark structural equality over a long shared prefix.
fn bench_shared_prefix_equality(c: &mut Criterion) {
    let mut base = Path::root();
    for _ in 0..32 {
        base = base.append_field("level");
    }
    let left = base.append_index(1);
    let right = base.append_index(1);

    c.bench_function("eq_shared_prefix_32", |b| {
        b.iter(|| black_box(left == right));
    });
}

criterion_group!(
    benches,
    bench_append_chain,
    bench_list_traversal,
    bench_shared_prefix_equality
);
criterion_main!(benches);
