//! Performance benchmarks for the timeline engine.
//!
//! This module benchmarks the merge operations a feed client performs:
//! - Full resets of varying size
//! - Prepending pages at the head, with and without gaps
//! - Appending pages at the tail
//! - Filling gaps page by page
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use timeline_gap::{FeedPost, Timeline};

const PAGE: u64 = 50;

fn posts(ids: impl DoubleEndedIterator<Item = u64>) -> Vec<FeedPost> {
    ids.rev()
        .map(|id| FeedPost::new(id, "bench", "lorem ipsum"))
        .collect()
}

/// Benchmark resetting a timeline, sorted and unsorted input
fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset");

    for size in [100u64, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::new("presorted", size), size, |b, &size| {
            b.iter_batched(
                || posts(0..size),
                |batch| {
                    let mut timeline = Timeline::new();
                    black_box(timeline.reset(batch, false))
                },
                criterion::BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("sort", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut batch = posts(0..size);
                    batch.reverse();
                    batch
                },
                |batch| {
                    let mut timeline = Timeline::new();
                    black_box(timeline.reset(batch, true))
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark prepending pages onto an existing timeline
fn bench_prepend(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend");

    for size in [1_000u64, 10_000].iter() {
        group.throughput(Throughput::Elements(PAGE));
        group.bench_with_input(BenchmarkId::new("with_gap", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut timeline = Timeline::new();
                    timeline.reset(posts(0..size), false);
                    (timeline, posts(size + 100..size + 100 + PAGE))
                },
                |(mut timeline, page)| black_box(timeline.prepend(page, false)),
                criterion::BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("overlapping", size), size, |b, &size| {
            b.iter_batched(
                || {
                    let mut timeline = Timeline::new();
                    timeline.reset(posts(0..size), false);
                    (timeline, posts(size - PAGE / 2..size + PAGE / 2))
                },
                |(mut timeline, page)| black_box(timeline.prepend(page, false)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark appending older pages at the tail
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for pages in [10u64, 100].iter() {
        group.throughput(Throughput::Elements(pages * PAGE));
        group.bench_with_input(BenchmarkId::new("pages", pages), pages, |b, &pages| {
            b.iter(|| {
                let top = pages * PAGE;
                let mut timeline = Timeline::new();
                timeline.reset(posts(top..top + PAGE), false);
                for page in (0..pages).rev() {
                    let start = page * PAGE;
                    black_box(timeline.append(posts(start..start + PAGE), false));
                }
                black_box(timeline.number_of_elements())
            });
        });
    }
    group.finish();
}

/// Benchmark closing a gap one page at a time
fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    for pages in [10u64, 50].iter() {
        group.throughput(Throughput::Elements(pages * PAGE));
        group.bench_with_input(BenchmarkId::new("fill_gap", pages), pages, |b, &pages| {
            b.iter_batched(
                || {
                    let hole = pages * PAGE;
                    let mut timeline = Timeline::new();
                    timeline.reset(posts(0..1_000), false);
                    timeline.prepend(posts(1_000 + hole..2_000 + hole), false);
                    (timeline, hole)
                },
                |(mut timeline, hole)| {
                    let mut boundary = 1_000 + hole;
                    while boundary >= 1_000 {
                        let low = boundary.saturating_sub(PAGE).max(999);
                        black_box(timeline.expand(posts(low..boundary), boundary, false));
                        boundary = low;
                    }
                    black_box(timeline.gaps().count())
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark read-side queries
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let mut timeline = Timeline::new();
    timeline.reset(posts(0..10_000), false);
    for i in 1..=20u64 {
        let base = 10_000 + i * 1_000;
        timeline.prepend(posts(base..base + 500), false);
    }

    group.bench_function("gaps", |b| b.iter(|| black_box(timeline.gaps().count())));
    group.bench_function("event_count", |b| {
        b.iter(|| black_box(timeline.event_count()))
    });
    group.bench_function("check_invariants", |b| {
        b.iter(|| black_box(timeline.check_invariants().is_ok()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_reset,
    bench_prepend,
    bench_append,
    bench_expand,
    bench_queries
);
criterion_main!(benches);
