// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core tree operation benchmarks.
//!
//! Measures performance of:
//! - insert() - sequential and shuffled key streams
//! - find() - point lookups over a populated tree
//! - range() - window scans along the leaf chain
//! - delete() - removal with rebalancing
//!
//! Key streams are deterministic (xorshift), so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ytree::{BPlusTree, Order, Record};

/// Deterministic pseudo-random stream for key sequences.
fn xorshift(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

fn shuffled_keys(n: i32) -> Vec<i32> {
    let mut keys: Vec<i32> = (0..n).collect();
    let mut state = 0xBEEF_CAFEu32;
    for i in (1..keys.len()).rev() {
        let j = (xorshift(&mut state) as usize) % (i + 1);
        keys.swap(i, j);
    }
    keys
}

fn populated_tree(order: u16, n: i32) -> BPlusTree {
    let mut tree = BPlusTree::with_order(Order::new(order).expect("valid order"));
    for key in shuffled_keys(n) {
        tree.insert(key, Record::new_int(key)).expect("insert");
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &[1_000i32, 10_000] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter_batched(
                || BPlusTree::with_order(Order::new(32).expect("valid order")),
                |mut tree| {
                    for key in 0..n {
                        tree.insert(key, Record::new_int(key)).expect("insert");
                    }
                    black_box(tree)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("shuffled", n), &n, |b, &n| {
            let keys = shuffled_keys(n);
            b.iter_batched(
                || BPlusTree::with_order(Order::new(32).expect("valid order")),
                |mut tree| {
                    for &key in &keys {
                        tree.insert(key, Record::new_int(key)).expect("insert");
                    }
                    black_box(tree)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for &n in &[1_000i32, 10_000] {
        let tree = populated_tree(32, n);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut probe = 0;
            b.iter(|| {
                probe = (probe + 7919) % n;
                black_box(tree.find(probe));
            });
        });
    }

    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");

    let tree = populated_tree(32, 10_000);
    for &width in &[10i32, 100, 1_000] {
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let mut lo = 0;
            b.iter(|| {
                lo = (lo + 3571) % (10_000 - width);
                black_box(tree.range(lo, lo + width - 1));
            });
        });
    }

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.sample_size(20); // Each iteration rebuilds the tree

    for &n in &[1_000i32] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let keys = shuffled_keys(n);
            b.iter_batched(
                || populated_tree(32, n),
                |mut tree| {
                    for &key in &keys {
                        tree.delete(key).expect("delete");
                    }
                    black_box(tree)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_range, bench_delete);
criterion_main!(benches);
