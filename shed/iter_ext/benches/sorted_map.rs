/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

//! Lazy heap-backed projection vs. eager sort-then-iterate.
//!
//! The heap projection pays O(n) to start and O(log n) per consumed pair;
//! the eager baseline pays O(n·log n) up front regardless of how much of
//! the output is consumed. The gap should show up clearly at k = 16 of
//! n = 4096 and vanish (to within a constant factor) at full consumption.

use std::collections::HashMap;
use std::hint::black_box;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use iter_ext::sorted_from_map;

const N: usize = 4096;

fn random_keys(n: usize) -> Vec<u64> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push(x >> 33);
    }
    keys
}

fn eager_first_k(map: &HashMap<u64, u64>, k: usize) -> u64 {
    let mut keys: Vec<&u64> = map.keys().collect();
    keys.sort_unstable();
    keys.into_iter().take(k).map(|key| map[key]).sum()
}

fn lazy_first_k(map: &HashMap<u64, u64>, k: usize) -> u64 {
    sorted_from_map(map).take(k).map(|(_, v)| *v).sum()
}

fn bench_first_k(c: &mut Criterion) {
    let map: HashMap<u64, u64> = random_keys(N).into_iter().map(|k| (k, k)).collect();

    for k in [16, N] {
        let mut group = c.benchmark_group(format!("first_{k}_of_{N}"));

        group.bench_function(BenchmarkId::new("heap_projection", k), |b| {
            b.iter(|| lazy_first_k(black_box(&map), k));
        });

        group.bench_function(BenchmarkId::new("eager_sort", k), |b| {
            b.iter(|| eager_first_k(black_box(&map), k));
        });

        group.finish();
    }
}

criterion_group!(benches, bench_first_k);
criterion_main!(benches);
