// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Criterion benchmarks over every built-in kernel.
//!
//! Complements the suite's own warm-up / average protocol with criterion's
//! statistical sampling. Outcomes are verified once up front so a broken
//! kernel never produces a timing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use microbench_core::WorkloadRegistry;
use std::time::Duration;

/// Kernels that take long enough per call to need a reduced sample count.
const SLOW_KERNELS: &[&str] = &["nbody", "mandelbrot"];

fn bench_kernels(c: &mut Criterion) {
    let registry = WorkloadRegistry::builtin();
    let mut group = c.benchmark_group("kernels");
    group.measurement_time(Duration::from_secs(5));

    for workload in registry.iter() {
        let outcome = workload.execute().expect("kernel failed");
        assert!(workload.verify(&outcome), "{} failed verification", workload.tag());

        if SLOW_KERNELS.contains(&workload.tag().as_str()) {
            group.sample_size(10);
        } else {
            group.sample_size(100);
        }

        group.bench_function(workload.tag().as_str(), |b| {
            b.iter(|| black_box(workload.execute()))
        });
    }

    group.finish();
}

/// Streaming digest throughput over the sample payload.
fn bench_sha256_payload(c: &mut Criterion) {
    use microbench_core::kernels::sha256;
    use microbench_core::sample_data::SAMPLE_PAYLOAD;

    let mut group = c.benchmark_group("sha256_payload");
    group.throughput(criterion::Throughput::Bytes(SAMPLE_PAYLOAD.len() as u64));
    group.bench_function("digest", |b| {
        b.iter(|| sha256::digest(black_box(&SAMPLE_PAYLOAD)))
    });
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_sha256_payload);
criterion_main!(benches);
