// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark kernels.
//!
//! Every kernel module exposes `TAG` and `workload()`. A kernel takes no
//! input, builds its working state from scratch on every call, and returns an
//! [`Outcome`](crate::Outcome) that its verifier checks against a golden value.

pub mod biquad;
pub mod bounce;
pub mod crc;
pub mod list;
pub mod mandelbrot;
pub mod nbody;
pub mod permute;
pub mod queens;
pub mod random;
pub mod sha256;
pub mod sieve;
pub mod storage;
pub mod towers;

use crate::workload::Workload;

/// Built-in workloads in suite order. The position of each entry is its
/// stable numeric selector.
pub fn builtin() -> Vec<Workload> {
    vec![
        sieve::workload(),
        nbody::workload(),
        permute::workload(),
        storage::workload(),
        queens::workload(),
        towers::workload(),
        list::workload(),
        bounce::workload(),
        mandelbrot::workload(),
        biquad::workload(),
        crc::workload(),
        sha256::workload(),
    ]
}
