// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Mandelbrot escape-time digest.
//!
//! Escape bits are packed eight to a byte, row by row, and XOR-folded into a
//! running checksum. Each finished row is reported as a `trace` event.

use tracing::trace;

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "mandelbrot";

/// Image edge length in pixels.
pub const SIZE: u32 = 500;

/// Checksum for a 500 x 500 image.
pub const EXPECTED: u64 = 191;

const MAX_ITERATIONS: u32 = 50;

/// Compute the XOR-folded escape digest of a `size` x `size` image.
pub fn mandelbrot(size: u32) -> u32 {
    let mut sum = 0u32;
    let mut byte_acc = 0u32;
    let mut bit_num = 0u32;
    let scale = f64::from(size);

    for y in 0..size {
        let ci = (2.0 * f64::from(y) / scale) - 1.0;

        for x in 0..size {
            let mut zrzr = 0.0;
            let mut zi = 0.0;
            let mut zizi = 0.0;
            let cr = (2.0 * f64::from(x) / scale) - 1.5;

            let mut escape = 0;
            for _ in 0..MAX_ITERATIONS {
                let zr = zrzr - zizi + cr;
                zi = 2.0 * zr * zi + ci;

                zrzr = zr * zr;
                zizi = zi * zi;

                if zrzr + zizi > 4.0 {
                    escape = 1;
                    break;
                }
            }

            byte_acc = (byte_acc << 1) + escape;
            bit_num += 1;

            if bit_num == 8 {
                sum ^= byte_acc;
                byte_acc = 0;
                bit_num = 0;
            } else if x == size - 1 {
                byte_acc <<= 8 - bit_num;
                sum ^= byte_acc;
                byte_acc = 0;
                bit_num = 0;
            }
        }

        trace!(row = y, sum, "mandelbrot row");
    }

    sum
}

fn run() -> KernelResult<Outcome> {
    Ok(Outcome::Count(u64::from(mandelbrot(SIZE))))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Escape-time digest of a 500x500 Mandelbrot image",
        RunPlan::builtin(0, 1),
        run,
        verify,
    )
}
