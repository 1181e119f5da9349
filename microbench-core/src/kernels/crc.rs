// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Table-driven CRC-32 with the reflected polynomial.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::sample_data::SAMPLE_PAYLOAD;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "crc";

/// Bit-reversed CRC-32 generator polynomial.
pub const POLYNOMIAL: u32 = 0xedb8_8320;

/// CRC-32 of the sample payload.
pub const EXPECTED: u64 = 1_837_082_096;

/// Build the 256-entry lookup table for `poly`.
pub fn make_table(poly: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut byte = i as u32;
        let mut crc = 0u32;
        for _ in 0..8 {
            if (byte ^ crc) & 1 != 0 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
            byte >>= 1;
        }
        *entry = crc;
    }
    table
}

/// Checksum `bytes` with a table from [`make_table`].
pub fn checksum(bytes: &[u8], table: &[u32; 256]) -> u32 {
    let mut value = 0xffff_ffffu32;
    for &b in bytes {
        value = table[((u32::from(b) ^ value) & 0xff) as usize] ^ (value >> 8);
    }
    !value
}

fn run() -> KernelResult<Outcome> {
    // The table is rebuilt every run; it is part of the measured work.
    let table = make_table(POLYNOMIAL);
    Ok(Outcome::Count(u64::from(checksum(&SAMPLE_PAYLOAD, &table))))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "CRC-32 of the 1 KiB sample payload",
        RunPlan::builtin(1, 3),
        run,
        verify,
    )
}
