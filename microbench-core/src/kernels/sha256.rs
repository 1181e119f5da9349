// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Streaming SHA-256 digest engine (FIPS 180-4).
//!
//! Bytes are buffered one at a time into a 64-byte block; every full block is
//! compressed into the eight working registers. All register and schedule
//! arithmetic is modulo 2^32 via the `wrapping_*` operations.

use crate::error::KernelResult;
use crate::outcome::{Outcome, DIGEST_LEN};
use crate::sample_data::SAMPLE_PAYLOAD;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "sha256";

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Offset of the 64-bit length field in the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Digest of the sample payload.
pub const EXPECTED: [u8; DIGEST_LEN] = [
    126, 44, 189, 35, 138, 120, 99, 233, 229, 125, 114, 83, 92, 183, 16, 28, 206, 116, 2, 105, 14,
    202, 214, 249, 14, 253, 51, 17, 97, 176, 202, 215,
];

const INITIAL_HASH: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const ROUND_CONSTANTS: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline]
fn choose(x: u32, y: u32, z: u32) -> u32 {
    z ^ (x & (y ^ z))
}

#[inline]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    ((x | y) & z) | (x & y)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Compress one 64-byte block into the running registers.
fn compress(registers: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let mut schedule = [0u32; 64];
    for (word, chunk) in schedule.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..64 {
        schedule[i] = small_sigma1(schedule[i - 2])
            .wrapping_add(schedule[i - 7])
            .wrapping_add(small_sigma0(schedule[i - 15]))
            .wrapping_add(schedule[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *registers;

    for (k, w) in ROUND_CONSTANTS.iter().zip(schedule.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choose(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (register, value) in registers.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *register = register.wrapping_add(value);
    }
}

/// Digest state for one hash computation.
///
/// `buffer_len` never exceeds 63 between calls: reaching 64 compresses the
/// block and resets it to 0.
#[derive(Debug, Clone)]
pub struct DigestState {
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    bit_len: u64,
    registers: [u32; 8],
}

impl DigestState {
    /// Start a fresh digest with the standard initial hash values.
    pub fn new() -> Self {
        Self {
            buffer: [0; BLOCK_LEN],
            buffer_len: 0,
            bit_len: 0,
            registers: INITIAL_HASH,
        }
    }

    /// Number of bytes waiting in the partial block.
    pub fn buffered(&self) -> usize {
        self.buffer_len
    }

    /// Absorb input bytes, compressing every completed block.
    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.buffer[self.buffer_len] = byte;
            self.buffer_len += 1;
            if self.buffer_len == BLOCK_LEN {
                compress(&mut self.registers, &self.buffer);
                self.bit_len = self.bit_len.wrapping_add(512);
                self.buffer_len = 0;
            }
        }
    }

    /// Pad, append the bit length, and serialize the registers big-endian.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let used = self.buffer_len;
        self.buffer[used] = 0x80;

        if used < LENGTH_OFFSET {
            self.buffer[used + 1..LENGTH_OFFSET].fill(0);
        } else {
            // No room for the length field: flush this block and pad a new one.
            self.buffer[used + 1..].fill(0);
            compress(&mut self.registers, &self.buffer);
            self.buffer[..LENGTH_OFFSET].fill(0);
        }

        self.bit_len = self.bit_len.wrapping_add(used as u64 * 8);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&self.bit_len.to_be_bytes());
        compress(&mut self.registers, &self.buffer);

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, register) in out.chunks_exact_mut(4).zip(self.registers) {
            chunk.copy_from_slice(&register.to_be_bytes());
        }
        out
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot digest of a byte slice.
pub fn digest(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut state = DigestState::new();
    state.update(bytes);
    state.finalize()
}

fn run() -> KernelResult<Outcome> {
    Ok(Outcome::Digest(digest(&SAMPLE_PAYLOAD)))
}

fn verify(outcome: &Outcome) -> bool {
    matches!(outcome, Outcome::Digest(bytes) if *bytes == EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "SHA-256 digest of the 1 KiB sample payload",
        RunPlan::builtin(1, 3),
        run,
        verify,
    )
}
