// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sieve of Eratosthenes prime counting.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "sieve";

/// Upper bound (inclusive) of the sieve.
pub const SIZE: usize = 5000;

/// Primes up to and including [`SIZE`].
pub const EXPECTED: u64 = 669;

/// Count primes in `2..=flags.len()`. `flags[n - 1]` tracks whether `n` is
/// still a prime candidate; all entries must start `true`.
pub fn sieve(flags: &mut [bool]) -> u64 {
    let size = flags.len();
    let mut prime_count = 0;

    for i in 2..=size {
        if flags[i - 1] {
            prime_count += 1;
            let mut k = i * 2;
            while k <= size {
                flags[k - 1] = false;
                k += i;
            }
        }
    }

    prime_count
}

fn run() -> KernelResult<Outcome> {
    let mut flags = vec![true; SIZE];
    Ok(Outcome::Count(sieve(&mut flags)))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Count primes up to 5000",
        RunPlan::builtin(100, 100),
        run,
        verify,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ranges() {
        assert_eq!(sieve(&mut vec![true; 1]), 0);
        assert_eq!(sieve(&mut vec![true; 10]), 4);
        assert_eq!(sieve(&mut vec![true; 100]), 25);
    }

    #[test]
    fn test_primes_up_to_5000() {
        assert_eq!(run().unwrap(), Outcome::Count(669));
        assert!(verify(&run().unwrap()));
    }
}
