// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Recursive swap-based permutation generation.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "permute";

/// Number of elements permuted.
pub const ELEMENTS: usize = 6;

/// Calls to [`Permuter::permute`] for six elements.
pub const EXPECTED: u64 = 8660;

/// Per-run permutation context: the working array and the call counter.
#[derive(Debug, Clone)]
pub struct Permuter {
    values: Vec<usize>,
    count: u64,
}

impl Permuter {
    pub fn new(len: usize) -> Self {
        Self {
            values: (0..len).collect(),
            count: 0,
        }
    }

    /// Calls made so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current arrangement of the working array.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn permute(&mut self, n: usize) {
        self.count += 1;
        if n == 0 {
            return;
        }

        let n1 = n - 1;
        self.permute(n1);
        for i in (0..=n1).rev() {
            self.values.swap(n1, i);
            self.permute(n1);
            self.values.swap(n1, i);
        }
    }
}

fn run() -> KernelResult<Outcome> {
    let mut permuter = Permuter::new(ELEMENTS);
    permuter.permute(ELEMENTS);
    Ok(Outcome::Count(permuter.count()))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Recursive permutation of six elements",
        RunPlan::builtin(100, 100),
        run,
        verify,
    )
}
