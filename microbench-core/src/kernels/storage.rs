// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Allocation-heavy tree construction.

use std::hint::black_box;

use super::random::Random;
use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "storage";

/// Depth of the generated tree.
pub const DEPTH: u32 = 7;

/// Nodes built for a depth-7 tree.
pub const EXPECTED: u64 = 5461;

const FANOUT: usize = 4;

/// Interior nodes own four subtrees; leaves own a randomly sized array.
#[derive(Debug)]
pub enum Tree {
    Node(Box<[Tree; FANOUT]>),
    Leaf(Vec<Option<u32>>),
}

/// Per-run builder holding the random source and the node counter.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    random: Random,
    count: u64,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes built so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn build(&mut self, depth: u32) -> Tree {
        self.count += 1;
        if depth <= 1 {
            let len = (self.random.next_value() % 10 + 1) as usize;
            return Tree::Leaf(vec![None; len]);
        }

        Tree::Node(Box::new([
            self.build(depth - 1),
            self.build(depth - 1),
            self.build(depth - 1),
            self.build(depth - 1),
        ]))
    }
}

fn run() -> KernelResult<Outcome> {
    let mut builder = TreeBuilder::new();
    let tree = builder.build(DEPTH);
    black_box(&tree);
    Ok(Outcome::Count(builder.count()))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Build a random depth-7 tree of heap allocations",
        RunPlan::builtin(1, 4),
        run,
        verify,
    )
}
