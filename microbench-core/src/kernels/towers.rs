// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Towers of Hanoi over linked piles of disks.
//!
//! Disks live in an arena and each pile is a singly linked stack threaded
//! through arena indices.

use crate::error::{KernelError, KernelResult};
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "towers";

/// Disks moved from the source pile.
pub const DISKS: u32 = 13;

/// Moves for 13 disks: 2^13 - 1.
pub const EXPECTED: u64 = 8191;

const PILES: usize = 3;

#[derive(Debug, Clone)]
struct Disk {
    size: u32,
    next: Option<usize>,
}

/// Three piles and the move counter for one run.
#[derive(Debug, Clone, Default)]
pub struct Towers {
    disks: Vec<Disk>,
    piles: [Option<usize>; PILES],
    moves_done: u64,
}

impl Towers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves performed so far.
    pub fn moves_done(&self) -> u64 {
        self.moves_done
    }

    /// Disk sizes on `pile`, top first.
    pub fn pile_sizes(&self, pile: usize) -> Vec<u32> {
        let mut sizes = Vec::new();
        let mut cursor = self.piles[pile];
        while let Some(index) = cursor {
            sizes.push(self.disks[index].size);
            cursor = self.disks[index].next;
        }
        sizes
    }

    fn push_disk(&mut self, disk: usize, pile: usize) -> KernelResult<()> {
        if let Some(top) = self.piles[pile] {
            let (size, top_size) = (self.disks[disk].size, self.disks[top].size);
            if size >= top_size {
                return Err(KernelError::OversizedDisk {
                    disk: size,
                    top: top_size,
                    pile,
                });
            }
        }

        self.disks[disk].next = self.piles[pile];
        self.piles[pile] = Some(disk);
        Ok(())
    }

    fn pop_disk_from(&mut self, pile: usize) -> KernelResult<usize> {
        let top = self.piles[pile].ok_or(KernelError::EmptyPile { pile })?;
        self.piles[pile] = self.disks[top].next.take();
        Ok(top)
    }

    fn move_top_disk(&mut self, from: usize, to: usize) -> KernelResult<()> {
        let disk = self.pop_disk_from(from)?;
        self.push_disk(disk, to)?;
        self.moves_done += 1;
        Ok(())
    }

    /// Stack disks of sizes `disks` down to 0 onto `pile`.
    pub fn build_tower_at(&mut self, pile: usize, disks: u32) -> KernelResult<()> {
        for size in (0..=disks).rev() {
            self.disks.push(Disk { size, next: None });
            self.push_disk(self.disks.len() - 1, pile)?;
        }
        Ok(())
    }

    /// Move the top `disks` disks from `from` to `to`.
    pub fn move_disks(&mut self, disks: u32, from: usize, to: usize) -> KernelResult<()> {
        if disks == 1 {
            return self.move_top_disk(from, to);
        }

        let other = PILES - from - to;
        self.move_disks(disks - 1, from, other)?;
        self.move_top_disk(from, to)?;
        self.move_disks(disks - 1, other, to)
    }
}

fn run() -> KernelResult<Outcome> {
    let mut towers = Towers::new();
    towers.build_tower_at(0, DISKS)?;
    towers.move_disks(DISKS, 0, 1)?;
    Ok(Outcome::Count(towers.moves_done()))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Move a 13-disk tower between linked piles",
        RunPlan::builtin(10, 10),
        run,
        verify,
    )
}
