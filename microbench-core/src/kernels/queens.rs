// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Eight queens by depth-first backtracking, one queen per column.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "queens";

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

const DIAGONALS: usize = 2 * BOARD_SIZE;

/// Independent solves folded into one kernel run.
pub const SOLVES_PER_RUN: usize = 10;

/// Occupancy of rows and both diagonal families, plus the placements.
///
/// Rising diagonals are indexed by `column + row`, falling diagonals by
/// `column - row + 7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueensBoard {
    free_rows: [bool; BOARD_SIZE],
    free_rising: [bool; DIAGONALS],
    free_falling: [bool; DIAGONALS],
    queen_column_by_row: [Option<usize>; BOARD_SIZE],
}

impl QueensBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            free_rows: [true; BOARD_SIZE],
            free_rising: [true; DIAGONALS],
            free_falling: [true; DIAGONALS],
            queen_column_by_row: [None; BOARD_SIZE],
        }
    }

    /// Clear every placement.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Column of the queen in each row, if one is placed.
    pub fn placements(&self) -> &[Option<usize>; BOARD_SIZE] {
        &self.queen_column_by_row
    }

    fn is_free(&self, row: usize, column: usize) -> bool {
        self.free_rows[row]
            && self.free_rising[column + row]
            && self.free_falling[column + BOARD_SIZE - 1 - row]
    }

    fn mark(&mut self, row: usize, column: usize, free: bool) {
        self.free_rows[row] = free;
        self.free_rising[column + row] = free;
        self.free_falling[column + BOARD_SIZE - 1 - row] = free;
    }

    /// Try to place queens in `column` and every column after it.
    ///
    /// Rows are scanned in ascending order. A failed branch is fully undone
    /// before the next row is tried, so the board only ever holds the current
    /// partial solution.
    pub fn place(&mut self, column: usize) -> bool {
        for row in 0..BOARD_SIZE {
            if !self.is_free(row, column) {
                continue;
            }

            self.queen_column_by_row[row] = Some(column);
            self.mark(row, column, false);

            if column == BOARD_SIZE - 1 || self.place(column + 1) {
                return true;
            }

            self.mark(row, column, true);
            self.queen_column_by_row[row] = None;
        }
        false
    }
}

impl Default for QueensBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve the eight queens existence problem on a fresh board.
pub fn solve() -> bool {
    QueensBoard::new().place(0)
}

fn run() -> KernelResult<Outcome> {
    let mut solved = true;
    for _ in 0..SOLVES_PER_RUN {
        solved = solved && solve();
    }
    Ok(Outcome::Flag(solved))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Flag(true)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Ten backtracking solves of the eight queens problem",
        RunPlan::builtin(1, 3),
        run,
        verify,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(board: &QueensBoard) -> Vec<usize> {
        board
            .placements()
            .iter()
            .map(|c| c.expect("every row holds a queen"))
            .collect()
    }

    #[test]
    fn test_first_solution_in_scan_order() {
        let mut board = QueensBoard::new();
        assert!(board.place(0));
        assert_eq!(columns(&board), vec![0, 6, 4, 7, 1, 3, 5, 2]);
    }

    #[test]
    fn test_solution_is_non_attacking() {
        let mut board = QueensBoard::new();
        assert!(board.place(0));
        let cols = columns(&board);

        let mut seen = [false; BOARD_SIZE];
        for &c in &cols {
            assert!(!seen[c], "column {} used twice", c);
            seen[c] = true;
        }

        for r1 in 0..BOARD_SIZE {
            for r2 in r1 + 1..BOARD_SIZE {
                let row_gap = r2 - r1;
                let col_gap = cols[r1].abs_diff(cols[r2]);
                assert_ne!(row_gap, col_gap, "rows {} and {} share a diagonal", r1, r2);
            }
        }
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = QueensBoard::new();
        assert!(board.place(0));
        board.reset();
        assert_eq!(board, QueensBoard::new());
        assert!(board.placements().iter().all(Option::is_none));
    }

    #[test]
    fn test_blocked_column_backtracks_cleanly() {
        let mut board = QueensBoard::new();
        // Occupy every row so column 0 has nowhere to go.
        board.free_rows = [false; BOARD_SIZE];
        assert!(!board.place(0));
        assert!(board.placements().iter().all(Option::is_none));
        assert!(board.free_rising.iter().all(|&f| f));
    }

    #[test]
    fn test_run_is_repeatable() {
        assert_eq!(run().unwrap(), Outcome::Flag(true));
        assert_eq!(run().unwrap(), run().unwrap());
        assert!(!verify(&Outcome::Flag(false)));
    }
}
