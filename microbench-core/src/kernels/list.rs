// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Takeuchi-style recursion over linked lists.
//!
//! List cells live in an arena and link to each other by index; recursion
//! follows those links without ever copying or freeing a cell.

use crate::error::{KernelError, KernelResult};
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "list";

/// Length of the list returned by `tail(15, 10, 6)`.
pub const EXPECTED: u64 = 10;

type Link = Option<usize>;

#[derive(Debug, Clone)]
struct Element {
    value: u32,
    next: Link,
}

/// Arena of list cells for one run.
#[derive(Debug, Clone, Default)]
pub struct ListArena {
    elements: Vec<Element>,
}

impl ListArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self, link: Link) -> Link {
        link.and_then(|index| self.elements[index].next)
    }

    /// Build a list `length, length - 1, ..., 1` and return its head.
    pub fn make_list(&mut self, length: u32) -> Link {
        if length == 0 {
            return None;
        }
        let next = self.make_list(length - 1);
        self.elements.push(Element {
            value: length,
            next,
        });
        Some(self.elements.len() - 1)
    }

    /// Number of cells reachable from `link`.
    pub fn length(&self, link: Link) -> u64 {
        match link {
            None => 0,
            Some(index) => 1 + self.length(self.elements[index].next),
        }
    }

    /// Values reachable from `link`, head first.
    pub fn values(&self, link: Link) -> Vec<u32> {
        let mut values = Vec::new();
        let mut cursor = link;
        while let Some(index) = cursor {
            values.push(self.elements[index].value);
            cursor = self.elements[index].next;
        }
        values
    }

    /// Whether `x` runs out before `y` does.
    pub fn is_shorter_than(&self, x: Link, y: Link) -> bool {
        let (mut x_tail, mut y_tail) = (x, y);
        while y_tail.is_some() {
            if x_tail.is_none() {
                return true;
            }
            x_tail = self.next(x_tail);
            y_tail = self.next(y_tail);
        }
        false
    }

    pub fn tail(&self, x: Link, y: Link, z: Link) -> Link {
        if !self.is_shorter_than(y, x) {
            return z;
        }
        self.tail(
            self.tail(self.next(x), y, z),
            self.tail(self.next(y), z, x),
            self.tail(self.next(z), x, y),
        )
    }
}

fn run() -> KernelResult<Outcome> {
    let mut arena = ListArena::new();
    let x = arena.make_list(15);
    let y = arena.make_list(10);
    let z = arena.make_list(6);

    let result = arena.tail(x, y, z).ok_or(KernelError::EmptyList)?;
    Ok(Outcome::Count(arena.length(Some(result))))
}

fn verify(outcome: &Outcome) -> bool {
    *outcome == Outcome::Count(EXPECTED)
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Recursive tail over linked lists of length 15, 10 and 6",
        RunPlan::builtin(1, 3),
        run,
        verify,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_list_and_length() {
        let mut arena = ListArena::new();
        let head = arena.make_list(4);
        assert_eq!(arena.length(head), 4);
        assert_eq!(arena.values(head), vec![4, 3, 2, 1]);
        assert_eq!(arena.length(None), 0);
    }

    #[test]
    fn test_is_shorter_than() {
        let mut arena = ListArena::new();
        let short = arena.make_list(2);
        let long = arena.make_list(5);
        assert!(arena.is_shorter_than(short, long));
        assert!(!arena.is_shorter_than(long, short));
        assert!(!arena.is_shorter_than(short, short));
        assert!(!arena.is_shorter_than(None, None));
    }

    #[test]
    fn test_tail_result() {
        assert_eq!(run().unwrap(), Outcome::Count(EXPECTED));
    }
}
