// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Workload descriptor binding a kernel to its verifier and repetition policy.
//!
//! Kernels are plain function pointers: they take no input, rebuild all of
//! their working state on every call, and leave nothing behind for the next
//! invocation. That is what makes repeated measured iterations comparable.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::types::{RunPlan, WorkloadTag};

/// A zero-argument kernel execution.
pub type KernelFn = fn() -> KernelResult<Outcome>;

/// A pure predicate over a kernel's outcome.
pub type VerifyFn = fn(&Outcome) -> bool;

/// Immutable description of one benchmark workload.
#[derive(Debug, Clone)]
pub struct Workload {
    tag: WorkloadTag,
    description: &'static str,
    plan: RunPlan,
    run: KernelFn,
    verify: VerifyFn,
}

impl Workload {
    /// Create a new workload descriptor.
    pub fn new(
        tag: WorkloadTag,
        description: &'static str,
        plan: RunPlan,
        run: KernelFn,
        verify: VerifyFn,
    ) -> Self {
        Self {
            tag,
            description,
            plan,
            run,
            verify,
        }
    }

    /// The stable identifier of this workload.
    pub fn tag(&self) -> &WorkloadTag {
        &self.tag
    }

    /// One-line human description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Warm-up and measured counts.
    pub fn plan(&self) -> RunPlan {
        self.plan
    }

    /// Return a copy of this workload with a different run plan.
    pub fn with_plan(mut self, plan: RunPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Execute the kernel once.
    pub fn execute(&self) -> KernelResult<Outcome> {
        (self.run)()
    }

    /// Check an outcome against the golden value.
    pub fn verify(&self, outcome: &Outcome) -> bool {
        (self.verify)(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer() -> KernelResult<Outcome> {
        Ok(Outcome::Count(42))
    }

    fn is_answer(outcome: &Outcome) -> bool {
        *outcome == Outcome::Count(42)
    }

    #[test]
    fn test_execute_and_verify() {
        let workload = Workload::new(
            WorkloadTag::new("answer").unwrap(),
            "constant",
            RunPlan::new(0, 1).unwrap(),
            answer,
            is_answer,
        );

        let outcome = workload.execute().unwrap();
        assert!(workload.verify(&outcome));
        assert!(!workload.verify(&Outcome::Count(41)));
    }

    #[test]
    fn test_with_plan() {
        let workload = Workload::new(
            WorkloadTag::new("answer").unwrap(),
            "constant",
            RunPlan::new(0, 1).unwrap(),
            answer,
            is_answer,
        )
        .with_plan(RunPlan::new(3, 7).unwrap());

        assert_eq!(workload.plan().warmup, 3);
        assert_eq!(workload.plan().cycles.get(), 7);
    }
}
