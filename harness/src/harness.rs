// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark harness for running and timing workloads.
//!
//! One run is three strictly sequential phases: untimed warm-up, the timed
//! measured loop, then verification of the last measured outcome. Only the
//! measured loop sits between the two clock reads.

use std::hint::black_box;

use microbench_core::{BenchResult, VerificationError, Workload};
use tracing::{debug, error, info};

use crate::clock::{Clock, MonotonicClock};
use crate::metrics::TimingReport;

/// A benchmark harness for measuring workload latency.
#[derive(Debug, Clone, Default)]
pub struct Harness<C: Clock = MonotonicClock> {
    clock: C,
}

impl Harness {
    /// Create a harness on the monotonic system clock.
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }
}

impl<C: Clock> Harness<C> {
    /// Create a harness reading from a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run a workload with its own plan and report the measured average.
    ///
    /// Kernel errors in either phase and a failed verification abort the
    /// run; no partial report is produced.
    pub fn run(&self, workload: &Workload) -> BenchResult<TimingReport> {
        let tag = workload.tag();
        let plan = workload.plan();
        let cycles = plan.cycles.get();

        debug!(workload = %tag, iterations = plan.warmup, "Starting warm-up phase");
        for _ in 0..plan.warmup {
            black_box(workload.execute()?);
        }

        debug!(workload = %tag, iterations = cycles, "Starting measured phase");
        let start = self.clock.now();
        let mut last = black_box(workload.execute()?);
        for _ in 1..cycles {
            last = black_box(workload.execute()?);
        }
        let end = self.clock.now();

        let ticks = self.clock.elapsed(start, end);
        debug!(workload = %tag, ticks, "Measured phase finished");

        if !workload.verify(&last) {
            error!(workload = %tag, actual = %last, "Verification failed");
            return Err(VerificationError::Mismatch {
                tag: tag.to_string(),
                actual: last.to_string(),
            }
            .into());
        }

        let report = TimingReport::new(tag.clone(), plan.warmup, cycles, C::ticks_to_ms(ticks), last);
        info!(
            workload = %tag,
            warmup = report.warmup,
            cycles = report.cycles,
            average_ms = report.average_ms,
            "Workload complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use microbench_core::{
        BenchError, KernelError, KernelResult, Outcome, RunPlan, WorkloadTag,
    };

    thread_local! {
        static INVOCATIONS: Cell<u64> = const { Cell::new(0) };
    }

    fn invocations() -> u64 {
        INVOCATIONS.with(Cell::get)
    }

    /// Counts its own calls and returns the running count.
    fn counting_kernel() -> KernelResult<Outcome> {
        let n = INVOCATIONS.with(|c| {
            c.set(c.get() + 1);
            c.get()
        });
        Ok(Outcome::Count(n))
    }

    fn accept_any(_: &Outcome) -> bool {
        true
    }

    fn reject_all(_: &Outcome) -> bool {
        false
    }

    fn failing_kernel() -> KernelResult<Outcome> {
        Err(KernelError::EmptyPile { pile: 2 })
    }

    /// Reads the kernel invocation counter as its time, one tick per ms.
    struct InvocationClock;

    impl Clock for InvocationClock {
        type Timestamp = u64;

        const TICKS_PER_MS: f64 = 1.0;

        fn now(&self) -> u64 {
            invocations()
        }

        fn elapsed(&self, start: u64, end: u64) -> u64 {
            end - start
        }
    }

    fn counting_workload(warmup: u32, cycles: u32, verify: fn(&Outcome) -> bool) -> Workload {
        INVOCATIONS.with(|c| c.set(0));
        Workload::new(
            WorkloadTag::new("counting").unwrap(),
            "counts invocations",
            RunPlan::new(warmup, cycles).unwrap(),
            counting_kernel,
            verify,
        )
    }

    #[test]
    fn test_single_measured_run_invokes_once() {
        let workload = counting_workload(0, 1, accept_any);
        let report = Harness::new().run(&workload).unwrap();

        assert_eq!(invocations(), 1);
        assert_eq!(report.outcome, Outcome::Count(1));
        assert!(report.average_ms >= 0.0);
    }

    #[test]
    fn test_warmup_precedes_measured_window() {
        let workload = counting_workload(3, 5, accept_any);
        let report = Harness::with_clock(InvocationClock).run(&workload).unwrap();

        assert_eq!(invocations(), 8);
        // Start was read after 3 calls and end after 8, so exactly the
        // measured calls fall inside the window.
        assert_eq!(report.total_ms, 5.0);
        assert_eq!(report.average_ms, 1.0);
        assert_eq!(report.warmup, 3);
        assert_eq!(report.cycles, 5);
    }

    #[test]
    fn test_last_measured_outcome_is_verified() {
        fn is_eighth(outcome: &Outcome) -> bool {
            *outcome == Outcome::Count(8)
        }

        let workload = counting_workload(3, 5, is_eighth);
        let report = Harness::with_clock(InvocationClock).run(&workload).unwrap();
        assert_eq!(report.outcome, Outcome::Count(8));
    }

    #[test]
    fn test_verification_failure_is_fatal() {
        let workload = counting_workload(0, 2, reject_all);
        let result = Harness::new().run(&workload);

        match result {
            Err(BenchError::Verification(VerificationError::Mismatch { tag, actual })) => {
                assert_eq!(tag, "counting");
                assert_eq!(actual, "2");
            }
            other => panic!("expected verification error, got {:?}", other),
        }
        assert_eq!(invocations(), 2);
    }

    #[test]
    fn test_kernel_error_aborts_run() {
        let workload = Workload::new(
            WorkloadTag::new("broken").unwrap(),
            "always fails",
            RunPlan::new(1, 3).unwrap(),
            failing_kernel,
            accept_any,
        );

        let result = Harness::new().run(&workload);
        assert!(matches!(
            result,
            Err(BenchError::Kernel(KernelError::EmptyPile { pile: 2 }))
        ));
    }

    #[test]
    fn test_builtin_workload_end_to_end() {
        let registry = microbench_core::WorkloadRegistry::builtin();
        let sieve = registry
            .get("sieve")
            .unwrap()
            .clone()
            .with_plan(RunPlan::new(1, 2).unwrap());

        let report = Harness::new().run(&sieve).unwrap();
        assert_eq!(report.outcome, Outcome::Count(669));
        assert_eq!(report.tag.as_str(), "sieve");
    }
}
