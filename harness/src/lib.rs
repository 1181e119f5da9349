// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Microbench Harness
//!
//! Runs workloads from `microbench-core` through a warm-up phase and a timed
//! measured phase, verifies the result, and reports the average.
//!
//! # Components
//!
//! - **Clock**: monotonic time source with a known tick resolution
//! - **Harness**: the warm-up / measure / verify protocol
//! - **Metrics**: per-workload timing, whole-suite reports and run-to-run deltas
//! - **Reporter**: timestamped JSON files for later comparison

pub mod clock;
pub mod harness;
pub mod metrics;
pub mod reporter;

pub use clock::{Clock, MonotonicClock};
pub use harness::Harness;
pub use metrics::{SuiteReport, SystemInfo, TimingDelta, TimingReport};
pub use reporter::{JsonReporter, ReporterError};
