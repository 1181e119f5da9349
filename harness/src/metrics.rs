// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timing report types for benchmark runs.
//!
//! This module defines the data structures used to capture and serialize
//! one workload's timing and the aggregate of a whole suite run.

use std::fmt;

use chrono::{DateTime, Utc};
use microbench_core::{Outcome, WorkloadTag};
use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Timing of one workload run through the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Workload identifier
    pub tag: WorkloadTag,
    /// Untimed repetitions executed first
    pub warmup: u32,
    /// Timed repetitions
    pub cycles: u32,
    /// Wall time of the whole measured phase in milliseconds
    pub total_ms: f64,
    /// Mean time of one measured repetition in milliseconds
    pub average_ms: f64,
    /// Outcome of the last measured repetition
    pub outcome: Outcome,
}

impl TimingReport {
    /// Build a report from the measured phase's total duration.
    pub fn new(tag: WorkloadTag, warmup: u32, cycles: u32, total_ms: f64, outcome: Outcome) -> Self {
        let average_ms = if cycles == 0 {
            0.0
        } else {
            total_ms / f64::from(cycles)
        };

        Self {
            tag,
            warmup,
            cycles,
            total_ms,
            average_ms,
            outcome,
        }
    }

    /// Format a millisecond value in human-readable form (auto-selects ns/μs/ms/s).
    pub fn format_ms(ms: f64) -> String {
        if ms < 0.001 {
            format!("{:.0}ns", ms * 1_000_000.0)
        } else if ms < 1.0 {
            format!("{:.2}μs", ms * 1_000.0)
        } else if ms < 1_000.0 {
            format!("{:.2}ms", ms)
        } else {
            format!("{:.2}s", ms / 1_000.0)
        }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tag)?;
        writeln!(f, "warmup: {} cycle", self.warmup)?;
        write!(f, "{} cycle average: {} ms", self.cycles, self.average_ms)
    }
}

const UNKNOWN: &str = "unknown";

/// Host a suite ran on. Timings are only comparable between runs on the
/// same hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub host: String,
    /// Name and version, e.g. `Ubuntu 22.04`
    pub os: String,
    pub kernel: Option<String>,
    pub cpu_model: String,
    pub logical_cpus: usize,
    /// Reported frequency of the first CPU at capture time
    pub cpu_mhz: u64,
    pub memory_bytes: u64,
}

impl SystemInfo {
    /// Probe the current host. Only CPU and memory tables are refreshed.
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => UNKNOWN.to_string(),
        };
        let first_cpu = sys.cpus().first();

        Self {
            host: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            os,
            kernel: System::kernel_version(),
            cpu_model: first_cpu
                .map(|cpu| cpu.brand().trim().to_string())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            logical_cpus: sys.cpus().len(),
            cpu_mhz: first_cpu.map_or(0, |cpu| cpu.frequency()),
            memory_bytes: sys.total_memory(),
        }
    }

    /// Whether `other` describes the same processor setup.
    pub fn same_hardware(&self, other: &SystemInfo) -> bool {
        self.cpu_model == other.cpu_model && self.logical_cpus == other.logical_cpus
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} logical CPUs), {} on {}",
            self.cpu_model, self.logical_cpus, self.os, self.host
        )
    }
}

/// One workload's average against the same workload in an earlier run.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingDelta {
    pub tag: WorkloadTag,
    pub baseline_ms: f64,
    pub current_ms: f64,
}

impl TimingDelta {
    /// Relative change in percent. Positive means slower than the baseline.
    pub fn change_pct(&self) -> f64 {
        if self.baseline_ms == 0.0 {
            return 0.0;
        }
        (self.current_ms - self.baseline_ms) / self.baseline_ms * 100.0
    }
}

/// Complete suite run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite identifier
    pub suite: String,
    /// Framework version
    pub version: String,
    /// Timestamp when the suite was started
    pub timestamp: DateTime<Utc>,
    /// Host description, when capture is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,
    /// Per-workload timings in run order
    pub results: Vec<TimingReport>,
}

impl SuiteReport {
    /// Create an empty report stamped with the current time.
    pub fn new(capture_system_info: bool) -> Self {
        Self {
            suite: "microbench".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: capture_system_info.then(SystemInfo::collect),
            results: Vec::new(),
        }
    }

    /// Add a result to the report.
    pub fn add_result(&mut self, result: TimingReport) {
        self.results.push(result);
    }

    /// Look up the result for one workload.
    pub fn find(&self, tag: &str) -> Option<&TimingReport> {
        self.results.iter().find(|r| r.tag.as_str() == tag)
    }

    /// Pair each result with the same workload in `baseline`, in run order.
    /// Workloads the baseline never ran are skipped.
    pub fn compare(&self, baseline: &SuiteReport) -> Vec<TimingDelta> {
        self.results
            .iter()
            .filter_map(|current| {
                baseline.find(current.tag.as_str()).map(|old| TimingDelta {
                    tag: current.tag.clone(),
                    baseline_ms: old.average_ms,
                    current_ms: current.average_ms,
                })
            })
            .collect()
    }

    /// Sum of the measured phases of every workload.
    pub fn total_ms(&self) -> f64 {
        self.results.iter().map(|r| r.total_ms).sum()
    }
}
