//! Microbench Core Library
//!
//! Deterministic CPU micro-benchmark kernels and the contract they share.
//! Provides the workload descriptor, the ordered workload registry, validated
//! run-plan configuration, and every built-in kernel with its golden value.

pub mod config;
pub mod error;
pub mod kernels;
pub mod outcome;
pub mod registry;
pub mod sample_data;
pub mod types;
pub mod workload;

// Re-export commonly used types
pub use config::{ConfigLoader, PlanOverride, SuiteConfig, SuiteSettings};
pub use error::{
    BenchError, BenchResult, HardValidationError, KernelError, KernelResult, VerificationError,
};
pub use outcome::{Outcome, DIGEST_LEN};
pub use registry::WorkloadRegistry;
pub use types::{Cycles, RunPlan, WorkloadTag, MAX_REPETITIONS};
pub use workload::{KernelFn, VerifyFn, Workload};
