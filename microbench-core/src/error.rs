//! Custom error types for the benchmark suite.
//!
//! Explicit enum error types only. No `Box<dyn Error>` and no `anyhow::Result`
//! inside the libraries; every failure is strongly typed and fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the suite.
/// Nothing here is recoverable: every variant terminates the run.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Run Plans
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Selection Errors
    // =========================================================================
    #[error("Unknown workload: {selector}")]
    UnknownWorkload { selector: String },

    // =========================================================================
    // Run Errors - Kernel Bugs and Correctness Regressions
    // =========================================================================
    #[error("Kernel invariant violated: {0}")]
    Kernel(#[from] KernelError),

    #[error("Verification failed: {0}")]
    Verification(#[from] VerificationError),

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Hard validation errors reject a run plan before anything executes.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate workload entry: {tag}")]
    DuplicateWorkload { tag: String },
}

/// Domain invariant violated inside a kernel.
/// These signal a bug in the kernel itself and never occur on a correct run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("Cannot push disk {disk} onto smaller disk {top} on pile {pile}")]
    OversizedDisk { disk: u32, top: u32, pile: usize },

    #[error("Attempted to remove a disk from empty pile {pile}")]
    EmptyPile { pile: usize },

    #[error("List benchmark produced an empty list")]
    EmptyList,
}

/// A kernel's final outcome did not match its golden value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("workload '{tag}' produced unexpected outcome {actual}")]
    Mismatch { tag: String, actual: String },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;

/// Result type alias for kernel executions.
pub type KernelResult<T> = Result<T, KernelError>;
