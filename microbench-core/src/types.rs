// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Workload tags and repetition counts validate their invariants at creation
//! time, so the harness never sees an unaddressable workload or an empty
//! measured phase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Maximum length of a workload tag.
const MAX_TAG_LEN: usize = 32;

/// Upper bound for any repetition count accepted from a run plan.
pub const MAX_REPETITIONS: u32 = 1_000_000;

/// Validated workload identifier.
/// Must be non-empty, lowercase ASCII alphanumeric with hyphens/underscores, max 32 chars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkloadTag(String);

impl WorkloadTag {
    /// Create a new WorkloadTag with validation.
    pub fn new(tag: impl Into<String>) -> Result<Self, HardValidationError> {
        let tag = tag.into();

        if tag.is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "tag",
                value: tag,
                reason: "Workload tag cannot be empty".to_string(),
            });
        }

        if tag.len() > MAX_TAG_LEN {
            return Err(HardValidationError::InvalidFieldValue {
                field: "tag",
                value: tag.clone(),
                reason: format!("Workload tag too long: {} chars (max {})", tag.len(), MAX_TAG_LEN),
            });
        }

        if !tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(HardValidationError::InvalidFieldValue {
                field: "tag",
                value: tag,
                reason: "Workload tag must contain only lowercase alphanumerics, hyphens, and underscores".to_string(),
            });
        }

        Ok(Self(tag))
    }

    /// Create a tag for a built-in workload without validation.
    /// Built-in tags are checked by the registry tests.
    pub(crate) fn new_unchecked(tag: &'static str) -> Self {
        Self(tag.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkloadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WorkloadTag {
    type Error = HardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkloadTag> for String {
    fn from(tag: WorkloadTag) -> Self {
        tag.0
    }
}

/// Validated measured-phase repetition count.
/// Must be in range 1..=MAX_REPETITIONS; zero is rejected so the average
/// time per iteration is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Cycles(u32);

impl Cycles {
    /// Create a new Cycles count with bounds validation.
    pub fn new(count: u32) -> Result<Self, HardValidationError> {
        if count == 0 {
            return Err(HardValidationError::InvalidFieldValue {
                field: "cycles",
                value: count.to_string(),
                reason: "Measured cycles must be at least 1".to_string(),
            });
        }
        if count > MAX_REPETITIONS {
            return Err(HardValidationError::InvalidFieldValue {
                field: "cycles",
                value: count.to_string(),
                reason: format!("Measured cycles must not exceed {}", MAX_REPETITIONS),
            });
        }
        Ok(Self(count))
    }

    /// Create a count for a built-in workload without validation.
    pub(crate) const fn new_unchecked(count: u32) -> Self {
        Self(count)
    }

    /// Get the inner count.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Cycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Cycles {
    type Error = HardValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cycles> for u32 {
    fn from(cycles: Cycles) -> Self {
        cycles.0
    }
}

/// Warm-up and measured repetition policy for one workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    /// Untimed repetitions executed before measurement
    pub warmup: u32,
    /// Timed repetitions whose average is reported
    pub cycles: Cycles,
}

impl RunPlan {
    /// Create a plan, validating both counts.
    pub fn new(warmup: u32, cycles: u32) -> Result<Self, HardValidationError> {
        if warmup > MAX_REPETITIONS {
            return Err(HardValidationError::InvalidFieldValue {
                field: "warmup",
                value: warmup.to_string(),
                reason: format!("Warm-up iterations must not exceed {}", MAX_REPETITIONS),
            });
        }
        Ok(Self {
            warmup,
            cycles: Cycles::new(cycles)?,
        })
    }

    pub(crate) const fn builtin(warmup: u32, cycles: u32) -> Self {
        Self {
            warmup,
            cycles: Cycles::new_unchecked(cycles),
        }
    }

    /// Replace whichever counts are given, keeping the rest.
    pub fn with_overrides(
        self,
        warmup: Option<u32>,
        cycles: Option<u32>,
    ) -> Result<Self, HardValidationError> {
        Self::new(
            warmup.unwrap_or(self.warmup),
            cycles.unwrap_or(self.cycles.get()),
        )
    }
}
