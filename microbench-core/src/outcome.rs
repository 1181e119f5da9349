// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Kernel result values.
//!
//! An outcome has no identity beyond its value. Floating-point outcomes are
//! compared bit-for-bit against their golden constants by the verifiers, never
//! with a tolerance, unless the kernel's own contract says otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// The value produced by one kernel execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Integer count or checksum
    Count(u64),
    /// Floating-point scalar
    Scalar(f64),
    /// Fixed-size byte sequence
    Digest([u8; DIGEST_LEN]),
    /// Boolean success flag
    Flag(bool),
    /// Filtered sample stream
    Signal(Vec<f32>),
}

impl Outcome {
    /// Short name of the variant for reports.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Count(_) => "count",
            Self::Scalar(_) => "scalar",
            Self::Digest(_) => "digest",
            Self::Flag(_) => "flag",
            Self::Signal(_) => "signal",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            // Debug formatting keeps the shortest round-trip representation.
            Self::Scalar(x) => write!(f, "{:?}", x),
            Self::Digest(bytes) => write!(f, "{}", hex::encode(bytes)),
            Self::Flag(b) => write!(f, "{}", b),
            Self::Signal(samples) => write!(f, "{} samples", samples.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Count(669).to_string(), "669");
        assert_eq!(
            Outcome::Scalar(-0.1690859889909308).to_string(),
            "-0.1690859889909308"
        );
        assert_eq!(Outcome::Flag(true).to_string(), "true");

        let mut digest = [0u8; DIGEST_LEN];
        digest[0] = 0xab;
        assert!(Outcome::Digest(digest).to_string().starts_with("ab00"));
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&Outcome::Count(8191)).unwrap();
        assert_eq!(json, r#"{"kind":"count","value":8191}"#);

        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Count(8191));
    }
}
