// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Direct-form II biquad low-pass filter over the sample payload.
//!
//! All filter arithmetic is single precision. Unlike the other floating-point
//! kernels the reference output was captured at six decimal places, so the
//! verifier compares every sample with a fixed tolerance.

use crate::error::KernelResult;
use crate::outcome::Outcome;
use crate::sample_data::{FILTERED_REFERENCE, SAMPLE_LEN, SAMPLE_PAYLOAD};
use crate::types::{RunPlan, WorkloadTag};
use crate::workload::Workload;

pub const TAG: &str = "biquad";

/// `[b0, b1, b2, a1, a2]`
#[allow(clippy::excessive_precision)]
pub const COEFFICIENTS: [f32; 5] = [
    0.0738017187,
    0.1476034373,
    0.0738017187,
    -1.2505164146,
    0.5457233191,
];

/// Gain applied to each raw sample before filtering.
const INPUT_GAIN: f64 = 2.15;

/// Maximum absolute deviation from a reference sample.
pub const TOLERANCE: f32 = 0.0005;

/// Filter `input` with `coef`, carrying the two delay elements in `w`.
pub fn filter(input: &[f32], coef: &[f32; 5], w: &mut [f32; 2]) -> Vec<f32> {
    input
        .iter()
        .map(|&x| {
            let d0 = x - coef[3] * w[0] - coef[4] * w[1];
            let y = coef[0] * d0 + coef[1] * w[0] + coef[2] * w[1];
            w[1] = w[0];
            w[0] = d0;
            y
        })
        .collect()
}

fn run() -> KernelResult<Outcome> {
    let input: Vec<f32> = SAMPLE_PAYLOAD
        .iter()
        .map(|&b| (f64::from(b) * INPUT_GAIN) as f32)
        .collect();
    let mut w = [0.0f32; 2];
    Ok(Outcome::Signal(filter(&input, &COEFFICIENTS, &mut w)))
}

fn verify(outcome: &Outcome) -> bool {
    match outcome {
        Outcome::Signal(samples) if samples.len() == SAMPLE_LEN => samples
            .iter()
            .zip(FILTERED_REFERENCE.iter())
            .all(|(sample, expected)| (sample - expected).abs() < TOLERANCE),
        _ => false,
    }
}

pub fn workload() -> Workload {
    Workload::new(
        WorkloadTag::new_unchecked(TAG),
        "Biquad low-pass filter over the 1 KiB sample payload",
        RunPlan::builtin(1, 3),
        run,
        verify,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_response_starts_with_b0() {
        let mut w = [0.0f32; 2];
        let out = filter(&[1.0, 0.0, 0.0], &COEFFICIENTS, &mut w);
        assert_eq!(out[0], COEFFICIENTS[0]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_unit_dc_gain() {
        let mut w = [0.0f32; 2];
        let out = filter(&[1.0; 400], &COEFFICIENTS, &mut w);
        assert!((out[399] - 1.0).abs() < 1e-3, "settled at {}", out[399]);
    }

    #[test]
    fn test_sample_payload_matches_reference() {
        let outcome = run().unwrap();
        assert!(verify(&outcome));
    }

    #[test]
    fn test_verify_rejects_any_deviating_sample() {
        let Outcome::Signal(samples) = run().unwrap() else {
            panic!("biquad must produce a signal");
        };

        for (index, delta) in [(1, 100.0), (500, -9999.0), (1022, 0.001)] {
            let mut corrupted = samples.clone();
            corrupted[index] += delta;
            assert!(
                !verify(&Outcome::Signal(corrupted)),
                "deviation at sample {} went unnoticed",
                index
            );
        }
    }

    #[test]
    fn test_verify_rejects_nan() {
        let Outcome::Signal(mut samples) = run().unwrap() else {
            panic!("biquad must produce a signal");
        };
        samples[7] = f32::NAN;
        assert!(!verify(&Outcome::Signal(samples)));
    }

    #[test]
    fn test_verify_rejects_truncated_signal() {
        assert!(!verify(&Outcome::Signal(vec![21.738_296])));
        assert!(!verify(&Outcome::Count(0)));
    }
}
