// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end integration tests for the kernel suite.
//!
//! These tests drive every built-in workload through the public contract and
//! exercise run-plan loading from disk.

use microbench_core::kernels::{crc, mandelbrot, nbody, sieve, towers};
use microbench_core::sample_data::SAMPLE_PAYLOAD;
use microbench_core::{BenchError, ConfigLoader, KernelError, Outcome, WorkloadRegistry};
use tempfile::TempDir;

/// Every built-in kernel must produce an outcome its own verifier accepts.
#[test]
fn test_every_builtin_workload_verifies() {
    let registry = WorkloadRegistry::builtin();

    for workload in registry.iter() {
        let outcome = workload
            .execute()
            .unwrap_or_else(|e| panic!("{} failed: {}", workload.tag(), e));
        assert!(
            workload.verify(&outcome),
            "{} produced unexpected outcome {}",
            workload.tag(),
            outcome
        );
    }
}

/// Kernels keep no state between invocations.
#[test]
fn test_repeated_runs_are_identical() {
    let registry = WorkloadRegistry::builtin();

    for tag in [
        "sieve", "permute", "queens", "storage", "towers", "list", "bounce", "crc", "biquad",
        "sha256",
    ] {
        let workload = registry.get(tag).unwrap();
        let first = workload.execute().unwrap();
        let second = workload.execute().unwrap();
        assert_eq!(first, second, "{} is not deterministic", tag);
    }
}

/// The two heavy kernels repeat on smaller instances of the same computation.
#[test]
fn test_repeated_heavy_kernels_are_identical() {
    assert_eq!(
        nbody::simulate(1000).to_bits(),
        nbody::simulate(1000).to_bits()
    );
    assert_eq!(mandelbrot::mandelbrot(64), mandelbrot::mandelbrot(64));
}

#[test]
fn test_outcome_kinds_per_workload() {
    let registry = WorkloadRegistry::builtin();

    let kind = |tag: &str| registry.get(tag).unwrap().execute().unwrap().kind();
    assert_eq!(kind("sieve"), "count");
    assert_eq!(kind("queens"), "flag");
    assert_eq!(kind("biquad"), "signal");
    assert_eq!(kind("sha256"), "digest");
}

#[test]
fn test_towers_scenario() {
    let mut game = towers::Towers::new();
    game.build_tower_at(0, towers::DISKS).unwrap();
    assert_eq!(game.pile_sizes(0).len(), 14);

    game.move_disks(towers::DISKS, 0, 1).unwrap();
    assert_eq!(game.moves_done(), 8191);

    // Only the base disk stays behind; the rest land in order on pile 1.
    assert_eq!(game.pile_sizes(0), vec![13]);
    assert_eq!(game.pile_sizes(1), (0..13).collect::<Vec<u32>>());
    assert!(game.pile_sizes(2).is_empty());
}

#[test]
fn test_towers_rule_violation_is_an_error() {
    let mut game = towers::Towers::new();
    game.build_tower_at(0, 2).unwrap();
    // A second tower on the same pile would put size 2 on top of size 0.
    let err = game.build_tower_at(0, 2).unwrap_err();
    assert_eq!(
        err,
        KernelError::OversizedDisk {
            disk: 2,
            top: 0,
            pile: 0
        }
    );
}

#[test]
fn test_sieve_scenario() {
    let mut flags = vec![true; sieve::SIZE];
    assert_eq!(sieve::sieve(&mut flags), 669);

    let mut small = vec![true; 10];
    assert_eq!(sieve::sieve(&mut small), 4);
}

#[test]
fn test_crc_scenario() {
    let table = crc::make_table(crc::POLYNOMIAL);
    assert_eq!(crc::checksum(b"123456789", &table), 0xcbf4_3926);
    assert_eq!(
        u64::from(crc::checksum(&SAMPLE_PAYLOAD, &table)),
        crc::EXPECTED
    );
}

#[test]
fn test_config_file_applies_to_registry() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.yaml");
    std::fs::write(
        &path,
        r#"
suite:
  report_dir: out
workloads:
  - tag: towers
    warmup: 0
    cycles: 1
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_file(&path).unwrap();
    let mut registry = WorkloadRegistry::builtin();
    registry.apply_config(&config).unwrap();

    let plan = registry.get("towers").unwrap().plan();
    assert_eq!(plan.warmup, 0);
    assert_eq!(plan.cycles.get(), 1);
    assert_eq!(config.suite.report_dir, std::path::PathBuf::from("out"));
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yaml");
    std::fs::write(&path, "workloads: [tag: \n").unwrap();

    assert!(matches!(
        ConfigLoader::load_file(&path),
        Err(BenchError::ConfigParse { .. })
    ));
}

#[test]
fn test_verifiers_reject_foreign_outcomes() {
    let registry = WorkloadRegistry::builtin();
    for workload in registry.iter() {
        assert!(
            !workload.verify(&Outcome::Flag(false)),
            "{} accepted Flag(false)",
            workload.tag()
        );
    }
}
