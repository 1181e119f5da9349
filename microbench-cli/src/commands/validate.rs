// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench validate` command - Validate a run-plan file.

use std::path::Path;

use microbench_core::{BenchResult, ConfigLoader, SuiteConfig, WorkloadRegistry};

/// Parse the file and check every override against the built-in registry.
fn check(file: &Path) -> BenchResult<(SuiteConfig, WorkloadRegistry)> {
    let config = ConfigLoader::load_file(file)?;
    let mut registry = WorkloadRegistry::builtin();
    registry.apply_config(&config)?;
    Ok((config, registry))
}

pub fn execute(file: &Path) -> anyhow::Result<()> {
    tracing::info!(file = %file.display(), "Validating run plan");

    match check(file) {
        Ok((config, registry)) => {
            println!("✓ Run plan is valid");
            println!();
            println!("Suite Settings:");
            println!("  Report Directory:    {}", config.suite.report_dir.display());
            println!("  Capture System Info: {}", config.suite.capture_system_info);
            println!();
            println!("Overrides ({}):", config.workloads.len());
            for entry in &config.workloads {
                let plan = registry.get(entry.tag.as_str())?.plan();
                println!(
                    "  - {} (warm-up: {}, cycles: {})",
                    entry.tag, plan.warmup, plan.cycles
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Run plan validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
