// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench run` command - Run a single workload.

use std::path::Path;

use microbench_harness::Harness;

pub fn execute(
    config_path: Option<&Path>,
    selector: &str,
    warmup: Option<u32>,
    cycles: Option<u32>,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = super::registry(config.as_ref())?;

    let workload = registry.select(selector)?;
    let plan = workload.plan().with_overrides(warmup, cycles)?;
    let workload = workload.clone().with_plan(plan);

    tracing::info!(workload = %workload.tag(), "Running workload");
    let report = Harness::new().run(&workload)?;
    println!("{}", report);

    Ok(())
}
