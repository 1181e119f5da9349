// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench list` command - List available workloads.
//!
//! Shows each workload's selector index and the plan it would run with,
//! after any run-plan overrides.

use std::path::Path;

use microbench_core::Workload;

const TOP: &str = "╔═════╦════════════════╦═════════╦═════════╦════════════════════════════════════════════════════════════╗";
const HEADER: &str = "║ #   ║ Tag            ║ Warm-up ║ Cycles  ║ Description                                                ║";
const SEPARATOR: &str = "╠═════╬════════════════╬═════════╬═════════╬════════════════════════════════════════════════════════════╣";
const BOTTOM: &str = "╚═════╩════════════════╩═════════╩═════════╩════════════════════════════════════════════════════════════╝";

fn format_row(index: usize, workload: &Workload) -> String {
    let plan = workload.plan();
    format!(
        "║ {:<3} ║ {:<14} ║ {:>7} ║ {:>7} ║ {:<58} ║",
        index,
        workload.tag().as_str(),
        plan.warmup,
        plan.cycles.get(),
        workload.description()
    )
}

pub fn execute(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = super::registry(config.as_ref())?;

    println!("{}", TOP);
    println!("{}", HEADER);
    println!("{}", SEPARATOR);

    for (index, workload) in registry.iter().enumerate() {
        println!("{}", format_row(index, workload));
    }

    println!("{}", BOTTOM);
    println!();
    println!("Total: {} workload(s)", registry.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use microbench_core::WorkloadRegistry;

    #[test]
    fn test_rows_fit_the_box() {
        let width = HEADER.chars().count();
        for line in [TOP, SEPARATOR, BOTTOM] {
            assert_eq!(line.chars().count(), width);
        }

        for (index, workload) in WorkloadRegistry::builtin().iter().enumerate() {
            let row = format_row(index, workload);
            assert_eq!(row.chars().count(), width, "row overflows: {}", row);
        }
    }
}
