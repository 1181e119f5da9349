// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `mbench suite` command - Run workloads in suite order and report.

use std::path::{Path, PathBuf};

use microbench_core::{RunPlan, WorkloadTag};
use microbench_harness::{Harness, JsonReporter, SuiteReport, TimingDelta, TimingReport};

pub fn execute(
    config_path: Option<&Path>,
    only: &[String],
    output: Option<PathBuf>,
    quick: bool,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let mut registry = super::registry(config.as_ref())?;

    if !only.is_empty() {
        let tags = only
            .iter()
            .map(|t| WorkloadTag::new(t.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        registry.retain_tags(&tags)?;
    }

    let output = output.or_else(|| config.as_ref().map(|c| c.suite.report_dir.clone()));
    let capture_system_info = config
        .as_ref()
        .map(|c| c.suite.capture_system_info)
        .unwrap_or(true);

    println!("Microbench Suite");
    println!("================");
    println!("Workloads: {}", registry.len());
    if quick {
        println!("Mode: quick (no warm-up, 1 measured cycle)");
    }
    println!();

    let harness = Harness::new();
    let mut report = SuiteReport::new(capture_system_info);
    let quick_plan = RunPlan::new(0, 1)?;

    for workload in registry.iter() {
        let workload = if quick {
            workload.clone().with_plan(quick_plan)
        } else {
            workload.clone()
        };

        let timing = harness.run(&workload)?;
        println!("{}", timing);
        println!();
        report.add_result(timing);
    }

    print_summary(&report);

    if let Some(dir) = output {
        let reporter = JsonReporter::new(&dir)?;

        match reporter.latest() {
            Ok(Some(baseline)) => print_comparison(&report, &baseline),
            Ok(None) => {}
            Err(e) => tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "Skipping comparison with previous report"
            ),
        }

        let path = reporter.save(&report)?;
        println!();
        println!("Suite report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &SuiteReport) {
    println!("╔════════════════╦═════════╦═════════╦════════════════╦════════════════════════╗");
    println!("║ Workload       ║ Warm-up ║ Cycles  ║ Average        ║ Outcome                ║");
    println!("╠════════════════╬═════════╬═════════╬════════════════╬════════════════════════╣");

    for r in &report.results {
        let mut outcome = r.outcome.to_string();
        if outcome.len() > 22 {
            outcome.truncate(19);
            outcome.push_str("...");
        }

        println!(
            "║ {:<14} ║ {:>7} ║ {:>7} ║ {:>14} ║ {:<22} ║",
            r.tag.as_str(),
            r.warmup,
            r.cycles,
            TimingReport::format_ms(r.average_ms),
            outcome
        );
    }

    println!("╚════════════════╩═════════╩═════════╩════════════════╩════════════════════════╝");
    println!(
        "Total measured time: {}",
        TimingReport::format_ms(report.total_ms())
    );
}

fn print_comparison(report: &SuiteReport, baseline: &SuiteReport) {
    let deltas = report.compare(baseline);
    if deltas.is_empty() {
        return;
    }

    println!();
    println!(
        "Compared with run of {}:",
        baseline.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let (Some(now), Some(then)) = (&report.system_info, &baseline.system_info) {
        if !now.same_hardware(then) {
            println!("  note: previous run was on {}", then);
        }
    }

    for delta in &deltas {
        println!("  {}", format_delta(delta));
    }
}

fn format_delta(delta: &TimingDelta) -> String {
    format!(
        "{:<14} {:>12} -> {:>12} ({:+.1}%)",
        delta.tag.as_str(),
        TimingReport::format_ms(delta.baseline_ms),
        TimingReport::format_ms(delta.current_ms),
        delta.change_pct()
    )
}
