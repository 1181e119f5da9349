// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Microbench CLI
//!
//! Command-line entry point for running the deterministic kernel suite.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// mbench - Deterministic CPU micro-benchmark suite
#[derive(Parser)]
#[command(name = "mbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run-plan file path (defaults to ./microbench.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one workload and print its average
    Run {
        /// Workload tag or zero-based suite index
        selector: String,

        /// Override the warm-up iteration count
        #[arg(short, long)]
        warmup: Option<u32>,

        /// Override the measured iteration count
        #[arg(short, long)]
        cycles: Option<u32>,
    },

    /// Run every workload in suite order
    Suite {
        /// Only run these workloads (repeatable)
        #[arg(long = "only", value_name = "TAG")]
        only: Vec<String>,

        /// Directory for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip warm-up and measure a single iteration
        #[arg(long)]
        quick: bool,
    },

    /// List available workloads
    List,

    /// Validate a run-plan file
    Validate {
        /// Path to the run-plan file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run {
            selector,
            warmup,
            cycles,
        } => commands::run::execute(cli.config.as_deref(), &selector, warmup, cycles),
        Commands::Suite {
            only,
            output,
            quick,
        } => commands::suite::execute(cli.config.as_deref(), &only, output, quick),
        Commands::List => commands::list::execute(cli.config.as_deref()),
        Commands::Validate { file } => commands::validate::execute(&file),
    }
}
