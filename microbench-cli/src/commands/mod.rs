// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules.

use std::path::Path;

use microbench_core::{BenchResult, ConfigLoader, SuiteConfig, WorkloadRegistry};

pub mod list;
pub mod run;
pub mod suite;
pub mod validate;

/// Run plan picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "microbench.yaml";

/// Load the run plan named on the command line, or the default one if it
/// exists. `None` means the built-in plans apply unchanged.
pub fn load_config(path: Option<&Path>) -> BenchResult<Option<SuiteConfig>> {
    match path {
        Some(path) => ConfigLoader::load_file(path).map(Some),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            ConfigLoader::load_file(DEFAULT_CONFIG).map(Some)
        }
        None => Ok(None),
    }
}

/// Built-in registry with the run plan's overrides applied.
pub fn registry(config: Option<&SuiteConfig>) -> BenchResult<WorkloadRegistry> {
    let mut registry = WorkloadRegistry::builtin();
    if let Some(config) = config {
        registry.apply_config(config)?;
    }
    Ok(registry)
}
