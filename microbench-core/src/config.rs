// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML run-plan parser with strict schema validation.
//!
//! A run plan overrides warm-up and measured counts per workload and sets
//! suite-wide reporting options. Any invalid field results in a
//! HardValidationError before a single kernel runs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BenchError, BenchResult, HardValidationError};
use crate::types::{Cycles, WorkloadTag, MAX_REPETITIONS};

/// Raw per-workload entry as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWorkloadPlan {
    tag: String,
    #[serde(default)]
    warmup: Option<u32>,
    #[serde(default)]
    cycles: Option<u32>,
}

/// Raw suite-wide settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSuiteSettings {
    #[serde(default = "default_report_dir")]
    report_dir: String,
    #[serde(default = "default_capture_system_info")]
    capture_system_info: bool,
}

fn default_report_dir() -> String {
    "data".to_string()
}

fn default_capture_system_info() -> bool {
    true
}

impl Default for RawSuiteSettings {
    fn default() -> Self {
        Self {
            report_dir: default_report_dir(),
            capture_system_info: default_capture_system_info(),
        }
    }
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    suite: RawSuiteSettings,
    #[serde(default)]
    workloads: Vec<RawWorkloadPlan>,
}

/// Validated suite-wide settings.
#[derive(Debug, Clone)]
pub struct SuiteSettings {
    pub report_dir: PathBuf,
    pub capture_system_info: bool,
}

impl Default for SuiteSettings {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from(default_report_dir()),
            capture_system_info: default_capture_system_info(),
        }
    }
}

/// Validated override for one workload. Absent counts keep the built-in value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOverride {
    pub tag: WorkloadTag,
    pub warmup: Option<u32>,
    pub cycles: Option<Cycles>,
}

/// Complete validated run plan.
#[derive(Debug, Clone, Default)]
pub struct SuiteConfig {
    pub suite: SuiteSettings,
    pub workloads: Vec<PlanOverride>,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a run plan from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<SuiteConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate a run plan from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<SuiteConfig> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> BenchResult<SuiteConfig> {
        let suite = Self::validate_suite(raw.suite)?;

        let mut workloads = Vec::with_capacity(raw.workloads.len());
        let mut seen_tags = HashSet::new();

        for raw_plan in raw.workloads {
            let plan = Self::validate_workload(raw_plan)?;

            if !seen_tags.insert(plan.tag.clone()) {
                return Err(HardValidationError::DuplicateWorkload {
                    tag: plan.tag.to_string(),
                }
                .into());
            }

            workloads.push(plan);
        }

        Ok(SuiteConfig { suite, workloads })
    }

    fn validate_suite(raw: RawSuiteSettings) -> BenchResult<SuiteSettings> {
        if raw.report_dir.trim().is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "report_dir",
                value: raw.report_dir,
                reason: "Report directory cannot be empty".to_string(),
            }
            .into());
        }

        Ok(SuiteSettings {
            report_dir: PathBuf::from(raw.report_dir),
            capture_system_info: raw.capture_system_info,
        })
    }

    fn validate_workload(raw: RawWorkloadPlan) -> BenchResult<PlanOverride> {
        let tag = WorkloadTag::new(raw.tag)?;

        if let Some(warmup) = raw.warmup {
            if warmup > MAX_REPETITIONS {
                return Err(HardValidationError::InvalidFieldValue {
                    field: "warmup",
                    value: warmup.to_string(),
                    reason: format!(
                        "Warm-up iterations for '{}' must not exceed {}",
                        tag, MAX_REPETITIONS
                    ),
                }
                .into());
            }
        }

        let cycles = raw.cycles.map(Cycles::new).transpose()?;

        Ok(PlanOverride {
            tag,
            warmup: raw.warmup,
            cycles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
suite:
  report_dir: results
  capture_system_info: false

workloads:
  - tag: sha256
    warmup: 2
    cycles: 5
  - tag: nbody
    cycles: 1
"#;

    #[test]
    fn test_valid_config() {
        let config = ConfigLoader::load_string(VALID_CONFIG).unwrap();
        assert_eq!(config.suite.report_dir, PathBuf::from("results"));
        assert!(!config.suite.capture_system_info);
        assert_eq!(config.workloads.len(), 2);
        assert_eq!(config.workloads[0].tag.as_str(), "sha256");
        assert_eq!(config.workloads[0].warmup, Some(2));
        assert_eq!(config.workloads[1].warmup, None);
        assert_eq!(config.workloads[1].cycles.map(|c| c.get()), Some(1));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigLoader::load_string("{}").unwrap();
        assert_eq!(config.suite.report_dir, PathBuf::from("data"));
        assert!(config.suite.capture_system_info);
        assert!(config.workloads.is_empty());
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let yaml = r#"
workloads:
  - tag: sieve
    cycles: 0
"#;
        let result = ConfigLoader::load_string(yaml);
        assert!(matches!(result, Err(BenchError::HardValidation(_))));
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let yaml = r#"
workloads:
  - tag: "Not A Tag"
"#;
        assert!(ConfigLoader::load_string(yaml).is_err());
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let yaml = r#"
workloads:
  - tag: crc
    cycles: 2
  - tag: crc
    cycles: 3
"#;
        let result = ConfigLoader::load_string(yaml);
        assert!(matches!(
            result,
            Err(BenchError::HardValidation(
                HardValidationError::DuplicateWorkload { .. }
            ))
        ));
    }

    #[test]
    fn test_excessive_warmup_rejected() {
        let yaml = format!(
            "workloads:\n  - tag: crc\n    warmup: {}\n",
            MAX_REPETITIONS + 1
        );
        assert!(ConfigLoader::load_string(&yaml).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
workloads:
  - tag: crc
    iterations: 3
"#;
        assert!(matches!(
            ConfigLoader::load_string(yaml),
            Err(BenchError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_file("/nonexistent/microbench.yaml");
        assert!(matches!(result, Err(BenchError::ConfigNotFound { .. })));
    }
}
