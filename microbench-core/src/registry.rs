//! Ordered registry of benchmark workloads.
//!
//! Provides lookup by tag or by suite position, and applies validated run-plan
//! overrides on top of the built-in repetition counts.

use crate::config::SuiteConfig;
use crate::error::{BenchError, BenchResult};
use crate::kernels;
use crate::types::WorkloadTag;
use crate::workload::Workload;

/// Registry holding workloads in suite order.
/// A workload's index never changes once the registry is built.
#[derive(Debug, Clone)]
pub struct WorkloadRegistry {
    workloads: Vec<Workload>,
}

impl WorkloadRegistry {
    /// Create a registry holding every built-in kernel.
    pub fn builtin() -> Self {
        Self {
            workloads: kernels::builtin(),
        }
    }

    /// Look up a workload by tag.
    pub fn get(&self, tag: &str) -> BenchResult<&Workload> {
        self.workloads
            .iter()
            .find(|w| w.tag().as_str() == tag)
            .ok_or_else(|| BenchError::UnknownWorkload {
                selector: tag.to_string(),
            })
    }

    /// Look up a workload by its zero-based suite position.
    pub fn by_index(&self, index: usize) -> BenchResult<&Workload> {
        self.workloads
            .get(index)
            .ok_or_else(|| BenchError::UnknownWorkload {
                selector: index.to_string(),
            })
    }

    /// Resolve a selector that is either a tag or a numeric index.
    pub fn select(&self, selector: &str) -> BenchResult<&Workload> {
        match selector.parse::<usize>() {
            Ok(index) => self.by_index(index),
            Err(_) => self.get(selector),
        }
    }

    /// Check if a workload with this tag exists.
    pub fn contains(&self, tag: &WorkloadTag) -> bool {
        self.workloads.iter().any(|w| w.tag() == tag)
    }

    /// Iterate workloads in suite order.
    pub fn iter(&self) -> impl Iterator<Item = &Workload> {
        self.workloads.iter()
    }

    /// Tags of all workloads in suite order.
    pub fn tags(&self) -> Vec<WorkloadTag> {
        self.workloads.iter().map(|w| w.tag().clone()).collect()
    }

    /// Get the number of registered workloads.
    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    /// Apply every override in a run plan.
    /// Fails on the first override naming a workload this registry does not hold.
    pub fn apply_config(&mut self, config: &SuiteConfig) -> BenchResult<()> {
        for entry in &config.workloads {
            let workload = self
                .workloads
                .iter_mut()
                .find(|w| w.tag() == &entry.tag)
                .ok_or_else(|| BenchError::UnknownWorkload {
                    selector: entry.tag.to_string(),
                })?;

            let plan = workload
                .plan()
                .with_overrides(entry.warmup, entry.cycles.map(|c| c.get()))?;
            *workload = workload.clone().with_plan(plan);
        }
        Ok(())
    }

    /// Keep only the workloads whose tags are listed, preserving suite order.
    pub fn retain_tags(&mut self, tags: &[WorkloadTag]) -> BenchResult<()> {
        for tag in tags {
            if !self.contains(tag) {
                return Err(BenchError::UnknownWorkload {
                    selector: tag.to_string(),
                });
            }
        }
        self.workloads.retain(|w| tags.contains(w.tag()));
        Ok(())
    }
}

impl Default for WorkloadRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    const SUITE_ORDER: [&str; 12] = [
        "sieve",
        "nbody",
        "permute",
        "storage",
        "queens",
        "towers",
        "list",
        "bounce",
        "mandelbrot",
        "biquad",
        "crc",
        "sha256",
    ];

    #[test]
    fn test_builtin_order() {
        let registry = WorkloadRegistry::builtin();
        let tags: Vec<String> = registry.tags().into_iter().map(String::from).collect();
        assert_eq!(tags, SUITE_ORDER);
        assert_eq!(registry.len(), 12);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_builtin_tags_are_valid() {
        let registry = WorkloadRegistry::builtin();
        for workload in registry.iter() {
            let checked = WorkloadTag::new(workload.tag().as_str()).unwrap();
            assert_eq!(&checked, workload.tag());
        }
    }

    #[test]
    fn test_select_by_tag_and_index() {
        let registry = WorkloadRegistry::builtin();
        assert_eq!(registry.select("queens").unwrap().tag().as_str(), "queens");
        assert_eq!(registry.select("11").unwrap().tag().as_str(), "sha256");
        assert_eq!(registry.select("0").unwrap().tag().as_str(), "sieve");
    }

    #[test]
    fn test_unknown_selector() {
        let registry = WorkloadRegistry::builtin();
        assert!(matches!(
            registry.select("fannkuch"),
            Err(BenchError::UnknownWorkload { .. })
        ));
        assert!(matches!(
            registry.select("12"),
            Err(BenchError::UnknownWorkload { .. })
        ));
    }

    #[test]
    fn test_apply_config_overrides() {
        let config = ConfigLoader::load_string(
            r#"
workloads:
  - tag: sieve
    cycles: 3
  - tag: nbody
    warmup: 1
"#,
        )
        .unwrap();

        let mut registry = WorkloadRegistry::builtin();
        registry.apply_config(&config).unwrap();

        let sieve = registry.get("sieve").unwrap().plan();
        assert_eq!(sieve.warmup, 100);
        assert_eq!(sieve.cycles.get(), 3);

        let nbody = registry.get("nbody").unwrap().plan();
        assert_eq!(nbody.warmup, 1);
        assert_eq!(nbody.cycles.get(), 2);
    }

    #[test]
    fn test_apply_config_unknown_tag() {
        let config = ConfigLoader::load_string("workloads:\n  - tag: richards\n").unwrap();
        let mut registry = WorkloadRegistry::builtin();
        assert!(matches!(
            registry.apply_config(&config),
            Err(BenchError::UnknownWorkload { .. })
        ));
    }

    #[test]
    fn test_retain_tags_keeps_suite_order() {
        let mut registry = WorkloadRegistry::builtin();
        let wanted = vec![
            WorkloadTag::new("sha256").unwrap(),
            WorkloadTag::new("sieve").unwrap(),
        ];
        registry.retain_tags(&wanted).unwrap();

        let tags: Vec<String> = registry.tags().into_iter().map(String::from).collect();
        assert_eq!(tags, vec!["sieve", "sha256"]);

        let missing = vec![WorkloadTag::new("richards").unwrap()];
        assert!(registry.retain_tags(&missing).is_err());
    }
}
