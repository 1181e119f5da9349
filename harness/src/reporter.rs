// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! JSON report generation for suite runs.
//!
//! Handles saving suite reports to timestamped JSON files for later comparison.

use crate::metrics::SuiteReport;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

const REPORT_PREFIX: &str = "suite_";
const REPORT_EXTENSION: &str = "json";

/// JSON reporter for suite results.
pub struct JsonReporter {
    /// Output directory for report files
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Directory reports are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a report is saved under: `suite_<start time>.json`.
    ///
    /// The name comes from the report's own start time, so saving the same
    /// report twice overwrites one file.
    pub fn report_path(&self, report: &SuiteReport) -> PathBuf {
        let stamp = report.timestamp.format("%Y-%m-%dT%H-%M-%S%.3fZ");
        self.output_dir
            .join(format!("{}{}.{}", REPORT_PREFIX, stamp, REPORT_EXTENSION))
    }

    /// Write a suite report as pretty JSON and return its path.
    pub fn save(&self, report: &SuiteReport) -> Result<PathBuf, ReporterError> {
        let path = self.report_path(report);
        serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), report)?;
        Ok(path)
    }

    /// Suite reports in the output directory, oldest first.
    /// Other files sharing the directory are skipped.
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReporterError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            let is_report = path.extension().is_some_and(|e| e == REPORT_EXTENSION)
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(REPORT_PREFIX));
            if is_report {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Most recent suite report in the output directory, if any.
    pub fn latest(&self) -> Result<Option<SuiteReport>, ReporterError> {
        match self.list_reports()?.last() {
            Some(path) => Self::load(path).map(Some),
            None => Ok(None),
        }
    }

    /// Load an existing suite report from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<SuiteReport, ReporterError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TimingReport;
    use chrono::Duration;
    use microbench_core::{Outcome, WorkloadTag};
    use tempfile::TempDir;

    fn sample_report() -> SuiteReport {
        let mut report = SuiteReport::new(false);
        report.add_result(TimingReport::new(
            WorkloadTag::new("crc").unwrap(),
            1,
            3,
            0.9,
            Outcome::Count(1_837_082_096),
        ));
        report
    }

    #[test]
    fn test_reporter_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let report = sample_report();
        let path = reporter.save(&report).unwrap();
        assert!(path.exists());
        assert_eq!(path, reporter.report_path(&report));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("suite_"));

        let loaded = JsonReporter::load(&path).unwrap();
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0], report.results[0]);
        assert_eq!(loaded.timestamp, report.timestamp);
    }

    #[test]
    fn test_list_reports_in_time_order() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path().join("nested")).unwrap();

        let first = sample_report();
        let mut second = sample_report();
        second.timestamp = first.timestamp + Duration::seconds(2);

        let second_path = reporter.save(&second).unwrap();
        let first_path = reporter.save(&first).unwrap();
        fs::write(reporter.output_dir().join("notes.txt"), "ignored").unwrap();
        fs::write(reporter.output_dir().join("baseline.json"), "{}").unwrap();

        let reports = reporter.list_reports().unwrap();
        assert_eq!(reports, vec![first_path, second_path]);
    }

    #[test]
    fn test_latest_report() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();
        assert!(reporter.latest().unwrap().is_none());

        let first = sample_report();
        let mut second = sample_report();
        second.timestamp = first.timestamp + Duration::seconds(5);
        reporter.save(&second).unwrap();
        reporter.save(&first).unwrap();

        let latest = reporter.latest().unwrap().unwrap();
        assert_eq!(latest.timestamp, second.timestamp);
    }

    #[test]
    fn test_latest_report_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("suite_broken.json"), "{ not json").unwrap();

        assert!(matches!(
            reporter.latest(),
            Err(ReporterError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = JsonReporter::load(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(ReporterError::Io(_))));
    }
}
