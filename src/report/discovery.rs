use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// A report folder whose name passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportDir {
    pub(crate) name: String,
    pub(crate) number: u64,
    pub(crate) path: PathBuf,
}

/// Report folder names are digits only and must fit a `u64`.
pub(crate) fn validate_report_name(name: &str) -> Result<u64, AppError> {
    let invalid = || AppError::InvalidReportName {
        name: name.to_string(),
    };
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    name.parse().map_err(|_| invalid())
}

/// List report folders in `dir`, sorted by name.
///
/// Directories starting with a digit are candidates; those failing
/// validation are logged and skipped.
pub(crate) fn discover_reports(dir: &Path) -> Result<Vec<ReportDir>, AppError> {
    let entries = fs::read_dir(dir).map_err(|source| AppError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut reports = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        match validate_report_name(&name) {
            Ok(number) => reports.push(ReportDir { name, number, path }),
            Err(e) => tracing::warn!("Skipping {}: {e}", path.display()),
        }
    }

    reports.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(reports)
}

/// Drop reports whose number is already tracked, and later folders that
/// repeat a number seen earlier in this scan (`0101` after `101`).
pub(crate) fn untracked_reports(
    reports: Vec<ReportDir>,
    tracked: &HashSet<u64>,
) -> Vec<ReportDir> {
    let mut accepted: HashSet<u64> = HashSet::new();
    let mut untracked = Vec::new();

    for report in reports {
        if tracked.contains(&report.number) {
            tracing::debug!(report = %report.name, "already tracked");
            continue;
        }
        if !accepted.insert(report.number) {
            tracing::warn!(
                "Skipping {}: report number {} already collected in this run",
                report.path.display(),
                report.number
            );
            continue;
        }
        untracked.push(report);
    }

    untracked
}
