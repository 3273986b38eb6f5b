//! Tracker snapshot lookup and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{
    COL_LAST_DATE, COL_REPEATED_SAMPLES, COL_REPORT_NAME, COL_UNIQUE_SAMPLES, DELIMITER,
    TRACKER_SUFFIX,
};
use crate::error::AppError;
use crate::utils::parse_tracker_date;

use super::types::{ReportRecord, Tracker, decode_samples};

/// Path the current run writes to: the fixed tracker file, or `<stamp>_tracker.csv`.
pub(crate) fn output_path(dir: &Path, tracker_file: Option<&str>, stamp: &str) -> PathBuf {
    match tracker_file {
        Some(name) => dir.join(name),
        None => dir.join(format!("{stamp}{TRACKER_SUFFIX}")),
    }
}

/// Pick the tracker to load before scanning.
///
/// A fixed tracker file is used as-is. Otherwise the snapshot for the current
/// stamp wins, falling back to the newest existing snapshot in `dir`.
pub(crate) fn resolve_tracker_path(
    dir: &Path,
    tracker_file: Option<&str>,
    stamp: &str,
) -> Option<PathBuf> {
    let current = output_path(dir, tracker_file, stamp);
    if tracker_file.is_some() || current.is_file() {
        return Some(current);
    }
    latest_snapshot(dir)
}

fn is_snapshot_name(name: &str) -> bool {
    name.strip_suffix(TRACKER_SUFFIX)
        .is_some_and(|stamp| stamp.len() == 14 && stamp.bytes().all(|b| b.is_ascii_digit()))
}

/// Newest `YYYYMMDDHHMMSS_tracker.csv` in `dir`
pub(crate) fn latest_snapshot(dir: &Path) -> Option<PathBuf> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*{TRACKER_SUFFIX}");
    let entries = glob::glob(&pattern).ok()?;

    entries
        .flatten()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            is_snapshot_name(&name).then_some((name, path))
        })
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, path)| path)
}

/// Load a tracker file. Missing or empty files yield an empty tracker.
pub(crate) fn load_tracker(path: &Path) -> Result<Tracker, AppError> {
    let is_empty = match fs::metadata(path) {
        Ok(meta) => !meta.is_file() || meta.len() == 0,
        Err(_) => true,
    };
    if is_empty {
        tracing::debug!(path = %path.display(), "no prior tracker");
        return Ok(Tracker::default());
    }

    let read_err = |source| AppError::TrackerRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(read_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Ok(Tracker::default());
    }

    let Some(index_col) = headers.iter().position(|h| h == COL_REPORT_NAME) else {
        return Err(AppError::TrackerMissingIndex {
            path: path.to_path_buf(),
        });
    };

    let mut tracker = Tracker::default();
    for result in reader.records() {
        let record = result.map_err(read_err)?;
        let mut row = ReportRecord::new(record.get(index_col).unwrap_or_default().trim());

        for (col, value) in headers.iter().zip(record.iter()) {
            match col.as_str() {
                COL_REPORT_NAME | COL_REPEATED_SAMPLES => {}
                COL_UNIQUE_SAMPLES => {
                    row.unique_samples =
                        decode_samples(value).map_err(|source| AppError::TrackerCell {
                            path: path.to_path_buf(),
                            column: col.clone(),
                            source,
                        })?;
                }
                COL_LAST_DATE => {
                    let value = value.trim();
                    if !value.is_empty() {
                        let date = parse_tracker_date(value).ok_or_else(|| {
                            AppError::TrackerDate {
                                path: path.to_path_buf(),
                                input: value.to_string(),
                            }
                        })?;
                        row.last_date = Some(date);
                    }
                }
                // Empty cells are keys this report's meta.txt never had
                _ if value.is_empty() => {}
                _ => row.set_meta(col.clone(), value.to_string()),
            }
        }
        tracker.rows.push(row);
    }

    tracing::info!(
        path = %path.display(),
        reports = tracker.rows.len(),
        "loaded tracker"
    );
    Ok(tracker)
}
