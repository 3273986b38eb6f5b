//! Per-report collection: `meta.txt` pairs, sample ids and dates from data files

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{COL_DATE, COL_ID, DELIMITER, META_FILE};
use crate::error::AppError;
use crate::tracker::{ReportRecord, SampleSet, is_reserved_column};
use crate::utils::parse_report_date;

use super::meta::read_meta_file;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CollectOptions {
    /// Require a `date` column and keep the latest date
    pub(crate) get_last_date: bool,
    /// Union ids across data files instead of keeping the last file's
    pub(crate) accumulate_samples: bool,
}

/// Ids and dates read from one data file
#[derive(Debug, Default)]
struct DataFile {
    ids: SampleSet,
    dates: Vec<NaiveDate>,
}

fn find_column(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize, AppError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| AppError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn parse_data_file(path: &Path, with_dates: bool) -> Result<DataFile, AppError> {
    let read_err = |source| AppError::DataRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?.clone();
    let id_col = find_column(&headers, COL_ID, path)?;
    let date_col = if with_dates {
        Some(find_column(&headers, COL_DATE, path)?)
    } else {
        None
    };

    let mut data = DataFile::default();
    for result in reader.records() {
        let record = result.map_err(read_err)?;

        let id = record.get(id_col).unwrap_or_default().trim();
        if !id.is_empty() {
            data.ids.insert(id.to_string());
        }

        if let Some(col) = date_col {
            let raw = record.get(col).unwrap_or_default().trim();
            if raw.is_empty() {
                continue;
            }
            let date = parse_report_date(raw).ok_or_else(|| AppError::InvalidDate {
                path: path.to_path_buf(),
                input: raw.to_string(),
            })?;
            data.dates.push(date);
        }
    }

    Ok(data)
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(dir).map_err(|source| AppError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Build the record for one report folder.
///
/// Data files that fail to parse are logged and skipped. Unless
/// `accumulate_samples` is set, `unique_samples` holds the ids of the last
/// data file (in name order) that parsed successfully.
pub(crate) fn collect_report(
    dir: &Path,
    options: CollectOptions,
) -> Result<ReportRecord, AppError> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut record = ReportRecord::new(name);
    let mut dates: Vec<NaiveDate> = Vec::new();

    for path in list_files(dir)? {
        if path.file_name().is_some_and(|n| n == META_FILE) {
            for (key, value) in read_meta_file(&path)? {
                if is_reserved_column(&key) {
                    tracing::warn!("Ignoring reserved key \"{key}\" in {}", path.display());
                    continue;
                }
                record.set_meta(key, value);
            }
            continue;
        }

        let data = match parse_data_file(&path, options.get_last_date) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("{e}");
                continue;
            }
        };

        if options.accumulate_samples {
            record.unique_samples.extend(data.ids);
        } else {
            record.unique_samples = data.ids;
        }
        dates.extend(data.dates);
    }

    if options.get_last_date {
        record.last_date = dates.into_iter().max();
    }

    tracing::debug!(
        report = %record.report_name,
        samples = record.unique_samples.len(),
        "collected report"
    );
    Ok(record)
}
