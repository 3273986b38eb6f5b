use chrono::Local;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Params;
use crate::consts::TIMESTAMP_FORMAT;
use crate::error::AppError;
use crate::report::{CollectOptions, collect_report, discover_reports, untracked_reports};
use crate::tracker::{
    ReportRecord, Tracker, load_tracker, merge_reports, output_path, resolve_tracker_path,
    write_tracker,
};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    /// No untracked reports; nothing written
    UpToDate,
    /// New reports merged and the tracker written to this path
    Written(PathBuf),
    /// New reports merged but writing was disabled
    NotWritten,
}

/// Run all phases for the directory given on the command line.
pub(crate) fn run(cli: &Cli) -> Result<RunOutcome, AppError> {
    let dir = cli.path.as_path();
    if !dir.is_dir() {
        return Err(AppError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let params = cli.merge_params(Params::load(dir)?);
    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    track_reports(dir, &params, cli.write_to_file, &stamp)
}

/// Bracketed, comma-separated names without quotes: `[101, 102]`
fn format_report_list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

/// Load the previous tracker, collect untracked reports and merge them.
///
/// `stamp` names the snapshot this run reads first and writes to.
pub(crate) fn track_reports(
    dir: &Path,
    params: &Params,
    write: bool,
    stamp: &str,
) -> Result<RunOutcome, AppError> {
    let tracker_file = params.tracker_file.as_deref();
    let previous = match resolve_tracker_path(dir, tracker_file, stamp) {
        Some(path) => load_tracker(&path)?,
        None => Tracker::default(),
    };
    if previous.is_empty() {
        tracing::info!("No prior tracker found, starting empty");
    }

    let tracked = previous.tracked_numbers();
    let reports = untracked_reports(discover_reports(dir)?, &tracked);

    let options = CollectOptions {
        get_last_date: params.get_last_date,
        accumulate_samples: params.accumulate_samples,
    };
    let new_reports = reports
        .iter()
        .map(|report| collect_report(&report.path, options))
        .collect::<Result<Vec<ReportRecord>, AppError>>()?;

    if new_reports.is_empty() {
        println!("Reports tracker is up to date.");
        return Ok(RunOutcome::UpToDate);
    }

    let added: Vec<String> = new_reports.iter().map(|r| r.report_name.clone()).collect();
    let merged = merge_reports(previous, new_reports, params.search_repeated);
    tracing::debug!(reports = ?merged.report_names(), "merged tracker");
    println!("Untracked report(s): {}", format_report_list(&added));

    if !write {
        println!("Overwrite required");
        return Ok(RunOutcome::NotWritten);
    }

    let path = output_path(dir, tracker_file, stamp);
    write_tracker(&merged, &path, params.get_last_date)?;
    println!("{} created.", path.display());
    Ok(RunOutcome::Written(path))
}
