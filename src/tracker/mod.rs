//! Tracker state: loading the previous snapshot, merging new reports, writing the result

mod loader;
mod merger;
mod persist;
mod types;

pub(crate) use loader::{load_tracker, output_path, resolve_tracker_path};
pub(crate) use merger::merge_reports;
pub(crate) use persist::write_tracker;
pub(crate) use types::{ReportRecord, SampleSet, Tracker, is_reserved_column};
