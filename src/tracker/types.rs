//! Tracker table model
//!
//! One `ReportRecord` per report folder; the tracker is an ordered list of
//! records keyed by `report_name`.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

use crate::consts::{COL_LAST_DATE, COL_REPEATED_SAMPLES, COL_REPORT_NAME, COL_UNIQUE_SAMPLES};

/// Sample identifiers, kept sorted so the tracker output is stable
pub(crate) type SampleSet = BTreeSet<String>;

/// Metadata and samples collected from one report folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReportRecord {
    pub(crate) report_name: String,
    /// `meta.txt` pairs in first-seen key order
    pub(crate) meta: Vec<(String, String)>,
    pub(crate) unique_samples: SampleSet,
    pub(crate) last_date: Option<NaiveDate>,
}

impl ReportRecord {
    pub(crate) fn new(report_name: impl Into<String>) -> Self {
        Self {
            report_name: report_name.into(),
            ..Self::default()
        }
    }

    /// Insert a metadata pair; a repeated key keeps its position and takes the new value.
    pub(crate) fn set_meta(&mut self, key: String, value: String) {
        match self.meta.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.meta.push((key, value)),
        }
    }

    pub(crate) fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric identity of the report, used to decide whether it is tracked
    pub(crate) fn report_number(&self) -> Option<u64> {
        self.report_name.trim().parse().ok()
    }
}

/// Merged tracker state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tracker {
    pub(crate) rows: Vec<ReportRecord>,
    /// Intersection of every row's samples, when repeated-sample search ran
    pub(crate) repeated_samples: Option<SampleSet>,
}

impl Tracker {
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn report_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.report_name.as_str()).collect()
    }

    /// Report numbers already present in the tracker
    pub(crate) fn tracked_numbers(&self) -> HashSet<u64> {
        self.rows.iter().filter_map(ReportRecord::report_number).collect()
    }

    /// Output columns: index, meta keys in first-seen order, then derived columns.
    pub(crate) fn columns(&self, with_last_date: bool) -> Vec<String> {
        let mut columns = vec![COL_REPORT_NAME.to_string()];
        for row in &self.rows {
            for (key, _) in &row.meta {
                if !is_reserved_column(key) && !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        columns.push(COL_UNIQUE_SAMPLES.to_string());
        if with_last_date || self.rows.iter().any(|r| r.last_date.is_some()) {
            columns.push(COL_LAST_DATE.to_string());
        }
        if self.repeated_samples.is_some() {
            columns.push(COL_REPEATED_SAMPLES.to_string());
        }
        columns
    }
}

/// Whether a column is derived by the tracker rather than read from `meta.txt`
pub(crate) fn is_reserved_column(name: &str) -> bool {
    matches!(
        name,
        COL_REPORT_NAME | COL_UNIQUE_SAMPLES | COL_LAST_DATE | COL_REPEATED_SAMPLES
    )
}

pub(crate) fn encode_samples(samples: &SampleSet) -> Result<String, serde_json::Error> {
    serde_json::to_string(samples)
}

pub(crate) fn decode_samples(cell: &str) -> Result<SampleSet, serde_json::Error> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(SampleSet::new());
    }
    serde_json::from_str(cell)
}
