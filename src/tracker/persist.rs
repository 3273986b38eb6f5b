use std::path::Path;

use crate::consts::{
    COL_LAST_DATE, COL_REPEATED_SAMPLES, COL_REPORT_NAME, COL_UNIQUE_SAMPLES, DELIMITER,
};
use crate::error::AppError;
use crate::utils::format_tracker_date;

use super::types::{Tracker, encode_samples};

/// Write the tracker as `;`-delimited text with `report_name` as the first column.
pub(crate) fn write_tracker(
    tracker: &Tracker,
    path: &Path,
    with_last_date: bool,
) -> Result<(), AppError> {
    let write_err = |source| AppError::TrackerWrite {
        path: path.to_path_buf(),
        source,
    };
    let cell_err = |column: &str, source| AppError::TrackerCell {
        path: path.to_path_buf(),
        column: column.to_string(),
        source,
    };

    let columns = tracker.columns(with_last_date);
    let repeated = match &tracker.repeated_samples {
        Some(samples) => Some(
            encode_samples(samples).map_err(|e| cell_err(COL_REPEATED_SAMPLES, e))?,
        ),
        None => None,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(&columns).map_err(write_err)?;

    for row in &tracker.rows {
        let mut record = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match column.as_str() {
                COL_REPORT_NAME => row.report_name.clone(),
                COL_UNIQUE_SAMPLES => encode_samples(&row.unique_samples)
                    .map_err(|e| cell_err(COL_UNIQUE_SAMPLES, e))?,
                COL_LAST_DATE => row.last_date.map(format_tracker_date).unwrap_or_default(),
                COL_REPEATED_SAMPLES => repeated.clone().unwrap_or_default(),
                key => row.meta_value(key).unwrap_or_default().to_string(),
            };
            record.push(cell);
        }
        writer.write_record(&record).map_err(write_err)?;
    }

    writer.flush().map_err(|source| AppError::TrackerFlush {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = tracker.rows.len(), "wrote tracker");
    Ok(())
}
