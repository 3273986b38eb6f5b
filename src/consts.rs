/// Date format of the `date` column in report data files: "15.06.2023"
pub(crate) const REPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Date format written to the tracker: "2023-06-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp prefix of tracker snapshots: "20260214093015"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Suffix shared by every tracker snapshot
pub(crate) const TRACKER_SUFFIX: &str = "_tracker.csv";

/// Field delimiter for data files and the tracker
pub(crate) const DELIMITER: u8 = b';';

/// Per-report metadata file
pub(crate) const META_FILE: &str = "meta.txt";

pub(crate) const PARAMS_TOML: &str = "params.toml";
pub(crate) const PARAMS_LEGACY: &str = "params.py";

pub(crate) const COL_REPORT_NAME: &str = "report_name";
pub(crate) const COL_UNIQUE_SAMPLES: &str = "unique_samples";
pub(crate) const COL_LAST_DATE: &str = "last_date";
pub(crate) const COL_REPEATED_SAMPLES: &str = "repeated_samples";
pub(crate) const COL_ID: &str = "id";
pub(crate) const COL_DATE: &str = "date";
