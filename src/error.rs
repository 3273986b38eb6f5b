use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Report directory not found: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("Failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No params.toml or params.py found in {}", .dir.display())]
    ParamsNotFound { dir: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    ParamsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid parameters in {}: {source}", .path.display())]
    ParamsToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "Unsupported line {line} in {}: \"{content}\" (expected NAME = True|False)",
        .path.display()
    )]
    ParamsLegacy {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid report folder name \"{name}\" (expected digits only)")]
    InvalidReportName { name: String },

    #[error("Failed to read {}: {source}", .path.display())]
    MetaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {}: \"{content}\" (expected key: value)", .path.display())]
    MetaParse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    DataRead { path: PathBuf, source: csv::Error },

    #[error("Missing column \"{column}\" in {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid date \"{input}\" in {} (expected DD.MM.YYYY)", .path.display())]
    InvalidDate { path: PathBuf, input: String },

    #[error("Failed to read tracker {}: {source}", .path.display())]
    TrackerRead { path: PathBuf, source: csv::Error },

    #[error("Tracker {} has no report_name column", .path.display())]
    TrackerMissingIndex { path: PathBuf },

    #[error("Invalid {column} value in tracker {}: {source}", .path.display())]
    TrackerCell {
        path: PathBuf,
        column: String,
        source: serde_json::Error,
    },

    #[error("Invalid last_date \"{input}\" in tracker {}", .path.display())]
    TrackerDate { path: PathBuf, input: String },

    #[error("Failed to write tracker {}: {source}", .path.display())]
    TrackerWrite { path: PathBuf, source: csv::Error },

    #[error("Failed to flush tracker {}: {source}", .path.display())]
    TrackerFlush {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_report_name_display() {
        let e = AppError::InvalidReportName {
            name: "12ab".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid report folder name "12ab" (expected digits only)"#
        );
    }

    #[test]
    fn meta_parse_display() {
        let e = AppError::MetaParse {
            path: PathBuf::from("reports/101/meta.txt"),
            line: 3,
            content: "operator".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Malformed line 3 in reports/101/meta.txt: "operator" (expected key: value)"#
        );
    }

    #[test]
    fn missing_column_display() {
        let e = AppError::MissingColumn {
            path: PathBuf::from("101/a.csv"),
            column: "id".to_string(),
        };
        assert_eq!(e.to_string(), r#"Missing column "id" in 101/a.csv"#);
    }

    #[test]
    fn params_not_found_display() {
        let e = AppError::ParamsNotFound {
            dir: PathBuf::from("/data/reports"),
        };
        assert_eq!(
            e.to_string(),
            "No params.toml or params.py found in /data/reports"
        );
    }

    #[test]
    fn invalid_date_display() {
        let e = AppError::InvalidDate {
            path: PathBuf::from("7/a.csv"),
            input: "2023-01-01".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "2023-01-01" in 7/a.csv (expected DD.MM.YYYY)"#
        );
    }
}
