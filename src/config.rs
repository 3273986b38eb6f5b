use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{PARAMS_LEGACY, PARAMS_TOML};
use crate::error::AppError;

/// Tracker parameters, read from the report directory.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Params {
    /// Compute the intersection of sample sets across all reports
    #[serde(default, alias = "SEARCH_REPEATED")]
    pub(crate) search_repeated: bool,
    /// Aggregate the latest `date` value per report
    #[serde(default, alias = "GET_LAST_DATE")]
    pub(crate) get_last_date: bool,
    /// Union sample ids across all data files instead of keeping the last file's
    #[serde(default, alias = "ACCUMULATE_SAMPLES")]
    pub(crate) accumulate_samples: bool,
    /// Fixed tracker filename; snapshots are timestamped when unset
    #[serde(default, alias = "TRACKER_FILE")]
    pub(crate) tracker_file: Option<String>,
}

impl Params {
    /// Load parameters for a report directory.
    ///
    /// Lookup order: `<dir>/params.toml`, `<dir>/params.py` (read as
    /// `NAME = True|False` data, never executed), then the user-level
    /// defaults file.
    pub(crate) fn load(dir: &Path) -> Result<Self, AppError> {
        let toml_path = dir.join(PARAMS_TOML);
        if toml_path.is_file() {
            return Self::from_toml_file(&toml_path);
        }

        let legacy_path = dir.join(PARAMS_LEGACY);
        if legacy_path.is_file() {
            let content = read(&legacy_path)?;
            let params = Self::from_legacy(&content, &legacy_path)?;
            tracing::debug!(path = %legacy_path.display(), "loaded legacy params");
            return Ok(params);
        }

        for path in Self::get_user_paths() {
            if path.is_file() {
                return Self::from_toml_file(&path);
            }
        }

        Err(AppError::ParamsNotFound {
            dir: dir.to_path_buf(),
        })
    }

    fn from_toml_file(path: &Path) -> Result<Self, AppError> {
        let content = read(path)?;
        let params = toml::from_str::<Params>(&content).map_err(|source| AppError::ParamsToml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded params");
        Ok(params)
    }

    /// Parse the legacy `params.py` layout: one `NAME = True|False` per line.
    pub(crate) fn from_legacy(content: &str, path: &Path) -> Result<Self, AppError> {
        let mut params = Params::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = match raw.split_once('#') {
                Some((code, _comment)) => code.trim(),
                None => raw.trim(),
            };
            if line.is_empty() {
                continue;
            }

            let invalid = || AppError::ParamsLegacy {
                path: path.to_path_buf(),
                line: idx + 1,
                content: raw.trim().to_string(),
            };

            let (name, value) = line.split_once('=').ok_or_else(invalid)?;
            let value = match value.trim() {
                "True" | "true" => true,
                "False" | "false" => false,
                _ => return Err(invalid()),
            };

            match name.trim() {
                "SEARCH_REPEATED" => params.search_repeated = value,
                "GET_LAST_DATE" => params.get_last_date = value,
                "ACCUMULATE_SAMPLES" => params.accumulate_samples = value,
                other => tracing::debug!(param = other, "ignoring unknown parameter"),
            }
        }

        Ok(params)
    }

    fn get_user_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // ~/.config/report-tracker/params.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("report-tracker").join(PARAMS_TOML));
        }

        // Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("report-tracker").join(PARAMS_TOML);
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_params_loaded_from_report_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("params.toml"),
            "search_repeated = true\nget_last_date = true\n",
        )
        .unwrap();

        let params = Params::load(dir.path()).unwrap();
        assert!(params.search_repeated);
        assert!(params.get_last_date);
        assert!(!params.accumulate_samples);
        assert_eq!(params.tracker_file, None);
    }

    #[test]
    fn toml_accepts_uppercase_names() {
        let params: Params =
            toml::from_str("SEARCH_REPEATED = true\nTRACKER_FILE = \"tracker.csv\"").unwrap();
        assert!(params.search_repeated);
        assert_eq!(params.tracker_file.as_deref(), Some("tracker.csv"));
    }

    #[test]
    fn toml_takes_precedence_over_legacy() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("params.toml"), "get_last_date = false\n").unwrap();
        fs::write(dir.path().join("params.py"), "GET_LAST_DATE = True\n").unwrap();

        let params = Params::load(dir.path()).unwrap();
        assert!(!params.get_last_date);
    }

    #[test]
    fn legacy_params_read_as_data() {
        let content = "# report settings\n\
                       SEARCH_REPEATED = True\n\
                       GET_LAST_DATE=False  # off\n\
                       \n\
                       OTHER = True\n";
        let params = Params::from_legacy(content, Path::new("params.py")).unwrap();
        assert!(params.search_repeated);
        assert!(!params.get_last_date);
    }

    #[test]
    fn legacy_rejects_code() {
        let content = "SEARCH_REPEATED = True\nimport os\n";
        let err = Params::from_legacy(content, Path::new("params.py")).unwrap_err();
        assert!(matches!(err, AppError::ParamsLegacy { line: 2, .. }));
    }

    #[test]
    fn legacy_rejects_non_bool_value() {
        let err =
            Params::from_legacy("GET_LAST_DATE = 1", Path::new("params.py")).unwrap_err();
        assert!(err.to_string().contains("GET_LAST_DATE = 1"));
    }

    #[test]
    fn invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("params.toml"), "search_repeated = \"yes\"\n").unwrap();

        let err = Params::load(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ParamsToml { .. }));
    }
}
