use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Parse `key: value` lines. Blank lines are ignored; a line without the
/// `": "` separator is an error.
pub(crate) fn parse_meta(content: &str, path: &Path) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(": ") else {
            return Err(AppError::MetaParse {
                path: path.to_path_buf(),
                line: idx + 1,
                content: line.to_string(),
            });
        };
        pairs.push((key.trim().to_string(), value.trim().to_string()));
    }
    Ok(pairs)
}

pub(crate) fn read_meta_file(path: &Path) -> Result<Vec<(String, String)>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::MetaRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_meta(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn parses_key_value_lines() {
        let content = "operator: ann\nsite: north\r\n\nrun: 2023: rerun\n";
        let pairs = parse_meta(content, Path::new("meta.txt")).unwrap();
        assert_eq!(
            pairs,
            vec![
                pair("operator", "ann"),
                pair("site", "north"),
                pair("run", "2023: rerun"),
            ]
        );
    }

    #[test]
    fn line_without_separator_is_error() {
        let err = parse_meta("operator: ann\nsite=north\n", Path::new("101/meta.txt")).unwrap_err();
        assert!(matches!(err, AppError::MetaParse { line: 2, .. }));
    }

    #[test]
    fn colon_without_space_is_error() {
        assert!(parse_meta("operator:ann", Path::new("meta.txt")).is_err());
    }

    #[test]
    fn empty_file_has_no_pairs() {
        assert!(parse_meta("", Path::new("meta.txt")).unwrap().is_empty());
    }
}
