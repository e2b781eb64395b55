//
//  vector-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Reading and writing the JSON objects behind [`Config`](super::Config) and
//! [`CredentialStore`](super::CredentialStore).
//!
//! ## Notes
//!
//! - A missing, unreadable or malformed file reads as an empty object
//! - Writes create the parent directory (`0700` on Unix) first
//! - Files are pretty-printed with a trailing newline

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Failure to persist configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON object from `path`.
///
/// Anything other than a readable JSON object yields an empty map.
pub fn read_json_file(path: &Path) -> Map<String, Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Map::new(),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            debug!(path = %path.display(), "ignoring malformed config file");
            Map::new()
        }
    }
}

/// Writes `data` to `path` as pretty JSON.
///
/// # Parameters
///
/// * `path` - Destination file
/// * `data` - Object to write
/// * `mode` - Unix permission bits for the file, e.g. `0o600`. A new file
///   is created with them; an existing one is narrowed to them.
pub fn write_json_file(
    path: &Path,
    data: &Map<String, Value>,
    mode: Option<u32>,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut content = serde_json::to_string_pretty(data).map_err(|source| ConfigError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');

    let persist = || -> std::io::Result<()> {
        let mut file = create_file(path, mode)?;
        if let Some(mode) = mode {
            set_mode(path, mode)?;
        }
        file.write_all(content.as_bytes())
    };

    persist().map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn create_file(path: &Path, mode: Option<u32>) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    if let Some(mode) = mode {
        options.mode(mode);
    }
    options.open(path)
}

#[cfg(not(unix))]
fn create_file(path: &Path, _mode: Option<u32>) -> std::io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

/// Creates `dir` if needed, owner-only on Unix.
pub fn ensure_dir(dir: &Path) -> Result<(), ConfigError> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    set_mode(dir, 0o700).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_and_malformed_files_read_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read_json_file(&dir.path().join("absent.json")).is_empty());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(read_json_file(&bad).is_empty());

        let list = dir.path().join("list.json");
        fs::write(&list, "[1, 2]").unwrap();
        assert!(read_json_file(&list).is_empty());
    }

    #[test]
    fn test_write_creates_parent_and_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut data = Map::new();
        data.insert("api_url".to_string(), json!("https://example.com/api"));
        write_json_file(&path, &data, None).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        // slashes are not escaped
        assert!(written.contains("https://example.com/api"));
        assert_eq!(read_json_file(&path), data);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vector").join("credentials.json");
        write_json_file(&path, &Map::new(), Some(0o600)).unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(dir_mode, 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_narrows_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let mut data = Map::new();
        data.insert("api_key".to_string(), json!("secret"));
        write_json_file(&path, &data, Some(0o600)).unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(read_json_file(&path), data);
    }
}
