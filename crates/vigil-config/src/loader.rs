//! Config file discovery and layered loading.
//!
//! Load order, lowest to highest precedence:
//! 1. Embedded `defaults.toml`
//! 2. `~/.vigil/config.toml`, or `$VIGIL_HOME/config.toml` when the
//!    user-level file does not exist and `VIGIL_HOME` names a directory
//!
//! The user overlay is deep-merged into the defaults as TOML values, then
//! the merged tree is deserialized into [`Config`].

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::merge::deep_merge;
use crate::types::Config;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Load the layered configuration.
///
/// `home_override` substitutes for the `.vigil` directory itself; it
/// bypasses both home discovery and `VIGIL_HOME`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the user config file exists but is
/// unreadable or malformed, or when the home directory cannot be found.
pub fn load(home_override: Option<&Path>) -> ConfigResult<Config> {
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;

    if let Some((overlay, path)) = user_overlay(home_override)? {
        deep_merge(&mut merged, &overlay);
        info!(path = %path.display(), "loaded user config");
    }

    merged.try_into().map_err(|e| ConfigError::ParseError {
        path: "<merged config>".to_owned(),
        source: e,
    })
}

fn user_overlay(home_override: Option<&Path>) -> ConfigResult<Option<(toml::Value, PathBuf)>> {
    if let Some(dir) = home_override {
        let path = dir.join("config.toml");
        return Ok(try_load_file(&path)?.map(|overlay| (overlay, path)));
    }

    let home = home_directory()?;
    let user_path = home.join(".vigil").join("config.toml");
    if let Some(overlay) = try_load_file(&user_path)? {
        return Ok(Some((overlay, user_path)));
    }

    if let Ok(vigil_home) = std::env::var("VIGIL_HOME") {
        let candidate = PathBuf::from(vigil_home);
        if candidate.is_dir() {
            let alt_path = candidate.join("config.toml");
            return Ok(try_load_file(&alt_path)?.map(|overlay| (overlay, alt_path)));
        }
        debug!(path = %candidate.display(), "VIGIL_HOME is not a directory, ignoring");
    }
    Ok(None)
}

/// Try to load a file, returning `None` if the file doesn't exist.
///
/// Single read operation; size is checked on the content rather than a
/// separate stat.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ReadError {
            path: path.display().to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("config file exceeds {MAX_CONFIG_FILE_SIZE} byte limit"),
            ),
        });
    }

    let value: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(Some(value))
}

fn home_directory() -> ConfigResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let value: toml::Value = toml::from_str(DEFAULTS_TOML).unwrap();
        let table = value.as_table().unwrap();
        assert!(table.contains_key("approver"));
        assert!(table.contains_key("summarizer"));
        assert!(table.contains_key("context"));
    }

    #[test]
    fn test_defaults_deserialize_to_config() {
        let config: Config = toml::from_str(DEFAULTS_TOML).unwrap();
        assert_eq!(config.approver.url, "http://localhost:19482");
        assert_eq!(config.approver.start_poll_attempts, 20);
        assert_eq!(config.summarizer.timeout_secs, 3);
        assert_eq!(config.context.git_timeout_secs, 2);
    }

    #[test]
    fn test_load_with_override_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(dir.path())).unwrap();
        assert_eq!(config.approver.url, "http://localhost:19482");
    }

    #[test]
    fn test_load_merges_user_overlay() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[approver]\nurl = \"http://localhost:29482\"\n\n[context]\ncommit_limit = 8\n",
        )
        .unwrap();

        let config = load(Some(dir.path())).unwrap();
        assert_eq!(config.approver.url, "http://localhost:29482");
        assert_eq!(config.approver.notify_timeout_secs, 5);
        assert_eq!(config.context.commit_limit, 8);
        assert_eq!(config.context.target_limit, 3);
    }

    #[test]
    fn test_load_malformed_user_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "not [ valid toml").unwrap();
        let result = load(Some(dir.path()));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_try_load_file_missing() {
        let result = try_load_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_oversized_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.toml");
        let data = "x = \"".to_owned() + &"a".repeat(1_100_000) + "\"";
        std::fs::write(&path, data).unwrap();

        let result = try_load_file(&path);
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
