//! Runtime configuration read from the environment.
//!
//! | Variable                      | Default          |
//! |-------------------------------|------------------|
//! | `MEDSCREEN_MODEL_DIR`         | `Models`         |
//! | `MEDSCREEN_LOG_MODE`          | `auto`           |
//! | `MEDSCREEN_LOG_FILE`          | `medscreen.log`  |
//! | `MEDSCREEN_REQUIRE_MANIFEST`  | `false`          |

use std::path::PathBuf;

use crate::{MedscreenError, Result};

const MODEL_DIR_ENV: &str = "MEDSCREEN_MODEL_DIR";
const LOG_MODE_ENV: &str = "MEDSCREEN_LOG_MODE";
const LOG_FILE_ENV: &str = "MEDSCREEN_LOG_FILE";
const REQUIRE_MANIFEST_ENV: &str = "MEDSCREEN_REQUIRE_MANIFEST";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise.
    Auto,
    File,
    Stdout,
}

impl std::str::FromStr for LogMode {
    type Err = MedscreenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stdout" => Ok(Self::Stdout),
            other => Err(MedscreenError::Config(format!(
                "{LOG_MODE_ENV} must be auto, file or stdout (got {other:?})"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: PathBuf,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    /// Refuse to start unless `manifest.json` binds every artifact.
    pub require_manifest: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("Models"),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("medscreen.log"),
            require_manifest: false,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES")
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    /// Returns `MedscreenError::Config` on an unrecognized log mode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `MedscreenError::Config` on an unrecognized log mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            model_dir: lookup(MODEL_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            log_mode: match lookup(LOG_MODE_ENV) {
                Some(v) => v.parse()?,
                None => defaults.log_mode,
            },
            log_file: lookup(LOG_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            require_manifest: lookup(REQUIRE_MANIFEST_ENV)
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.require_manifest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.model_dir, PathBuf::from("Models"));
        assert_eq!(config.log_mode, LogMode::Auto);
        assert!(!config.require_manifest);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MEDSCREEN_MODEL_DIR", "/srv/models"),
            ("MEDSCREEN_LOG_MODE", "stdout"),
            ("MEDSCREEN_REQUIRE_MANIFEST", "yes"),
        ]))
        .expect("config");
        assert_eq!(config.model_dir, PathBuf::from("/srv/models"));
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert!(config.require_manifest);
    }

    #[test]
    fn test_bad_log_mode() {
        let err = Config::from_lookup(lookup(&[("MEDSCREEN_LOG_MODE", "syslog")]))
            .expect_err("must reject");
        assert!(matches!(err, MedscreenError::Config(_)));
    }
}
