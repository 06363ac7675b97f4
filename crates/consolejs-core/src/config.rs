//! Console configuration (YAML file and environment)
//!
//! Supports a user-level file (~/.config/consolejs/config.yaml) plus
//! `CONSOLEJS_*` environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConsoleResult;
use crate::inspect::DEFAULT_MAX_DEPTH;
use crate::levels::Level;

/// Environment variable holding the debug level (name or number)
pub const ENV_LEVEL: &str = "CONSOLEJS_LEVEL";
/// Environment variable holding the inspection depth
pub const ENV_DEPTH: &str = "CONSOLEJS_DEPTH";
/// Environment variable toggling pretty printing (`1` / `true`)
pub const ENV_PRETTY: &str = "CONSOLEJS_PRETTY";

/// Startup settings for a console
///
/// # Example
///
/// ```
/// use consolejs_core::{ConsoleConfig, Level};
///
/// let config: ConsoleConfig = serde_yaml::from_str("level: warnings\npretty: true").unwrap();
/// assert_eq!(config.level, Level::Warnings);
/// assert_eq!(config.inspection_depth, 2);
/// assert!(config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Debug level threshold
    pub level: Level,
    /// Maximum depth of inspection
    pub inspection_depth: usize,
    /// Flatten payloads to strings
    pub pretty: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: Level::None,
            inspection_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }
}

impl ConsoleConfig {
    /// User-level config path (`<config_dir>/consolejs/config.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("consolejs").join("config.yaml")
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load_file(path: impl AsRef<Path>) -> ConsoleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(target: "consolejs", path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the user-level file, then apply environment overrides
    pub fn load() -> ConsoleResult<Self> {
        Ok(Self::load_file(Self::user_path())?.with_env_overrides())
    }

    /// Save as YAML, creating parent directories
    pub fn save_file(&self, path: impl AsRef<Path>) -> ConsoleResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Apply `CONSOLEJS_*` variables from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`; invalid values are ignored
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LEVEL) {
            match Level::parse(&raw) {
                Ok(level) => self.level = level,
                Err(e) => tracing::debug!(target: "consolejs", error = %e, "ignoring {}", ENV_LEVEL),
            }
        }
        if let Some(raw) = lookup(ENV_DEPTH) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => self.inspection_depth = depth,
                Err(_) => tracing::debug!(target: "consolejs", value = %raw, "ignoring {}", ENV_DEPTH),
            }
        }
        if let Some(raw) = lookup(ENV_PRETTY) {
            self.pretty = raw == "1" || raw.eq_ignore_ascii_case("true");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.level, Level::None);
        assert_eq!(config.inspection_depth, 2);
        assert!(!config.pretty);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ConsoleConfig::load_file(dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = ConsoleConfig {
            level: Level::Debug,
            inspection_depth: 4,
            pretty: true,
        };
        config.save_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("level: debug"));
        assert_eq!(ConsoleConfig::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "level: [unclosed").unwrap();
        assert!(ConsoleConfig::load_file(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ConsoleConfig::default().with_overrides_from(lookup(&[
            (ENV_LEVEL, "warn"),
            (ENV_DEPTH, "5"),
            (ENV_PRETTY, "TRUE"),
        ]));
        assert_eq!(config.level, Level::Warnings);
        assert_eq!(config.inspection_depth, 5);
        assert!(config.pretty);

        let config = ConsoleConfig::default().with_overrides_from(lookup(&[(ENV_LEVEL, "0")]));
        assert_eq!(config.level, Level::Verbose);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let base = ConsoleConfig {
            level: Level::Info,
            inspection_depth: 3,
            pretty: false,
        };
        let config = base.clone().with_overrides_from(lookup(&[
            (ENV_LEVEL, "chatty"),
            (ENV_DEPTH, "deep"),
        ]));
        assert_eq!(config, base);
    }

    #[test]
    fn test_user_path() {
        let path = ConsoleConfig::user_path();
        assert!(path.ends_with("consolejs/config.yaml"));
    }
}
