//! Environment config file: `~/.apictl/config.json` or `$APICTL_CONFIG`

use log::debug;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::environment as environment_config;
use crate::error::{ApictlError, Result};

use super::models::EnvironmentConfig;

/// Reads and writes one environment config file
pub struct EnvironmentStore {
    config_path: PathBuf,
}

impl Default for EnvironmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentStore {
    /// Store at `$APICTL_CONFIG`, or under the home directory when unset
    pub fn new() -> Self {
        let config_path = std::env::var_os(environment_config::CONFIG_ENV_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);
        debug!("Using environment config: {}", config_path.display());
        Self { config_path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(environment_config::DIR_NAME)
            .join(environment_config::FILE_NAME)
    }

    /// A missing file is an empty config; unreadable or invalid JSON is an error
    pub fn load(&self) -> Result<EnvironmentConfig> {
        if !self.config_path.exists() {
            return Ok(EnvironmentConfig::default());
        }
        let content =
            fs::read_to_string(&self.config_path).map_err(|e| self.error("read", e))?;
        serde_json::from_str(&content).map_err(|e| self.error("parse", e))
    }

    /// Replace the file through a sibling `.tmp` and a rename, mode 0600 on Unix
    pub fn save(&self, config: &EnvironmentConfig) -> Result<()> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.error("create directory for", e))?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|e| self.error("encode", e))?;

        let staged = self.config_path.with_extension("json.tmp");
        fs::write(&staged, json).map_err(|e| self.error("write", e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&staged, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.error("restrict permissions of", e))?;
        }
        fs::rename(&staged, &self.config_path).map_err(|e| self.error("replace", e))
    }

    fn error(&self, action: &str, cause: impl Display) -> ApictlError {
        ApictlError::Config(format!(
            "Failed to {} environment config {}: {}",
            action,
            self.config_path.display(),
            cause
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::models::Environment;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> EnvironmentStore {
        EnvironmentStore::with_path(dir.path().join("config.json"))
    }

    fn with_environments(names: &[&str]) -> EnvironmentConfig {
        let mut config = EnvironmentConfig::default();
        for name in names {
            config.environments.insert(
                name.to_string(),
                Environment {
                    apim: format!("https://{}:9443", name),
                    api_list_endpoint: None,
                    token: Some(format!("{}-token", name)),
                },
            );
        }
        config
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let config = store_in(&dir).load().unwrap();
        assert!(config.current_environment.is_none());
        assert!(config.environments.is_empty());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ApictlError::Config(_)));
        assert!(err.to_string().contains("Failed to parse environment config"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut config = with_environments(&["dev"]);
        config.current_environment = Some("dev".to_string());

        store.save(&config).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.current_environment.as_deref(), Some("dev"));
        assert_eq!(loaded.environments["dev"].apim, "https://dev:9443");
        assert_eq!(loaded.environments["dev"].token.as_deref(), Some("dev-token"));
    }

    #[test]
    fn test_save_replaces_whole_file_and_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = EnvironmentStore::with_path(path.clone());

        store.save(&with_environments(&["first"])).unwrap();
        store.save(&with_environments(&["second"])).unwrap();

        let names: Vec<String> = store.load().unwrap().environments.into_keys().collect();
        assert_eq!(names, vec!["second".to_string()]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&with_environments(&["dev"])).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_default_path_is_under_dot_apictl() {
        let path = EnvironmentStore::default_config_path();
        assert!(path.ends_with(Path::new(".apictl").join("config.json")));
    }
}
