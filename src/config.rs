use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const CONFIG_PATH_ENV: &str = "JIRA_SKILL_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_MAX_RESULTS: u32 = 50;

/// Resolved, immutable settings the skill runs with.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub max_results: u32,
    pub app_id: Option<String>,
    pub source: Option<PathBuf>,
}

/// On-disk shape of `config.json`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub max_results: Option<u32>,
    pub app_id: Option<String>,
}

impl StoredConfig {
    /// Reads the file at `path`. A missing file yields an empty config unless
    /// `required` is set.
    pub fn load(path: &Path, required: bool) -> AppResult<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let stored = serde_json::from_str::<StoredConfig>(&contents).map_err(|err| {
                    AppError::Configuration(format!(
                        "invalid config file {}: {err}",
                        path.display()
                    ))
                })?;
                Ok(Some(stored))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => Ok(None),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(
                AppError::Configuration(format!("config file {} not found", path.display())),
            ),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}

impl AppConfig {
    /// Loads the config file (explicit path, then `JIRA_SKILL_CONFIG`, then
    /// `./config.json`) and applies `JIRA_SKILL_*` environment overrides.
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        Self::load_with(explicit, |key| env::var(key).ok())
    }

    /// `load` with the environment supplied by `lookup`.
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match lookup(CONFIG_PATH_ENV) {
                Some(path) if !path.trim().is_empty() => (PathBuf::from(path), true),
                _ => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            },
        };

        let stored = StoredConfig::load(&path, required)?;
        let source = stored.as_ref().map(|_| path);
        Self::resolve(stored.unwrap_or_default(), source, lookup)
    }

    pub fn resolve<F>(stored: StoredConfig, source: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let endpoint = env_value("JIRA_SKILL_ENDPOINT")
            .or(stored.endpoint)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::Configuration("Jira search endpoint not configured".to_string()))?;

        let max_results = match env_value("JIRA_SKILL_MAX_RESULTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|err| {
                AppError::Configuration(format!("invalid JIRA_SKILL_MAX_RESULTS '{raw}': {err}"))
            })?,
            None => stored.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        };
        if max_results == 0 {
            return Err(AppError::Configuration(
                "maxResults must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            username: env_value("JIRA_SKILL_USERNAME").or(stored.username),
            password: env_value("JIRA_SKILL_PASSWORD").or(stored.password),
            max_results,
            app_id: env_value("JIRA_SKILL_APP_ID").or(stored.app_id),
            source,
        })
    }
}
