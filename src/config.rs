use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "employees.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://dummyjson.com".into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    log_filter: Option<String>,
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "employee-details")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let parsed = toml::from_str::<ConfigFile>(&raw)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(Some(parsed))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Defaults, then `path` if it exists, then `APP__*` environment overrides.
///
/// An unreadable or malformed file is logged and skipped.
pub fn load_settings_from(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = path {
        match read_config_file(path) {
            Ok(Some(file_cfg)) => {
                if let Some(v) = file_cfg.api_base_url.and_then(non_blank) {
                    settings.api_base_url = v;
                }
                if let Some(v) = file_cfg.log_filter.and_then(non_blank) {
                    settings.log_filter = v;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!("ignoring config file: {err:#}"),
        }
    }

    if let Some(v) = env("APP__API_BASE_URL").and_then(non_blank) {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__LOG_FILTER").and_then(non_blank) {
        settings.log_filter = v;
    }

    settings
}

pub fn load_settings() -> Settings {
    let path = default_config_path().ok();
    load_settings_from(path.as_deref(), |key| std::env::var(key).ok())
}
