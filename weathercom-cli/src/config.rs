use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;
use weathercom_core::{ClientConfig, Units, WeatherClient};

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_units = "m"
///
/// [client]
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    /// Unit code used when `--units` is not given.
    pub default_units: Option<Units>,

    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "weathercom", "weathercom")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The `--api-key` flag wins over the stored key.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Result<String> {
        flag.or(self.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `weathercom configure` or pass --api-key."
                )
            })
    }

    /// The `--units` flag wins over the stored default; imperial otherwise.
    pub fn resolve_units(&self, flag: Option<Units>) -> Units {
        flag.or(self.default_units).unwrap_or_default()
    }

    pub fn build_client(&self, api_key_flag: Option<&str>) -> Result<WeatherClient> {
        let api_key = self.resolve_api_key(api_key_flag)?;
        WeatherClient::with_config(api_key, &self.client)
            .context("Failed to initialize weather.com client")
    }
}
