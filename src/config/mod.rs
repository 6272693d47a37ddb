use crate::errors::{AppError, AppResult};
use crate::export::ReportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of days printed when `--limit` is not given (unlimited if absent)
    #[serde(default)]
    pub default_limit: Option<usize>,
    #[serde(default)]
    pub default_format: ReportFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_limit: None,
            default_format: ReportFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.timelog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timelog")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timelog.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories.
    /// An existing file is only replaced when `force` is set.
    pub fn save(&self, path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// `--limit` wins over the configured default.
    pub fn effective_limit(&self, cli_limit: Option<usize>) -> Option<usize> {
        cli_limit.or(self.default_limit)
    }
}
