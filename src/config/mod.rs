use crate::errors::{AppError, AppResult};
use crate::utils::path::home_or_cwd;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Shown as "Signed in as …" in the dashboard header.
    #[serde(default = "default_organizer")]
    pub organizer: String,
    /// Load the demo events into every new session.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// tracing filter used when CAMPUSCLUB_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_organizer() -> String {
    "you@college.edu".to_string()
}
fn default_seed_demo() -> bool {
    true
}
fn default_share_base_url() -> String {
    "https://campus.example/event/".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organizer: default_organizer(),
            seed_demo: default_seed_demo(),
            share_base_url: default_share_base_url(),
            separator_char: default_separator_char(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(home_or_cwd)
                .join("campusclub")
        } else {
            home_or_cwd().join(".campusclub")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("campusclub.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot read configuration file");
            AppError::ConfigLoad
        })?;

        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Public link of an event, as copied by "Copy link".
    pub fn share_link(&self, event_id: &str) -> String {
        format!("{}{}", self.share_base_url, event_id)
    }

    /// Write the default configuration to `path`, creating parent directories.
    /// With `is_test` nothing is written.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
