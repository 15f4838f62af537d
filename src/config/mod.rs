use crate::core::clock::MAX_MAGNITUDE;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Duration (minutes) of rows added automatically.
    #[serde(default = "default_duration")]
    pub default_duration: i64,
    /// Start time of the first row, 24h `HH:MM`.
    #[serde(default = "default_initial_time")]
    pub initial_time: String,
    /// File name used by `export` when no `--file` is given.
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_duration() -> i64 {
    30
}
fn default_initial_time() -> String {
    "09:00".to_string()
}
fn default_export_file() -> String {
    "timeline.txt".to_string()
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
            initial_time: default_initial_time(),
            export_file: default_export_file(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wtimeline")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wtimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wtimeline.conf")
    }

    /// Config path actually in use: the `--config` override or the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.default_duration <= 0 || self.default_duration > MAX_MAGNITUDE {
            return Err(AppError::Config(format!(
                "default_duration must be between 1 and {MAX_MAGNITUDE}, got {}",
                self.default_duration
            )));
        }
        crate::core::clock::parse_hhmm(&self.initial_time)
            .map_err(|_| AppError::Config(format!("initial_time '{}' is not HH:MM", self.initial_time)))?;
        if self.export_file.trim().is_empty() {
            return Err(AppError::Config("export_file must not be empty".into()));
        }
        Ok(())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init_at(path: &Path, force: bool) -> AppResult<Config> {
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

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }
}
