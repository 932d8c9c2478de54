//! Service configuration.
//!
//! A `Config` is an explicit value built once at startup and handed to the
//! manager; there is no process-wide singleton. Values come from an
//! optional TOML file named by `SKZ_CONFIG`, with non-empty `SKZ_*`
//! environment variables overriding individual fields.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SkizzeError};

/// Lower bound for the checkpoint ticker period.
pub const MIN_SAVE_THRESHOLD_SECS: u64 = 3;

const DEFAULT_DIR: &str = "~/skizze-data";
const DEFAULT_PORT: u16 = 3596;
const DEFAULT_SAVE_THRESHOLD_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Historical separate directory for the info registry; may equal
    /// `data_dir` and does with the defaults.
    pub info_dir: PathBuf,
    /// Directory for persisted blobs; created if missing.
    pub data_dir: PathBuf,
    /// TCP port for the HTTP collaborator.
    pub port: u16,
    /// Period of the checkpoint ticker in seconds, clamped to at least 3.
    pub save_threshold_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            info_dir: PathBuf::from(DEFAULT_DIR),
            data_dir: PathBuf::from(DEFAULT_DIR),
            port: DEFAULT_PORT,
            save_threshold_seconds: DEFAULT_SAVE_THRESHOLD_SECS,
        }
    }
}

impl Config {
    /// Load configuration: TOML file at `SKZ_CONFIG` if set, then
    /// environment overrides, then normalization.
    pub fn load() -> Result<Self> {
        let mut config = match nonempty_env("SKZ_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config.normalized())
    }

    /// Parse a TOML config file. Malformed configuration is fatal at
    /// startup, so this surfaces the parse error to the caller.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            SkizzeError::InvalidProperties(format!("config {}: {}", path.display(), e))
        })
    }

    /// Apply non-empty `SKZ_*` environment overrides. Unparseable numeric
    /// overrides are ignored in favor of the file value.
    fn apply_env(&mut self) {
        if let Some(dir) = nonempty_env("SKZ_INFO_DIR") {
            self.info_dir = PathBuf::from(dir);
        }
        if let Some(dir) = nonempty_env("SKZ_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(port) = nonempty_env("SKZ_PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        // The variable name keeps the historical spelling.
        if let Some(secs) = nonempty_env("SKZ_SAVE_TRESHOLD_SECS").and_then(|s| s.parse().ok()) {
            self.save_threshold_seconds = secs;
        }
    }

    /// Expand `~` prefixes and clamp the ticker period.
    pub fn normalized(mut self) -> Self {
        self.info_dir = expand_home(&self.info_dir);
        self.data_dir = expand_home(&self.data_dir);
        self.save_threshold_seconds = self.save_threshold_seconds.max(MIN_SAVE_THRESHOLD_SECS);
        self
    }

    /// Checkpoint ticker period.
    pub fn save_interval(&self) -> Duration {
        Duration::from_secs(self.save_threshold_seconds.max(MIN_SAVE_THRESHOLD_SECS))
    }
}

fn nonempty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}
