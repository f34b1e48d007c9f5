use lectern_engine::{DEFAULT_THRESHOLD_PX, NavigationMode, TrackerTiming};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub articles_path: PathBuf,
    #[serde(default)]
    pub reader: ReaderSettings,
    #[serde(default)]
    pub tracking: TrackingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    /// Where table-of-contents entries come from.
    pub navigation: NavigationMode,
}

/// Tracker tuning. Durations are whole milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingSettings {
    pub threshold_px: f64,
    pub debounce_ms: u64,
    pub initial_delay_ms: u64,
    pub frame_ms: u64,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        let timing = TrackerTiming::default();
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
            debounce_ms: millis(timing.debounce),
            initial_delay_ms: millis(timing.initial_delay),
            frame_ms: millis(timing.frame),
        }
    }
}

impl TrackingSettings {
    pub fn timing(&self) -> TrackerTiming {
        TrackerTiming {
            threshold: self.threshold_px,
            debounce: Duration::from_millis(self.debounce_ms),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            frame: Duration::from_millis(self.frame_ms),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Config {
    pub fn new(articles_path: PathBuf) -> Self {
        Self {
            articles_path,
            reader: ReaderSettings::default(),
            tracking: TrackingSettings::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded articles path
        config.articles_path =
            Self::expand_path(&config.articles_path).unwrap_or(config.articles_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Writes a config for `articles_path` with every other setting at its
    /// default, so the file lists the knobs available for tuning.
    pub fn create_default_at<P: AsRef<Path>>(
        articles_path: PathBuf,
        config_path: P,
    ) -> anyhow::Result<Self> {
        let config = Self::new(articles_path);
        config.save_to_path(config_path)?;
        Ok(config)
    }

    pub fn create_default(articles_path: PathBuf) -> anyhow::Result<Self> {
        Self::create_default_at(articles_path, Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/lectern");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS`; `None` when a variable is undefined.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
