use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calendar::PaletteColor;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    pub default_time: String,
    pub default_duration_minutes: u32,
    pub default_color: String,
}

/// Values the event form resets to after each add.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormDefaults {
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub color: PaletteColor,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            duration_minutes: 60,
            color: PaletteColor::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_time: "09:00".to_string(),
            default_duration_minutes: 60,
            default_color: PaletteColor::default().tag().to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Reads the config at `path`, or the default location when `None`.
    /// A missing file yields the defaults; nothing is ever written back.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            tracing::info!("Loading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            tracing::info!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calgrid")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn form_defaults(&self) -> FormDefaults {
        let fallback = FormDefaults::default();

        let time = match NaiveTime::parse_from_str(self.form.default_time.trim(), "%H:%M") {
            Ok(time) => time,
            Err(_) => {
                tracing::warn!("Invalid default_time '{}', using 09:00", self.form.default_time);
                fallback.time
            }
        };

        let color = PaletteColor::from_tag(&self.form.default_color).unwrap_or_else(|| {
            tracing::warn!("Unknown default_color '{}', using blue", self.form.default_color);
            fallback.color
        });

        FormDefaults {
            time,
            duration_minutes: self.form.default_duration_minutes,
            color,
        }
    }
}
