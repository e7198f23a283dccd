use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_FILE: &str = "city-wx.toml";

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

/// Config file that exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid {path}: {reason}")]
    Parse { path: String, reason: String },
}

impl WeatherConfig {
    /// Request timeout, never below one second.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            warn!("timeout_secs = 0 is not usable, falling back to 1s");
        }
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level configuration, read from `city-wx.toml` when present.
///
/// Example TOML:
/// ```toml
/// api_key_path = "apikey.txt"
/// icons_dir = "icons"
///
/// [weather]
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_key_path")]
    pub api_key_path: PathBuf,

    #[serde(default = "default_icons_dir")]
    pub icons_dir: PathBuf,

    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    /// Filter directive for the log subscriber, e.g. "info" or "city_wx=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub weather: WeatherConfig,
}

fn default_api_key_path() -> PathBuf {
    PathBuf::from("apikey.txt")
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_geolocation_url() -> String {
    "https://ipinfo.io".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key_path: default_api_key_path(),
            icons_dir: default_icons_dir(),
            geolocation_url: default_geolocation_url(),
            log_level: default_log_level(),
            weather: WeatherConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str::<AppConfig>(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let config = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.api_key_path, PathBuf::from("apikey.txt"));
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.geolocation_url, "https://ipinfo.io");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "icons_dir = \"assets/icons\"\n\n[weather]\ntimeout_secs = 3").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.icons_dir, PathBuf::from("assets/icons"));
        assert_eq!(config.weather.timeout_secs, 3);
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_file_reports_reason() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "weather = 12 = oops").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let message = err.to_string();
        assert!(message.starts_with("invalid "));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn wrongly_typed_field_reports_reason() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weather]\ntimeout_secs = \"soon\"").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn zero_timeout_is_raised_to_one_second() {
        let config = WeatherConfig {
            timeout_secs: 0,
            ..WeatherConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(WeatherConfig::default().timeout(), Duration::from_secs(10));
    }
}
