//! Application configuration loaded from `config.toml`.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use expander::{Easing, ExpandableConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::paths;

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_BODY_HEIGHT: u16 = 3;

fn default_items() -> Vec<String> {
    (1..=3).map(|i| format!("This is item {}", i)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Static list contents, one row per entry.
    pub items: Vec<String>,
    /// Frame interval while any row animates.
    pub frame_ms: u64,
    /// Finish every animation on its first frame.
    pub reduced_motion: bool,
    pub log_level: String,
    /// Lines of content revealed by a fully expanded row.
    pub body_height: u16,
    pub row: ExpandableConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            frame_ms: DEFAULT_FRAME_MS,
            reduced_motion: false,
            log_level: "debug".to_string(),
            body_height: DEFAULT_BODY_HEIGHT,
            row: ExpandableConfig::default().with_easing(Easing::overshoot()),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from the platform config file if None.
    ///
    /// An explicit path must exist. A missing platform config file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::read(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Parsed log level, `Debug` if unrecognised.
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Debug)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use expander::Orientation;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.items.len(), 3);
        assert_eq!(config.items[0], "This is item 1");
        assert_eq!(config.row.easing, Easing::overshoot());
        assert_eq!(config.row.duration_ms, 300);
    }

    #[test]
    fn test_parse_full_file() {
        let config = AppConfig::parse(
            r#"
            items = ["alpha", "beta"]
            frame_ms = 33
            reduced_motion = true
            log_level = "warn"
            body_height = 5

            [row]
            duration_ms = 150
            orientation = "horizontal"
            parallax = 0.5
            easing = "ease-in-out"
            "#,
        )
        .unwrap();

        assert_eq!(config.items, vec!["alpha", "beta"]);
        assert_eq!(config.frame(), Duration::from_millis(33));
        assert!(config.reduced_motion);
        assert_eq!(config.level(), LevelFilter::Warn);
        assert_eq!(config.body_height, 5);
        assert_eq!(config.row.duration_ms, 150);
        assert_eq!(config.row.orientation, Orientation::Horizontal);
        assert_eq!(config.row.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_bad_orientation_rejected() {
        assert!(AppConfig::parse("[row]\norientation = 3\n").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level(), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_frame_interval_is_bumped() {
        let config = AppConfig {
            frame_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.frame(), Duration::from_millis(1));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(
            err,
            AppError::ConfigRead { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
    }
}
