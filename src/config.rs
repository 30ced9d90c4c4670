//! Configuration file support for catreel.
//!
//! Configuration is loaded from `~/.config/catreel/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/catreel/config.toml
//! feed = "~/cats/sightings.toml"
//!
//! [carousel]
//! card_width = 280
//! gap = 12
//! auto_scroll_interval_ms = 5000
//! resume_delay_ms = 5000
//!
//! [display]
//! units_per_column = 8.0
//! snap_duration_ms = 300
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::carousel::CarouselConfig;
use crate::log;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Sighting feed to display (built-in feed when unset)
    pub feed: Option<PathBuf>,

    /// Carousel tunables
    pub carousel: CarouselSection,

    /// Terminal rendering
    pub display: DisplaySection,
}

/// `[carousel]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselSection {
    pub card_width: f64,
    pub gap: f64,
    pub auto_scroll_interval_ms: u64,
    pub resume_delay_ms: u64,
    pub layout_delay_ms: u64,
}

impl Default for CarouselSection {
    fn default() -> Self {
        let defaults = CarouselConfig::default();
        Self {
            card_width: defaults.card_width,
            gap: defaults.gap,
            auto_scroll_interval_ms: defaults.auto_scroll_interval.as_millis() as u64,
            resume_delay_ms: defaults.resume_delay.as_millis() as u64,
            layout_delay_ms: defaults.layout_delay.as_millis() as u64,
        }
    }
}

/// `[display]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Scroll units covered by one terminal column
    pub units_per_column: f64,
    /// Duration of animated scrolls (autoplay advance, snap)
    pub snap_duration_ms: u64,
    /// Redraw period while something is moving
    pub frame_interval_ms: u64,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            units_per_column: 8.0,
            snap_duration_ms: 300,
            frame_interval_ms: 16,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallbacks.
    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::log(&format!("Warning: Failed to parse config file: {}", e));
                    Self::default()
                }
            },
            Err(e) => {
                log::log(&format!("Warning: Failed to read config file: {}", e));
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catreel")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, feed: Option<PathBuf>) -> Self {
        if feed.is_some() {
            self.feed = feed;
        }
        self
    }

    /// Get the feed path, falling back to environment variable.
    pub fn feed_path(&self) -> Option<PathBuf> {
        self.feed
            .clone()
            .or_else(|| std::env::var("CATREEL_FEED").ok().map(PathBuf::from))
            .map(|path| expand_home(&path))
    }

    /// Carousel tunables. Geometry is validated when the carousel is built.
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            card_width: self.carousel.card_width,
            gap: self.carousel.gap,
            auto_scroll_interval: Duration::from_millis(self.carousel.auto_scroll_interval_ms),
            resume_delay: Duration::from_millis(self.carousel.resume_delay_ms),
            layout_delay: Duration::from_millis(self.carousel.layout_delay_ms),
        }
    }

    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.display.snap_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.display.frame_interval_ms.max(1))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.feed.is_none());
        assert_eq!(config.carousel_config(), CarouselConfig::default());
        assert_eq!(config.display.units_per_column, 8.0);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            feed = "/tmp/cats.toml"

            [carousel]
            card_width = 200
            auto_scroll_interval_ms = 2500

            [display]
            snap_duration_ms = 120
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.feed, Some(PathBuf::from("/tmp/cats.toml")));

        let carousel = config.carousel_config();
        assert_eq!(carousel.card_width, 200.0);
        assert_eq!(carousel.gap, 12.0);
        assert_eq!(carousel.auto_scroll_interval, Duration::from_millis(2500));
        assert_eq!(carousel.resume_delay, Duration::from_millis(5000));
        assert_eq!(config.snap_duration(), Duration::from_millis(120));
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            feed: Some(PathBuf::from("/from/file.toml")),
            ..Config::default()
        }
        .with_overrides(Some(PathBuf::from("/from/cli.toml")));
        assert_eq!(config.feed_path(), Some(PathBuf::from("/from/cli.toml")));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/catreel/config.toml"));
        assert!(config.feed.is_none());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel\ncard_width = ").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.carousel.card_width, 280.0);
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let expanded = expand_home(Path::new("~/cats.toml"));
        assert!(expanded.ends_with("cats.toml"));
        assert!(!expanded.starts_with("~"));
    }
}
