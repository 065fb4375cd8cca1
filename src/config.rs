//! Optional host-page configuration for the lightbox.
//!
//! A page may embed a JSON configuration block to override the interaction
//! tunables; a missing or malformed block silently falls back to the
//! defaults. Nothing here is persisted — configuration is read once at
//! attach time.

use serde::Deserialize;

use crate::constants::{backdrop, swipe, zoom};
use crate::gesture::GestureTuning;

/// Log verbosity for the attached controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
}

impl LogLevel {
    /// Convert to the log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Interaction tunables, overridable from the host page.
///
/// Defaults reproduce the built-in constants, so an absent config block
/// changes nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct LightboxConfig {
    /// Maximum pinch scale
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,

    /// Net horizontal swipe displacement (px) that triggers navigation
    #[serde(default = "default_nav_threshold")]
    pub nav_threshold: f64,

    /// Net downward swipe displacement (px) that triggers dismissal
    #[serde(default = "default_dismiss_threshold")]
    pub dismiss_threshold: f64,

    /// Backdrop opacity before any drag
    #[serde(default = "default_backdrop_start")]
    pub backdrop_start: f64,

    /// Backdrop opacity floor during a drag
    #[serde(default = "default_backdrop_floor")]
    pub backdrop_floor: f64,

    /// Drag distance (px) over which one unit of backdrop opacity fades
    #[serde(default = "default_backdrop_fade")]
    pub backdrop_fade: f64,

    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_max_scale() -> f64 {
    zoom::MAX
}

fn default_nav_threshold() -> f64 {
    swipe::NAV_THRESHOLD
}

fn default_dismiss_threshold() -> f64 {
    swipe::DISMISS_THRESHOLD
}

fn default_backdrop_start() -> f64 {
    backdrop::START
}

fn default_backdrop_floor() -> f64 {
    backdrop::FLOOR
}

fn default_backdrop_fade() -> f64 {
    backdrop::FADE_DISTANCE
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            max_scale: default_max_scale(),
            nav_threshold: default_nav_threshold(),
            dismiss_threshold: default_dismiss_threshold(),
            backdrop_start: default_backdrop_start(),
            backdrop_floor: default_backdrop_floor(),
            backdrop_fade: default_backdrop_fade(),
            log_level: LogLevel::default(),
        }
    }
}

impl LightboxConfig {
    /// Parse a configuration payload, falling back to defaults on any
    /// problem. An absent payload (`None`) is the common case and is not
    /// worth a log line; a present-but-broken one gets a warning.
    pub fn from_payload(payload: Option<&str>) -> Self {
        match payload {
            None => Self::default(),
            Some(text) => match serde_json::from_str(text) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("lightbox config did not parse, using defaults: {err}");
                    Self::default()
                }
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl LightboxConfig {
    /// Read the optional configuration block embedded in the page.
    pub fn from_page(document: &web_sys::Document) -> Self {
        let payload = document
            .query_selector(&format!("script[{}]", crate::constants::attrs::CONFIG))
            .ok()
            .flatten()
            .and_then(|script| script.text_content());
        Self::from_payload(payload.as_deref())
    }
}

impl From<&LightboxConfig> for GestureTuning {
    fn from(config: &LightboxConfig) -> Self {
        Self {
            max_scale: config.max_scale,
            nav_threshold: config.nav_threshold,
            dismiss_threshold: config.dismiss_threshold,
            backdrop_start: config.backdrop_start,
            backdrop_floor: config.backdrop_floor,
            backdrop_fade: config.backdrop_fade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_payload_yields_defaults() {
        let config = LightboxConfig::from_payload(None);
        assert_eq!(config.max_scale, 3.0);
        assert_eq!(config.nav_threshold, 50.0);
        assert_eq!(config.dismiss_threshold, 80.0);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_malformed_payload_yields_defaults() {
        let config = LightboxConfig::from_payload(Some("{nope"));
        assert_eq!(config.max_scale, 3.0);
    }

    #[test]
    fn test_partial_payload_keeps_remaining_defaults() {
        let config =
            LightboxConfig::from_payload(Some(r#"{"max_scale": 5.0, "log_level": "debug"}"#));
        assert_eq!(config.max_scale, 5.0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.nav_threshold, 50.0);
    }

    #[test]
    fn test_tuning_mirrors_config() {
        let config = LightboxConfig {
            max_scale: 4.0,
            nav_threshold: 70.0,
            ..LightboxConfig::default()
        };
        let tuning = GestureTuning::from(&config);
        assert_eq!(tuning.max_scale, 4.0);
        assert_eq!(tuning.nav_threshold, 70.0);
        assert_eq!(tuning.dismiss_threshold, 80.0);
    }
}
