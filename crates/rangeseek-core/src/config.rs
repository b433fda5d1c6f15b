//! Widget configuration.

use std::path::Path;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How thumb movement is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Thumbs stay inside the widget and never cross each other.
    #[default]
    Clamped,
    /// Thumbs move freely; the selection may leave `[0, 1]` or invert.
    Unclamped,
}

/// Fixed appearance and behaviour of a range widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSeekConfig {
    /// Width of each thumb band.
    pub thumb_width: f64,
    /// Height of the top and bottom accent lines.
    pub line_height: f64,
    /// Accent line color.
    pub accent_color: SerializableColor,
    /// Overlay color of the selected band.
    pub content_color: SerializableColor,
    /// Movement constraint applied while dragging.
    pub bounds_policy: BoundsPolicy,
}

impl Default for RangeSeekConfig {
    fn default() -> Self {
        Self {
            thumb_width: Self::DEFAULT_THUMB_WIDTH,
            line_height: Self::DEFAULT_LINE_HEIGHT,
            accent_color: SerializableColor::new(0x3A, 0x78, 0xE5, 0xFF),
            content_color: SerializableColor::new(0x00, 0x00, 0x00, 0x66),
            bounds_policy: BoundsPolicy::default(),
        }
    }
}

impl RangeSeekConfig {
    pub const DEFAULT_THUMB_WIDTH: f64 = 45.0;
    pub const DEFAULT_LINE_HEIGHT: f64 = 13.0;

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the movement constraint.
    pub fn with_bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.bounds_policy = policy;
        self
    }

    /// Set the thumb width.
    pub fn with_thumb_width(mut self, width: f64) -> Self {
        self.thumb_width = width;
        self
    }

    /// Reject dimensions that cannot produce a layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.thumb_width.is_finite() || self.thumb_width < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "thumb_width must be a non-negative number, got {}",
                self.thumb_width
            )));
        }
        if !self.line_height.is_finite() || self.line_height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "line_height must be a non-negative number, got {}",
                self.line_height
            )));
        }
        Ok(())
    }

    /// Accent line color as a peniko color.
    pub fn accent(&self) -> Color {
        self.accent_color.into()
    }

    /// Content overlay color as a peniko color.
    pub fn content(&self) -> Color {
        self.content_color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RangeSeekConfig::default();
        assert!((config.thumb_width - 45.0).abs() < f64::EPSILON);
        assert!((config.line_height - 13.0).abs() < f64::EPSILON);
        assert_eq!(config.bounds_policy, BoundsPolicy::Clamped);
        assert_eq!(SerializableColor::from(config.accent()), SerializableColor::new(0x3A, 0x78, 0xE5, 0xFF));
        assert_eq!(config.content_color.a, 0x66);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RangeSeekConfig::from_json_str(r#"{"thumb_width": 30, "bounds_policy": "unclamped"}"#).unwrap();
        assert!((config.thumb_width - 30.0).abs() < f64::EPSILON);
        assert!((config.line_height - 13.0).abs() < f64::EPSILON);
        assert_eq!(config.bounds_policy, BoundsPolicy::Unclamped);
    }

    #[test]
    fn test_rejects_negative_width() {
        let result = RangeSeekConfig::from_json_str(r#"{"thumb_width": -1}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = RangeSeekConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"line_height": 8, "accent_color": {{"r": 1, "g": 2, "b": 3, "a": 255}}}}"#).unwrap();

        let config = RangeSeekConfig::load(file.path()).unwrap();
        assert!((config.line_height - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.accent_color, SerializableColor::new(1, 2, 3, 255));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RangeSeekConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
