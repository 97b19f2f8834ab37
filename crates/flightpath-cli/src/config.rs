//! Runtime configuration for `flightpath`.
//!
//! Values are resolved in three layers: built-in defaults, then an optional
//! TOML file, then command-line flags.
//!
//! ```toml
//! throw_type = "right-forehand"
//! format = "svg"
//! strict = true
//!
//! [canvas]
//! width = 400
//! height = 600
//! start_x = 200
//! start_y = 560
//! max_distance = 450
//!
//! [overlay]
//! width = 1080
//! height = 1920
//! hand = "left"
//! release_angle = "hyzer"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flightpath::{CanvasConfig, ReleaseAngle, ThrowType, ThrowingHand};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputFormat;

/// Settings a user would otherwise repeat on every invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Throw type for schematic mode.
    pub throw_type: ThrowType,

    /// Output format.
    pub format: OutputFormat,

    /// Validate input before drawing.
    pub strict: bool,

    /// Schematic canvas geometry.
    pub canvas: CanvasConfig,

    /// Overlay defaults.
    pub overlay: OverlayDefaults,
}

/// Defaults for overlay mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayDefaults {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
    /// Throwing hand.
    pub hand: ThrowingHand,
    /// Release angle.
    pub release_angle: ReleaseAngle,
}

impl Default for OverlayDefaults {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            hand: ThrowingHand::Right,
            release_angle: ReleaseAngle::Flat,
        }
    }
}

impl Config {
    /// Reads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed text or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for [`Config`].
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = Config::default();

        assert_eq!(config.throw_type, ThrowType::RightBackhand);
        assert_eq!(config.format, OutputFormat::Path);
        assert!(!config.strict);
        assert_eq!(config.canvas, CanvasConfig::default());
        assert_eq!(config.overlay.width, 300.0);
        assert_eq!(config.overlay.hand, ThrowingHand::Right);
    }

    #[test]
    fn config_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn config_partial_toml() {
        let config = Config::from_toml_str(
            r#"
throw_type = "left-backhand"
format = "json"

[canvas]
max_distance = 500.0

[overlay]
hand = "left"
"#,
        )
        .unwrap();

        assert_eq!(config.throw_type, ThrowType::LeftBackhand);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.canvas.max_distance, 500.0);
        assert_eq!(config.canvas.start_y, 280.0);
        assert_eq!(config.overlay.hand, ThrowingHand::Left);
        assert_eq!(config.overlay.release_angle, ReleaseAngle::Flat);
    }

    #[test]
    fn config_rejects_unknown_keys() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
        assert!(Config::from_toml_str("throw_type = \"overhand\"").is_err());
    }

    #[test]
    fn config_rejects_misspelled_canvas_key() {
        let err = Config::from_toml_str("[canvas]\nstartY = 500.0\n").unwrap_err();
        assert!(err.to_string().contains("startY"));
    }

    #[test]
    fn config_load_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
