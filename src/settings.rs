//! Game settings and physics tuning
//!
//! Loaded from an optional TOML file. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable that points at the config file
pub const CONFIG_ENV: &str = "PIXEL_QUEST_CONFIG";
/// Config path used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/pixel_quest.toml";

/// Per-tick physics and scoring constants
///
/// Values are per tick, calibrated for 60 ticks per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_force: f32,
    pub player_speed: f32,
    pub terminal_velocity: f32,
    pub friction: f32,
    pub stop_threshold: f32,
    pub contact_damage: i32,
    pub coin_value: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            player_speed: PLAYER_SPEED,
            terminal_velocity: TERMINAL_VELOCITY,
            friction: FRICTION,
            stop_threshold: STOP_THRESHOLD,
            contact_damage: CONTACT_DAMAGE,
            coin_value: COIN_VALUE,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity > 0.0) {
            return Err(invalid("tuning.gravity", "must be positive"));
        }
        if !(self.jump_force < 0.0) {
            return Err(invalid("tuning.jump_force", "must be negative (up)"));
        }
        if !(self.player_speed > 0.0) {
            return Err(invalid("tuning.player_speed", "must be positive"));
        }
        if !(self.terminal_velocity >= self.gravity) {
            return Err(invalid(
                "tuning.terminal_velocity",
                "must be at least one tick of gravity",
            ));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(invalid("tuning.friction", "must be in [0, 1)"));
        }
        if !(self.stop_threshold >= 0.0) {
            return Err(invalid("tuning.stop_threshold", "must not be negative"));
        }
        if self.contact_damage < 0 {
            return Err(invalid("tuning.contact_damage", "must not be negative"));
        }
        Ok(())
    }
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    /// Base seed for level generation
    pub seed: u64,
    /// Pacing rate for the realtime driver
    pub tick_rate_hz: u32,
    /// Maximum catch-up ticks per frame
    pub max_substeps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            seed: 0,
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `$PIXEL_QUEST_CONFIG` or the default path
    ///
    /// A missing file means defaults. A broken file is reported and ignored.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            log::info!("No config at {path}, using default settings");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load {path}: {e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        if self.tick_rate_hz == 0 {
            return Err(invalid("tick_rate_hz", "must be positive"));
        }
        if self.max_substeps == 0 {
            return Err(invalid("max_substeps", "must be positive"));
        }
        if self.tick_rate_hz != TICK_RATE_HZ {
            log::warn!(
                "tick_rate_hz = {} changes game speed; physics is tuned per tick for {} Hz",
                self.tick_rate_hz,
                TICK_RATE_HZ
            );
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.tuning.gravity, 0.6);
        assert_eq!(settings.tuning.jump_force, -14.0);
        assert_eq!(settings.tuning.player_speed, 4.0);
        assert_eq!(settings.tick_rate_hz, 60);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            seed = 42

            [tuning]
            gravity = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.tuning.gravity, 0.5);
        assert_eq!(settings.tuning.jump_force, JUMP_FORCE);
        assert_eq!(settings.max_substeps, MAX_SUBSTEPS);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_toml("[tuning]\nfriction = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "tuning.friction",
                ..
            }
        ));

        let err = Settings::from_toml("[tuning]\njump_force = 3.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "tuning.jump_force",
                ..
            }
        ));

        let err = Settings::from_toml("tick_rate_hz = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "tick_rate_hz",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_toml("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
