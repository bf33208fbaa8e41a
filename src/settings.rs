//! Game configuration
//!
//! Immutable track geometry and physics tuning, handed to `GameState::new`.
//! Optionally loaded from a JSON file named by `RING_PUTT_CONFIG`.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "RING_PUTT_CONFIG";

/// Errors from loading or validating a config
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Ring track geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Center of the ring (screen coordinates, y down)
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Ball spawn angle (degrees), placed at mid-radius
    pub start_angle_deg: f32,
    /// Finish line angle (degrees), spans inner to outer circle
    pub finish_angle_deg: f32,
    /// Slack added to the ball radius for finish line contact
    pub finish_tolerance: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(TRACK_CENTER_X, TRACK_CENTER_Y),
            inner_radius: TRACK_INNER_RADIUS,
            outer_radius: TRACK_OUTER_RADIUS,
            start_angle_deg: START_ANGLE_DEG,
            finish_angle_deg: FINISH_ANGLE_DEG,
            finish_tolerance: FINISH_TOLERANCE,
        }
    }
}

/// Ball physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ball_radius: f32,
    /// Multiplier from drag vector (anchor to ball) to launch velocity
    pub launch_scale: f32,
    /// Per-step velocity multiplier, in (0, 1)
    pub friction: f32,
    /// Ball stops once both velocity components fall below this
    pub rest_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            launch_scale: LAUNCH_SCALE,
            friction: FRICTION,
            rest_threshold: REST_THRESHOLD,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub track: TrackConfig,
    pub physics: PhysicsConfig,
    /// Target frame rate of the frame loop
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track: TrackConfig::default(),
            physics: PhysicsConfig::default(),
            frame_rate: FPS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.track;
        let p = &self.physics;

        let finite = [
            t.center.x,
            t.center.y,
            t.inner_radius,
            t.outer_radius,
            t.start_angle_deg,
            t.finish_angle_deg,
            t.finish_tolerance,
            p.ball_radius,
            p.launch_scale,
            p.friction,
            p.rest_threshold,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Invalid("all values must be finite".into()));
        }
        if t.inner_radius <= 0.0 || t.inner_radius >= t.outer_radius {
            return Err(ConfigError::Invalid(format!(
                "track radii must satisfy 0 < inner < outer (got {} / {})",
                t.inner_radius, t.outer_radius
            )));
        }
        if p.ball_radius <= 0.0 || 2.0 * p.ball_radius > t.outer_radius - t.inner_radius {
            return Err(ConfigError::Invalid(format!(
                "ball radius {} does not fit a track {} wide",
                p.ball_radius,
                t.outer_radius - t.inner_radius
            )));
        }
        if p.friction <= 0.0 || p.friction >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "friction must be in (0, 1) (got {})",
                p.friction
            )));
        }
        if p.rest_threshold <= 0.0 || p.launch_scale <= 0.0 || t.finish_tolerance < 0.0 {
            return Err(ConfigError::Invalid(
                "rest threshold and launch scale must be positive, finish tolerance non-negative"
                    .into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame rate must be positive".into()));
        }
        Ok(())
    }

    /// Load config from `RING_PUTT_CONFIG` if set, otherwise defaults
    pub fn load() -> Self {
        Self::load_from(std::env::var(CONFIG_ENV_VAR).ok().as_deref())
    }

    /// Load config from `path`, falling back to defaults when unset, missing or invalid
    pub fn load_from(path: Option<&str>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("{} ({}), using default config", e, path);
                Self::default()
            }
        }
    }
}
