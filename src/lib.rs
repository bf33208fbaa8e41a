//! Ring Putt - a drag-to-launch ball game around a circular ring track
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball physics, finish line, session state machine)
//! - `scores`: Session-only lap score book
//! - `hud`: Read-only per-frame snapshot and HUD text for the renderer
//! - `settings`: Track and physics configuration

pub mod hud;
pub mod scores;
pub mod settings;
pub mod sim;

pub use hud::{Snapshot, hud_lines};
pub use scores::LapScores;
pub use settings::{ConfigError, GameConfig, PhysicsConfig, TrackConfig};

/// Game configuration constants (reference geometry)
pub mod consts {
    /// Frames per second of the fixed frame loop (one physics step per frame)
    pub const FPS: u32 = 60;

    /// Track center in screen coordinates (800x600 playfield)
    pub const TRACK_CENTER_X: f32 = 400.0;
    pub const TRACK_CENTER_Y: f32 = 300.0;
    /// Annulus radii
    pub const TRACK_INNER_RADIUS: f32 = 150.0;
    pub const TRACK_OUTER_RADIUS: f32 = 250.0;

    /// Start position angle (degrees, 0 = +x, increasing toward +y) - left side
    pub const START_ANGLE_DEG: f32 = 180.0;
    /// Finish line angle (degrees) - bottom of the ring
    pub const FINISH_ANGLE_DEG: f32 = 90.0;
    /// Extra slack around the ball when testing finish line contact
    pub const FINISH_TOLERANCE: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Drag vector to launch velocity
    pub const LAUNCH_SCALE: f32 = 0.1;
    /// Per-step velocity multiplier
    pub const FRICTION: f32 = 0.98;
    /// Both velocity components below this and the ball is at rest
    pub const REST_THRESHOLD: f32 = 0.1;
}
