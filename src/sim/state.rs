//! Game state and core simulation types
//!
//! One ball, one track, one session. All state lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::track::{Track, Wall};
use crate::scores::LapScores;
use crate::settings::{GameConfig, PhysicsConfig};

/// Ball state - resting, being aimed, or in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// At rest, waiting for a drag
    Idle,
    /// Drag gesture active; `anchor` is where the pointer currently is
    Aiming { anchor: Vec2 },
    /// Launched and moving
    InFlight,
}

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Ball was not in flight
    Idle,
    /// Position advanced, still in flight
    Moved,
    /// Next position would overlap a wall; ball halted where it was
    HitWall(Wall),
    /// Friction brought the ball to rest
    CameToRest,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    /// A resting ball at `pos`
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            state: BallState::Idle,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state == BallState::InFlight
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BallState::Aiming { .. })
    }

    /// Current aim point while dragging
    pub fn drag_anchor(&self) -> Option<Vec2> {
        match self.state {
            BallState::Aiming { anchor } => Some(anchor),
            _ => None,
        }
    }

    /// Begin aiming at `point`. Ignored while the ball is moving.
    pub fn start_drag(&mut self, point: Vec2) {
        if !self.is_moving() {
            self.state = BallState::Aiming { anchor: point };
        }
    }

    /// Move the aim point while aiming
    pub fn update_drag(&mut self, point: Vec2) {
        if let BallState::Aiming { ref mut anchor } = self.state {
            *anchor = point;
        }
    }

    /// Release the drag. Returns true if the ball was launched.
    ///
    /// The ball flies away from the anchor (slingshot): velocity is
    /// `(pos - anchor) * launch_scale`.
    pub fn end_drag(&mut self, launch_scale: f32) -> bool {
        let BallState::Aiming { anchor } = self.state else {
            return false;
        };

        let vel = (self.pos - anchor) * launch_scale;
        self.vel = if vel.is_finite() { vel } else { Vec2::ZERO };
        self.state = BallState::InFlight;
        true
    }

    /// Advance one fixed step inside `track`
    pub fn step(&mut self, track: &Track, physics: &PhysicsConfig) -> StepOutcome {
        if !self.is_moving() {
            return StepOutcome::Idle;
        }

        // Test the next position before committing
        let next = self.pos + self.vel;
        if let Some(wall) = track.wall_contact(next, self.radius) {
            self.halt();
            return StepOutcome::HitWall(wall);
        }

        self.pos = next;
        self.vel *= physics.friction;

        if self.vel.x.abs() < physics.rest_threshold && self.vel.y.abs() < physics.rest_threshold {
            self.halt();
            return StepOutcome::CameToRest;
        }

        StepOutcome::Moved
    }

    fn halt(&mut self) {
        self.vel = Vec2::ZERO;
        self.state = BallState::Idle;
    }
}

/// Events produced by a tick (for logging, sound, animation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball launched; `move_count` includes this launch
    Launched { move_count: u32, velocity: Vec2 },
    /// Ball stopped against a wall
    HitWall(Wall),
    /// Ball stopped by friction
    CameToRest,
    /// Ball crossed the finish line in flight
    LapCompleted {
        moves: u32,
        laps: u32,
        best: Option<u32>,
    },
    /// Manual reset to the start position
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub track: Track,
    pub ball: Ball,
    /// Launches since the last lap or reset
    pub move_count: u32,
    /// Lap results for this session
    pub scores: LapScores,
    /// Edge detector: set on lap completion, cleared once the ball is off the line
    pub crossed_finish_line: bool,
    /// Frames simulated
    pub frame: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let track = Track::new(&config.track);
        let ball = Ball::new(track.start, config.physics.ball_radius);
        Self {
            config,
            track,
            ball,
            move_count: 0,
            scores: LapScores::new(),
            crossed_finish_line: false,
            frame: 0,
        }
    }

    /// Replace the ball with a fresh one at the start position
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::new(self.track.start, self.config.physics.ball_radius);
    }

    #[inline]
    pub fn laps_completed(&self) -> u32 {
        self.scores.laps
    }

    #[inline]
    pub fn best_score(&self) -> Option<u32> {
        self.scores.best
    }

    #[inline]
    pub fn previous_lap_score(&self) -> u32 {
        self.scores.previous
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
