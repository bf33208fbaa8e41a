//! Demo autopilot
//!
//! Plays the game by emitting the same pointer gestures a player would.
//! Each shot aims at a point a short arc ahead on the ring's centerline,
//! heading toward the finish line the short way round, with seeded jitter
//! on angle and power.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{angle_around, normalize_angle, polar_to_cartesian};
use super::state::GameState;
use super::tick::InputEvent;

/// Arc (radians) between the ball and its next aim point
const AIM_ARC: f32 = 0.44;
/// Max random aim error (radians)
const AIM_JITTER: f32 = 0.04;
/// Max random power error (fraction)
const POWER_JITTER: f32 = 0.1;
/// Frames to wait at rest before taking the next shot
const SETTLE_FRAMES: u32 = 10;

/// Seeded autopilot player
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    settle: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            settle: SETTLE_FRAMES,
        }
    }

    /// Input events for this frame (empty while the ball is moving or settling)
    pub fn next_input(&mut self, state: &GameState) -> Vec<InputEvent> {
        if state.ball.is_moving() || state.ball.is_dragging() {
            self.settle = SETTLE_FRAMES;
            return Vec::new();
        }
        if self.settle > 0 {
            self.settle -= 1;
            return Vec::new();
        }
        self.settle = SETTLE_FRAMES;

        let anchor = self.plan_shot(state);
        vec![
            InputEvent::PointerDown(anchor),
            InputEvent::PointerMove(anchor),
            InputEvent::PointerUp,
        ]
    }

    /// Drag anchor for the next shot
    fn plan_shot(&mut self, state: &GameState) -> Vec2 {
        let track = &state.track;
        let ball = &state.ball;
        let physics = &state.config.physics;

        // Travel the short way round toward the finish angle
        let ball_theta = angle_around(ball.pos, track.center);
        let finish_theta = angle_around(track.finish_line.midpoint(), track.center);
        let direction = normalize_angle(finish_theta - ball_theta).signum();

        let jitter = self.rng.random_range(-AIM_JITTER..=AIM_JITTER);
        let target_theta = ball_theta + direction * AIM_ARC + jitter;
        let target = polar_to_cartesian(track.center, track.mid_radius(), target_theta);

        // Total glide distance of speed v under friction f is about v / (1 - f)
        let to_target = target - ball.pos;
        let power = 1.0 + self.rng.random_range(-POWER_JITTER..=POWER_JITTER);
        let speed = to_target.length() * (1.0 - physics.friction) * power;
        let velocity = to_target.normalize_or_zero() * speed;

        // Slingshot: the ball flies from the anchor through the ball
        ball.pos - velocity / physics.launch_scale
    }
}
