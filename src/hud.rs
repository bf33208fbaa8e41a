//! Renderer-facing view of the game
//!
//! `Snapshot` is the read-only per-frame state the renderer paints from;
//! `hud_lines` builds the text overlay.

use glam::Vec2;

use crate::scores::format_best;
use crate::sim::GameState;
use crate::sim::track::Segment;

/// Shown while the ball is waiting for a shot
pub const INSTRUCTIONS: &str = "Click and drag from the ball to launch it";

/// Read-only view of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub moving: bool,
    pub dragging: bool,
    /// Aim line end point while dragging
    pub drag_anchor: Option<Vec2>,
    pub track_center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub finish_line: Segment,
    pub move_count: u32,
    pub laps_completed: u32,
    pub best_score: Option<u32>,
    pub previous_lap_score: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            ball_pos: state.ball.pos,
            ball_radius: state.ball.radius,
            moving: state.ball.is_moving(),
            dragging: state.ball.is_dragging(),
            drag_anchor: state.ball.drag_anchor(),
            track_center: state.track.center,
            inner_radius: state.track.inner_radius,
            outer_radius: state.track.outer_radius,
            finish_line: state.track.finish_line,
            move_count: state.move_count,
            laps_completed: state.laps_completed(),
            best_score: state.best_score(),
            previous_lap_score: state.previous_lap_score(),
        }
    }
}

/// Where a HUD line goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudSlot {
    /// Stats column, top-left, row index from the top
    Stats(u8),
    /// Centered near the bottom
    Footer,
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub slot: HudSlot,
    pub text: String,
}

/// Text overlay for a frame
pub fn hud_lines(snapshot: &Snapshot) -> Vec<HudLine> {
    let mut stats = vec![format!("Moves: {}", snapshot.move_count)];

    // Lap stats only once there is something to show
    if snapshot.laps_completed > 0 {
        stats.push(format!("Laps: {}", snapshot.laps_completed));
        stats.push(format!("Best: {} moves", format_best(snapshot.best_score)));
        if snapshot.previous_lap_score > 0 {
            stats.push(format!("Previous lap: {} moves", snapshot.previous_lap_score));
        }
    }

    let mut lines: Vec<HudLine> = stats
        .into_iter()
        .enumerate()
        .map(|(row, text)| HudLine {
            slot: HudSlot::Stats(row as u8),
            text,
        })
        .collect();

    if !snapshot.moving {
        lines.push(HudLine {
            slot: HudSlot::Footer,
            text: INSTRUCTIONS.to_string(),
        });
    }

    lines
}
