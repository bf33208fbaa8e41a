//! Fixed-step frame tick
//!
//! Each frame: apply input events in order, advance the ball one physics
//! step, then run lap detection against the finish line.

use glam::Vec2;

use super::finish::is_on_finish_line;
use super::state::{GameEvent, GameState, StepOutcome};

/// Discrete input events from the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    /// Reset key
    Reset,
    Quit,
}

/// Input events for a single frame, in delivery order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// A quit event was received; the frame loop should exit
    pub quit: bool,
}

impl TickOutcome {
    pub fn laps_completed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::LapCompleted { .. }))
            .count()
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    for &event in &input.events {
        if let Some(game_event) = handle_input(state, event, &mut outcome) {
            outcome.events.push(game_event);
        }
    }

    state.frame += 1;

    match state.ball.step(&state.track, &state.config.physics) {
        StepOutcome::HitWall(wall) => {
            log::debug!("Ball stopped against {:?} wall at {}", wall, state.ball.pos);
            outcome.events.push(GameEvent::HitWall(wall));
        }
        StepOutcome::CameToRest => {
            log::debug!("Ball came to rest at {}", state.ball.pos);
            outcome.events.push(GameEvent::CameToRest);
        }
        StepOutcome::Moved | StepOutcome::Idle => {}
    }

    if let Some(lap) = check_lap(state) {
        outcome.events.push(lap);
    }

    outcome
}

/// Apply one input event
fn handle_input(
    state: &mut GameState,
    event: InputEvent,
    outcome: &mut TickOutcome,
) -> Option<GameEvent> {
    match event {
        InputEvent::PointerDown(p) | InputEvent::PointerMove(p) if !p.is_finite() => {
            log::warn!("Ignoring non-finite pointer position {}", p);
            None
        }
        InputEvent::PointerDown(p) => {
            state.ball.start_drag(p);
            None
        }
        InputEvent::PointerMove(p) => {
            state.ball.update_drag(p);
            None
        }
        InputEvent::PointerUp => {
            if !state.ball.end_drag(state.config.physics.launch_scale) {
                return None;
            }
            state.move_count += 1;
            log::debug!("Launch #{} with velocity {}", state.move_count, state.ball.vel);
            Some(GameEvent::Launched {
                move_count: state.move_count,
                velocity: state.ball.vel,
            })
        }
        InputEvent::Reset => {
            // Lap count and best score survive a manual reset
            state.respawn_ball();
            state.move_count = 0;
            log::debug!("Reset to start");
            Some(GameEvent::Reset)
        }
        InputEvent::Quit => {
            outcome.quit = true;
            None
        }
    }
}

/// Edge-triggered lap detection: one lap per continuous pass over the line
fn check_lap(state: &mut GameState) -> Option<GameEvent> {
    let on_line = is_on_finish_line(
        &state.ball,
        &state.track.finish_line,
        state.track.finish_tolerance,
        false,
    );

    if state.ball.is_moving() && on_line {
        if state.crossed_finish_line {
            return None;
        }
        state.crossed_finish_line = true;

        let moves = state.move_count;
        let new_best = state.scores.record_lap(moves);
        state.respawn_ball();
        state.move_count = 0;

        log::info!(
            "Lap {} completed in {} moves{}",
            state.scores.laps,
            moves,
            if new_best { " (new best!)" } else { "" }
        );
        return Some(GameEvent::LapCompleted {
            moves,
            laps: state.scores.laps,
            best: state.scores.best,
        });
    }

    if !on_line {
        state.crossed_finish_line = false;
    }
    None
}
