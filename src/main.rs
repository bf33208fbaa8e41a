//! Ring Putt entry point
//!
//! Native builds run a headless demo: the seeded autopilot plays a few laps
//! through the regular frame loop, and the HUD is written to the log.

fn main() {
    env_logger::init();
    log::info!("Ring Putt (native) starting...");
    demo::run();
}

mod demo {
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use ring_putt::sim::{Autopilot, GameEvent, GameState, InputEvent, TickInput, tick};
    use ring_putt::{GameConfig, Snapshot, hud_lines};

    /// Laps the demo plays before quitting
    const DEMO_LAPS: u32 = 3;
    /// Hard stop in case the autopilot gets stuck
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    pub fn run() {
        let config = GameConfig::load();
        let frame_time = Duration::from_secs_f64(1.0 / config.frame_rate as f64);

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        log::info!("Demo autopilot seed: {}", seed);

        let mut state = GameState::new(config);
        let mut pilot = Autopilot::new(seed);
        let mut input = TickInput::default();

        loop {
            let frame_start = Instant::now();

            input.clear();
            if state.laps_completed() >= DEMO_LAPS || state.frame >= MAX_FRAMES {
                input.push(InputEvent::Quit);
            } else {
                input.events.extend(pilot.next_input(&state));
            }

            let outcome = tick(&mut state, &input);
            for event in &outcome.events {
                report(&state, event);
            }
            if outcome.quit {
                break;
            }

            if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        if state.laps_completed() < DEMO_LAPS {
            log::warn!(
                "Demo stopped after {} frames with {} laps",
                state.frame,
                state.laps_completed()
            );
        }
        for line in hud_lines(&Snapshot::capture(&state)) {
            log::info!("{}", line.text);
        }
        log::info!("Ring Putt exiting");
    }

    fn report(state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::Launched { move_count, velocity } => {
                log::info!("Move {}: launched at {:.2} px/frame", move_count, velocity.length());
            }
            GameEvent::LapCompleted { .. } => {
                for line in hud_lines(&Snapshot::capture(state)) {
                    log::info!("  {}", line.text);
                }
            }
            GameEvent::HitWall(wall) => log::info!("Stopped by the {:?} wall", wall),
            GameEvent::CameToRest | GameEvent::Reset => {}
        }
    }
}
