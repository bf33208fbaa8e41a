//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed step per frame, no substeps
//! - Input applied in delivery order before the step
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod finish;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod track;

pub use autopilot::Autopilot;
pub use finish::is_on_finish_line;
pub use geometry::{distance_from_center, point_to_segment_distance};
pub use state::{Ball, BallState, GameEvent, GameState, StepOutcome};
pub use tick::{InputEvent, TickInput, TickOutcome, tick};
pub use track::{Segment, Track, Wall};
