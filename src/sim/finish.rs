//! Finish line detection
//!
//! A single proximity predicate. Edge detection (one lap per pass) is the
//! caller's job; see `tick`.

use super::geometry::point_to_segment_distance;
use super::state::Ball;
use super::track::Segment;

/// Whether the ball overlaps `line` (within `tolerance` of its edge)
///
/// With `require_stopped` the ball must also be at rest. A zero-length
/// segment never matches.
pub fn is_on_finish_line(ball: &Ball, line: &Segment, tolerance: f32, require_stopped: bool) -> bool {
    let Some(distance) = point_to_segment_distance(ball.pos, line.start, line.end) else {
        return false;
    };

    // Positive comparison: a NaN distance is never in reach
    let in_reach = distance < ball.radius + tolerance;
    in_reach && (!require_stopped || !ball.is_moving())
}
