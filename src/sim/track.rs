//! Ring track geometry
//!
//! The playable region is the annulus between `inner_radius` and
//! `outer_radius` around `center`. A ball only fits where its whole disc
//! stays inside that band.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{distance_from_center, point_at_degrees};
use crate::settings::TrackConfig;

/// A line segment (finish line)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) / 2.0
    }
}

/// Which circle of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Inner,
    Outer,
}

/// Immutable ring track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Ball spawn point (mid-radius at the start angle)
    pub start: Vec2,
    /// Inner circle to outer circle at the finish angle
    pub finish_line: Segment,
    pub finish_tolerance: f32,
}

impl Track {
    pub fn new(config: &TrackConfig) -> Self {
        let center = config.center;
        let mid_radius = config.inner_radius + (config.outer_radius - config.inner_radius) / 2.0;
        let finish_line = Segment::new(
            point_at_degrees(center, config.inner_radius, config.finish_angle_deg),
            point_at_degrees(center, config.outer_radius, config.finish_angle_deg),
        );

        Self {
            center,
            inner_radius: config.inner_radius,
            outer_radius: config.outer_radius,
            start: point_at_degrees(center, mid_radius, config.start_angle_deg),
            finish_line,
            finish_tolerance: config.finish_tolerance,
        }
    }

    /// Centerline radius of the ring
    #[inline]
    pub fn mid_radius(&self) -> f32 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Whether a ball of `ball_radius` centered at `pos` lies fully inside the ring
    pub fn fits(&self, pos: Vec2, ball_radius: f32) -> bool {
        let dist = distance_from_center(pos, self.center);
        dist - ball_radius >= self.inner_radius && dist + ball_radius <= self.outer_radius
    }

    /// The wall a ball at `pos` would touch, if any
    ///
    /// A position that does not fit (including a non-finite one) always
    /// reports a wall.
    pub fn wall_contact(&self, pos: Vec2, ball_radius: f32) -> Option<Wall> {
        if self.fits(pos, ball_radius) {
            return None;
        }
        let dist = distance_from_center(pos, self.center);
        if dist + ball_radius > self.outer_radius {
            Some(Wall::Outer)
        } else {
            Some(Wall::Inner)
        }
    }

    /// Sample points around a wall every `step_deg` degrees (for drawing)
    pub fn sample_wall(&self, wall: Wall, step_deg: u32) -> Vec<Vec2> {
        let r = match wall {
            Wall::Inner => self.inner_radius,
            Wall::Outer => self.outer_radius,
        };

        (0..360)
            .step_by(step_deg.max(1) as usize)
            .map(|deg| point_at_degrees(self.center, r, deg as f32))
            .collect()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new(&TrackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_geometry() {
        let track = Track::default();
        assert!((track.start.x - 200.0).abs() < 1e-3);
        assert!((track.start.y - 300.0).abs() < 1e-3);
        assert!((track.finish_line.start - Vec2::new(400.0, 450.0)).length() < 1e-3);
        assert!((track.finish_line.end - Vec2::new(400.0, 550.0)).length() < 1e-3);
        assert_eq!(track.mid_radius(), 200.0);
    }

    #[test]
    fn test_fits_band() {
        let track = Track::default();
        let r = 10.0;
        assert!(track.fits(Vec2::new(200.0, 300.0), r));
        // Exactly touching walls still fits
        assert!(track.fits(Vec2::new(400.0 - 160.0, 300.0), r));
        assert!(track.fits(Vec2::new(400.0 - 240.0, 300.0), r));
        // Overlapping walls
        assert!(!track.fits(Vec2::new(400.0 - 159.0, 300.0), r));
        assert!(!track.fits(Vec2::new(400.0 - 241.0, 300.0), r));
        // Hole in the middle
        assert!(!track.fits(Vec2::new(400.0, 300.0), r));
    }

    #[test]
    fn test_wall_contact() {
        let track = Track::default();
        assert_eq!(track.wall_contact(Vec2::new(250.0, 300.0), 10.0), Some(Wall::Inner));
        assert_eq!(track.wall_contact(Vec2::new(155.0, 300.0), 10.0), Some(Wall::Outer));
        assert_eq!(track.wall_contact(Vec2::new(200.0, 300.0), 10.0), None);
    }

    #[test]
    fn test_non_finite_position_never_fits() {
        let track = Track::default();
        let nan = Vec2::new(f32::NAN, 300.0);
        assert!(!track.fits(nan, 10.0));
        assert!(track.wall_contact(nan, 10.0).is_some());
        assert!(track.wall_contact(Vec2::new(f32::INFINITY, 0.0), 10.0).is_some());
    }

    #[test]
    fn test_sample_wall() {
        let track = Track::default();
        let outer = track.sample_wall(Wall::Outer, 5);
        assert_eq!(outer.len(), 72);
        for p in &outer {
            assert!((p.distance(track.center) - 250.0).abs() < 1e-2);
        }
        assert_eq!(track.sample_wall(Wall::Inner, 90).len(), 4);
    }
}
