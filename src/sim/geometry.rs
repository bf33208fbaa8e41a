//! Plane geometry helpers for the ring track
//!
//! Angles are in the screen convention: 0 points along +x and angles grow
//! toward +y (downward on screen).

use glam::Vec2;

/// Distance from `p` to the closest point on segment `a`-`b`
///
/// Returns `None` for a zero-length segment.
pub fn point_to_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return None;
    }

    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    let closest = a + seg * t;
    Some(p.distance(closest))
}

/// Euclidean distance from `p` to `center`
#[inline]
pub fn distance_from_center(p: Vec2, center: Vec2) -> f32 {
    p.distance(center)
}

/// Convert polar (r, theta) around `center` to cartesian
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Point at `r` from `center`, `degrees` around
#[inline]
pub fn point_at_degrees(center: Vec2, r: f32, degrees: f32) -> Vec2 {
    polar_to_cartesian(center, r, degrees.to_radians())
}

/// Angle of `p` around `center` (radians, [-π, π])
#[inline]
pub fn angle_around(p: Vec2, center: Vec2) -> f32 {
    let d = p - center;
    d.y.atan2(d.x)
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle >= PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = point_to_segment_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d.unwrap() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Beyond b: distance to b, not to the infinite line
        let d = point_to_segment_distance(Vec2::new(13.0, 4.0), a, b).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
        // Before a
        let d = point_to_segment_distance(Vec2::new(-3.0, -4.0), a, b).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_distance_midpoint_is_zero() {
        let a = Vec2::new(400.0, 450.0);
        let b = Vec2::new(400.0, 550.0);
        let d = point_to_segment_distance((a + b) / 2.0, a, b).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let a = Vec2::new(1.0, 1.0);
        assert!(point_to_segment_distance(Vec2::ZERO, a, a).is_none());
    }

    #[test]
    fn test_tiny_segment_still_measures() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(1.0, 1.00001);
        let d = point_to_segment_distance(Vec2::new(1.0, 0.0), a, b).unwrap();
        assert!((d - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_from_center() {
        let d = distance_from_center(Vec2::new(403.0, 304.0), Vec2::new(400.0, 300.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_degrees_screen_convention() {
        let center = Vec2::new(400.0, 300.0);
        // 90 degrees is below the center on screen
        let p = point_at_degrees(center, 150.0, 90.0);
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 450.0).abs() < 1e-3);
        // 180 degrees is to the left
        let p = point_at_degrees(center, 200.0, 180.0);
        assert!((p.x - 200.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_around() {
        let center = Vec2::new(400.0, 300.0);
        let a = angle_around(Vec2::new(400.0, 500.0), center);
        assert!((a - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-1.5 * PI) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
    }
}
