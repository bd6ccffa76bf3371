use glam::{Vec2, Vec3};

use crate::Error;

pub fn normalize_angle(angle: f32) -> f32 {
  angle.rem_euclid(360.0)
}

/// Unit vector for a compass heading, measured clockwise from +y.
pub fn heading_vector(degrees: f32) -> Vec2 {
  let radians = degrees.to_radians();
  Vec2::new(radians.sin(), radians.cos())
}

/// Unit vector pointing from `from` towards `to`.
///
/// Fails instead of producing NaN when the two points coincide.
pub fn direction_between(from: Vec2, to: Vec2) -> Result<Vec2, Error> {
  (to - from)
    .try_normalize()
    .ok_or(Error::DegenerateGeometry { from, to })
}

/// Moves `point` by `distance` along a unit `direction`. Negative distances
/// move backwards.
pub fn offset_point(point: Vec2, direction: Vec2, distance: f32) -> Vec2 {
  point + direction * distance
}

/// Passes `value` through when it can be used as a length or distance.
pub fn check_distance(name: &'static str, value: f32) -> Result<f32, Error> {
  if value.is_finite() && value >= 0.0 {
    Ok(value)
  } else {
    Err(Error::InvalidValue { name, value })
  }
}

pub fn move_point(point: Vec2, degrees: f32, length: f32) -> Vec2 {
  offset_point(point, heading_vector(degrees), length)
}

pub fn angle_between_points(a: Vec2, b: Vec2) -> f32 {
  let dx = b.x - a.x;
  let dy = b.y - a.y;
  let angle = dx.atan2(dy).to_degrees();
  if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Drops elevation, keeping the ground plane (x, z) of a surveyed point.
pub fn plan_view(point: Vec3) -> Vec2 {
  Vec2::new(point.x, point.z)
}
