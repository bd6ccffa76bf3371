use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Error;

pub const MIN_CONTROL_POINTS: usize = 3;
pub const MAX_CONTROL_POINTS: usize = 6;

/// Evaluates the Bézier curve over `points` at `t` by Bernstein blending.
/// Works for any number of control points; an empty slice yields zero.
pub fn bernstein_point(points: &[Vec2], t: f32) -> Vec2 {
  let Some(degree) = points.len().checked_sub(1) else {
    return Vec2::ZERO;
  };

  let s = 1.0 - t;
  let mut coefficient = 1.0;
  let mut result = Vec2::ZERO;
  for (i, point) in points.iter().enumerate() {
    let weight =
      coefficient * s.powi((degree - i) as i32) * t.powi(i as i32);
    result += *point * weight;

    // C(n, i + 1) = C(n, i) * (n - i) / (i + 1)
    coefficient = coefficient * (degree - i) as f32 / (i + 1) as f32;
  }

  result
}

/// `count` evenly spaced parameters covering [0, 1], both ends included.
pub fn linspace(count: usize) -> impl Iterator<Item = f32> {
  let steps = count.saturating_sub(1).max(1) as f32;
  (0..count).map(move |i| i as f32 / steps)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurveSpec")]
pub struct CurveSpec {
  points: Vec<Vec2>,
}

/// Wire shape of a [`CurveSpec`], checked by [`CurveSpec::new`] on the way in.
#[derive(Deserialize)]
struct RawCurveSpec {
  points: Vec<Vec2>,
}

impl TryFrom<RawCurveSpec> for CurveSpec {
  type Error = Error;

  fn try_from(value: RawCurveSpec) -> Result<Self, Self::Error> {
    Self::new(value.points)
  }
}

impl CurveSpec {
  pub fn new(points: Vec<Vec2>) -> Result<Self, Error> {
    if (MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS).contains(&points.len()) {
      Ok(Self { points })
    } else {
      Err(Error::InvalidControlPoints(points.len()))
    }
  }

  pub fn degree(&self) -> usize {
    self.points.len() - 1
  }

  pub fn control_points(&self) -> &[Vec2] {
    &self.points
  }

  pub fn evaluate(&self, t: f32) -> Vec2 {
    bernstein_point(&self.points, t)
  }

  pub fn sample(&self, count: usize) -> Vec<Vec2> {
    linspace(count).map(|t| self.evaluate(t)).collect()
  }
}
