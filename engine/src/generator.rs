use glam::Vec2;
use internment::Intern;
use turborand::{TurboRand, rng::Rng};

use crate::{
  MAX_RUNWAY_LENGTH, MIN_RUNWAY_LENGTH, entities::airport::Runway,
  normalize_angle,
};

/// Builds a runway centered on `location`. The id is `RW` followed by the
/// whole-degree heading, so two runways at one airport can share an id.
pub fn generate_runway(location: Vec2, heading: f32, length: f32) -> Runway {
  let heading = normalize_angle(heading);
  let id = Intern::new(format!("RW{}", heading.trunc() as i32));
  Runway::new(id, location, heading, length)
}

pub fn random_runway(location: Vec2, rng: &mut Rng) -> Runway {
  let heading = rng.u16(0..360);
  let length = rng.u8(MIN_RUNWAY_LENGTH..=MAX_RUNWAY_LENGTH);

  generate_runway(location, heading as f32, length as f32)
}

/// Points drawn uniformly from the unit square.
pub fn random_points(count: usize, rng: &mut Rng) -> Vec<Vec2> {
  (0..count).map(|_| Vec2::new(rng.f32(), rng.f32())).collect()
}
