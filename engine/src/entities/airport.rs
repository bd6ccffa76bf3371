use glam::Vec2;
use internment::Intern;
use serde::{Deserialize, Serialize};

use crate::{
  DEFAULT_APPROACH_START_DISTANCE, Error, check_distance, heading_vector,
  normalize_angle, offset_point,
};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Airport {
  pub id: Intern<String>,
  pub name: String,
  pub center: Vec2,
  pub runways: Vec<Runway>,
}

impl Airport {
  pub fn new(id: Intern<String>, name: impl Into<String>, center: Vec2) -> Self {
    Self {
      id,
      name: name.into(),
      center,
      runways: Vec::new(),
    }
  }

  pub fn with_runways(mut self, runways: Vec<Runway>) -> Self {
    self.runways = runways;
    self
  }

  /// The runway every route at this airport is planned from.
  pub fn primary_runway(&self) -> Result<&Runway, Error> {
    self.runways.first().ok_or(Error::EmptyRunways(self.id))
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Runway {
  pub id: Intern<String>,
  pub pos: Vec2,
  pub heading: f32,
  pub length: f32,
  pub approach_start_distance: f32,
}

impl Runway {
  pub fn new(id: Intern<String>, pos: Vec2, heading: f32, length: f32) -> Self {
    Self {
      id,
      pos,
      heading: normalize_angle(heading),
      length,
      approach_start_distance: DEFAULT_APPROACH_START_DISTANCE,
    }
  }

  pub fn with_approach_start_distance(mut self, distance: f32) -> Self {
    self.approach_start_distance = distance;
    self
  }

  /// Fails when any field would turn the runway's geometry into NaN.
  pub fn validate(&self) -> Result<(), Error> {
    if !self.heading.is_finite() {
      return Err(Error::InvalidValue {
        name: "heading",
        value: self.heading,
      });
    }
    check_distance("length", self.length)?;
    check_distance("approach_start_distance", self.approach_start_distance)?;

    Ok(())
  }

  pub fn start(&self) -> Vec2 {
    offset_point(self.pos, self.direction(), self.length * -0.5)
  }

  pub fn end(&self) -> Vec2 {
    offset_point(self.pos, self.direction(), self.length * 0.5)
  }

  pub fn direction(&self) -> Vec2 {
    heading_vector(self.heading)
  }

  /// The lineup point, `approach_start_distance` away from the start
  /// threshold along the centerline. `reverse` places it behind the start
  /// (departures), otherwise ahead of it (arrivals).
  pub fn approach_point(&self, reverse: bool) -> Vec2 {
    let distance = if reverse {
      -self.approach_start_distance
    } else {
      self.approach_start_distance
    };

    offset_point(self.start(), self.direction(), distance)
  }
}
