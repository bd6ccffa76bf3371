use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::{airport::Runway, surveyed::SurveyedRunway};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line(pub Vec2, pub Vec2);

impl Line {
  pub fn new(a: Vec2, b: Vec2) -> Self {
    Self(a, b)
  }

  pub fn midpoint(&self) -> Vec2 {
    self.0.midpoint(self.1)
  }

  pub fn length(&self) -> f32 {
    self.0.distance(self.1)
  }

  pub fn lerp(&self, s: f32) -> Vec2 {
    self.0.lerp(self.1, s)
  }
}

impl From<&Runway> for Line {
  fn from(value: &Runway) -> Self {
    Line::new(value.start(), value.end())
  }
}

impl From<&SurveyedRunway> for Line {
  fn from(value: &SurveyedRunway) -> Self {
    Line::new(value.start(), value.end())
  }
}
