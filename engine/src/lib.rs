use internment::Intern;
use thiserror::Error;

pub mod assets;
pub mod bezier;
pub mod entities;
pub mod extended;
pub mod generator;
pub mod geometry;
pub mod line;
pub mod path;
pub mod route;
pub mod tour;

pub use geometry::*;
pub use line::Line;

/// Distance from a runway's start threshold to its lineup point.
pub const DEFAULT_APPROACH_START_DISTANCE: f32 = 6.0;

/// Straight climb-out past the departure end before the curve begins.
pub const CLIMB_DISTANCE: f32 = 1.0;
/// The curve's terminal anchor sits this far before the arrival threshold.
pub const ALIGNMENT_DISTANCE: f32 = 1.0;
pub const CONTROL_DISTANCE: f32 = 5.0;
pub const CURVE_SAMPLES: usize = 200;

pub const MIN_RUNWAY_LENGTH: u8 = 1;
pub const MAX_RUNWAY_LENGTH: u8 = 3;

/// Length of the straight corridor off each end of a surveyed runway.
pub const MILES_EXTENSION: f32 = 250.0;
/// How far back from an extension point its rounding curve starts.
pub const EXTENSION_CURVE_INSET: f32 = 60.0;
pub const EXTENSION_CURVE_SAMPLES: usize = 256;

pub const DEFAULT_TOUR_POINTS: usize = 7;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error("invalid airport code: {0}")]
  InvalidReference(Intern<String>),
  #[error("airport {0} has no runways")]
  EmptyRunways(Intern<String>),
  #[error("airport {airport} has no runway {runway}")]
  UnknownRunway {
    airport: Intern<String>,
    runway: Intern<String>,
  },
  #[error("invalid runway reference \"{0}\", expected CODE-MARK")]
  InvalidRunwayRef(String),
  #[error("cannot take a direction from {from} to {to}: zero length")]
  DegenerateGeometry { from: glam::Vec2, to: glam::Vec2 },
  #[error("a curve needs between 3 and 6 control points, got {0}")]
  InvalidControlPoints(usize),
  #[error("{name} must be finite and non-negative, got {value}")]
  InvalidValue { name: &'static str, value: f32 },
}
