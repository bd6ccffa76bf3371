use std::{fmt, str::FromStr};

use glam::Vec2;
use internment::Intern;
use serde::{Deserialize, Serialize};

use crate::{
  ALIGNMENT_DISTANCE, CLIMB_DISTANCE, CONTROL_DISTANCE, CURVE_SAMPLES, Error,
  bezier::CurveSpec, check_distance, line::Line, offset_point,
  route::RouteDescriptor,
};

/// Linear-interpolation parameters of the two softening points in the
/// quintic S-curve.
const INTERMEDIATE_CONTROLS: [f32; 2] = [0.33, 0.67];

#[derive(
  Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum CurveDegree {
  Quadratic,
  Cubic,
  #[default]
  Quintic,
}

impl CurveDegree {
  pub fn as_usize(&self) -> usize {
    match self {
      Self::Quadratic => 2,
      Self::Cubic => 3,
      Self::Quintic => 5,
    }
  }
}

impl TryFrom<usize> for CurveDegree {
  type Error = String;

  fn try_from(value: usize) -> Result<Self, Self::Error> {
    match value {
      2 => Ok(Self::Quadratic),
      3 => Ok(Self::Cubic),
      5 => Ok(Self::Quintic),
      _ => Err(format!("unsupported curve degree {value}, expected 2, 3 or 5")),
    }
  }
}

impl From<CurveDegree> for usize {
  fn from(value: CurveDegree) -> Self {
    value.as_usize()
  }
}

impl FromStr for CurveDegree {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let degree = s
      .trim()
      .parse::<usize>()
      .map_err(|e| format!("invalid curve degree \"{s}\": {e}"))?;
    Self::try_from(degree)
  }
}

impl fmt::Display for CurveDegree {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_usize())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathOptions {
  pub climb_distance: f32,
  pub control_distance: f32,
  pub samples: usize,
}

impl PathOptions {
  pub fn validate(&self) -> Result<(), Error> {
    check_distance("climb_distance", self.climb_distance)?;
    check_distance("control_distance", self.control_distance)?;
    Ok(())
  }
}

impl Default for PathOptions {
  fn default() -> Self {
    Self {
      climb_distance: CLIMB_DISTANCE,
      control_distance: CONTROL_DISTANCE,
      samples: CURVE_SAMPLES,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
  pub label: String,
  pub pos: Vec2,
}

impl Marker {
  pub fn new(label: impl Into<String>, pos: Vec2) -> Self {
    Self {
      label: label.into(),
      pos,
    }
  }
}

/// A synthesized departure-to-arrival track, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
  pub departure: Intern<String>,
  pub arrival: Intern<String>,
  pub degree: CurveDegree,
  pub control_points: Vec<Vec2>,
  pub markers: Vec<Marker>,
  pub runways: Vec<Line>,
  pub points: Vec<Vec2>,
}

impl FlightPath {
  pub fn length(&self) -> f32 {
    self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
  }
}

/// Bridges the departure runway's climb-out to the arrival runway's
/// threshold with a single Bézier curve.
///
/// The track runs: departure start, departure end, climb point, the sampled
/// curve, and finally the arrival threshold.
pub fn synthesize_path(
  route: &RouteDescriptor,
  degree: CurveDegree,
  options: &PathOptions,
) -> Result<FlightPath, Error> {
  options.validate()?;

  let departure = &route.departure_runway;
  let arrival = &route.arrival_runway;
  let threshold = arrival.start();

  let climb = offset_point(
    departure.end(),
    departure.direction(),
    options.climb_distance,
  );
  let control_1 =
    offset_point(climb, departure.direction(), options.control_distance);
  let control_2 =
    offset_point(threshold, arrival.direction(), -options.control_distance);
  let alignment =
    offset_point(threshold, arrival.direction(), -ALIGNMENT_DISTANCE);

  let control_points = match degree {
    CurveDegree::Quadratic => vec![climb, control_1, alignment],
    CurveDegree::Cubic => vec![climb, control_1, control_2, threshold],
    CurveDegree::Quintic => {
      let bridge = Line::new(control_1, control_2);
      let [a, b] = INTERMEDIATE_CONTROLS.map(|s| bridge.lerp(s));
      vec![climb, control_1, a, b, control_2, alignment]
    }
  };

  let curve = CurveSpec::new(control_points)?;

  let mut points = Vec::with_capacity(options.samples + 4);
  points.push(departure.start());
  points.push(departure.end());
  points.push(climb);
  points.extend(curve.sample(options.samples));
  if points.last() != Some(&threshold) {
    points.push(threshold);
  }

  tracing::debug!(
    "Synthesized {}-{} with a degree {} curve ({} points)",
    route.departure,
    route.arrival,
    degree,
    points.len()
  );

  let markers = vec![
    Marker::new("Start", departure.start()),
    Marker::new("End", departure.end()),
    Marker::new(format!("+{} Mile", options.climb_distance), climb),
    Marker::new("CP1", control_1),
    Marker::new("CP2", control_2),
    Marker::new("Approach", threshold),
    Marker::new("End", arrival.end()),
  ];

  Ok(FlightPath {
    departure: route.departure,
    arrival: route.arrival,
    degree,
    control_points: curve.control_points().to_vec(),
    markers,
    runways: vec![departure.into(), arrival.into()],
    points,
  })
}
