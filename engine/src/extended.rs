use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
  EXTENSION_CURVE_INSET, EXTENSION_CURVE_SAMPLES, Error, MILES_EXTENSION,
  bezier::CurveSpec,
  check_distance, direction_between,
  entities::surveyed::{RunwayRef, SurveyedRegistry},
  offset_point,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtensionOptions {
  pub miles: f32,
  pub inset: f32,
  pub samples: usize,
}

impl ExtensionOptions {
  pub fn validate(&self) -> Result<(), Error> {
    check_distance("miles", self.miles)?;
    check_distance("inset", self.inset)?;
    Ok(())
  }
}

impl Default for ExtensionOptions {
  fn default() -> Self {
    Self {
      miles: MILES_EXTENSION,
      inset: EXTENSION_CURVE_INSET,
      samples: EXTENSION_CURVE_SAMPLES,
    }
  }
}

/// A departure and arrival joined by long straight corridors off each
/// runway, with the corners at the corridor ends rounded off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedPath {
  pub departure: RunwayRef,
  pub arrival: RunwayRef,
  pub takeoff_extension: Vec2,
  pub landing_extension: Vec2,
  /// The unrounded track through both extension points.
  pub corridor: Vec<Vec2>,
  pub climb_out: CurveSpec,
  pub approach: CurveSpec,
  pub points: Vec<Vec2>,
}

/// The point `distance` past `end`, continuing the line from `start`.
pub fn extension_point(
  start: Vec2,
  end: Vec2,
  distance: f32,
) -> Result<Vec2, Error> {
  Ok(offset_point(end, direction_between(start, end)?, distance))
}

/// Departs along the `departure` runway from its start to its end. Lands on
/// the `arrival` runway at its end threshold and rolls out towards its start.
pub fn synthesize_extended_path(
  departure: RunwayRef,
  arrival: RunwayRef,
  registry: &SurveyedRegistry,
  options: &ExtensionOptions,
) -> Result<ExtendedPath, Error> {
  options.validate()?;

  let departure_runway = registry.runway(departure)?;
  let arrival_runway = registry.runway(arrival)?;

  let (takeoff_start, takeoff_end) =
    (departure_runway.start(), departure_runway.end());
  let (landing_start, landing_end) =
    (arrival_runway.start(), arrival_runway.end());

  let takeoff_extension =
    extension_point(takeoff_start, takeoff_end, options.miles)?;
  let landing_extension =
    extension_point(landing_start, landing_end, options.miles)?;

  // The rounding curves start this far out, nested inside the corridors.
  let curve_distance = options.miles - options.inset;
  let curve_start = extension_point(takeoff_start, takeoff_end, curve_distance)?;
  let curve_end = extension_point(landing_start, landing_end, curve_distance)?;

  let bridge = direction_between(takeoff_extension, landing_extension)?;
  let transition_out = offset_point(takeoff_extension, bridge, options.inset);
  let transition_in = offset_point(landing_extension, bridge, -options.inset);

  let climb_out =
    CurveSpec::new(vec![curve_start, takeoff_extension, transition_out])?;
  let approach =
    CurveSpec::new(vec![transition_in, landing_extension, curve_end])?;

  let mut points = Vec::with_capacity(options.samples * 2 + 4);
  points.push(takeoff_start);
  points.push(takeoff_end);
  points.extend(climb_out.sample(options.samples));
  points.extend(approach.sample(options.samples));
  points.push(landing_end);
  points.push(landing_start);

  tracing::debug!(
    "Extended {departure} to {arrival} via {takeoff_extension} and {landing_extension}"
  );

  Ok(ExtendedPath {
    departure,
    arrival,
    takeoff_extension,
    landing_extension,
    corridor: vec![
      takeoff_start,
      takeoff_end,
      takeoff_extension,
      landing_extension,
      landing_end,
      landing_start,
    ],
    climb_out,
    approach,
    points,
  })
}

#[cfg(test)]
mod tests {
  use glam::Vec3;
  use internment::Intern;

  use super::*;
  use crate::entities::surveyed::{SurveyedAirport, SurveyedRunway};

  fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(actual.abs_diff_eq(expected, 1e-3), "{actual} != {expected}");
  }

  fn surveyed_runway(mark: &str, start: Vec3, end: Vec3) -> SurveyedRunway {
    SurveyedRunway {
      mark: Intern::from_ref(mark),
      start,
      end,
    }
  }

  fn registry(arrival_end: Vec3) -> SurveyedRegistry {
    let mut registry = SurveyedRegistry::default();
    registry.insert(
      SurveyedAirport {
        id: Intern::default(),
        tower: Vec3::ZERO,
        runways: vec![surveyed_runway(
          "RW18",
          Vec3::new(0.0, 12.0, 0.0),
          Vec3::new(0.0, 12.0, 100.0),
        )],
      },
      Intern::from_ref("KCIA"),
    );
    registry.insert(
      SurveyedAirport {
        id: Intern::default(),
        tower: Vec3::ZERO,
        runways: vec![surveyed_runway(
          "RW29",
          Vec3::new(1000.0, 40.0, 100.0),
          arrival_end,
        )],
      },
      Intern::from_ref("KKBI"),
    );
    registry
  }

  fn refs() -> (RunwayRef, RunwayRef) {
    ("KCIA-RW18".parse().unwrap(), "KKBI-RW29".parse().unwrap())
  }

  #[test]
  fn test_extension_point() {
    let point =
      extension_point(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 250.0)
        .unwrap();
    assert_near(point, Vec2::new(0.0, 260.0));
  }

  #[test]
  fn test_extension_point_degenerate() {
    let point = Vec2::new(5.0, 5.0);
    assert_eq!(
      extension_point(point, point, 250.0),
      Err(Error::DegenerateGeometry {
        from: point,
        to: point
      })
    );
  }

  #[test]
  fn test_extended_path_geometry() {
    let registry = registry(Vec3::new(1000.0, 40.0, 0.0));
    let (departure, arrival) = refs();
    let options = ExtensionOptions::default();
    let path =
      synthesize_extended_path(departure, arrival, &registry, &options)
        .unwrap();

    assert_eq!(path.departure, departure);
    assert_eq!(path.arrival, arrival);

    // Takeoff heads +z from z=100, landing corridor extends -z from z=0.
    assert_near(path.takeoff_extension, Vec2::new(0.0, 350.0));
    assert_near(path.landing_extension, Vec2::new(1000.0, -250.0));

    let climb_out = path.climb_out.control_points();
    assert_near(climb_out[0], Vec2::new(0.0, 290.0));
    assert_eq!(climb_out[1], path.takeoff_extension);
    assert!(
      (climb_out[2].distance(path.takeoff_extension) - options.inset).abs()
        < 1e-3
    );

    let approach = path.approach.control_points();
    assert_eq!(approach[1], path.landing_extension);
    assert_near(approach[2], Vec2::new(1000.0, -190.0));
    assert!(
      (approach[0].distance(path.landing_extension) - options.inset).abs()
        < 1e-3
    );
  }

  #[test]
  fn test_extended_path_layout() {
    let registry = registry(Vec3::new(1000.0, 40.0, 0.0));
    let (departure, arrival) = refs();
    let options = ExtensionOptions::default();
    let path =
      synthesize_extended_path(departure, arrival, &registry, &options)
        .unwrap();

    let n = options.samples;
    assert_eq!(path.points.len(), n * 2 + 4);
    assert_eq!(path.points[0], Vec2::new(0.0, 0.0));
    assert_eq!(path.points[1], Vec2::new(0.0, 100.0));
    assert_eq!(path.points[2], path.climb_out.control_points()[0]);
    assert_eq!(path.points[n + 1], path.climb_out.control_points()[2]);
    assert_eq!(path.points[n + 2], path.approach.control_points()[0]);
    assert_eq!(path.points[2 * n + 1], path.approach.control_points()[2]);
    assert_eq!(path.points[2 * n + 2], Vec2::new(1000.0, 0.0));
    assert_eq!(path.points[2 * n + 3], Vec2::new(1000.0, 100.0));

    assert_eq!(path.corridor.len(), 6);
    assert_eq!(path.corridor[2], path.takeoff_extension);
    assert_eq!(path.corridor[3], path.landing_extension);
  }

  #[test]
  fn test_extended_path_zero_length_runway() {
    // Arrival runway whose thresholds coincide in plan view.
    let registry = registry(Vec3::new(1000.0, 0.0, 100.0));
    let (departure, arrival) = refs();

    let result = synthesize_extended_path(
      departure,
      arrival,
      &registry,
      &ExtensionOptions::default(),
    );
    assert_eq!(
      result,
      Err(Error::DegenerateGeometry {
        from: Vec2::new(1000.0, 100.0),
        to: Vec2::new(1000.0, 100.0),
      })
    );
  }

  #[test]
  fn test_extended_path_rejects_bad_options() {
    let registry = registry(Vec3::new(1000.0, 40.0, 0.0));
    let (departure, arrival) = refs();

    for (options, field) in [
      (
        ExtensionOptions {
          miles: f32::NAN,
          ..ExtensionOptions::default()
        },
        "miles",
      ),
      (
        ExtensionOptions {
          inset: -60.0,
          ..ExtensionOptions::default()
        },
        "inset",
      ),
    ] {
      let result =
        synthesize_extended_path(departure, arrival, &registry, &options);
      assert!(
        matches!(result, Err(Error::InvalidValue { name, .. }) if name == field)
      );
    }
  }

  #[test]
  fn test_extended_path_unknown_runway() {
    let registry = registry(Vec3::new(1000.0, 40.0, 0.0));
    let result = synthesize_extended_path(
      "KCIA-RW36".parse().unwrap(),
      "KKBI-RW29".parse().unwrap(),
      &registry,
      &ExtensionOptions::default(),
    );

    assert_eq!(
      result,
      Err(Error::UnknownRunway {
        airport: Intern::from_ref("KCIA"),
        runway: Intern::from_ref("RW36"),
      })
    );
  }
}
