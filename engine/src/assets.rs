use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use glam::{Vec2, Vec3};
use internment::Intern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  entities::{
    airport::Airport,
    registry::Registry,
    surveyed::{SurveyedAirport, SurveyedRegistry},
  },
  plan_view,
};

#[derive(Error, Debug)]
pub enum AssetError {
  #[error("failed to read {0}: {1}")]
  Read(PathBuf, std::io::Error),
  #[error("failed to parse airports: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("airport {0} has a location with {1} coordinates, expected 2 or 3")]
  InvalidLocation(String, usize),
}

/// An airport as stored on disk, before runways have been generated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
  #[serde(rename = "airportName")]
  pub name: String,
  #[serde(rename = "airportLocation")]
  pub location: Vec<f32>,
}

impl AirportRecord {
  /// Ground position of the airport. Three coordinates are read as
  /// (x, elevation, z), matching surveyed data.
  pub fn center(&self) -> Option<Vec2> {
    match self.location.as_slice() {
      [x, y] => Some(Vec2::new(*x, *y)),
      [x, y, z] => Some(plan_view(Vec3::new(*x, *y, *z))),
      _ => None,
    }
  }
}

pub fn parse_airports(json: &str) -> Result<Registry, AssetError> {
  let records: BTreeMap<String, AirportRecord> = serde_json::from_str(json)?;

  let mut airports = Vec::with_capacity(records.len());
  for (code, record) in records {
    let center = record.center().ok_or_else(|| {
      AssetError::InvalidLocation(code.clone(), record.location.len())
    })?;
    airports.push(Airport::new(Intern::new(code), record.name, center));
  }

  Ok(Registry::new(airports))
}

pub fn parse_surveyed_airports(
  json: &str,
) -> Result<SurveyedRegistry, AssetError> {
  let records: BTreeMap<String, SurveyedAirport> = serde_json::from_str(json)?;

  let mut registry = SurveyedRegistry::default();
  for (code, airport) in records {
    registry.insert(airport, Intern::new(code));
  }

  Ok(registry)
}

fn read(path: &Path) -> Result<String, AssetError> {
  fs::read_to_string(path).map_err(|e| AssetError::Read(path.to_owned(), e))
}

pub fn load_airports<T>(path: T) -> Result<Registry, AssetError>
where
  T: AsRef<Path>,
{
  let path = path.as_ref();
  let registry = parse_airports(&read(path)?)?;

  for airport in registry.airports() {
    tracing::info!(
      "Loaded airport \"{}\" ({}) from {}",
      airport.id,
      airport.name,
      path.display()
    );
  }

  Ok(registry)
}

pub fn load_surveyed_airports<T>(path: T) -> Result<SurveyedRegistry, AssetError>
where
  T: AsRef<Path>,
{
  let path = path.as_ref();
  let registry = parse_surveyed_airports(&read(path)?)?;

  for airport in registry.airports.values() {
    tracing::info!(
      "Loaded airport \"{}\" with {} runways from {}",
      airport.id,
      airport.runways.len(),
      path.display()
    );
  }

  Ok(registry)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_airports() {
    let registry = parse_airports(
      r#"{
        "KKBI": { "airportName": "Kitesboro", "airportLocation": [10, 10] },
        "KKBC": { "airportName": "Kitesboroc", "airportLocation": [20, 5, 20] }
      }"#,
    )
    .unwrap();

    let kkbi = registry.airport(Intern::from_ref("KKBI")).unwrap();
    assert_eq!(kkbi.name, "Kitesboro");
    assert_eq!(kkbi.center, Vec2::new(10.0, 10.0));
    assert!(kkbi.runways.is_empty());

    let kkbc = registry.airport(Intern::from_ref("KKBC")).unwrap();
    assert_eq!(kkbc.center, Vec2::new(20.0, 20.0));
  }

  #[test]
  fn test_parse_airports_bad_location() {
    let result = parse_airports(
      r#"{ "KKBI": { "airportName": "Kitesboro", "airportLocation": [10] } }"#,
    );
    assert!(matches!(
      result,
      Err(AssetError::InvalidLocation(code, 1)) if code == "KKBI"
    ));
  }

  #[test]
  fn test_parse_airports_malformed() {
    assert!(matches!(
      parse_airports("{ \"KKBI\": "),
      Err(AssetError::Parse(_))
    ));
  }

  #[test]
  fn test_parse_surveyed_airports() {
    let registry = parse_surveyed_airports(
      r#"{
        "KCIA": {
          "towerPosition": [5.0, 30.0, -5.0],
          "runways": [
            {
              "runwayMark": "RW18",
              "runwayStartPoint": [0.0, 12.0, 0.0],
              "runwayEndPoint": [0.0, 12.0, 100.0]
            }
          ]
        }
      }"#,
    )
    .unwrap();

    let airport = registry.airport(Intern::from_ref("KCIA")).unwrap();
    assert_eq!(airport.id, Intern::from_ref("KCIA"));
    assert_eq!(airport.tower, Vec3::new(5.0, 30.0, -5.0));

    let runway = registry.runway("KCIA-RW18".parse().unwrap()).unwrap();
    assert_eq!(runway.end(), Vec2::new(0.0, 100.0));
  }

  #[test]
  fn test_load_missing_file() {
    let result = load_airports("does/not/exist.json");
    assert!(matches!(result, Err(AssetError::Read(..))));
  }
}
