use std::{collections::HashMap, fmt, str::FromStr};

use glam::{Vec2, Vec3};
use internment::Intern;
use serde::{Deserialize, Serialize};

use crate::{Error, angle_between_points, plan_view};

/// A runway taken from surveyed scenery data: raw 3-D threshold positions
/// with elevation on the y axis and no heading field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyedRunway {
  #[serde(rename = "runwayMark")]
  pub mark: Intern<String>,
  #[serde(rename = "runwayStartPoint")]
  pub start: Vec3,
  #[serde(rename = "runwayEndPoint")]
  pub end: Vec3,
}

impl SurveyedRunway {
  pub fn start(&self) -> Vec2 {
    plan_view(self.start)
  }

  pub fn end(&self) -> Vec2 {
    plan_view(self.end)
  }

  pub fn heading(&self) -> f32 {
    angle_between_points(self.start(), self.end())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyedAirport {
  #[serde(skip)]
  pub id: Intern<String>,
  #[serde(rename = "towerPosition")]
  pub tower: Vec3,
  pub runways: Vec<SurveyedRunway>,
}

impl SurveyedAirport {
  pub fn runway(&self, mark: Intern<String>) -> Result<&SurveyedRunway, Error> {
    self
      .runways
      .iter()
      .find(|r| r.mark == mark)
      .ok_or(Error::UnknownRunway {
        airport: self.id,
        runway: mark,
      })
  }
}

/// Names one runway at one airport, written `KCIA-RW18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunwayRef {
  pub airport: Intern<String>,
  pub runway: Intern<String>,
}

impl FromStr for RunwayRef {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().split_once('-') {
      Some((airport, runway))
        if !airport.is_empty() && !runway.is_empty() && !runway.contains('-') =>
      {
        Ok(Self {
          airport: Intern::from_ref(airport),
          runway: Intern::from_ref(runway),
        })
      }
      _ => Err(Error::InvalidRunwayRef(s.to_owned())),
    }
  }
}

impl fmt::Display for RunwayRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.airport, self.runway)
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyedRegistry {
  pub airports: HashMap<Intern<String>, SurveyedAirport>,
}

impl SurveyedRegistry {
  pub fn insert(&mut self, mut airport: SurveyedAirport, id: Intern<String>) {
    airport.id = id;
    self.airports.insert(id, airport);
  }

  pub fn airport(&self, id: Intern<String>) -> Result<&SurveyedAirport, Error> {
    self.airports.get(&id).ok_or(Error::InvalidReference(id))
  }

  pub fn runway(&self, runway: RunwayRef) -> Result<&SurveyedRunway, Error> {
    self.airport(runway.airport)?.runway(runway.runway)
  }
}
