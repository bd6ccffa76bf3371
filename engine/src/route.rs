use glam::Vec2;
use internment::Intern;
use serde::{Deserialize, Serialize};

use crate::{
  Error,
  entities::{airport::Runway, registry::Registry},
};

/// A departure/arrival pairing resolved against one registry snapshot.
///
/// The runways are copied in, so a descriptor stays consistent with itself
/// after the registry it came from has been regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDescriptor {
  pub departure: Intern<String>,
  pub arrival: Intern<String>,
  pub departure_lineup: Vec2,
  pub arrival_lineup: Vec2,
  pub distance: f32,

  pub departure_runway: Runway,
  pub arrival_runway: Runway,
}

/// Plans between the first runway of each airport; runway assignment is not
/// modelled.
pub fn build_route(
  departure: Intern<String>,
  arrival: Intern<String>,
  registry: &Registry,
) -> Result<RouteDescriptor, Error> {
  let departure_airport = registry.airport(departure)?;
  let arrival_airport = registry.airport(arrival)?;

  let departure_runway = departure_airport.primary_runway()?.clone();
  let arrival_runway = arrival_airport.primary_runway()?.clone();
  departure_runway.validate()?;
  arrival_runway.validate()?;

  let departure_lineup = departure_runway.approach_point(true);
  let arrival_lineup = arrival_runway.approach_point(false);

  Ok(RouteDescriptor {
    departure,
    arrival,
    departure_lineup,
    arrival_lineup,
    distance: departure_lineup.distance(arrival_lineup),
    departure_runway,
    arrival_runway,
  })
}
