use std::collections::HashMap;

use glam::Vec2;
use internment::Intern;
use turborand::rng::Rng;

use crate::{Error, generator::random_runway};

use super::airport::{Airport, Runway};

/// An immutable snapshot of every known airport, keyed by code.
///
/// Regenerating runways produces a new snapshot, so anything computed from
/// an older one keeps describing the runways it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
  airports: HashMap<Intern<String>, Airport>,
}

impl Registry {
  pub fn new(airports: impl IntoIterator<Item = Airport>) -> Self {
    Self {
      airports: airports.into_iter().map(|a| (a.id, a)).collect(),
    }
  }

  /// The two airports the route planner ships with.
  pub fn kitesboro() -> Self {
    Self::new([
      Airport::new(
        Intern::from_ref("KKBI"),
        "Kitesboro",
        Vec2::new(10.0, 10.0),
      ),
      Airport::new(
        Intern::from_ref("KKBC"),
        "Kitesboroc",
        Vec2::new(20.0, 20.0),
      ),
    ])
  }

  pub fn airport(&self, id: Intern<String>) -> Result<&Airport, Error> {
    self.airports.get(&id).ok_or(Error::InvalidReference(id))
  }

  pub fn airports(&self) -> impl Iterator<Item = &Airport> {
    self.airports.values()
  }

  pub fn len(&self) -> usize {
    self.airports.len()
  }

  pub fn is_empty(&self) -> bool {
    self.airports.is_empty()
  }

  /// Returns a copy where every airport's runway list is replaced with
  /// `count` freshly drawn runways.
  pub fn regenerate(&self, rng: &mut Rng, count: usize) -> Self {
    // Sorted so a seeded rng hands out the same draws to the same airports.
    let mut ids: Vec<_> = self.airports.keys().copied().collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    let mut airports = Vec::with_capacity(ids.len());
    for airport in ids.iter().filter_map(|id| self.airports.get(id)) {
      let runways = (0..count)
        .map(|_| random_runway(airport.center, rng))
        .collect();
      airports.push(airport.clone().with_runways(runways));
    }

    Self::new(airports)
  }

  /// Returns a copy with `f` applied to every runway of every airport.
  pub fn map_runways<F>(&self, mut f: F) -> Self
  where
    F: FnMut(Runway) -> Runway,
  {
    let airports = self.airports.values().map(|airport| {
      let runways = airport.runways.iter().cloned().map(&mut f).collect();
      airport.clone().with_runways(runways)
    });

    Self::new(airports.collect::<Vec<_>>())
  }
}
