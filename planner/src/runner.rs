use std::{
  fs,
  io::{self, Write},
  path::PathBuf,
};

use engine::{
  Error as EngineError,
  entities::registry::Registry,
  generator::random_points,
  path::{CurveDegree, FlightPath, PathOptions, synthesize_path},
  route::{RouteDescriptor, build_route},
  tour::{Tour, shortest_tour},
};
use glam::Vec2;
use internment::Intern;
use serde::{Deserialize, Serialize};
use turborand::rng::Rng;

use crate::Error;

/// Where finished documents go. The renderer reads them from here.
pub trait Emit {
  fn emit(&mut self, name: &str, document: &str) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct Stdout;

impl Emit for Stdout {
  fn emit(&mut self, _name: &str, document: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")
  }
}

/// Writes each document to `<dir>/<name>.json`.
#[derive(Debug)]
pub struct Directory(PathBuf);

impl Directory {
  pub fn new(path: PathBuf) -> io::Result<Self> {
    fs::create_dir_all(&path)?;
    Ok(Self(path))
  }
}

impl Emit for Directory {
  fn emit(&mut self, name: &str, document: &str) -> io::Result<()> {
    let path = self.0.join(format!("{name}.json"));
    fs::write(&path, document)?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), document.len());
    Ok(())
  }
}

pub fn emitter(out_dir: Option<PathBuf>) -> io::Result<Box<dyn Emit>> {
  Ok(match out_dir {
    Some(dir) => Box::new(Directory::new(dir)?),
    None => Box::new(Stdout),
  })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub emitted: usize,
  pub skipped: usize,
}

fn keep_going(cycle: usize, iterations: Option<usize>) -> bool {
  iterations.is_none_or(|max| cycle < max)
}

/// Regenerates runways, plans one route and synthesizes its path, once per
/// cycle.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
  pub registry: Registry,
  pub departure: Intern<String>,
  pub arrival: Intern<String>,
  pub degree: CurveDegree,
  pub options: PathOptions,
  pub runways_per_airport: usize,
  pub approach_start_distance: Option<f32>,
}

impl RoutePlanner {
  /// Draws fresh runways into a new snapshot and plans on it.
  pub fn route(&self, rng: &mut Rng) -> Result<RouteDescriptor, EngineError> {
    let mut registry = self.registry.regenerate(rng, self.runways_per_airport);
    if let Some(distance) = self.approach_start_distance {
      registry =
        registry.map_runways(|r| r.with_approach_start_distance(distance));
    }

    let route = build_route(self.departure, self.arrival, &registry)?;
    tracing::debug!(
      "Route {}-{}: {:.2} between lineup points",
      route.departure,
      route.arrival,
      route.distance
    );

    Ok(route)
  }

  pub fn cycle(&self, rng: &mut Rng) -> Result<FlightPath, EngineError> {
    let route = self.route(rng)?;
    synthesize_path(&route, self.degree, &self.options)
  }

  /// Runs `iterations` cycles, or until the process is killed when `None`.
  /// A cycle that fails is logged and skipped.
  pub fn run(
    &self,
    rng: &mut Rng,
    iterations: Option<usize>,
    emit: &mut dyn Emit,
  ) -> Result<Summary, Error> {
    let mut summary = Summary::default();
    let mut cycle = 0;

    while keep_going(cycle, iterations) {
      match self.cycle(rng) {
        Ok(path) => {
          let document = serde_json::to_string(&path)?;
          emit.emit(&format!("route_{cycle}"), &document)?;
          summary.emitted += 1;
        }
        Err(e) => {
          tracing::warn!("Skipping cycle {cycle}: {e}");
          summary.skipped += 1;
        }
      }

      cycle += 1;
    }

    Ok(summary)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDocument {
  pub points: Vec<Vec2>,
  #[serde(flatten)]
  pub tour: Tour,
}

/// Draws `count` random points per cycle and emits their shortest tour.
pub fn run_tours(
  count: usize,
  rng: &mut Rng,
  iterations: Option<usize>,
  emit: &mut dyn Emit,
) -> Result<Summary, Error> {
  let mut summary = Summary::default();
  let mut cycle = 0;

  while keep_going(cycle, iterations) {
    let points = random_points(count, rng);
    let tour = shortest_tour(&points);
    tracing::debug!("Tour {cycle}: {:?} ({:.4})", tour.order, tour.length);

    let document = serde_json::to_string(&TourDocument { points, tour })?;
    emit.emit(&format!("shortest_path_{cycle}"), &document)?;
    summary.emitted += 1;

    cycle += 1;
  }

  Ok(summary)
}
