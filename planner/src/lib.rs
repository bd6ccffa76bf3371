use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use engine::{
  assets::{AssetError, load_airports, load_surveyed_airports},
  entities::{registry::Registry, surveyed::RunwayRef},
  extended::synthesize_extended_path,
  path::CurveDegree,
};
use internment::Intern;
use thiserror::Error;
use turborand::{SeededCore, rng::Rng};

use config::{Config, ConfigError};
use runner::{RoutePlanner, emitter, run_tours};

pub mod config;
pub mod runner;

#[derive(Error, Debug)]
pub enum Error {
  #[error("{0}")]
  Config(#[from] ConfigError),
  #[error("{0}")]
  Assets(#[from] AssetError),
  #[error("{0}")]
  Engine(#[from] engine::Error),
  #[error("failed to write output: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to serialize output: {0}")]
  Json(#[from] serde_json::Error),
}

/// Runway path planner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// A TOML config file.
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// The seed to use for the random number generator.
  #[arg(short, long)]
  pub seed: Option<u64>,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Draw random runways and plan a curved path between two airports.
  Route {
    #[arg(long, default_value = "KKBI")]
    from: String,
    #[arg(long, default_value = "KKBC")]
    to: String,
    /// Curve degree: 2, 3 or 5.
    #[arg(short, long)]
    degree: Option<CurveDegree>,
    /// Airports JSON file. Defaults to the built-in Kitesboro pair.
    #[arg(short, long)]
    airports: Option<PathBuf>,
    /// Number of cycles to run. Runs until killed when omitted.
    #[arg(short = 'n', long)]
    iterations: Option<usize>,
    /// Write one JSON file per cycle here instead of printing to stdout.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
  },
  /// Plan between two surveyed runways, e.g. KCIA-RW18 to KKBI-RW29.
  Surveyed {
    /// Surveyed airports JSON file.
    #[arg(short, long)]
    airports: PathBuf,
    #[arg(long)]
    from: RunwayRef,
    #[arg(long)]
    to: RunwayRef,
    /// Write the path here instead of printing to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Find the shortest path through random points.
  Tour {
    /// Number of points per cycle.
    #[arg(short, long)]
    points: Option<usize>,
    /// Number of cycles to run. Runs until killed when omitted.
    #[arg(short = 'n', long)]
    iterations: Option<usize>,
    /// Write one JSON file per cycle here instead of printing to stdout.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
  },
}

pub fn run(cli: Cli) -> Result<(), Error> {
  let config = match &cli.config {
    Some(path) => Config::from_path(path)?,
    None => Config::default(),
  };

  let seed = cli.seed.or(config.seed());
  let mut rng = match seed {
    Some(seed) => {
      tracing::info!("Using seed {seed}");
      Rng::with_seed(seed)
    }
    None => Rng::new(),
  };

  match cli.command {
    Commands::Route {
      from,
      to,
      degree,
      airports,
      iterations,
      out_dir,
    } => {
      let registry = match airports {
        Some(path) => load_airports(path)?,
        None => Registry::kitesboro(),
      };

      let planner = RoutePlanner {
        registry,
        departure: Intern::new(from),
        arrival: Intern::new(to),
        degree: degree.unwrap_or(config.degree()),
        options: config.path_options(),
        runways_per_airport: config.runways_per_airport(),
        approach_start_distance: config.approach_start_distance(),
      };

      let summary =
        planner.run(&mut rng, iterations, &mut *emitter(out_dir)?)?;
      tracing::info!(
        "Planned {} routes, skipped {}",
        summary.emitted,
        summary.skipped
      );
    }
    Commands::Surveyed {
      airports,
      from,
      to,
      out,
    } => {
      let registry = load_surveyed_airports(airports)?;
      let path = synthesize_extended_path(
        from,
        to,
        &registry,
        &config.extension_options(),
      )?;

      let document = serde_json::to_string(&path)?;
      match out {
        Some(out) => {
          fs::write(&out, document)?;
          tracing::info!("Wrote {from} to {to} to {}", out.display());
        }
        None => println!("{document}"),
      }
    }
    Commands::Tour {
      points,
      iterations,
      out_dir,
    } => {
      let count = points.unwrap_or(config.tour_points());
      let summary =
        run_tours(count, &mut rng, iterations, &mut *emitter(out_dir)?)?;
      tracing::info!("Solved {} tours", summary.emitted);
    }
  }

  Ok(())
}
