use std::path::{Path, PathBuf};

use engine::{
  DEFAULT_TOUR_POINTS, check_distance, extended::ExtensionOptions,
  path::{CurveDegree, PathOptions},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read config file {0}: {1}")]
  Read(PathBuf, std::io::Error),
  #[error("failed to parse config file: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("invalid config: {0}")]
  Invalid(#[from] engine::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  pub world: Option<WorldConfig>,
  pub path: Option<PathConfig>,
  pub extension: Option<ExtensionConfig>,
  pub tour: Option<TourConfig>,
}

impl Config {
  pub fn from_path<T>(path: T) -> Result<Self, ConfigError>
  where
    T: AsRef<Path>,
  {
    let path = path.as_ref();
    let config = std::fs::read_to_string(path)
      .map_err(|e| ConfigError::Read(path.to_owned(), e))?;
    Self::parse(&config)
  }

  pub fn parse(config: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(config)?;
    config.validate()?;
    Ok(config)
  }

  /// Rejects distances the engine would turn into NaN coordinates.
  pub fn validate(&self) -> Result<(), engine::Error> {
    self.path_options().validate()?;
    self.extension_options().validate()?;
    if let Some(distance) = self.approach_start_distance() {
      check_distance("approach_start_distance", distance)?;
    }

    Ok(())
  }

  pub fn seed(&self) -> Option<u64> {
    self.world.unwrap_or_default().seed
  }

  pub fn runways_per_airport(&self) -> usize {
    self.world.unwrap_or_default().runways.unwrap_or(1).max(1)
  }

  pub fn degree(&self) -> CurveDegree {
    self.path.unwrap_or_default().degree.unwrap_or_default()
  }

  pub fn approach_start_distance(&self) -> Option<f32> {
    self.path.unwrap_or_default().approach_start_distance
  }

  pub fn path_options(&self) -> PathOptions {
    let config = self.path.unwrap_or_default();
    let defaults = PathOptions::default();

    PathOptions {
      climb_distance: config.climb_distance.unwrap_or(defaults.climb_distance),
      control_distance: config
        .control_distance
        .unwrap_or(defaults.control_distance),
      samples: config.samples.unwrap_or(defaults.samples),
    }
  }

  pub fn extension_options(&self) -> ExtensionOptions {
    let config = self.extension.unwrap_or_default();
    let defaults = ExtensionOptions::default();

    ExtensionOptions {
      miles: config.miles.unwrap_or(defaults.miles),
      inset: config.inset.unwrap_or(defaults.inset),
      samples: config.samples.unwrap_or(defaults.samples),
    }
  }

  pub fn tour_points(&self) -> usize {
    self
      .tour
      .unwrap_or_default()
      .points
      .unwrap_or(DEFAULT_TOUR_POINTS)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldConfig {
  pub seed: Option<u64>,
  pub runways: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PathConfig {
  pub degree: Option<CurveDegree>,
  pub climb_distance: Option<f32>,
  pub control_distance: Option<f32>,
  pub samples: Option<usize>,
  pub approach_start_distance: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtensionConfig {
  pub miles: Option<f32>,
  pub inset: Option<f32>,
  pub samples: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TourConfig {
  pub points: Option<usize>,
}
