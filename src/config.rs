//! Deployment configuration: the default start position and where the
//! obstacle map lives.
//!
//! Values come from the process environment, after loading a `.env` file if
//! one exists.

use crate::error::ConfigError;
use crate::rover::{Direction, Point, Position};
use std::env;
use std::path::PathBuf;

pub const START_POSITION_X: &str = "START_POSITION_X";
pub const START_POSITION_Y: &str = "START_POSITION_Y";
pub const START_DIRECTION: &str = "START_DIRECTION";
pub const OBSTACLES_JSON_PATH: &str = "OBSTACLES_JSON_PATH";

pub const DEFAULT_OBSTACLES_JSON_PATH: &str = "/config/obstacles.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverConfig {
    /// Where the rover lands when no position has been recorded yet.
    pub start_position: Position,

    /// JSON file holding the obstacle map as `[[x, y], ...]`.
    pub obstacles_path: PathBuf,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            start_position: Position::default(),
            obstacles_path: PathBuf::from(DEFAULT_OBSTACLES_JSON_PATH),
        }
    }
}

impl RoverConfig {
    /// Reads the configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv(); // a missing .env is fine
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys take
    /// their defaults; set but unparsable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let x = parse_int(&lookup, START_POSITION_X)?.unwrap_or(defaults.start_position.x());
        let y = parse_int(&lookup, START_POSITION_Y)?.unwrap_or(defaults.start_position.y());
        let direction = match lookup(START_DIRECTION) {
            Some(raw) => raw.parse::<Direction>()?,
            None => defaults.start_position.direction,
        };
        let obstacles_path = lookup(OBSTACLES_JSON_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.obstacles_path);

        Ok(Self {
            start_position: Position::new(Point::new(x, y), direction),
            obstacles_path,
        })
    }
}

fn parse_int(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<i32>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidInteger { key, value })
        })
        .transpose()
}
