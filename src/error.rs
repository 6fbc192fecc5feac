//! Failure kinds reported by the engine and its collaborators.
//!
//! Stopping in front of an obstacle is not an error: it is a successful
//! [`Outcome`](crate::Outcome) with `stopped_by_obstacle` set.

use crate::rover::Point;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// A raw command string could not be turned into a [`Command`](crate::Command).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid command characters: {0:?}")]
    InvalidCharacters(BTreeSet<char>),
    #[error("command length cannot be negative: {0}")]
    NegativeLength(i64),
}

/// The rover was asked to start on a cell occupied by an obstacle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "cannot start lunar mission: obstacle detected at landing position ({}, {}); mission aborted for safety",
    .point.x,
    .point.y
)]
pub struct LandingObstacle {
    pub point: Point,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid direction {0:?}, expected one of NORTH, EAST, SOUTH, WEST")]
    InvalidDirection(String),
    #[error("invalid integer for {key}: {value:?}")]
    InvalidInteger { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ObstacleError {
    #[error("obstacles file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read obstacles file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("obstacles file {path} is not valid JSON")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("obstacles file {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("command sink rejected the record: {0}")]
    Rejected(String),
}

/// Everything that can go wrong while serving one command end to end.
#[derive(Error, Debug)]
pub enum MissionError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    LandingObstacle(#[from] LandingObstacle),
    #[error(transparent)]
    Obstacles(#[from] ObstacleError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
