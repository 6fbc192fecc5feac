//! Collaborators around the engine and the service that wires them together.
//!
//! [`execute`](crate::execute) is stateless. Everything that survives between
//! commands lives behind the traits defined here:
//!
//! - a [`PositionSource`] knows where the rover was last seen,
//! - an [`ObstacleSource`] provides the obstacle map,
//! - a [`CommandSink`] records what each command actually did.
//!
//! [`MissionControl`] resolves the start position, runs the engine and
//! records the result, in that order.

use crate::command::Command;
use crate::config::RoverConfig;
use crate::error::{MissionError, ObstacleError, SinkError};
use crate::interpreter::execute;
use crate::outcome::Outcome;
use crate::rover::{Obstacle, Point, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Identifier of one recorded command.
pub type RecordId = u64;

pub trait PositionSource {
    /// The most recent position, or `None` before the first recorded step.
    fn last_position(&self) -> Option<Position>;
}

pub trait ObstacleSource {
    fn obstacles(&self) -> Result<HashSet<Obstacle>, ObstacleError>;
}

pub trait CommandSink {
    /// Durably stores one outcome and returns the id of the new record.
    fn record(&mut self, outcome: &Outcome) -> Result<RecordId, SinkError>;
}

impl ObstacleSource for HashSet<Obstacle> {
    fn obstacles(&self) -> Result<HashSet<Obstacle>, ObstacleError> {
        Ok(self.clone())
    }
}

/// Obstacle map read from a JSON file of `[x, y]` integer pairs.
///
/// The file is read on first use and cached until
/// [`invalidate_cache`](Self::invalidate_cache) is called.
#[derive(Debug)]
pub struct JsonObstacleSource {
    path: PathBuf,
    cache: Mutex<Option<HashSet<Obstacle>>>,
}

impl JsonObstacleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops the cached map so the next call re-reads the file.
    pub fn invalidate_cache(&self) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn load(&self) -> Result<HashSet<Obstacle>, ObstacleError> {
        if !self.path.exists() {
            return Err(ObstacleError::NotFound(self.path.clone()));
        }
        let text = fs::read_to_string(&self.path).map_err(|source| ObstacleError::Io {
            path: self.path.clone(),
            source,
        })?;
        let data: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| ObstacleError::Json {
                path: self.path.clone(),
                source,
            })?;
        parse_obstacles(&data).map_err(|reason| ObstacleError::Malformed {
            path: self.path.clone(),
            reason,
        })
    }
}

impl ObstacleSource for JsonObstacleSource {
    fn obstacles(&self) -> Result<HashSet<Obstacle>, ObstacleError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(obstacles) = cache.as_ref() {
            debug!(path = %self.path.display(), "serving cached obstacles");
            return Ok(obstacles.clone());
        }

        let obstacles = self.load()?;
        debug!(path = %self.path.display(), count = obstacles.len(), "loaded obstacles");
        *cache = Some(obstacles.clone());
        Ok(obstacles)
    }
}

fn parse_obstacles(data: &serde_json::Value) -> Result<HashSet<Obstacle>, String> {
    let items = data
        .as_array()
        .ok_or("expected a list of [x, y] pairs")?;

    items
        .iter()
        .map(|item| match item.as_array().map(Vec::as_slice) {
            Some([x, y]) => Ok(Point::new(coordinate(x)?, coordinate(y)?)),
            _ => Err(format!("each obstacle must be a 2-item list [x, y], got {item}")),
        })
        .collect()
}

fn coordinate(value: &serde_json::Value) -> Result<i32, String> {
    value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| format!("obstacle coordinates must be integers, got {value}"))
}

/// One executed command as stored by a [`CommandSink`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub id: RecordId,
    pub received_command: Command,
    pub executed_command: Command,
    pub stopped_by_obstacle: bool,
}

/// One visited position, tagged with the command that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub command_id: RecordId,
    pub position: Position,
}

/// In-memory command history. Serves as both the position source and the
/// command sink.
#[derive(Clone, Debug, Default)]
pub struct MissionLog {
    commands: Vec<CommandRecord>,
    positions: Vec<PositionRecord>,
}

impl MissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    pub fn positions(&self) -> &[PositionRecord] {
        &self.positions
    }

    /// Positions recorded for the command `id`, in visiting order.
    pub fn positions_for(&self, id: RecordId) -> impl Iterator<Item = &Position> + '_ {
        self.positions
            .iter()
            .filter(move |record| record.command_id == id)
            .map(|record| &record.position)
    }
}

impl PositionSource for MissionLog {
    fn last_position(&self) -> Option<Position> {
        self.positions.last().map(|record| record.position)
    }
}

impl CommandSink for MissionLog {
    fn record(&mut self, outcome: &Outcome) -> Result<RecordId, SinkError> {
        let id = self.commands.len() as RecordId + 1;
        self.commands.push(CommandRecord {
            id,
            received_command: outcome.initial_command.clone(),
            executed_command: outcome.executed_command.clone(),
            stopped_by_obstacle: outcome.stopped_by_obstacle,
        });
        self.positions
            .extend(outcome.path.iter().map(|&position| PositionRecord {
                command_id: id,
                position,
            }));
        Ok(id)
    }
}

/// Serves rover commands: resolves where the rover is, runs the engine and
/// records what happened.
pub struct MissionControl<O, S> {
    obstacles: O,
    store: S,
    start_position: Position,
}

impl<O, S> MissionControl<O, S>
where
    O: ObstacleSource,
    S: PositionSource + CommandSink,
{
    /// `start_position` is used until the store knows a position.
    pub fn new(obstacles: O, store: S, start_position: Position) -> Self {
        Self {
            obstacles,
            store,
            start_position,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Last known position, or the configured start position.
    pub fn current_position(&self) -> Position {
        self.store.last_position().unwrap_or_else(|| {
            debug!(start = %self.start_position, "no recorded position, using start position");
            self.start_position
        })
    }

    /// Validates `raw`, runs it from the current position and records the
    /// outcome.
    ///
    /// Validation and landing failures are returned without recording
    /// anything.
    pub fn execute_command(&mut self, raw: &str) -> Result<Outcome, MissionError> {
        let command = Command::from_string(raw)?;
        let obstacles = self.obstacles.obstacles()?;
        let start = self.current_position();

        info!(command = %command, start = %start, "command received");
        let outcome = execute(&command, start, &obstacles)?;
        let id = self.store.record(&outcome)?;

        info!(
            id,
            executed = %outcome.executed_command,
            stopped_by_obstacle = outcome.stopped_by_obstacle,
            position = %outcome.final_position,
            "command recorded"
        );
        Ok(outcome)
    }
}

impl MissionControl<JsonObstacleSource, MissionLog> {
    /// A mission reading obstacles from the configured file and keeping its
    /// history in memory.
    pub fn from_config(config: &RoverConfig) -> Self {
        Self::new(
            JsonObstacleSource::new(&config.obstacles_path),
            MissionLog::new(),
            config.start_position,
        )
    }
}
