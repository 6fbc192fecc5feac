//! Interpreter that runs a [`Command`] against a start [`Position`] and an
//! obstacle set.
//!
//! The entry point is [`execute`]. It is a pure function: no I/O, no shared
//! state, and the same inputs always give the same [`Outcome`].

use crate::command::Command;
use crate::error::LandingObstacle;
use crate::outcome::Outcome;
use crate::rover::{Obstacle, Position};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Runs `command` from `start`, stopping before the first translation whose
/// destination is in `obstacles`.
///
/// # Landing check
///
/// If `start.point` is itself an obstacle the call fails with
/// [`LandingObstacle`] before anything else, even for the empty command.
///
/// # Execution
///
/// Instructions are applied strictly left to right:
/// 1. `F`/`B` compute the destination cell. If it is an obstacle the rover
///    stays where it is, the outcome is marked `stopped_by_obstacle`, and the
///    executed command is the prefix processed so far.
/// 2. `L`/`R` turn in place and are never blocked, even when facing an
///    obstacle.
/// 3. Every accepted instruction appends the new position to the path.
///
/// Only the destination of each one-cell step is checked.
///
/// # Lattice edge
///
/// Coordinates are `i32`. A translation that would leave that range is
/// treated as blocked: the run stops exactly as it does in front of an
/// obstacle, with `stopped_by_obstacle` set.
pub fn execute(
    command: &Command,
    start: Position,
    obstacles: &HashSet<Obstacle>,
) -> Result<Outcome, LandingObstacle> {
    if obstacles.contains(&start.point) {
        warn!(x = start.x(), y = start.y(), "landing position is an obstacle");
        return Err(LandingObstacle { point: start.point });
    }

    debug!(command = %command, start = %start, obstacles = obstacles.len(), "executing");

    let mut outcome = Outcome::new(command.clone(), start);
    let mut current = start;

    for (index, op) in command.ops().enumerate() {
        let Some(next) = op.try_apply(current) else {
            debug!(
                index,
                symbol = %op.symbol(),
                x = current.x(),
                y = current.y(),
                "stopped at lattice edge"
            );
            return Ok(outcome.finish(true));
        };

        if op.is_translation() && obstacles.contains(&next.point) {
            debug!(
                index,
                symbol = %op.symbol(),
                x = next.x(),
                y = next.y(),
                "stopped by obstacle"
            );
            return Ok(outcome.finish(true));
        }

        outcome.record_step(next);
        current = next;
    }

    Ok(outcome.finish(false))
}
