use crate::command::Command;
use crate::rover::Position;
use serde::{Deserialize, Serialize};

/// The result of running one command.
///
/// Built once per [`execute`](crate::execute) call and handed back to the
/// caller; the engine keeps nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The command as requested.
    pub initial_command: Command,

    /// The longest prefix of `initial_command` that was carried out.
    pub executed_command: Command,

    /// Where the rover ended up. When stopped by an obstacle this is the last
    /// safe position, not the blocked cell.
    pub final_position: Position,

    /// `true` if a translation was refused because its destination is an
    /// obstacle.
    pub stopped_by_obstacle: bool,

    /// Every position reached, one entry per executed instruction.
    pub path: Vec<Position>,
}

impl Outcome {
    /// An outcome in which nothing has been executed yet.
    pub fn new(initial_command: Command, start: Position) -> Self {
        Self {
            initial_command,
            executed_command: Command::default(),
            final_position: start,
            stopped_by_obstacle: false,
            path: Vec::new(),
        }
    }

    /// Accepts `position` as the result of the next instruction.
    pub(crate) fn record_step(&mut self, position: Position) {
        self.final_position = position;
        self.path.push(position);
    }

    /// Closes the outcome, fixing the executed prefix to the steps recorded.
    pub(crate) fn finish(mut self, stopped_by_obstacle: bool) -> Self {
        self.stopped_by_obstacle = stopped_by_obstacle;
        self.executed_command = self.initial_command.truncate(self.path.len());
        self
    }

    /// Number of instructions carried out.
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    pub fn completed(&self) -> bool {
        !self.stopped_by_obstacle
    }
}
