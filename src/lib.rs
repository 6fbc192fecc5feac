//! # lunar-rover
//!
//! A deterministic command-execution engine for a rover on an unbounded
//! integer lattice.
//!
//! A [`Command`] of `F`/`B`/`L`/`R` instructions is run from a start
//! [`Position`] against a set of obstacle points. [`execute`] reports how far
//! the rover got as an [`Outcome`]: the executed prefix, the final position,
//! whether an obstacle stopped it, and every position visited on the way.
//! Starting on an obstacle is refused outright with [`LandingObstacle`].
//!
//! The [`mission`] module holds the stateful collaborators (obstacle map,
//! position history) and the [`MissionControl`] service that drives the
//! engine across successive commands.

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod mission;
pub mod outcome;
pub mod rover;

pub use command::*;
pub use config::RoverConfig;
pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use outcome::*;
pub use rover::*;
