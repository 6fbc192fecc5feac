//! Validated command strings.

use crate::error::CommandError;
use crate::rover::RoverOp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A sequence of rover instructions, guaranteed to contain only `F`, `B`,
/// `L` and `R`.
///
/// The empty command is valid and means "do nothing". Deserialization goes
/// through the same validation, so JSON that is not a string or that holds
/// other characters is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Command(String);

impl Command {
    /// Validates `raw` and wraps it.
    ///
    /// Fails with [`CommandError::InvalidCharacters`] listing every distinct
    /// character outside the alphabet. Matching is case-sensitive.
    pub fn from_string(raw: &str) -> Result<Self, CommandError> {
        let invalid: BTreeSet<char> = raw
            .chars()
            .filter(|&c| RoverOp::from_symbol(c).is_none())
            .collect();
        if !invalid.is_empty() {
            return Err(CommandError::InvalidCharacters(invalid));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The operations of this command, in execution order.
    pub fn ops(&self) -> impl Iterator<Item = RoverOp> + '_ {
        // Every byte is one of the four ASCII symbols.
        self.0.chars().filter_map(RoverOp::from_symbol)
    }

    /// The first `length` instructions. Lengths past the end keep the whole
    /// command.
    pub fn truncate(&self, length: usize) -> Self {
        Self(self.0[..length.min(self.0.len())].to_string())
    }

    /// Like [`truncate`](Self::truncate) for a signed length coming from an
    /// untyped boundary; negative lengths are rejected.
    pub fn try_truncate(&self, length: i64) -> Result<Self, CommandError> {
        let length = usize::try_from(length).map_err(|_| CommandError::NegativeLength(length))?;
        Ok(self.truncate(length))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl TryFrom<String> for Command {
    type Error = CommandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.0
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
