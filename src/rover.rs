//! Rover state and the lattice primitives it moves on.

use crate::error::ConfigError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point of the integer lattice. Negative coordinates are valid; the
/// lattice ends at the `i32` range.
pub type Point = IVec2;

/// A lattice point that blocks translation into it.
///
/// Identical to [`Point`] apart from the name; obstacle sets are plain
/// membership sets of coordinates.
pub type Obstacle = Point;

/// One of the four cardinal headings.
///
/// The declaration order is the cyclic order used for turning: turning right
/// advances one step, turning left goes back one step, both modulo 4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in cyclic order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    const UNIT_VECTORS: [IVec2; 4] = [IVec2::Y, IVec2::X, IVec2::NEG_Y, IVec2::NEG_X];

    /// Position of this heading in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The one-cell displacement of a forward step taken with this heading.
    pub fn unit_vector(self) -> IVec2 {
        Self::UNIT_VECTORS[self.index()]
    }

    /// The heading after a 90 degree clockwise turn (successor).
    pub fn right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// The heading after a 90 degree counter-clockwise turn (predecessor).
    pub fn left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidDirection(s.to_string()))
    }
}

/// The full state of the rover: where it stands and where it faces.
///
/// Positions are values. Every transition returns a new `Position` and leaves
/// the receiver untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Current lattice cell.
    pub point: Point,

    /// Current heading.
    pub direction: Direction,
}

impl Position {
    pub fn new(point: Point, direction: Direction) -> Self {
        Self { point, direction }
    }

    pub fn x(&self) -> i32 {
        self.point.x
    }

    pub fn y(&self) -> i32 {
        self.point.y
    }

    pub fn coordinates(&self) -> (i32, i32) {
        (self.point.x, self.point.y)
    }

    /// One cell along the current heading.
    ///
    /// Coordinates are `i32`; at the edge of that range the rover stays on
    /// the edge cell. Use [`checked_move_forward`](Self::checked_move_forward)
    /// to detect the edge.
    pub fn move_forward(&self) -> Self {
        self.checked_move_forward().unwrap_or(*self)
    }

    /// One cell against the current heading; the heading is kept. Saturates
    /// at the edge like [`move_forward`](Self::move_forward).
    pub fn move_backward(&self) -> Self {
        self.checked_move_backward().unwrap_or(*self)
    }

    /// One cell along the current heading, or `None` if that cell lies
    /// outside the `i32` lattice.
    pub fn checked_move_forward(&self) -> Option<Self> {
        let step = self.direction.unit_vector();
        let point = Point::new(
            self.point.x.checked_add(step.x)?,
            self.point.y.checked_add(step.y)?,
        );
        Some(Self::new(point, self.direction))
    }

    /// One cell against the current heading, or `None` past the lattice edge.
    pub fn checked_move_backward(&self) -> Option<Self> {
        let step = self.direction.unit_vector();
        let point = Point::new(
            self.point.x.checked_sub(step.x)?,
            self.point.y.checked_sub(step.y)?,
        );
        Some(Self::new(point, self.direction))
    }

    pub fn turn_left(&self) -> Self {
        Self::new(self.point, self.direction.left())
    }

    pub fn turn_right(&self) -> Self {
        Self::new(self.point, self.direction.right())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) facing {}", self.point.x, self.point.y, self.direction)
    }
}

/// Operations the rover can perform, one per command symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Step one cell ahead (`F`).
    Forward,
    /// Step one cell back without turning (`B`).
    Backward,
    /// Rotate 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
}

impl RoverOp {
    /// Maps a command symbol to its operation. Only upper-case `F`, `B`, `L`
    /// and `R` are recognised.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(RoverOp::Forward),
            'B' => Some(RoverOp::Backward),
            'L' => Some(RoverOp::TurnLeft),
            'R' => Some(RoverOp::TurnRight),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            RoverOp::Forward => 'F',
            RoverOp::Backward => 'B',
            RoverOp::TurnLeft => 'L',
            RoverOp::TurnRight => 'R',
        }
    }

    /// Whether the operation changes the rover's cell. Only translations are
    /// subject to obstacle checks.
    pub fn is_translation(self) -> bool {
        matches!(self, RoverOp::Forward | RoverOp::Backward)
    }

    /// The position reached by applying this operation to `position`.
    pub fn apply(self, position: Position) -> Position {
        match self {
            RoverOp::Forward => position.move_forward(),
            RoverOp::Backward => position.move_backward(),
            RoverOp::TurnLeft => position.turn_left(),
            RoverOp::TurnRight => position.turn_right(),
        }
    }

    /// Like [`apply`](Self::apply), but `None` when a translation would leave
    /// the `i32` lattice. Turns always succeed.
    pub fn try_apply(self, position: Position) -> Option<Position> {
        match self {
            RoverOp::Forward => position.checked_move_forward(),
            RoverOp::Backward => position.checked_move_backward(),
            RoverOp::TurnLeft | RoverOp::TurnRight => Some(self.apply(position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vectors_follow_headings() {
        assert_eq!(Direction::North.unit_vector(), IVec2::new(0, 1));
        assert_eq!(Direction::East.unit_vector(), IVec2::new(1, 0));
        assert_eq!(Direction::South.unit_vector(), IVec2::new(0, -1));
        assert_eq!(Direction::West.unit_vector(), IVec2::new(-1, 0));
    }

    #[test]
    fn right_is_successor_and_left_is_predecessor() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::West.right(), Direction::North);
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::East.left(), Direction::North);
    }

    #[test]
    fn transitions_do_not_touch_the_receiver() {
        let start = Position::new(Point::new(2, -3), Direction::South);

        let moved = start.move_forward();
        assert_eq!(moved, Position::new(Point::new(2, -4), Direction::South));
        assert_eq!(start.move_backward().point, Point::new(2, -2));
        assert_eq!(start.turn_left().direction, Direction::East);
        assert_eq!(start.turn_right().direction, Direction::West);
        assert_eq!(start.turn_left().point, start.point);
        assert_eq!(start, Position::new(Point::new(2, -3), Direction::South));
    }

    #[test]
    fn moves_stop_at_the_lattice_edge() {
        let east_edge = Position::new(Point::new(i32::MAX, 0), Direction::East);
        assert_eq!(east_edge.checked_move_forward(), None);
        assert_eq!(east_edge.move_forward(), east_edge);
        assert_eq!(
            east_edge.move_backward().point,
            Point::new(i32::MAX - 1, 0)
        );

        let south_edge = Position::new(Point::new(0, i32::MIN), Direction::North);
        assert_eq!(south_edge.checked_move_backward(), None);
        assert_eq!(south_edge.move_backward(), south_edge);
        assert_eq!(RoverOp::Backward.try_apply(south_edge), None);
        assert_eq!(
            RoverOp::TurnLeft.try_apply(south_edge),
            Some(south_edge.turn_left())
        );
    }

    #[test]
    fn direction_parses_names_case_insensitively() {
        assert_eq!("EAST".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert!(matches!(
            "UP".parse::<Direction>(),
            Err(ConfigError::InvalidDirection(s)) if s == "UP"
        ));
    }

    #[test]
    fn position_serializes_point_as_pair() {
        let position = Position::new(Point::new(4, 2), Direction::West);
        let json = serde_json::to_value(position).unwrap();
        assert_eq!(json, serde_json::json!({ "point": [4, 2], "direction": "WEST" }));
    }

    #[test]
    fn ops_map_only_upper_case_symbols() {
        for op in [
            RoverOp::Forward,
            RoverOp::Backward,
            RoverOp::TurnLeft,
            RoverOp::TurnRight,
        ] {
            assert_eq!(RoverOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(RoverOp::from_symbol('f'), None);
        assert!(RoverOp::Backward.is_translation());
        assert!(!RoverOp::TurnRight.is_translation());
    }
}
