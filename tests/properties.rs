//! Property-based tests for the rover model and the engine.
//!
//! Run with: cargo test --test properties

use lunar_rover::{Command, Direction, Obstacle, Point, Position, execute};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point> {
    (-50..50i32, -50..50i32).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_position() -> impl Strategy<Value = Position> {
    (arb_point(), arb_direction()).prop_map(|(point, direction)| Position::new(point, direction))
}

fn arb_command(symbols: &'static str) -> impl Strategy<Value = Command> {
    let symbols: Vec<char> = symbols.chars().collect();
    prop::collection::vec(prop::sample::select(symbols), 0..40)
        .prop_map(|chars| Command::from_string(&chars.into_iter().collect::<String>()).unwrap())
}

/// Obstacles near the origin, with the start cell removed.
fn arb_obstacles_around(start: Point) -> impl Strategy<Value = HashSet<Obstacle>> {
    prop::collection::hash_set(
        (-5..5i32, -5..5i32).prop_map(move |(dx, dy)| start + Point::new(dx, dy)),
        0..30,
    )
    .prop_map(move |mut set| {
        set.remove(&start);
        set
    })
}

fn arb_scenario(symbols: &'static str) -> impl Strategy<Value = (Command, Position, HashSet<Obstacle>)> {
    arb_position().prop_flat_map(move |start| {
        (arb_command(symbols), Just(start), arb_obstacles_around(start.point))
    })
}

// =============================================================================
// Position model
// =============================================================================

proptest! {
    #[test]
    fn proptest_four_turns_close(p in arb_position()) {
        let left = p.turn_left().turn_left().turn_left().turn_left();
        let right = p.turn_right().turn_right().turn_right().turn_right();
        prop_assert_eq!(left, p);
        prop_assert_eq!(right, p);
    }

    #[test]
    fn proptest_forward_then_backward_returns(p in arb_position()) {
        prop_assert_eq!(p.move_forward().move_backward(), p);
        prop_assert_eq!(p.move_backward().move_forward(), p);
    }

    #[test]
    fn proptest_left_undoes_right(p in arb_position()) {
        prop_assert_eq!(p.turn_right().turn_left(), p);
    }
}

// =============================================================================
// Engine
// =============================================================================

proptest! {
    #[test]
    fn proptest_executed_is_prefix_matching_path((command, start, obstacles) in arb_scenario("FBLR")) {
        let outcome = execute(&command, start, &obstacles).unwrap();

        prop_assert!(command.as_str().starts_with(outcome.executed_command.as_str()));
        prop_assert_eq!(outcome.executed_command.len(), outcome.steps());
        prop_assert_eq!(outcome.steps(), outcome.path.len());
        prop_assert_eq!(&outcome.initial_command, &command);
        prop_assert_eq!(outcome.completed(), !outcome.stopped_by_obstacle);
        if outcome.completed() {
            prop_assert_eq!(&outcome.executed_command, &command);
        }
        let last = outcome.path.last().copied().unwrap_or(start);
        prop_assert_eq!(outcome.final_position, last);
    }

    #[test]
    fn proptest_never_enters_an_obstacle((command, start, obstacles) in arb_scenario("FBLR")) {
        let outcome = execute(&command, start, &obstacles).unwrap();
        for position in &outcome.path {
            prop_assert!(!obstacles.contains(&position.point));
        }
    }

    #[test]
    fn proptest_turns_are_never_blocked((command, start, obstacles) in arb_scenario("LR")) {
        let outcome = execute(&command, start, &obstacles).unwrap();
        prop_assert!(!outcome.stopped_by_obstacle);
        prop_assert_eq!(&outcome.executed_command, &command);
        prop_assert_eq!(outcome.final_position.point, start.point);
    }

    #[test]
    fn proptest_empty_command_is_idempotent(start in arb_position()) {
        let obstacles = [start.point + Point::ONE, start.point - Point::X].into_iter().collect();
        let outcome = execute(&Command::default(), start, &obstacles).unwrap();
        prop_assert_eq!(outcome.final_position, start);
        prop_assert!(outcome.path.is_empty());
        prop_assert!(!outcome.stopped_by_obstacle);
    }

    #[test]
    fn proptest_landing_on_obstacle_always_fails((command, start, mut obstacles) in arb_scenario("FBLR")) {
        obstacles.insert(start.point);
        let err = execute(&command, start, &obstacles).unwrap_err();
        prop_assert_eq!(err.point, start.point);
    }
}
