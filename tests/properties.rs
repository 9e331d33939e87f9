use proptest::prelude::*;

use wrap_snake::config::{GameConfig, INITIAL_ACTIVE_OBSTACLES, OBSTACLE_UNLOCK_INTERVAL};
use wrap_snake::error::GameError;
use wrap_snake::grid::{GridSize, Position};
use wrap_snake::input::Direction;
use wrap_snake::session::SessionController;

const BOUNDS: GridSize = GridSize {
    width: 6,
    height: 5,
};

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop::option::of(prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ])
}

fn obstacles() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(
        (0..i32::from(BOUNDS.width), 0..i32::from(BOUNDS.height))
            .prop_map(|(x, y)| Position::new(x, y)),
        0..7,
    )
}

proptest! {
    #[test]
    fn tick_sequences_preserve_engine_invariants(
        seed in any::<u64>(),
        layout in obstacles(),
        inputs in prop::collection::vec(direction(), 1..300),
    ) {
        let config = GameConfig::new(BOUNDS, layout.clone()).expect("obstacles are in bounds");
        let mut session = match SessionController::new_with_seed(config, seed) {
            Ok(session) => session,
            Err(GameError::BoardFull { .. }) => return Ok(()),
        };
        let initial_active = layout.len().min(INITIAL_ACTIVE_OBSTACLES);

        for requested in inputs {
            let before_len = session.state().snake.len();
            let before_active = session.state().obstacles.active_len();
            let before_high = session.high_score();
            let before_direction = session.state().direction;

            let outcome = match session.tick(requested) {
                Ok(outcome) => outcome,
                Err(GameError::BoardFull { .. }) => return Ok(()),
            };
            let state = session.state();

            prop_assert!(state.snake.head().is_within_bounds(BOUNDS));
            prop_assert!(!state.snake.occupies(state.food.position));
            prop_assert!(!state.obstacles.contains_active(state.food.position));
            prop_assert_eq!(state.total_fruits_eaten, state.fruit_counter.total());
            prop_assert_eq!(state.total_fruits_eaten, state.score);
            prop_assert!(state.obstacles.active_len() <= layout.len());
            prop_assert!(state.high_score >= before_high);

            let expected_active = (initial_active
                + (state.score / OBSTACLE_UNLOCK_INTERVAL) as usize)
                .min(layout.len());
            prop_assert_eq!(state.obstacles.active_len(), expected_active);

            if let Some(event) = outcome.game_over {
                prop_assert_eq!(state.snake.len(), 1);
                prop_assert_eq!(state.score, 0);
                prop_assert_eq!(state.obstacles.active_len(), initial_active);
                prop_assert_eq!(state.high_score, event.high_score);
                prop_assert!(event.high_score >= event.final_score);
                continue;
            }

            let grown = usize::from(outcome.report.eaten.is_some());
            prop_assert_eq!(state.snake.len(), before_len + grown);
            prop_assert!(state.obstacles.active_len() >= before_active);

            if requested == Some(before_direction.opposite()) {
                prop_assert_eq!(state.direction, before_direction);
            }
        }
    }
}
