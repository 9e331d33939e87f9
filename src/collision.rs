use crate::game::GameState;

/// What the head ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    SelfIntersection,
    Obstacle,
}

impl Collision {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::SelfIntersection => "ran into itself",
            Self::Obstacle => "hit an obstacle",
        }
    }
}

/// Classifies the collision at the current head position, if any.
///
/// Self-intersection is reported first when both apply.
#[must_use]
pub fn collision(state: &GameState) -> Option<Collision> {
    if state.snake.head_overlaps_body() {
        return Some(Collision::SelfIntersection);
    }

    if state.obstacles.contains_active(state.snake.head()) {
        return Some(Collision::Obstacle);
    }

    None
}

#[must_use]
pub fn is_colliding(state: &GameState) -> bool {
    collision(state).is_some()
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::food::{Food, FoodKind};
    use crate::game::GameState;
    use crate::grid::{GridSize, Position};
    use crate::snake::Snake;

    use super::{collision, is_colliding, Collision};

    fn state_with(snake: Vec<Position>, obstacles: Vec<Position>) -> GameState {
        let config = GameConfig::new(
            GridSize {
                width: 6,
                height: 6,
            },
            obstacles,
        )
        .expect("valid config");
        let mut state =
            GameState::with_food(&config, Food::new(Position::new(5, 5), FoodKind::Pear), 0);
        state.snake = Snake::from_segments(snake);
        state
    }

    #[test]
    fn head_on_body_segment_collides() {
        let state = state_with(
            vec![
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(1, 2),
            ],
            vec![],
        );

        assert_eq!(collision(&state), Some(Collision::SelfIntersection));
    }

    #[test]
    fn head_on_active_obstacle_collides() {
        let state = state_with(vec![Position::new(2, 2)], vec![Position::new(2, 2)]);

        assert_eq!(collision(&state), Some(Collision::Obstacle));
    }

    #[test]
    fn locked_obstacle_does_not_collide() {
        let state = state_with(
            vec![Position::new(4, 4)],
            vec![
                Position::new(0, 5),
                Position::new(1, 5),
                Position::new(2, 5),
                Position::new(4, 4),
            ],
        );

        assert!(!is_colliding(&state));
    }

    #[test]
    fn clear_path_does_not_collide() {
        let state = state_with(
            vec![Position::new(3, 0), Position::new(2, 0), Position::new(1, 0)],
            vec![Position::new(3, 3)],
        );

        assert!(!is_colliding(&state));
    }
}
