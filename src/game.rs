use std::sync::Arc;

use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::{Food, FoodKind, FruitCounter, RandomFoodPlacer};
use crate::grid::{wrap, GridSize, Position};
use crate::input::{resolve_direction, Direction};
use crate::obstacles::ObstacleSet;
use crate::snake::Snake;

/// Every game starts with a single segment in the top-left corner.
pub const START_POSITION: Position = Position::new(0, 0);

/// Direction the snake faces at the start of every game.
pub const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What happened during one simulation step, for presentation and logging.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickReport {
    /// Kind of fruit eaten this tick, if any.
    pub eaten: Option<FoodKind>,
    /// Obstacle that came into play this tick, if any.
    pub unlocked: Option<Position>,
}

/// Complete mutable game state for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Food,
    pub obstacles: ObstacleSet,
    pub score: u32,
    pub total_fruits_eaten: u32,
    pub fruit_counter: FruitCounter,
    /// Best score seen in this process; survives resets.
    pub high_score: u32,
    pub status: GameStatus,
    bounds: GridSize,
}

impl GameState {
    /// Builds the opening state of a game, placing the first food.
    pub fn new<R: Rng>(
        config: &GameConfig,
        high_score: u32,
        placer: &mut RandomFoodPlacer<R>,
    ) -> Result<Self, GameError> {
        let snake = Snake::new(START_POSITION, config.bounds);
        let obstacles = ObstacleSet::new(Arc::clone(&config.obstacles));
        let food = placer.place(&snake, obstacles.active(), config.bounds)?;

        Ok(Self::assemble(config.bounds, snake, obstacles, food, high_score))
    }

    /// Builds the opening state with a caller-chosen food item.
    #[must_use]
    pub fn with_food(config: &GameConfig, food: Food, high_score: u32) -> Self {
        Self::assemble(
            config.bounds,
            Snake::new(START_POSITION, config.bounds),
            ObstacleSet::new(Arc::clone(&config.obstacles)),
            food,
            high_score,
        )
    }

    fn assemble(
        bounds: GridSize,
        snake: Snake,
        obstacles: ObstacleSet,
        food: Food,
        high_score: u32,
    ) -> Self {
        Self {
            snake,
            direction: START_DIRECTION,
            food,
            obstacles,
            score: 0,
            total_fruits_eaten: 0,
            fruit_counter: FruitCounter::default(),
            high_score,
            status: GameStatus::Running,
            bounds,
        }
    }

    /// Advances the simulation by one step.
    ///
    /// Applies the requested direction unless it reverses the current one,
    /// moves the head one wrapped cell, then either eats (score, new food,
    /// possible obstacle unlock, no trim) or slides the tail along.
    /// Collisions are left to the caller.
    pub fn advance<R: Rng>(
        &mut self,
        requested: Option<Direction>,
        placer: &mut RandomFoodPlacer<R>,
    ) -> Result<TickReport, GameError> {
        self.direction = resolve_direction(self.direction, requested);

        let new_head = wrap(self.snake.head().step(self.direction), self.bounds);
        self.snake.push_head(new_head);

        if new_head != self.food.position {
            self.snake.trim_tail();
            return Ok(TickReport::default());
        }

        let eaten = self.food.kind;
        self.score += 1;
        self.total_fruits_eaten += 1;
        self.fruit_counter.record(eaten);
        log::debug!(
            "ate {} at ({}, {}), score {}",
            eaten.label(),
            new_head.x,
            new_head.y,
            self.score
        );

        self.food = placer.place(&self.snake, self.obstacles.active(), self.bounds)?;

        let unlocked = self.obstacles.maybe_unlock(self.score);
        if let Some(obstacle) = unlocked {
            log::debug!(
                "obstacle {}/{} unlocked at ({}, {})",
                self.obstacles.active_len(),
                self.obstacles.layout().len(),
                obstacle.x,
                obstacle.y
            );

            // Food must never sit on an active obstacle.
            if obstacle == self.food.position {
                self.food = placer.place(&self.snake, self.obstacles.active(), self.bounds)?;
            }
        }

        Ok(TickReport {
            eaten: Some(eaten),
            unlocked,
        })
    }

    /// Returns the grid dimensions for this game.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
