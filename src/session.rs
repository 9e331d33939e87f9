use rand::Rng;
use rand::rngs::StdRng;

use crate::collision::{collision, Collision};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::RandomFoodPlacer;
use crate::game::{GameState, GameStatus, TickReport};
use crate::input::Direction;

/// Emitted once per collision, before the board is reset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverEvent {
    pub final_score: u32,
    pub high_score: u32,
    pub cause: Collision,
}

/// Result of one session tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub report: TickReport,
    pub game_over: Option<GameOverEvent>,
}

/// Owns the game state lifecycle across games within one process.
#[derive(Debug)]
pub struct SessionController<R = StdRng> {
    config: GameConfig,
    placer: RandomFoodPlacer<R>,
    state: GameState,
}

impl SessionController<StdRng> {
    /// Creates a session with a reproducible food sequence.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, RandomFoodPlacer::from_seed(seed))
    }
}

impl<R: Rng> SessionController<R> {
    /// Starts the first game of the session with a zero high score.
    pub fn new(config: GameConfig, mut placer: RandomFoodPlacer<R>) -> Result<Self, GameError> {
        let state = GameState::new(&config, 0, &mut placer)?;
        log::info!(
            "session started on {}x{} grid with {} configured obstacles",
            config.bounds.width,
            config.bounds.height,
            config.obstacles.len()
        );

        Ok(Self {
            config,
            placer,
            state,
        })
    }

    /// Replaces the current game with a fresh one, keeping the high score.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let high_score = self.state.high_score;
        self.state = GameState::new(&self.config, high_score, &mut self.placer)?;
        log::info!("new game, high score {high_score}");
        Ok(())
    }

    /// Runs one simulation step and handles game over.
    ///
    /// On collision the high score is updated, a [`GameOverEvent`] is returned
    /// and the state is already reset when this returns.
    pub fn tick(&mut self, requested: Option<Direction>) -> Result<TickOutcome, GameError> {
        let report = self.state.advance(requested, &mut self.placer)?;

        let Some(cause) = collision(&self.state) else {
            return Ok(TickOutcome {
                report,
                game_over: None,
            });
        };

        self.state.status = GameStatus::GameOver;
        self.state.high_score = self.state.high_score.max(self.state.score);
        let event = GameOverEvent {
            final_score: self.state.score,
            high_score: self.state.high_score,
            cause,
        };
        log::info!(
            "game over: {} with score {} (high score {})",
            cause.describe(),
            event.final_score,
            event.high_score
        );

        self.new_game()?;

        Ok(TickOutcome {
            report,
            game_over: Some(event),
        })
    }

    /// Read-only view of the current game for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted scenarios and tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }
}
