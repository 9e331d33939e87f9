use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::error::GameError;
use crate::grid::{GridSize, Position};
use crate::snake::Snake;

/// Fruit variety shown on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Apple,
    Pear,
    Peach,
}

impl FoodKind {
    /// Every kind, in display order.
    pub const ALL: [FoodKind; 3] = [FoodKind::Apple, FoodKind::Pear, FoodKind::Peach];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Pear => "pear",
            Self::Peach => "peach",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Apple => 0,
            Self::Pear => 1,
            Self::Peach => 2,
        }
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }
}

/// Number of fruits eaten per kind in the current game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FruitCounter {
    counts: [u32; FoodKind::ALL.len()],
}

impl FruitCounter {
    pub fn record(&mut self, kind: FoodKind) {
        self.counts[kind.index()] += 1;
    }

    #[must_use]
    pub fn get(&self, kind: FoodKind) -> u32 {
        self.counts[kind.index()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates `(kind, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FoodKind, u32)> + '_ {
        FoodKind::ALL.iter().map(|kind| (*kind, self.get(*kind)))
    }
}

/// Picks food cells uniformly among cells free of snake and active obstacles.
#[derive(Debug, Clone)]
pub struct RandomFoodPlacer<R = StdRng> {
    rng: R,
}

impl RandomFoodPlacer<StdRng> {
    /// Creates a deterministic placer for tests and reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a placer seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomFoodPlacer<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Places a new food item.
    ///
    /// A cell is rejected when it lies on the snake or on an active obstacle.
    /// Rejection sampling gives up after a bounded number of draws and then
    /// picks from the enumerated free cells, so a crowded board still resolves
    /// and a full board yields [`GameError::BoardFull`].
    pub fn place(
        &mut self,
        snake: &Snake,
        obstacles: &[Position],
        bounds: GridSize,
    ) -> Result<Food, GameError> {
        let is_free = |cell: &Position| !snake.occupies(*cell) && !obstacles.contains(cell);

        let position = match self.sample(bounds, is_free) {
            Some(position) => position,
            None => {
                let candidates: Vec<Position> = bounds.cells().filter(is_free).collect();
                log::warn!(
                    "food sampling exhausted {MAX_PLACEMENT_ATTEMPTS} draws, {} free cells remain",
                    candidates.len()
                );

                *candidates
                    .choose(&mut self.rng)
                    .ok_or(GameError::BoardFull {
                        width: bounds.width,
                        height: bounds.height,
                    })?
            }
        };

        Ok(Food::new(position, self.random_kind()))
    }

    fn sample(&mut self, bounds: GridSize, is_free: impl Fn(&Position) -> bool) -> Option<Position> {
        (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
            let candidate = Position {
                x: self.rng.gen_range(0..i32::from(bounds.width)),
                y: self.rng.gen_range(0..i32::from(bounds.height)),
            };
            is_free(&candidate).then_some(candidate)
        })
    }

    fn random_kind(&mut self) -> FoodKind {
        FoodKind::ALL[self.rng.gen_range(0..FoodKind::ALL.len())]
    }
}
