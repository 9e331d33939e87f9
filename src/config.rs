use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::{GridSize, Position};

/// Fixed simulation step (8 ticks per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(125);

/// How long the game-over popup stays up before play resumes.
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

/// Number of configured obstacles active at the start of every game.
pub const INITIAL_ACTIVE_OBSTACLES: usize = 3;

/// Every positive multiple of this score unlocks the next obstacle.
pub const OBSTACLE_UNLOCK_INTERVAL: u32 = 3;

/// Random draws tried before food placement enumerates the free cells.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 256;

/// Idle time between input polls in the run loop.
pub const FRAME_SLEEP: Duration = Duration::from_millis(16);

/// Obstacle entry as written in the config file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct ObstacleSpec {
    pub x: i32,
    pub y: i32,
}

impl From<ObstacleSpec> for Position {
    fn from(spec: ObstacleSpec) -> Self {
        Position::new(spec.x, spec.y)
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    width: u16,
    height: u16,
    #[serde(default)]
    obstacles: Vec<ObstacleSpec>,
}

/// Validated session configuration, immutable for the process lifetime.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    /// Full obstacle list in unlock order.
    pub obstacles: Arc<[Position]>,
}

impl GameConfig {
    /// Builds a configuration, rejecting empty grids and off-grid obstacles.
    pub fn new(bounds: GridSize, obstacles: Vec<Position>) -> Result<Self, ConfigError> {
        if bounds.width == 0 || bounds.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: bounds.width,
                height: bounds.height,
            });
        }

        if let Some((index, obstacle)) = obstacles
            .iter()
            .enumerate()
            .find(|(_, obstacle)| !obstacle.is_within_bounds(bounds))
        {
            return Err(ConfigError::ObstacleOutOfBounds {
                index,
                x: obstacle.x,
                y: obstacle.y,
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Self {
            bounds,
            obstacles: obstacles.into(),
        })
    }

    /// Parses and validates a JSON configuration document.
    pub fn from_json(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let parsed: RawConfig = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(
            GridSize {
                width: parsed.width,
                height: parsed.height,
            },
            parsed.obstacles.into_iter().map(Position::from).collect(),
        )
    }

    /// Reads the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw, path)
    }
}
