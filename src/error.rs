use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating the game configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("obstacle #{index} at ({x}, {y}) lies outside the {width}x{height} grid")]
    ObstacleOutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },
}

/// Failures raised by the simulation engine during a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// Snake and active obstacles cover every cell, so no food can be placed.
    #[error("no free cell left for food on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

/// Failures that end the interactive run loop.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}
