pub mod audio;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod obstacles;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
