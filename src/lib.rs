//! Falling Dodge - dodge the falling obstacles for as long as you can
//!
//! Core modules:
//! - `sim`: Simulation (obstacles, difficulty scaling, collisions, scoring)
//! - `highscores`: Best-score persistence port
//! - `settings`: Canvas and player configuration
//! - `platform`: Browser bridge for the canvas view

pub mod error;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use highscores::{HighScoreStore, MemoryHighScore};
pub use settings::SimConfig;
pub use sim::{GameSimulation, SimSnapshot, SimulationState};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the player's top edge to the bottom of the canvas
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Frame duration (ms) that per-frame speeds are expressed against (~60 fps)
    pub const BASE_FRAME_MS: f64 = 16.0;

    /// Obstacles seeded on construction and on every restart
    pub const INITIAL_OBSTACLES: usize = 5;

    /// Seconds of play per level
    pub const LEVEL_DURATION_SECS: f64 = 30.0;
    pub const MAX_LEVEL: u32 = 99;

    /// Score per second survived
    pub const SCORE_PER_SECOND: f64 = 10.0;
    /// Bonus awarded for every 5 levels reached
    pub const LEVEL_BONUS: f64 = 250.0;
    pub const LEVELS_PER_BONUS: u32 = 5;

    /// Spawn chance per update: base + per-level step, capped
    pub const SPAWN_RATE_BASE: f64 = 0.02;
    pub const SPAWN_RATE_PER_LEVEL: f64 = 0.005;
    pub const SPAWN_RATE_MAX: f64 = 0.08;

    /// Obstacle speed multiplier: 1 + per-level step, capped
    pub const SPEED_STEP_PER_LEVEL: f32 = 0.1;
    pub const SPEED_MULTIPLIER_MAX: f32 = 2.0;
}
