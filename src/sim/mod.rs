//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Frame-driven, caller supplies the elapsed milliseconds
//! - Injected RNG only
//! - Stable iteration order (obstacle list order)

pub mod collision;
pub mod rng;
pub mod simulation;
pub mod spawn;
pub mod state;

pub use collision::check_collision;
pub use rng::{RandomSource, ScriptedRandom};
pub use simulation::{GameSimulation, SimSnapshot};
pub use spawn::{choose_obstacle_kind, spawn_obstacle, spawn_probability, speed_multiplier};
pub use state::{Obstacle, ObstacleKind, Player, Rect, SimulationState};
