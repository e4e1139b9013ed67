//! Obstacle spawning and difficulty curves
//!
//! Both curves scale linearly with level and saturate: spawn chance tops out
//! at 8% per update, obstacle speed at twice the base speed.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Obstacle, ObstacleKind};
use crate::consts::*;

/// Rolls below this pick `Normal` (60%)
const NORMAL_ROLL: f64 = 0.60;
/// Rolls below this (and not Normal) pick `Fast` (25%), the rest `Large` (15%)
const FAST_ROLL: f64 = 0.85;

/// Chance that a single update spawns an obstacle
pub fn spawn_probability(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    (SPAWN_RATE_BASE + steps * SPAWN_RATE_PER_LEVEL).min(SPAWN_RATE_MAX)
}

/// Multiplier applied to an obstacle's base speed
pub fn speed_multiplier(level: u32) -> f32 {
    let steps = level.saturating_sub(1) as f32;
    (1.0 + steps * SPEED_STEP_PER_LEVEL).min(SPEED_MULTIPLIER_MAX)
}

/// Map a uniform roll in `[0, 1)` to an obstacle kind
pub fn choose_obstacle_kind(roll: f64) -> ObstacleKind {
    if roll < NORMAL_ROLL {
        ObstacleKind::Normal
    } else if roll < FAST_ROLL {
        ObstacleKind::Fast
    } else {
        ObstacleKind::Large
    }
}

/// Create a new obstacle just above the visible area
///
/// Takes two draws: kind first, then horizontal position, uniform over
/// `[0, canvas_width - size)`.
pub fn spawn_obstacle<R: RandomSource + ?Sized>(
    rng: &mut R,
    level: u32,
    canvas_width: f32,
) -> Obstacle {
    let kind = choose_obstacle_kind(rng.next_unit());
    let size = kind.size();
    let span = (canvas_width - size).max(0.0) as f64;
    let x = (rng.next_unit() * span) as f32;

    Obstacle {
        kind,
        pos: Vec2::new(x, -size),
        size: Vec2::splat(size),
        speed: kind.base_speed() * speed_multiplier(level),
    }
}
