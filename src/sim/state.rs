//! Simulation data model
//!
//! Player, obstacles and the finite simulation state.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationState {
    /// Waiting for the first start
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended by a collision (or explicitly)
    GameOver,
}

impl SimulationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationState::Ready => "ready",
            SimulationState::Playing => "playing",
            SimulationState::Paused => "paused",
            SimulationState::GameOver => "gameover",
        }
    }

    /// Whether the frame loop advances in this state
    pub fn is_running(&self) -> bool {
        matches!(self, SimulationState::Playing)
    }
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationState {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(SimulationState::Ready),
            "playing" => Ok(SimulationState::Playing),
            "paused" => Ok(SimulationState::Paused),
            "gameover" => Ok(SimulationState::GameOver),
            other => Err(SimError::InvalidState(other.to_string())),
        }
    }
}

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The player's sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per 16 ms frame
    pub speed: f32,
}

impl Player {
    /// Player at its starting spot: centered, near the bottom edge
    pub fn spawn(canvas_width: f32, canvas_height: f32, size: Vec2, speed: f32) -> Self {
        Self {
            pos: Vec2::new(
                canvas_width / 2.0 - size.x / 2.0,
                canvas_height - PLAYER_BOTTOM_OFFSET,
            ),
            size,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move horizontally; `direction` is -1.0 (left) to 1.0 (right).
    /// Stays inside `[0, canvas_width - width]`.
    pub fn steer(&mut self, direction: f32, delta_ms: f64, canvas_width: f32) {
        if !direction.is_finite() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        let frames = (delta_ms / BASE_FRAME_MS) as f32;
        let dx = direction.clamp(-1.0, 1.0) * self.speed * frames;
        let max_x = (canvas_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    #[default]
    Normal,
    Fast,
    Large,
}

impl ObstacleKind {
    /// Square edge length in pixels
    pub fn size(&self) -> f32 {
        match self {
            ObstacleKind::Normal => 50.0,
            ObstacleKind::Fast => 40.0,
            ObstacleKind::Large => 70.0,
        }
    }

    /// Pixels per 16 ms frame before level scaling
    pub fn base_speed(&self) -> f32 {
        match self {
            ObstacleKind::Normal => 3.0,
            ObstacleKind::Fast => 6.0,
            ObstacleKind::Large => 2.0,
        }
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per 16 ms frame, level scaling already applied
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move down by `speed` per elapsed 16 ms frame
    pub fn fall(&mut self, frames: f32) {
        self.pos.y += self.speed * frames;
    }

    /// Top edge is below the visible area
    pub fn is_below(&self, canvas_height: f32) -> bool {
        self.pos.y > canvas_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names_round_trip() {
        for state in [
            SimulationState::Ready,
            SimulationState::Playing,
            SimulationState::Paused,
            SimulationState::GameOver,
        ] {
            assert_eq!(state.as_str().parse::<SimulationState>().unwrap(), state);
        }
        assert_eq!(
            serde_json::to_string(&SimulationState::GameOver).unwrap(),
            "\"gameover\""
        );
    }

    #[test]
    fn test_unknown_state_name() {
        let err = "running".parse::<SimulationState>().unwrap_err();
        assert!(matches!(err, SimError::InvalidState(ref s) if s == "running"));
        assert!("Playing".parse::<SimulationState>().is_err());
    }

    #[test]
    fn test_only_playing_runs() {
        assert!(SimulationState::Playing.is_running());
        assert!(!SimulationState::Ready.is_running());
        assert!(!SimulationState::Paused.is_running());
        assert!(!SimulationState::GameOver.is_running());
    }

    #[test]
    fn test_player_steer_clamps() {
        let mut player = Player::spawn(800.0, 600.0, Vec2::splat(50.0), 5.0);
        assert_eq!(player.pos, Vec2::new(375.0, 520.0));

        player.steer(1.0, 32.0, 800.0);
        assert!((player.pos.x - 385.0).abs() < 1e-4);

        player.steer(-1.0, 16_000.0, 800.0);
        assert_eq!(player.pos.x, 0.0);

        player.steer(1.0, 16_000.0, 800.0);
        assert_eq!(player.pos.x, 750.0);

        player.steer(f32::NAN, 16.0, 800.0);
        assert_eq!(player.pos.x, 750.0);
    }

    #[test]
    fn test_obstacle_leaves_canvas() {
        let mut obstacle = Obstacle {
            kind: ObstacleKind::Normal,
            pos: Vec2::new(0.0, 590.0),
            size: Vec2::splat(50.0),
            speed: 3.0,
        };
        assert!(!obstacle.is_below(600.0));
        obstacle.fall(4.0);
        assert_eq!(obstacle.pos.y, 602.0);
        assert!(obstacle.is_below(600.0));
    }
}
