//! Frame-driven game simulation
//!
//! Owns the player, the falling obstacles and the score/level counters, and
//! advances them once per animation frame while playing.

use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::check_collision;
use super::rng::{self, RandomSource};
use super::spawn::{self, spawn_probability};
use super::state::{Obstacle, Player, SimulationState};
use crate::consts::*;
use crate::error::SimError;
use crate::highscores::{HighScoreStore, MemoryHighScore};
use crate::settings::SimConfig;

/// Read-only view of the simulation handed to the renderer each frame
#[derive(Debug, Clone, Serialize)]
pub struct SimSnapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub score: f64,
    pub level: u32,
    pub play_time: f64,
    pub state: SimulationState,
    pub high_score: f64,
}

/// The game simulation
pub struct GameSimulation<R: RandomSource = Pcg32, S: HighScoreStore = MemoryHighScore> {
    config: SimConfig,
    /// Player sprite (moved by the external input layer)
    pub player: Player,
    /// Falling obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    score: f64,
    level: u32,
    /// Seconds spent playing since the last reset
    play_time: f64,
    /// Seconds since the last level-up
    level_timer: f64,
    state: SimulationState,
    running: bool,
    rng: R,
    high_scores: S,
}

impl GameSimulation {
    /// Default 800x600 simulation with a seeded PCG and an in-memory best score
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(SimConfig::default(), rng::seeded(seed), MemoryHighScore::new())
    }
}

impl<R: RandomSource, S: HighScoreStore> GameSimulation<R, S> {
    /// Create a simulation in the `Ready` state with the initial obstacles seeded
    pub fn new(config: SimConfig, rng: R, high_scores: S) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng, high_scores))
    }

    fn from_parts(config: SimConfig, rng: R, high_scores: S) -> Self {
        let player = Player::spawn(
            config.canvas_width,
            config.canvas_height,
            config.player_dimensions(),
            config.player_speed,
        );
        let mut sim = Self {
            config,
            player,
            obstacles: Vec::new(),
            score: 0.0,
            level: 1,
            play_time: 0.0,
            level_timer: 0.0,
            state: SimulationState::Ready,
            running: false,
            rng,
            high_scores,
        };
        sim.seed_obstacles();
        sim
    }

    /// Move to `new_state`, applying its side effect first
    ///
    /// - `Playing`: running
    /// - `Ready`/`Paused`: not running
    /// - `GameOver`: not running, best score committed if beaten
    pub fn set_state(&mut self, new_state: SimulationState) {
        match new_state {
            SimulationState::Playing => self.running = true,
            SimulationState::Ready | SimulationState::Paused => self.running = false,
            SimulationState::GameOver => {
                self.running = false;
                self.commit_high_score();
            }
        }

        if self.state != new_state {
            log::info!("State {} -> {}", self.state, new_state);
        }
        self.state = new_state;
    }

    /// `set_state` by name ("ready", "playing", "paused", "gameover")
    ///
    /// An unknown name leaves the simulation untouched.
    pub fn set_state_named(&mut self, name: &str) -> Result<(), SimError> {
        let new_state = name.parse::<SimulationState>()?;
        self.set_state(new_state);
        Ok(())
    }

    /// Fresh run: reset everything, then start playing
    pub fn start(&mut self) {
        self.reset();
        self.set_state(SimulationState::Playing);
    }

    /// Halt the frame loop without ending the run
    pub fn stop(&mut self) {
        self.set_state(SimulationState::Paused);
    }

    /// Playing <-> Paused; other states are left alone
    pub fn toggle_pause(&mut self) {
        match self.state {
            SimulationState::Playing => self.set_state(SimulationState::Paused),
            SimulationState::Paused => self.set_state(SimulationState::Playing),
            _ => {}
        }
    }

    /// Back to `Ready` with zeroed counters, a respawned player and new obstacles
    pub fn reset(&mut self) {
        self.score = 0.0;
        self.level = 1;
        self.play_time = 0.0;
        self.level_timer = 0.0;
        self.player = Player::spawn(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.player_dimensions(),
            self.config.player_speed,
        );
        self.seed_obstacles();
        self.set_state(SimulationState::Ready);
        log::info!("Simulation reset");
    }

    /// Advance one frame of `delta_ms` milliseconds
    ///
    /// Does nothing unless playing. At most one level-up and one spawn happen
    /// per call, however large `delta_ms` is.
    pub fn update(&mut self, delta_ms: f64) {
        if !self.running || self.state != SimulationState::Playing {
            return;
        }
        let delta_ms = sanitize_delta(delta_ms);

        // Timers
        let secs = delta_ms / 1000.0;
        self.play_time += secs;
        self.level_timer += secs;

        if self.level_timer >= LEVEL_DURATION_SECS && self.level < MAX_LEVEL {
            self.level += 1;
            self.level_timer = 0.0;
            log::info!("Level {} reached at {:.1}s", self.level, self.play_time);
        }

        self.score = score_for(self.play_time, self.level);

        // Obstacles fall, and leave once past the bottom edge
        let frames = (delta_ms / BASE_FRAME_MS) as f32;
        for obstacle in &mut self.obstacles {
            obstacle.fall(frames);
        }
        let canvas_height = self.config.canvas_height;
        self.obstacles.retain(|o| !o.is_below(canvas_height));

        if self.rng.next_unit() < spawn_probability(self.level) {
            self.spawn_obstacle();
        }

        let player_rect = self.player.rect();
        let hit = self
            .obstacles
            .iter()
            .any(|o| check_collision(&player_rect, &o.rect()));
        if hit {
            log::info!(
                "Collision at level {}, score {:.0}",
                self.level,
                self.score
            );
            self.set_state(SimulationState::GameOver);
        }
    }

    /// Append one obstacle just above the canvas
    pub fn spawn_obstacle(&mut self) {
        let obstacle = spawn::spawn_obstacle(&mut self.rng, self.level, self.config.canvas_width);
        log::debug!(
            "Spawned {:?} at x={:.1} speed={:.2}",
            obstacle.kind,
            obstacle.pos.x,
            obstacle.speed
        );
        self.obstacles.push(obstacle);
    }

    /// Move the player horizontally, `direction` in [-1, 1]
    pub fn steer_player(&mut self, direction: f32, delta_ms: f64) {
        if !self.running {
            return;
        }
        self.player
            .steer(direction, delta_ms, self.config.canvas_width);
    }

    pub fn snapshot(&self) -> SimSnapshot<'_> {
        SimSnapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            score: self.score,
            level: self.level,
            play_time: self.play_time,
            state: self.state,
            high_score: self.high_scores.get(),
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whole points, for HUD display
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn play_time(&self) -> f64 {
        self.play_time
    }

    pub fn level_timer(&self) -> f64 {
        self.level_timer
    }

    pub fn high_score(&self) -> f64 {
        self.high_scores.get()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn seed_obstacles(&mut self) {
        self.obstacles.clear();
        for _ in 0..INITIAL_OBSTACLES {
            self.spawn_obstacle();
        }
    }

    fn commit_high_score(&mut self) {
        let previous = self.high_scores.get();
        if self.high_scores.submit(self.score) {
            log::info!("New high score: {:.0} (was {:.0})", self.score, previous);
        }
    }
}

/// Score for a given play time and level
pub fn score_for(play_time: f64, level: u32) -> f64 {
    play_time * SCORE_PER_SECOND + (level / LEVELS_PER_BONUS) as f64 * LEVEL_BONUS
}

/// Negative or non-finite frame times count as zero elapsed time
fn sanitize_delta(delta_ms: f64) -> f64 {
    if delta_ms.is_finite() && delta_ms >= 0.0 {
        delta_ms
    } else {
        log::warn!("Ignoring invalid frame delta: {}", delta_ms);
        0.0
    }
}
