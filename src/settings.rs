//! Simulation configuration
//!
//! Canvas bounds and the player profile. Missing JSON fields fall back to the
//! defaults, so a config file only needs the values it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Player sprite edge length
    pub player_size: f32,
    /// Player pixels per 16 ms frame
    pub player_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
        }
    }
}

impl SimConfig {
    /// Default player profile on a custom canvas
    pub fn with_canvas(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    pub fn player_dimensions(&self) -> Vec2 {
        Vec2::splat(self.player_size)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.canvas_width) || !positive(self.canvas_height) {
            return Err(SimError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !positive(self.player_size) || self.player_size > self.canvas_width {
            return Err(SimError::InvalidConfig(format!(
                "player size {} does not fit a {} wide canvas",
                self.player_size, self.canvas_width
            )));
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "player speed must be non-negative, got {}",
                self.player_speed
            )));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "falling_dodge_config";

    /// Load config from LocalStorage (WASM only), defaults when absent or invalid
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
