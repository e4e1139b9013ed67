//! Browser bridge
//!
//! The canvas view lives in JS. It owns the animation frame loop and input,
//! calls `update` each frame and draws from `snapshot_json`. It never writes
//! simulation internals directly.

use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::highscores::LocalStorageHighScore;
use crate::settings::SimConfig;
use crate::sim::{GameSimulation, rng};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Falling Dodge starting...");
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Simulation handle exported to JS
#[wasm_bindgen]
pub struct WebSimulation {
    sim: GameSimulation<Pcg32, LocalStorageHighScore>,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Simulation for a canvas of the given size, seeded from the clock.
    /// Player settings come from the stored config.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f32, canvas_height: f32) -> Result<WebSimulation, JsValue> {
        let config = SimConfig {
            canvas_width,
            canvas_height,
            ..SimConfig::load()
        };
        let seed = js_sys::Date::now() as u64;
        let sim = GameSimulation::new(config, rng::seeded(seed), LocalStorageHighScore::load())
            .map_err(to_js)?;

        log::info!("Simulation initialized with seed: {}", seed);
        Ok(Self { sim })
    }

    pub fn start(&mut self) {
        self.sim.start();
    }

    pub fn stop(&mut self) {
        self.sim.stop();
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    /// Advance by the frame's elapsed milliseconds
    pub fn update(&mut self, delta_ms: f64) {
        self.sim.update(delta_ms);
    }

    /// Move the player, `direction` in [-1, 1]
    pub fn steer(&mut self, direction: f32, delta_ms: f64) {
        self.sim.steer_player(direction, delta_ms);
    }

    /// Throws on an unknown state name
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&mut self, name: &str) -> Result<(), JsValue> {
        self.sim.set_state_named(name).map_err(to_js)
    }

    pub fn state(&self) -> String {
        self.sim.state().to_string()
    }

    pub fn score(&self) -> f64 {
        self.sim.score()
    }

    pub fn level(&self) -> u32 {
        self.sim.level()
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> f64 {
        self.sim.high_score()
    }

    /// Everything the view draws this frame, as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.sim.snapshot()).map_err(to_js)
    }
}
