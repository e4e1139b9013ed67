//! Falling Dodge entry point
//!
//! In the browser the JS view drives `platform::web::WebSimulation`. Natively
//! this runs a headless game with a simple dodging autopilot and logs the result.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use falling_dodge::SimConfig;
    use falling_dodge::sim::{GameSimulation, SimulationState};

    /// Frame length for the headless run (~60 fps)
    const FRAME_MS: f64 = 16.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u32 = 10 * 60 * 1000 / FRAME_MS as u32;
    /// How far above the player the autopilot looks for threats
    const LOOKAHEAD: f32 = 200.0;

    /// Steer away from the closest obstacle overlapping the player's column
    fn autopilot(sim: &GameSimulation) -> f32 {
        let player = sim.player.rect();
        let center = player.pos.x + player.size.x / 2.0;

        let threat = sim
            .obstacles
            .iter()
            .filter(|o| {
                let rect = o.rect();
                rect.bottom() > player.top() - LOOKAHEAD
                    && rect.top() < player.bottom()
                    && rect.right() > player.left() - 10.0
                    && rect.left() < player.right() + 10.0
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

        match threat {
            Some(o) => {
                let obstacle_center = o.pos.x + o.size.x / 2.0;
                let width = sim.config().canvas_width;
                // Dodge toward the side with more room
                if obstacle_center > center || (obstacle_center == center && center > width / 2.0)
                {
                    -1.0
                } else {
                    1.0
                }
            }
            None => 0.0,
        }
    }

    pub fn run() {
        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(42);

        let mut sim = GameSimulation::seeded(seed);
        log::info!(
            "Headless run with seed {} on a {}x{} canvas",
            seed,
            SimConfig::default().canvas_width,
            SimConfig::default().canvas_height
        );

        sim.start();
        let mut frames = 0;
        while sim.state() == SimulationState::Playing && frames < MAX_FRAMES {
            let direction = autopilot(&sim);
            sim.steer_player(direction, FRAME_MS);
            sim.update(FRAME_MS);
            frames += 1;
        }

        if sim.state() == SimulationState::Playing {
            sim.set_state(SimulationState::GameOver);
        }

        log::info!(
            "Run over after {:.1}s: score {}, level {}, high score {:.0}",
            sim.play_time(),
            sim.display_score(),
            sim.level(),
            sim.high_score()
        );
        println!(
            "score={} level={} time={:.1}s",
            sim.display_score(),
            sim.level(),
            sim.play_time()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Falling Dodge (native) starting...");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
