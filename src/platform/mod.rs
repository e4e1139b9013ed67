//! Platform abstraction layer
//!
//! The simulation is platform-free; this layer hands it to the browser:
//! - `web`: wasm-bindgen bridge driven by the JS canvas view (WASM only)
//!
//! Natively the binary in `main.rs` drives the simulation directly.

#[cfg(target_arch = "wasm32")]
pub mod web;
