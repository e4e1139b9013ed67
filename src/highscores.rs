//! Best-score persistence
//!
//! The simulation only ever needs one scalar: the best score so far. It reads
//! it for comparison and writes it when a finished run beats it. Backends:
//! - `MemoryHighScore`: process lifetime only (native, tests)
//! - `LocalStorageHighScore`: browser LocalStorage (WASM only)

/// Read/write port for the persisted best score
pub trait HighScoreStore {
    /// Current best score (0 when nothing is stored)
    fn get(&self) -> f64;

    /// Overwrite the stored best score
    fn set(&mut self, score: f64);

    /// Store `score` if it beats the current best. Returns true if stored.
    fn submit(&mut self, score: f64) -> bool {
        if score > self.get() {
            self.set(score);
            true
        } else {
            false
        }
    }
}

/// In-memory best score
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryHighScore {
    best: f64,
}

impl MemoryHighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously known best score
    pub fn with_score(best: f64) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn get(&self) -> f64 {
        self.best
    }

    fn set(&mut self, score: f64) {
        self.best = score;
    }
}

/// Best score kept in browser LocalStorage, cached in memory
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageHighScore {
    cached: f64,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageHighScore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "falling_dodge_high_score";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Load the stored best score (0 if absent or unreadable)
    pub fn load() -> Self {
        let cached = Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);

        log::info!("Loaded high score: {}", cached);
        Self { cached }
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageHighScore {
    fn get(&self) -> f64 {
        self.cached
    }

    fn set(&mut self, score: f64) {
        self.cached = score;
        if let Some(storage) = Self::storage() {
            if storage
                .set_item(Self::STORAGE_KEY, &score.to_string())
                .is_err()
            {
                log::warn!("Failed to persist high score");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_starts_at_zero() {
        assert_eq!(MemoryHighScore::new().get(), 0.0);
    }

    #[test]
    fn test_submit_only_raises() {
        let mut store = MemoryHighScore::with_score(100.0);
        assert!(!store.submit(50.0));
        assert!(!store.submit(100.0));
        assert_eq!(store.get(), 100.0);

        assert!(store.submit(100.5));
        assert_eq!(store.get(), 100.5);
    }
}
