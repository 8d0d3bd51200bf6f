//! LocalStorage-backed high score (WASM only)

use crate::persistence::{HIGH_SCORE_KEY, HighScoreStore, PersistenceError, parse_high_score};

/// High score kept in `window.localStorage`
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> u64 {
        let raw = Self::storage().and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten());
        let value = parse_high_score(raw.as_deref());
        log::info!("Loaded high score: {}", value);
        value
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError> {
        let storage = Self::storage().ok_or(PersistenceError::Unavailable)?;
        storage
            .set_item(HIGH_SCORE_KEY, &value.to_string())
            .map_err(|e| PersistenceError::Write(format!("{:?}", e)))?;
        log::info!("High score saved ({})", value);
        Ok(())
    }
}
