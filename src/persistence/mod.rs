//! High score persistence
//!
//! A single named slot holding a non-negative integer. Loading never
//! fails: missing or corrupt values read as 0. Saving may fail, and the
//! caller decides whether that matters (gameplay never does).

use thiserror::Error;

/// Storage slot name for the best score
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Why a high score could not be written
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Durable home of the high score
pub trait HighScoreStore {
    /// Stored high score, or 0 if absent or unreadable
    fn load_high_score(&self) -> u64;

    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError>;
}

/// Decode a stored value, treating anything but a non-negative integer as 0
pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// In-process store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    /// Simulate a full or blocked backend
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value, as if written by an earlier run
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
            fail_writes: false,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u64 {
        parse_high_score(self.value.as_deref())
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Write("quota exceeded".to_string()));
        }
        self.value = Some(value.to_string());
        Ok(())
    }
}
