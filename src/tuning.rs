//! Data-driven game balance
//!
//! Defaults come from `consts`; any field may be overridden from JSON.
//! Persisted separately from the high score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values read by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    /// Number of equal-width lanes
    pub lane_count: u32,
    /// Spawn when the frame counter exceeds this many ticks
    pub spawn_interval_ticks: u32,

    // === Difficulty ===
    pub obstacle_start_speed: f32,
    pub road_start_speed: f32,
    /// Added to both speeds every `speed_up_every` points
    pub speed_step: f32,
    pub speed_up_every: u64,

    // === Vehicles ===
    pub player_speed: f32,
    /// Vehicle width as a fraction of playfield width
    pub vehicle_width_ratio: f32,
    /// Height = width * aspect
    pub vehicle_aspect: f32,
    pub player_bottom_margin: f32,

    // === Road ===
    pub road_line_width: f32,
    pub road_line_height: f32,
    pub road_line_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_count: LANE_COUNT,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,

            obstacle_start_speed: OBSTACLE_START_SPEED,
            road_start_speed: ROAD_START_SPEED,
            speed_step: SPEED_STEP,
            speed_up_every: SPEED_UP_EVERY,

            player_speed: PLAYER_SPEED,
            vehicle_width_ratio: VEHICLE_WIDTH_RATIO,
            vehicle_aspect: VEHICLE_ASPECT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            road_line_width: ROAD_LINE_WIDTH,
            road_line_height: ROAD_LINE_HEIGHT,
            road_line_gap: ROAD_LINE_GAP,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "road_rush_tuning";

    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.lane_count == 0 {
            self.lane_count = defaults.lane_count;
        }
        if self.speed_up_every == 0 {
            self.speed_up_every = defaults.speed_up_every;
        }
        if !(self.vehicle_width_ratio > 0.0 && self.vehicle_width_ratio <= 1.0) {
            self.vehicle_width_ratio = defaults.vehicle_width_ratio;
        }
        if self.road_line_height + self.road_line_gap <= 0.0 {
            self.road_line_height = defaults.road_line_height;
            self.road_line_gap = defaults.road_line_gap;
        }
        self
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning overrides: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
