//! Timed obstacle generation

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Playfield;

/// Frame counter driving obstacle spawns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    timer: u32,
}

impl Spawner {
    /// Count one tick. Returns true (and rewinds) once the counter
    /// exceeds `interval`.
    pub fn advance(&mut self, interval: u32) -> bool {
        self.timer += 1;
        if self.timer > interval {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }
}

/// Pick a random lane
pub fn pick_lane(rng: &mut impl Rng, lane_count: u32) -> u32 {
    rng.random_range(0..lane_count.max(1))
}

/// Rectangle for a vehicle centered in `lane`, just above the visible area
pub fn lane_rect(lane: u32, lane_count: u32, playfield: &Playfield, size: Vec2) -> Rect {
    let lane_width = playfield.lane_width(lane_count);
    let x = lane as f32 * lane_width + (lane_width - size.x) / 2.0;
    Rect::new(x, -size.y, size.x, size.y)
}
