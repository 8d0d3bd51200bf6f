//! Game state and core simulation types
//!
//! Everything a session mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::road::RoadScroller;
use super::spawner::{Spawner, lane_rect};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Page loaded, waiting for the start command
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Crashed; waiting for restart
    GameOver,
}

/// Visible play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shared size of the player and obstacle vehicles
    pub fn vehicle_size(&self, tuning: &Tuning) -> Vec2 {
        let width = self.width * tuning.vehicle_width_ratio;
        Vec2::new(width, width * tuning.vehicle_aspect)
    }

    /// Width of one lane band
    pub fn lane_width(&self, lane_count: u32) -> f32 {
        self.width / lane_count.max(1) as f32
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Speed magnitude applied by directional input
    pub speed: f32,
    /// Signed horizontal velocity (pixels/tick)
    pub velocity: f32,
}

impl Player {
    /// Create a player centered horizontally near the bottom edge
    pub fn new(playfield: &Playfield, tuning: &Tuning) -> Self {
        let mut player = Self {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            speed: tuning.player_speed,
            velocity: 0.0,
        };
        player.fit(playfield, tuning);
        player.recenter(playfield);
        player
    }

    /// Re-derive size and vertical offset from the playfield
    pub fn fit(&mut self, playfield: &Playfield, tuning: &Tuning) {
        self.rect.size = playfield.vehicle_size(tuning);
        self.rect.pos.y = playfield.height - self.rect.size.y - tuning.player_bottom_margin;
        self.clamp_to(playfield);
    }

    /// Move to the horizontal center of the playfield
    pub fn recenter(&mut self, playfield: &Playfield) {
        self.rect.pos.x = playfield.width / 2.0 - self.rect.size.x / 2.0;
    }

    /// Apply velocity for one tick, then keep the car on the road
    pub fn integrate(&mut self, playfield: &Playfield) {
        self.rect.pos.x += self.velocity;
        self.clamp_to(playfield);
    }

    /// Jump so the car is centered under a pointer x coordinate
    pub fn place_at(&mut self, pointer_x: f32, playfield: &Playfield) {
        self.rect.pos.x = pointer_x - self.rect.size.x / 2.0;
        self.clamp_to(playfield);
    }

    /// Clamp x to [0, playfield.width - width]
    pub fn clamp_to(&mut self, playfield: &Playfield) {
        let max_x = (playfield.width - self.rect.size.x).max(0.0);
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
    }
}

/// An oncoming car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Lane index it was spawned in
    pub lane: u32,
    pub rect: Rect,
}

/// Per-session speeds; only ever ratchet upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub obstacle_speed: f32,
    pub road_speed: f32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacle_speed: tuning.obstacle_start_speed,
            road_speed: tuning.road_start_speed,
        }
    }

    pub fn ratchet(&mut self, step: f32) {
        self.obstacle_speed += step;
        self.road_speed += step;
    }
}

/// Current and best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub high_score: u64,
}

impl ScoreState {
    /// Promote the current score to high score if it beats it.
    /// Returns true when a new high score was set.
    pub fn settle(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the lane RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub playfield: Playfield,
    pub phase: SessionPhase,
    pub scores: ScoreState,
    pub difficulty: Difficulty,
    pub player: Player,
    /// Oncoming cars in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub road: RoadScroller,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game for the given playfield
    pub fn new(seed: u64, playfield: Playfield, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut road = RoadScroller::default();
        road.reset(&playfield, &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty: Difficulty::new(&tuning),
            player: Player::new(&playfield, &tuning),
            playfield,
            tuning,
            phase: SessionPhase::Idle,
            scores: ScoreState::default(),
            obstacles: Vec::new(),
            spawner: Spawner::default(),
            road,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything a session owns and enter `Running`.
    ///
    /// The high score and the RNG stream carry over.
    pub fn begin_session(&mut self) {
        self.scores.score = 0;
        self.obstacles.clear();
        self.difficulty = Difficulty::new(&self.tuning);
        self.player.fit(&self.playfield, &self.tuning);
        self.player.recenter(&self.playfield);
        self.spawner.reset();
        self.road.reset(&self.playfield, &self.tuning);
        self.time_ticks = 0;
        self.phase = SessionPhase::Running;
    }

    /// Adopt a new playfield size (container resized).
    ///
    /// Every vehicle is re-sized together so the player and obstacles keep
    /// sharing one size; obstacles stay centered in their lanes.
    pub fn resize(&mut self, playfield: Playfield) {
        let old = self.playfield;
        let sx = if old.width > 0.0 { playfield.width / old.width } else { 1.0 };
        let sy = if old.height > 0.0 { playfield.height / old.height } else { 1.0 };

        self.playfield = playfield;
        self.player.rect.pos.x *= sx;
        self.player.fit(&self.playfield, &self.tuning);

        let size = self.vehicle_size();
        for obstacle in &mut self.obstacles {
            let lane = lane_rect(obstacle.lane, self.tuning.lane_count, &self.playfield, size);
            obstacle.rect = Rect {
                pos: Vec2::new(lane.x(), obstacle.rect.y() * sy),
                size,
            };
        }

        self.road.reset(&self.playfield, &self.tuning);
    }

    /// Size every vehicle shares
    pub fn vehicle_size(&self) -> Vec2 {
        self.playfield.vehicle_size(&self.tuning)
    }
}
