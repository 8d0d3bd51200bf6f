//! Road Rush - A lane-dodging arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `game`: Session controller wiring input, persistence and presentation
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: High score storage
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Number of lanes obstacles are placed in
    pub const LANE_COUNT: u32 = 4;
    /// Ticks between obstacle spawns (~1 second at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u32 = 60;

    /// Obstacle fall speed at session start (pixels/tick)
    pub const OBSTACLE_START_SPEED: f32 = 4.0;
    /// Road line scroll speed at session start (pixels/tick)
    pub const ROAD_START_SPEED: f32 = 5.0;
    /// Speed added to both obstacles and road on each ratchet
    pub const SPEED_STEP: f32 = 0.5;
    /// Score interval between difficulty ratchets
    pub const SPEED_UP_EVERY: u64 = 10;

    /// Player horizontal speed (pixels/tick)
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Vehicle width as a fraction of playfield width
    pub const VEHICLE_WIDTH_RATIO: f32 = 1.0 / 8.0;
    /// Vehicle height relative to its width
    pub const VEHICLE_ASPECT: f32 = 1.8;
    /// Gap between the player's rear bumper and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Road line geometry
    pub const ROAD_LINE_WIDTH: f32 = 10.0;
    pub const ROAD_LINE_HEIGHT: f32 = 40.0;
    pub const ROAD_LINE_GAP: f32 = 40.0;
}
