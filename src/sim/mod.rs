//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod road;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use rect::Rect;
pub use road::{RoadLine, RoadScroller};
pub use spawner::Spawner;
pub use state::{Difficulty, GameState, Obstacle, Player, Playfield, ScoreState, SessionPhase};
pub use tick::{Steer, TickInput, TickOutcome, tick};
