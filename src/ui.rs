//! Presentation surface contract
//!
//! The session controller pushes one `Snapshot` per tick plus a few
//! discrete events. Implementations draw and update the HUD; they never
//! feed anything back into the simulation.

use crate::sim::{GameState, Playfield, Rect};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub playfield: Playfield,
    pub player: Rect,
    /// Obstacles in spawn order
    pub obstacles: Vec<Rect>,
    pub road_lines: Vec<Rect>,
    pub score: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            playfield: state.playfield,
            player: state.player.rect,
            obstacles: state.obstacles.iter().map(|o| o.rect).collect(),
            road_lines: state.road.rects().collect(),
            score: state.scores.score,
        }
    }
}

/// Receiver of frames and session events
pub trait Presenter {
    /// A tick completed while running
    fn frame(&mut self, snapshot: &Snapshot);

    /// A session began; `restart` is true when coming from game over
    fn session_started(&mut self, restart: bool);

    fn game_over(&mut self, final_score: u64, high_score: u64);
}
