//! Scrolling lane markings
//!
//! Purely cosmetic: nothing here feeds back into spawning or collision.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Playfield;
use crate::tuning::Tuning;

/// A dashed center-line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadLine {
    pub rect: Rect,
}

/// Looping band of road lines covering the playfield
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadScroller {
    pub lines: Vec<RoadLine>,
}

impl RoadScroller {
    /// Lines needed to cover `height` plus one spare
    pub fn line_count(height: f32, tuning: &Tuning) -> usize {
        let pitch = tuning.road_line_height + tuning.road_line_gap;
        (height / pitch).ceil().max(0.0) as usize + 1
    }

    /// Lay lines out from the top edge, replacing any existing ones
    pub fn reset(&mut self, playfield: &Playfield, tuning: &Tuning) {
        let pitch = tuning.road_line_height + tuning.road_line_gap;
        let x = playfield.width / 2.0 - tuning.road_line_width / 2.0;
        let count = Self::line_count(playfield.height, tuning);

        self.lines.clear();
        self.lines.extend((0..count).map(|i| RoadLine {
            rect: Rect::new(
                x,
                i as f32 * pitch,
                tuning.road_line_width,
                tuning.road_line_height,
            ),
        }));
    }

    /// Scroll every line down by `speed`, wrapping past the bottom edge
    pub fn advance(&mut self, speed: f32, playfield: &Playfield) {
        for line in &mut self.lines {
            line.rect.pos.y += speed;
            if line.rect.y() > playfield.height {
                line.rect.pos.y = -line.rect.height();
            }
        }
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.lines.iter().map(|l| l.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_covers_height() {
        let tuning = Tuning::default();
        let pf = Playfield::new(400.0, 800.0);
        let mut road = RoadScroller::default();
        road.reset(&pf, &tuning);
        // ceil(800 / 80) + 1
        assert_eq!(road.lines.len(), 11);
        assert_eq!(road.lines[0].rect.x(), 195.0);
        assert_eq!(road.lines[1].rect.y(), 80.0);
    }

    #[test]
    fn test_reset_does_not_accumulate() {
        let tuning = Tuning::default();
        let pf = Playfield::new(400.0, 790.0);
        let mut road = RoadScroller::default();
        road.reset(&pf, &tuning);
        road.reset(&pf, &tuning);
        assert_eq!(road.lines.len(), 11);
    }

    #[test]
    fn test_wraps_past_bottom() {
        let tuning = Tuning::default();
        let pf = Playfield::new(400.0, 800.0);
        let mut road = RoadScroller::default();
        road.reset(&pf, &tuning);

        // Last line sits at y = 800; one step pushes it past the edge
        road.advance(5.0, &pf);
        let last = road.lines.last().unwrap();
        assert_eq!(last.rect.y(), -40.0);
        assert_eq!(road.lines[0].rect.y(), 5.0);
    }
}
