//! Keyboard and touch input normalization
//!
//! Browser events arrive between frames. They are folded into pending
//! intent here and drained once per tick, so a tick never sees a
//! half-applied input.

use crate::sim::{Steer, TickInput};

/// One of the two steering directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Platform-neutral input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    /// Touch drag, x relative to the playfield's left edge
    PointerMove { x: f32 },
    PointerRelease,
}

impl InputEvent {
    /// Map a `KeyboardEvent.key` value; unrelated keys yield `None`
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        let direction = match key {
            "ArrowLeft" | "Left" => Direction::Left,
            "ArrowRight" | "Right" => Direction::Right,
            _ => return None,
        };
        Some(if pressed {
            InputEvent::Press(direction)
        } else {
            InputEvent::Release(direction)
        })
    }
}

/// Pending input between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    steer: Steer,
    pointer_x: Option<f32>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an event into pending intent (last writer wins)
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(Direction::Left) => self.steer = Steer::Left,
            InputEvent::Press(Direction::Right) => self.steer = Steer::Right,
            // Releasing either arrow stops the car
            InputEvent::Release(_) => self.steer = Steer::Straight,
            InputEvent::PointerMove { x } => self.pointer_x = Some(x),
            InputEvent::PointerRelease => {}
        }
    }

    /// Input for the next tick. Steering is held; pointer placement is one-shot.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            steer: self.steer,
            pointer_x: self.pointer_x.take(),
        }
    }

    /// Drop a pointer placement that arrived before a session reset
    pub fn clear_pointer(&mut self) {
        self.pointer_x = None;
    }

    pub fn steer(&self) -> Steer {
        self.steer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            InputEvent::from_key("ArrowLeft", true),
            Some(InputEvent::Press(Direction::Left))
        );
        assert_eq!(
            InputEvent::from_key("Right", false),
            Some(InputEvent::Release(Direction::Right))
        );
        assert_eq!(InputEvent::from_key("a", true), None);
        assert_eq!(InputEvent::from_key(" ", false), None);
    }

    #[test]
    fn test_last_press_wins() {
        let mut input = InputAdapter::new();
        input.apply(InputEvent::Press(Direction::Left));
        input.apply(InputEvent::Press(Direction::Right));
        assert_eq!(input.steer(), Steer::Right);
    }

    #[test]
    fn test_any_release_stops() {
        let mut input = InputAdapter::new();
        input.apply(InputEvent::Press(Direction::Right));
        input.apply(InputEvent::Release(Direction::Left));
        assert_eq!(input.steer(), Steer::Straight);
    }

    #[test]
    fn test_steer_is_held_across_ticks() {
        let mut input = InputAdapter::new();
        input.apply(InputEvent::Press(Direction::Left));
        assert_eq!(input.take_tick_input().steer, Steer::Left);
        assert_eq!(input.take_tick_input().steer, Steer::Left);
    }

    #[test]
    fn test_pointer_is_one_shot() {
        let mut input = InputAdapter::new();
        input.apply(InputEvent::PointerMove { x: 10.0 });
        input.apply(InputEvent::PointerMove { x: 42.0 });
        assert_eq!(input.take_tick_input().pointer_x, Some(42.0));
        assert_eq!(input.take_tick_input().pointer_x, None);
    }

    #[test]
    fn test_pointer_release_is_noop() {
        let mut input = InputAdapter::new();
        input.apply(InputEvent::Press(Direction::Right));
        input.apply(InputEvent::PointerMove { x: 10.0 });
        input.apply(InputEvent::PointerRelease);
        let tick = input.take_tick_input();
        assert_eq!(tick.steer, Steer::Right);
        assert_eq!(tick.pointer_x, Some(10.0));
    }
}
