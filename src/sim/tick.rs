//! Per-frame simulation tick
//!
//! Core game loop that advances one session by one fixed step.
//! Speeds are per tick, independent of wall-clock frame time.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::spawner::{lane_rect, pick_lane};
use super::state::{GameState, Obstacle, SessionPhase};

/// Held steering direction from discrete input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
    #[default]
    Straight,
}

impl Steer {
    /// Signed velocity for a given speed magnitude
    pub fn velocity(self, speed: f32) -> f32 {
        match self {
            Steer::Left => -speed,
            Steer::Right => speed,
            Steer::Straight => 0.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Keyboard steering (sets velocity)
    pub steer: Steer,
    /// Absolute pointer x from touch drag (sets position directly)
    pub pointer_x: Option<f32>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// ID of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// Obstacles that left the bottom edge
    pub passed: u32,
    /// Difficulty ratchets applied
    pub speed_ups: u32,
    /// Player hit an obstacle; the session is now over
    pub crashed: bool,
}

/// Advance a running session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Stale frames after game over must not touch anything
    if state.phase != SessionPhase::Running {
        return outcome;
    }

    state.time_ticks += 1;

    // Player movement: pointer placement, then velocity integration
    state.player.velocity = input.steer.velocity(state.player.speed);
    if let Some(x) = input.pointer_x {
        state.player.place_at(x, &state.playfield);
    }
    state.player.integrate(&state.playfield);

    // Spawning
    if state.spawner.advance(state.tuning.spawn_interval_ticks) {
        let id = state.next_entity_id();
        let lane = pick_lane(&mut state.rng, state.tuning.lane_count);
        let rect = lane_rect(
            lane,
            state.tuning.lane_count,
            &state.playfield,
            state.vehicle_size(),
        );
        state.obstacles.push(Obstacle { id, lane, rect });
        outcome.spawned = Some(id);
    }

    // Obstacle movement, scoring and collision
    let mut i = 0;
    while i < state.obstacles.len() {
        let speed = state.difficulty.obstacle_speed;
        let obstacle = &mut state.obstacles[i];
        obstacle.rect.pos.y += speed;

        if obstacle.rect.y() > state.playfield.height {
            state.obstacles.remove(i);
            state.scores.score += 1;
            outcome.passed += 1;

            if state.scores.score % state.tuning.speed_up_every == 0 {
                state.difficulty.ratchet(state.tuning.speed_step);
                outcome.speed_ups += 1;
            }
            continue;
        }

        if overlaps(&state.obstacles[i].rect, &state.player.rect) {
            state.phase = SessionPhase::GameOver;
            outcome.crashed = true;
            return outcome;
        }

        i += 1;
    }

    state
        .road
        .advance(state.difficulty.road_speed, &state.playfield);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Playfield;
    use crate::tuning::Tuning;

    fn running_state() -> GameState {
        let mut state = GameState::new(42, Playfield::new(400.0, 800.0), Tuning::default());
        state.begin_session();
        state
    }

    fn push_obstacle(state: &mut GameState, x: f32, y: f32) -> u32 {
        let id = state.next_entity_id();
        let size = state.vehicle_size();
        state.obstacles.push(Obstacle {
            id,
            lane: 0,
            rect: Rect::new(x, y, size.x, size.y),
        });
        id
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let mut state = GameState::new(42, Playfield::new(400.0, 800.0), Tuning::default());
        let before_x = state.player.rect.x();
        let outcome = tick(
            &mut state,
            &TickInput {
                steer: Steer::Left,
                ..Default::default()
            },
        );
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.rect.x(), before_x);
        assert_eq!(state.spawner.timer(), 0);
    }

    #[test]
    fn test_first_spawn_on_tick_61() {
        let mut state = running_state();
        let input = TickInput::default();
        for _ in 0..60 {
            assert!(tick(&mut state, &input).spawned.is_none());
        }
        assert!(state.obstacles.is_empty());

        let outcome = tick(&mut state, &input);
        assert!(outcome.spawned.is_some());
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at -height, then moved once
        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.rect.y(), -90.0 + 4.0);
        assert!(obstacle.lane < 4);
        assert_eq!(state.player.rect.x(), 175.0);
    }

    #[test]
    fn test_steer_moves_and_clamps() {
        let mut state = running_state();
        let right = TickInput {
            steer: Steer::Right,
            ..Default::default()
        };
        tick(&mut state, &right);
        assert_eq!(state.player.velocity, 7.0);
        assert_eq!(state.player.rect.x(), 182.0);

        for _ in 0..50 {
            tick(&mut state, &right);
        }
        assert_eq!(state.player.rect.x(), 350.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.player.rect.x(), 350.0);
    }

    #[test]
    fn test_pointer_places_directly() {
        let mut state = running_state();
        tick(
            &mut state,
            &TickInput {
                pointer_x: Some(100.0),
                ..Default::default()
            },
        );
        assert_eq!(state.player.rect.x(), 75.0);
        assert_eq!(state.player.velocity, 0.0);

        tick(
            &mut state,
            &TickInput {
                pointer_x: Some(5.0),
                ..Default::default()
            },
        );
        assert_eq!(state.player.rect.x(), 0.0);
    }

    #[test]
    fn test_collision_ends_session() {
        let mut state = running_state();
        let mut rect = state.player.rect;
        // After moving by obstacle speed it sits exactly on the player
        rect.pos.y -= state.difficulty.obstacle_speed;
        push_obstacle(&mut state, rect.x(), rect.y());

        let outcome = tick(&mut state, &TickInput::default());
        assert!(outcome.crashed);
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert_eq!(state.obstacles[0].rect, state.player.rect);

        // Further ticks do nothing
        let ticks = state.time_ticks;
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_collision_short_circuits_rest_of_tick() {
        let mut state = running_state();
        let passing = push_obstacle(&mut state, 25.0, 798.0);
        let rect = state.player.rect;
        push_obstacle(&mut state, rect.x(), rect.y() - 4.0);
        let trailing = push_obstacle(&mut state, 325.0, 100.0);
        let road_before = state.road.lines[0].rect.y();

        let outcome = tick(&mut state, &TickInput::default());
        assert!(outcome.crashed);
        // Removal and score before the crash stand
        assert_eq!(outcome.passed, 1);
        assert_eq!(state.scores.score, 1);
        assert!(state.obstacles.iter().all(|o| o.id != passing));
        // Obstacles after the crash were not advanced, road did not scroll
        let trailing = state.obstacles.iter().find(|o| o.id == trailing).unwrap();
        assert_eq!(trailing.rect.y(), 100.0);
        assert_eq!(state.road.lines[0].rect.y(), road_before);
    }

    #[test]
    fn test_pass_scores_once() {
        let mut state = running_state();
        push_obstacle(&mut state, 25.0, 797.0);

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.passed, 1);
        assert_eq!(state.scores.score, 1);
        assert!(state.obstacles.is_empty());

        tick(&mut state, &TickInput::default());
        assert_eq!(state.scores.score, 1);
    }

    #[test]
    fn test_obstacle_at_bottom_edge_not_yet_passed() {
        let mut state = running_state();
        push_obstacle(&mut state, 25.0, 796.0);
        // Lands exactly on the edge: not past it
        tick(&mut state, &TickInput::default());
        assert_eq!(state.scores.score, 0);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_speed_up_at_ten() {
        let mut state = running_state();
        state.scores.score = 9;
        push_obstacle(&mut state, 25.0, 799.0);

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(state.scores.score, 10);
        assert_eq!(outcome.speed_ups, 1);
        assert_eq!(state.difficulty.obstacle_speed, 4.5);
        assert_eq!(state.difficulty.road_speed, 5.5);

        // 11 does not ratchet again
        push_obstacle(&mut state, 25.0, 799.0);
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(state.scores.score, 11);
        assert_eq!(outcome.speed_ups, 0);
        assert_eq!(state.difficulty.obstacle_speed, 4.5);
    }

    #[test]
    fn test_speed_up_every_multiple_of_ten() {
        let mut state = running_state();
        let mut expected_obstacle = 4.0;
        let mut expected_road = 5.0;

        for score in 1..=40u64 {
            push_obstacle(&mut state, 25.0, 799.0);
            let outcome = tick(&mut state, &TickInput::default());
            assert_eq!(state.scores.score, score);

            if score % 10 == 0 {
                assert_eq!(outcome.speed_ups, 1);
                expected_obstacle += 0.5;
                expected_road += 0.5;
            } else {
                assert_eq!(outcome.speed_ups, 0);
            }
            assert_eq!(state.difficulty.obstacle_speed, expected_obstacle);
            assert_eq!(state.difficulty.road_speed, expected_road);
        }
        assert_eq!(state.difficulty.obstacle_speed, 6.0);
        assert_eq!(state.difficulty.road_speed, 7.0);
    }

    #[test]
    fn test_zero_speed_up_interval_falls_back_to_default() {
        let tuning = Tuning {
            speed_up_every: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(42, Playfield::new(400.0, 800.0), tuning);
        state.begin_session();
        state.scores.score = 9;
        push_obstacle(&mut state, 25.0, 799.0);

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.speed_ups, 1);
    }

    #[test]
    fn test_ratchet_once_per_removal_in_same_tick() {
        let mut state = running_state();
        state.scores.score = 8;
        for _ in 0..3 {
            push_obstacle(&mut state, 25.0, 799.0);
        }
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.passed, 3);
        assert_eq!(state.scores.score, 11);
        assert_eq!(outcome.speed_ups, 1);
        assert_eq!(state.difficulty.obstacle_speed, 4.5);
    }

    #[test]
    fn test_road_scrolls_at_road_speed() {
        let mut state = running_state();
        let y = state.road.lines[0].rect.y();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.road.lines[0].rect.y(), y + 5.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = running_state();
        let mut state2 = running_state();
        let input = TickInput::default();

        for _ in 0..400 {
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        let lanes1: Vec<u32> = state1.obstacles.iter().map(|o| o.lane).collect();
        let lanes2: Vec<u32> = state2.obstacles.iter().map(|o| o.lane).collect();
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(lanes1, lanes2);
        assert_eq!(state1.phase, state2.phase);
    }
}
