//! Session controller
//!
//! Owns the simulation state together with its collaborators (input,
//! frame scheduler, high score store, presentation surface) and exposes
//! the commands the page wires up: start/restart, input, and frames.

use crate::persistence::HighScoreStore;
use crate::platform::{FrameScheduler, FrameTicket, InputAdapter, InputEvent};
use crate::sim::{GameState, Playfield, SessionPhase, tick};
use crate::ui::{Presenter, Snapshot};

/// A running game: state plus everything it talks to
pub struct Game<S: HighScoreStore, P: Presenter> {
    state: GameState,
    input: InputAdapter,
    scheduler: FrameScheduler,
    store: S,
    presenter: P,
}

impl<S: HighScoreStore, P: Presenter> Game<S, P> {
    /// Wrap an idle state, reading the stored high score
    pub fn new(mut state: GameState, store: S, presenter: P) -> Self {
        state.scores.high_score = store.load_high_score();
        Self {
            state,
            input: InputAdapter::new(),
            scheduler: FrameScheduler::new(),
            store,
            presenter,
        }
    }

    /// Start (or restart) a session.
    ///
    /// Resets the session, runs the first tick immediately and returns the
    /// ticket the frame loop must present. Ignored while already running.
    pub fn start(&mut self) -> Option<FrameTicket> {
        let restart = match self.state.phase {
            SessionPhase::Running => {
                log::debug!("Start ignored: session already running");
                return None;
            }
            SessionPhase::Idle => false,
            SessionPhase::GameOver => true,
        };

        self.state.begin_session();
        self.input.clear_pointer();
        let ticket = self.scheduler.begin();

        log::info!(
            "Session {} (loop {})",
            if restart { "restarted" } else { "started" },
            ticket.generation()
        );
        self.presenter.session_started(restart);
        self.step();

        Some(ticket)
    }

    /// Alias of `start`, for the game-over screen
    pub fn restart(&mut self) -> Option<FrameTicket> {
        self.start()
    }

    /// Queue an input event for the next tick
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// Run one scheduled frame.
    ///
    /// Returns true if the caller should schedule another frame with the
    /// same ticket. A stale ticket runs nothing.
    pub fn frame(&mut self, ticket: FrameTicket) -> bool {
        if !self.scheduler.is_current(ticket) {
            return false;
        }
        self.step();
        self.scheduler.is_current(ticket)
    }

    /// Drive up to `max_frames` frames without a browser; returns frames run
    pub fn run_frames(&mut self, ticket: FrameTicket, max_frames: u32) -> u32 {
        let mut frames = 0;
        while frames < max_frames && self.scheduler.is_current(ticket) {
            self.frame(ticket);
            frames += 1;
        }
        frames
    }

    /// Container resized
    pub fn resize(&mut self, playfield: Playfield) {
        self.state.resize(playfield);
    }

    fn step(&mut self) {
        let input = self.input.take_tick_input();
        let outcome = tick(&mut self.state, &input);

        if outcome.speed_ups > 0 {
            log::debug!(
                "Speed up at score {}: obstacles {:.1}, road {:.1}",
                self.state.scores.score,
                self.state.difficulty.obstacle_speed,
                self.state.difficulty.road_speed
            );
        }

        if outcome.crashed {
            self.finish_session();
            return;
        }

        let snapshot = Snapshot::capture(&self.state);
        self.presenter.frame(&snapshot);
    }

    fn finish_session(&mut self) {
        self.scheduler.cancel();

        let scores = &mut self.state.scores;
        if scores.settle() {
            if let Err(e) = self.store.save_high_score(scores.high_score) {
                log::warn!("Could not save high score {}: {}", scores.high_score, e);
            }
        }

        log::info!(
            "Game over: score {} (best {}) after {} ticks",
            scores.score,
            scores.high_score,
            self.state.time_ticks
        );
        self.presenter.game_over(scores.score, scores.high_score);
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
