//! Cancellable frame loop
//!
//! Each session start hands out a fresh `FrameTicket`. A frame callback
//! only runs (and only reschedules itself) while its ticket is current,
//! so cancelling the loop can never race with an already queued frame.

/// Proof that a frame callback belongs to the live loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket(u64);

impl FrameTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Owner of the loop generation counter
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    generation: u64,
    active: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new loop, invalidating every ticket handed out before
    pub fn begin(&mut self) -> FrameTicket {
        self.generation += 1;
        self.active = true;
        FrameTicket(self.generation)
    }

    /// Stop the loop; outstanding tickets go stale
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Whether a frame holding `ticket` may run
    pub fn is_current(&self, ticket: FrameTicket) -> bool {
        self.active && ticket.0 == self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
