//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events
//! - Frame scheduling
//! - Storage (LocalStorage on web)

pub mod input;
pub mod scheduler;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{Direction, InputAdapter, InputEvent};
pub use scheduler::{FrameScheduler, FrameTicket};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
