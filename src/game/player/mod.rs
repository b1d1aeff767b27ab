// Player character
//
// This module contains everything related to the controllable player:
// - Locomotion states and facing direction
// - Tuning constants and sprite layout
// - Animation frame sets and walk-cycle pacing
// - The per-frame controller driving all of the above

pub mod animation;
pub mod config;
pub mod controller;
pub mod state;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use animation::{FrameSet, Pose, WalkCursor};
pub use config::{PlayerConfig, BASE_CONFIG};
pub use controller::Player;
pub use state::{Direction, LocomotionState};
