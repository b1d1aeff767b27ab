// Input handling system
//
// Turns winit keyboard events into the per-frame key snapshot the player
// reads.
//
// ## Architecture
//
// - `action`: Game actions and default key bindings
// - `config`: Key to action bindings
// - `manager`: Tracks held keys and builds snapshots
// - `snapshot`: Immutable per-frame view of pressed actions
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per frame, hand a snapshot to the player
// let keys = input.snapshot();
// if keys.is_pressed(Action::Jump) {
//     // ...
// }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::Action;
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::KeySnapshot;
