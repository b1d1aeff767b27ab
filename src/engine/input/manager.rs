// Input manager - tracks held keys between frames

use super::config::InputConfig;
use super::snapshot::KeySnapshot;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard state for the local player
///
/// Keys are tracked rather than actions so that releasing one of two keys
/// bound to the same action leaves the action held.
#[derive(Debug, Default)]
pub struct InputManager {
    /// Key bindings
    config: InputConfig,

    /// Keys currently held down
    held_keys: HashSet<KeyCode>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            held_keys: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes are bindable
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => self.press_key(key_code),
                ElementState::Released => self.release_key(key_code),
            }
        }
    }

    /// Register a key going down
    pub fn press_key(&mut self, key: KeyCode) {
        self.held_keys.insert(key);
    }

    /// Register a key going up
    pub fn release_key(&mut self, key: KeyCode) {
        self.held_keys.remove(&key);
    }

    /// Snapshot of the held actions for this frame
    pub fn snapshot(&self) -> KeySnapshot {
        KeySnapshot::from_actions(
            self.held_keys
                .iter()
                .filter_map(|key| self.config.get_action(*key)),
        )
    }

    /// Release every key (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held_keys.clear();
    }
}
