// Key to action bindings

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keyboard keys to game actions
///
/// Several keys may trigger the same action; each key triggers at most one.
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,
}

impl InputConfig {
    /// Create a configuration from a list of bindings
    ///
    /// A key listed twice keeps its last action.
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing its previous action
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
