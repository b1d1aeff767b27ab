// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all in-game actions the player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
    ]
}
