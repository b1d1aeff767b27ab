// Player locomotion states and facing

/// Which way the player faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Represents the current behavior of the player
///
/// There is no state that leaves `Jumping`: the controller launches a jump
/// but never lands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionState {
    /// Still, showing the standing pose
    Standing,
    /// Cycling through the walk animation
    Walking,
    /// Launched upward, holding the jump pose
    Jumping,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::Standing
    }
}

impl LocomotionState {
    pub const ALL: [LocomotionState; 3] = [
        LocomotionState::Standing,
        LocomotionState::Walking,
        LocomotionState::Jumping,
    ];

    /// Check if the player is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Standing | Self::Walking)
    }

    /// Check if a jump can start from this state
    pub fn can_jump(&self) -> bool {
        self.is_grounded()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::Walking => "walking",
            Self::Jumping => "jumping",
        }
    }
}
