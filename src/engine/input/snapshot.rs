// Per-frame view of pressed actions

use super::action::Action;

/// Which actions were held when the frame began
///
/// Anything not explicitly pressed reads as released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySnapshot {
    move_left: bool,
    move_right: bool,
    jump: bool,
}

impl KeySnapshot {
    /// Snapshot with nothing pressed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot with exactly the given actions pressed
    pub fn from_actions<I: IntoIterator<Item = Action>>(actions: I) -> Self {
        actions
            .into_iter()
            .fold(Self::empty(), |snapshot, action| snapshot.with(action))
    }

    /// Copy of this snapshot with `action` pressed
    pub fn with(mut self, action: Action) -> Self {
        *self.slot(action) = true;
        self
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
        }
    }

    fn slot(&mut self, action: Action) -> &mut bool {
        match action {
            Action::MoveLeft => &mut self.move_left,
            Action::MoveRight => &mut self.move_right,
            Action::Jump => &mut self.jump,
        }
    }
}
