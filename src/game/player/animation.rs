// Player animation frames and walk-cycle pacing

use super::config::PlayerConfig;
use super::state::Direction;
use crate::core::math::sign;
use crate::engine::assets::{AssetError, Frame, ImageProvider, SheetRegion, SpriteSheet};
use log::{debug, trace};

/// One frame per facing direction
#[derive(Debug, Clone)]
pub struct DirectionalFrame {
    right: Frame,
    left: Frame,
}

impl DirectionalFrame {
    pub fn new(right: Frame, left: Frame) -> Self {
        Self { right, left }
    }

    /// Use `right` as is and its mirror image for the left
    pub fn mirrored_from(right: Frame) -> Self {
        let left = right.mirrored();
        Self { right, left }
    }

    pub fn get(&self, direction: Direction) -> &Frame {
        match direction {
            Direction::Right => &self.right,
            Direction::Left => &self.left,
        }
    }
}

/// What the player is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Standing,
    /// Index into the walk cycle
    Walking(usize),
    Jumping,
}

/// Every frame the player can display
///
/// Built once when the player is created and never modified afterwards.
/// Left-facing walk and standing frames are mirrors of the right-facing ones;
/// the two jump poses are separate cells of the jump sheet.
#[derive(Debug, Clone)]
pub struct FrameSet {
    walking_right: Vec<Frame>,
    walking_left: Vec<Frame>,
    standing: DirectionalFrame,
    jumping: DirectionalFrame,
}

impl FrameSet {
    /// Cut and mirror all player frames
    ///
    /// Fails if any sheet is too small for the configured layout.
    pub fn build<P: ImageProvider + ?Sized>(
        provider: &P,
        walking_sheet: &SpriteSheet,
        standing_sheet: &SpriteSheet,
        jumping_sheet: &SpriteSheet,
        config: &PlayerConfig,
    ) -> Result<Self, AssetError> {
        let walking_right = Self::build_walk_cycle(provider, walking_sheet, config)?;
        let walking_left = walking_right.iter().map(Frame::mirrored).collect();
        let standing = DirectionalFrame::mirrored_from(provider.full_image(standing_sheet)?);
        let jumping = Self::build_jump_poses(provider, jumping_sheet, config)?;

        debug!(
            "Built player frames: {} walk frames from '{}', poses from '{}' and '{}'",
            walking_right.len(),
            walking_sheet.name(),
            standing_sheet.name(),
            jumping_sheet.name()
        );

        Ok(Self {
            walking_right,
            walking_left,
            standing,
            jumping,
        })
    }

    fn build_walk_cycle<P: ImageProvider + ?Sized>(
        provider: &P,
        sheet: &SpriteSheet,
        config: &PlayerConfig,
    ) -> Result<Vec<Frame>, AssetError> {
        let mut frames = config
            .walk_grid
            .cells()
            .map(|region| provider.get_image(sheet, region))
            .collect::<Result<Vec<_>, _>>()?;

        // The final cells of the sheet are not part of the cycle
        frames.truncate(config.walk_frame_count());

        if frames.is_empty() {
            return Err(AssetError::LoadError(format!(
                "walk cycle from '{}' has no frames",
                sheet.name()
            )));
        }

        Ok(frames)
    }

    fn build_jump_poses<P: ImageProvider + ?Sized>(
        provider: &P,
        sheet: &SpriteSheet,
        config: &PlayerConfig,
    ) -> Result<DirectionalFrame, AssetError> {
        let width = config.jump_cell_width;
        let height = config.jump_cell_height;

        let right = provider.get_image(sheet, SheetRegion::new(0, 0, width, height))?;
        let left = provider.get_image(sheet, SheetRegion::new(width, 0, width, height))?;

        Ok(DirectionalFrame::new(right, left))
    }

    /// Walk cycle for a direction
    pub fn walking(&self, direction: Direction) -> &[Frame] {
        match direction {
            Direction::Right => &self.walking_right,
            Direction::Left => &self.walking_left,
        }
    }

    /// Number of frames in the walk cycle (same for both directions)
    pub fn walk_cycle_len(&self) -> usize {
        self.walking_right.len()
    }

    pub fn standing(&self, direction: Direction) -> &Frame {
        self.standing.get(direction)
    }

    pub fn jumping(&self, direction: Direction) -> &Frame {
        self.jumping.get(direction)
    }

    /// Frame for a pose and facing, `None` for a walk index past the cycle
    pub fn frame(&self, pose: Pose, direction: Direction) -> Option<&Frame> {
        match pose {
            Pose::Standing => Some(self.standing(direction)),
            Pose::Walking(index) => self.walking(direction).get(index),
            Pose::Jumping => Some(self.jumping(direction)),
        }
    }
}

/// Milliseconds that must pass before the walk cycle advances
///
/// Horizontal speed in either direction shortens the interval.
pub fn walk_frame_interval(config: &PlayerConfig, x_vel: f32, dt: f32) -> f32 {
    config.slowest_frequency - x_vel * config.pacing_factor * dt * sign(x_vel)
}

/// Position in the walk cycle and when it last moved
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WalkCursor {
    index: usize,
    /// Clock value (ms) of the last step
    timer: f32,
}

impl WalkCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Restart at the first frame as of `now`
    pub fn reset(&mut self, now: f32) {
        self.index = 0;
        self.timer = now;
    }

    /// Step once if strictly more than `interval` ms passed since the last step
    ///
    /// Wraps to the first frame after the last one. Returns whether it moved.
    pub fn advance(&mut self, now: f32, interval: f32, cycle_len: usize) -> bool {
        if now - self.timer <= interval {
            return false;
        }

        self.timer = now;
        self.index = if self.index + 1 < cycle_len {
            self.index + 1
        } else {
            0
        };
        trace!("Walk cycle advanced to frame {} at {:.1}ms", self.index, now);

        true
    }
}
