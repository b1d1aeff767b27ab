// Player controller: per-frame state machine

use super::animation::{walk_frame_interval, FrameSet, Pose, WalkCursor};
use super::config::PlayerConfig;
use super::state::{Direction, LocomotionState};
use crate::core::math::Rect;
use crate::engine::assets::{AssetError, Frame, GraphicsLibrary, ImageProvider, SpriteSheet};
use crate::engine::input::{Action, KeySnapshot};
use glam::Vec2;
use log::{debug, info};

/// The user-controlled player character
///
/// Owns its frames, locomotion state and walk-cycle cursor. The game loop
/// calls [`Player::update`] once per frame and the renderer then reads
/// [`Player::current_frame`] and [`Player::rect`].
#[derive(Debug)]
pub struct Player {
    config: PlayerConfig,
    frames: FrameSet,

    state: LocomotionState,
    direction: Direction,
    /// x only paces the walk cycle; y is set when a jump starts
    velocity: Vec2,
    cursor: WalkCursor,

    /// Pose and facing picked for display this frame
    shown: (Pose, Direction),
    rect: Rect,
}

impl Player {
    /// Build the player, cutting every animation frame up front
    pub fn new<P: ImageProvider + ?Sized>(
        provider: &P,
        walking_sheet: &SpriteSheet,
        standing_sheet: &SpriteSheet,
        jumping_sheet: &SpriteSheet,
        config: PlayerConfig,
    ) -> Result<Self, AssetError> {
        let frames = FrameSet::build(
            provider,
            walking_sheet,
            standing_sheet,
            jumping_sheet,
            &config,
        )?;

        let direction = Direction::default();
        let standing = frames.standing(direction);
        let rect = Rect::with_top(standing.width(), standing.height(), config.baseline_y);

        info!(
            "Player created with {} walk frames at y={}",
            frames.walk_cycle_len(),
            rect.y
        );

        Ok(Self {
            config,
            frames,
            state: LocomotionState::default(),
            direction,
            velocity: Vec2::ZERO,
            cursor: WalkCursor::new(),
            shown: (Pose::Standing, direction),
            rect,
        })
    }

    /// Build the player from the sheets named in `config`
    pub fn from_library<P: ImageProvider + ?Sized>(
        provider: &P,
        library: &GraphicsLibrary,
        config: PlayerConfig,
    ) -> Result<Self, AssetError> {
        let walking = library.get(config.walking_sheet)?;
        let standing = library.get(config.standing_sheet)?;
        let jumping = library.get(config.jumping_sheet)?;

        Self::new(provider, walking, standing, jumping, config)
    }

    /// Advance the player by one frame
    ///
    /// `current_time` is a monotonic clock in milliseconds, `dt` the seconds
    /// since the previous frame.
    pub fn update(&mut self, keys: &KeySnapshot, current_time: f32, dt: f32) {
        match self.state {
            LocomotionState::Standing => self.standing(keys, current_time),
            LocomotionState::Walking => self.walking(keys, current_time, dt),
            LocomotionState::Jumping => self.jumping(keys),
        }
    }

    fn standing(&mut self, keys: &KeySnapshot, current_time: f32) {
        self.show(Pose::Standing);

        if keys.is_pressed(Action::MoveRight) {
            self.start_walking(Direction::Right, current_time);
        } else if keys.is_pressed(Action::MoveLeft) {
            self.start_walking(Direction::Left, current_time);
        }
        self.check_jump(keys);
    }

    fn walking(&mut self, keys: &KeySnapshot, current_time: f32, dt: f32) {
        self.show(Pose::Walking(self.cursor.index()));
        self.animate(current_time, dt);

        self.face(keys);
        self.check_jump(keys);
    }

    fn jumping(&mut self, keys: &KeySnapshot) {
        self.show(Pose::Jumping);
        self.face(keys);
    }

    fn show(&mut self, pose: Pose) {
        self.shown = (pose, self.direction);
    }

    /// Right wins when both directions are held
    fn face(&mut self, keys: &KeySnapshot) {
        if keys.is_pressed(Action::MoveRight) {
            self.direction = Direction::Right;
        } else if keys.is_pressed(Action::MoveLeft) {
            self.direction = Direction::Left;
        }
    }

    fn start_walking(&mut self, direction: Direction, current_time: f32) {
        self.cursor.reset(current_time);
        self.direction = direction;
        self.transition(LocomotionState::Walking);
    }

    fn animate(&mut self, current_time: f32, dt: f32) {
        let interval = walk_frame_interval(&self.config, self.velocity.x, dt);
        self.cursor.advance(current_time, interval, self.frames.walk_cycle_len());
    }

    fn check_jump(&mut self, keys: &KeySnapshot) {
        if keys.is_pressed(Action::Jump) && self.state.can_jump() {
            self.enter_jump_state();
        }
    }

    fn enter_jump_state(&mut self) {
        self.transition(LocomotionState::Jumping);
        self.velocity.y = self.config.start_jump_vel;
    }

    fn transition(&mut self, next: LocomotionState) {
        if next != self.state {
            debug!(
                "Player {} -> {} facing {}",
                self.state.name(),
                next.name(),
                self.direction.name()
            );
            self.state = next;
        }
    }

    /// Set horizontal velocity for walk pacing
    ///
    /// Nothing in the controller moves the player sideways; whoever does
    /// reports the speed here.
    pub fn set_horizontal_velocity(&mut self, x_vel: f32) {
        self.velocity.x = x_vel;
    }

    /// Frame picked by the last update
    pub fn current_frame(&self) -> &Frame {
        let (pose, direction) = self.shown;
        // The walk cursor wraps inside the cycle, so the fallback is never taken
        self.frames
            .frame(pose, direction)
            .unwrap_or_else(|| self.frames.standing(direction))
    }

    /// Pose picked by the last update
    pub fn pose(&self) -> Pose {
        self.shown.0
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Index into the walk cycle
    pub fn animation_index(&self) -> usize {
        self.cursor.index()
    }

    /// Clock value (ms) of the last walk-cycle step
    pub fn animation_timer(&self) -> f32 {
        self.cursor.timer()
    }

    /// Screen rectangle; fixed at the baseline
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }
}
