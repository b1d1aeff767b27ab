// Player tuning values and sprite layout

use crate::engine::assets::GridLayout;

/// Fixed values the player is built and driven with
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    // Animation
    /// Milliseconds between walk frames when standing still horizontally
    pub slowest_frequency: f32,
    /// How strongly horizontal speed shortens the walk frame interval
    pub pacing_factor: f32,

    // Vertical motion
    /// Vertical velocity applied on jump entry (negative is up)
    pub start_jump_vel: f32,
    /// Downward acceleration; not integrated by the controller
    pub gravity: f32,
    /// Name of the falling state. No transition ever enters it, so it has no
    /// `LocomotionState` variant.
    pub free_fall_state: &'static str,

    // Sprite layout
    /// Cell grid of the walking sheet
    pub walk_grid: GridLayout,
    /// Cells dropped from the end of the walk cycle
    pub dropped_walk_cells: usize,
    /// Size of each of the two cells in the jumping sheet
    pub jump_cell_width: u32,
    pub jump_cell_height: u32,

    // Placement
    /// Top edge of the player's screen rectangle
    pub baseline_y: i32,

    // Sheet names in the graphics library
    pub walking_sheet: &'static str,
    pub standing_sheet: &'static str,
    pub jumping_sheet: &'static str,
}

pub const BASE_CONFIG: PlayerConfig = PlayerConfig {
    slowest_frequency: 100.0,
    pacing_factor: 11.0,

    start_jump_vel: -1020.0,
    gravity: 2520.0,
    free_fall_state: "free fall",

    // 6 x 2 grid, last cell left out: 11 walk frames
    walk_grid: GridLayout::new(6, 2, 72, 97),
    dropped_walk_cells: 1,
    jump_cell_width: 66,
    jump_cell_height: 97,

    baseline_y: 535,

    walking_sheet: "p1_walking",
    standing_sheet: "p1_stand",
    jumping_sheet: "p1_jumping",
};

impl Default for PlayerConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl PlayerConfig {
    /// Number of frames in the walk cycle
    pub fn walk_frame_count(&self) -> usize {
        self.walk_grid
            .cell_count()
            .saturating_sub(self.dropped_walk_cells)
    }
}
