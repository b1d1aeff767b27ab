// In-memory sheets laid out like the real player art
//
// Every pixel stores its position inside its cell in red/green and a cell tag
// in blue, so tests can tell which cell a frame came from and whether it was
// mirrored.

use super::config::BASE_CONFIG;
use crate::engine::assets::{Frame, SpriteSheet};
use image::{Rgba, RgbaImage};

pub const STANDING_SIZE: (u32, u32) = (66, 92);

/// Walking sheet; the blue channel holds the row-major cell index
pub fn walking_sheet() -> SpriteSheet {
    let grid = BASE_CONFIG.walk_grid;
    let (width, height) = grid.required_size();
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let cell = (y / grid.cell_height) * grid.columns + x / grid.cell_width;
        Rgba([
            (x % grid.cell_width) as u8,
            (y % grid.cell_height) as u8,
            cell as u8,
            255,
        ])
    });
    SpriteSheet::new(BASE_CONFIG.walking_sheet, image)
}

pub fn standing_sheet() -> SpriteSheet {
    let (width, height) = STANDING_SIZE;
    let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 200, 255]));
    SpriteSheet::new(BASE_CONFIG.standing_sheet, image)
}

/// Jumping sheet; blue is 100 in the right-facing cell and 101 in the left
pub fn jumping_sheet() -> SpriteSheet {
    let cell_width = BASE_CONFIG.jump_cell_width;
    let image = RgbaImage::from_fn(cell_width * 2, BASE_CONFIG.jump_cell_height, |x, y| {
        Rgba([
            (x % cell_width) as u8,
            y as u8,
            100 + (x / cell_width) as u8,
            255,
        ])
    });
    SpriteSheet::new(BASE_CONFIG.jumping_sheet, image)
}

/// Tag stored in the blue channel of a frame's top-left pixel
pub fn cell_tag(frame: &Frame) -> u8 {
    frame.image().get_pixel(0, 0).0[2]
}
