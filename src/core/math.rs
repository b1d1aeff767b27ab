// Math utilities and helper functions

/// Axis-aligned screen rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the left screen edge with its top edge on `y`
    pub fn with_top(width: u32, height: u32, y: i32) -> Self {
        Self::new(0, y, width, height)
    }
}

/// Sign of a value as -1.0, 0.0 or 1.0
///
/// Unlike `f32::signum`, zero maps to zero.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
