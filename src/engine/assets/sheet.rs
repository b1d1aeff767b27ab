// Sprite sheets and the frames cut from them

use super::SheetRegion;
use image::{imageops, RgbaImage};
use std::sync::Arc;

/// A loaded sprite sheet
///
/// Cloning is cheap; the pixel data is shared.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    name: Arc<str>,
    image: Arc<RgbaImage>,
}

impl SpriteSheet {
    pub fn new(name: &str, image: RgbaImage) -> Self {
        Self {
            name: Arc::from(name),
            image: Arc::new(image),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether `region` can be cut from this sheet
    pub fn contains(&self, region: SheetRegion) -> bool {
        region.fits_within(self.width(), self.height())
    }
}

/// A single renderable image cut from a sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    image: RgbaImage,
}

impl Frame {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// A horizontally mirrored copy of this frame
    pub fn mirrored(&self) -> Frame {
        Frame::new(imageops::flip_horizontal(&self.image))
    }
}
