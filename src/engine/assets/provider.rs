// Image provider: turns sheets into frames

use super::{AssetError, Frame, SheetRegion, SpriteSheet};
use image::imageops;

/// Source of frames cut from sprite sheets
///
/// Injected wherever frames are built so callers never hold on to the
/// slicing behaviour itself.
pub trait ImageProvider {
    /// Cut `region` out of `sheet` as a standalone frame
    fn get_image(&self, sheet: &SpriteSheet, region: SheetRegion) -> Result<Frame, AssetError>;

    /// The whole sheet as one pre-cut frame
    fn full_image(&self, sheet: &SpriteSheet) -> Result<Frame, AssetError>;
}

/// Stateless cropper over in-memory sheets
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetSlicer;

impl ImageProvider for SheetSlicer {
    fn get_image(&self, sheet: &SpriteSheet, region: SheetRegion) -> Result<Frame, AssetError> {
        // crop_imm clamps silently, so undersized sheets must be rejected first
        if !sheet.contains(region) {
            return Err(AssetError::RegionOutOfBounds {
                sheet: sheet.name().to_string(),
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                sheet_width: sheet.width(),
                sheet_height: sheet.height(),
            });
        }

        let cropped = imageops::crop_imm(
            sheet.image(),
            region.x,
            region.y,
            region.width,
            region.height,
        )
        .to_image();

        Ok(Frame::new(cropped))
    }

    fn full_image(&self, sheet: &SpriteSheet) -> Result<Frame, AssetError> {
        if sheet.width() == 0 || sheet.height() == 0 {
            return Err(AssetError::LoadError(format!(
                "sheet '{}' is empty",
                sheet.name()
            )));
        }
        Ok(Frame::new(sheet.image().clone()))
    }
}
