// Asset management system
//
// Loads sprite sheets from disk into a name-keyed library and cuts them into
// frames. Sheets are read once at startup; nothing here runs per frame.

mod atlas;
mod loader;
mod manager;
mod provider;
mod sheet;

pub use atlas::{GridLayout, SheetRegion};
pub use loader::AssetLoader;
pub use manager::GraphicsLibrary;
pub use provider::{ImageProvider, SheetSlicer};
pub use sheet::{Frame, SpriteSheet};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error(
        "Region {width}x{height} at ({x}, {y}) lies outside sheet '{sheet}' \
         ({sheet_width}x{sheet_height})"
    )]
    RegionOutOfBounds {
        sheet: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
