// Asset loading functionality

use super::{AssetError, SpriteSheet};
use log::debug;
use std::path::{Path, PathBuf};

/// Directory under the asset root that holds sprite sheets
pub const GRAPHICS_DIRECTORY: &str = "graphics";

/// File extensions recognised as sprite sheets
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and loading sprite sheets
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory sprite sheets are read from
    pub fn graphics_dir(&self) -> PathBuf {
        self.base_path.join(GRAPHICS_DIRECTORY)
    }

    /// Whether a path has one of the recognised image extensions
    pub fn is_image_file(path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Load one sheet from disk, named after its file stem
    pub fn load_sheet(&self, path: &Path) -> Result<SpriteSheet, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .ok_or_else(|| AssetError::LoadError(format!("No file name in {}", path.display())))?;

        let image = image::open(path)?.to_rgba8();

        debug!(
            "Loaded sheet '{}' ({}x{}) from {}",
            name,
            image.width(),
            image.height(),
            path.display()
        );

        Ok(SpriteSheet::new(&name, image))
    }

    /// List all sheet files in the graphics directory, sorted by name
    pub fn list_sheets(&self) -> Result<Vec<PathBuf>, AssetError> {
        let dir = self.graphics_dir();

        if !dir.exists() {
            return Err(AssetError::NotFound(dir.to_string_lossy().to_string()));
        }

        let mut sheets = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && Self::is_image_file(&path) {
                sheets.push(path);
            }
        }
        sheets.sort();

        Ok(sheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "side-scroller-loader-{}-{}",
            label,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join(GRAPHICS_DIRECTORY)).unwrap();
        dir
    }

    #[test]
    fn test_graphics_dir() {
        let loader = AssetLoader::new("/game/resources");
        assert_eq!(
            loader.graphics_dir().to_str().unwrap(),
            "/game/resources/graphics"
        );
    }

    #[test]
    fn test_is_image_file() {
        assert!(AssetLoader::is_image_file(Path::new("a/p1_stand.png")));
        assert!(AssetLoader::is_image_file(Path::new("a/P1_STAND.PNG")));
        assert!(AssetLoader::is_image_file(Path::new("a/sheet.jpeg")));
        assert!(!AssetLoader::is_image_file(Path::new("a/readme.txt")));
        assert!(!AssetLoader::is_image_file(Path::new("a/noext")));
    }

    #[test]
    fn test_load_sheet_named_by_stem() {
        let dir = scratch_dir("stem");
        let loader = AssetLoader::new(&dir);
        let path = loader.graphics_dir().join("p1_stand.png");
        RgbaImage::from_pixel(5, 7, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let sheet = loader.load_sheet(&path).unwrap();
        assert_eq!(sheet.name(), "p1_stand");
        assert_eq!((sheet.width(), sheet.height()), (5, 7));
        assert_eq!(sheet.image().get_pixel(4, 6), &Rgba([1, 2, 3, 255]));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_sheet() {
        let dir = scratch_dir("missing");
        let loader = AssetLoader::new(&dir);
        let err = loader
            .load_sheet(&loader.graphics_dir().join("nope.png"))
            .unwrap_err();

        assert!(matches!(err, AssetError::NotFound(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_sheets_skips_other_files() {
        let dir = scratch_dir("list");
        let loader = AssetLoader::new(&dir);
        RgbaImage::new(1, 1).save(loader.graphics_dir().join("b.png")).unwrap();
        RgbaImage::new(1, 1).save(loader.graphics_dir().join("a.png")).unwrap();
        std::fs::write(loader.graphics_dir().join("notes.txt"), "not a sheet").unwrap();

        let sheets = loader.list_sheets().unwrap();
        let names: Vec<_> = sheets
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_sheets_without_graphics_dir() {
        let loader = AssetLoader::new(std::env::temp_dir().join("side-scroller-does-not-exist"));
        assert!(matches!(loader.list_sheets(), Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_unreadable_graphics_dir_is_io_error() {
        let dir = std::env::temp_dir().join(format!(
            "side-scroller-loader-file-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        // A file where the directory should be
        std::fs::write(dir.join(GRAPHICS_DIRECTORY), "not a directory").unwrap();

        let loader = AssetLoader::new(&dir);
        assert!(matches!(loader.list_sheets(), Err(AssetError::Io(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_sheet_is_image_error() {
        let dir = scratch_dir("corrupt");
        let loader = AssetLoader::new(&dir);
        let path = loader.graphics_dir().join("broken.png");
        std::fs::write(&path, "not a png").unwrap();

        assert!(matches!(loader.load_sheet(&path), Err(AssetError::Image(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
