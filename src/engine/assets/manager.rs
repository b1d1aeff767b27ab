// Name-keyed library of loaded sprite sheets

use super::{AssetError, AssetLoader, SpriteSheet};
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashMap;

/// All sprite sheets available to the game, keyed by file stem
///
/// Filled once at startup; lookups hand out cheap clones.
#[derive(Debug, Default)]
pub struct GraphicsLibrary {
    sheets: HashMap<String, SpriteSheet>,
}

impl GraphicsLibrary {
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    /// Load every sheet in the loader's graphics directory
    pub fn load(loader: &AssetLoader) -> Result<Self> {
        let mut library = Self::new();

        let dir = loader.graphics_dir();
        let paths = loader
            .list_sheets()
            .with_context(|| format!("Failed to list sheets in {}", dir.display()))?;

        for path in paths {
            let sheet = loader
                .load_sheet(&path)
                .with_context(|| format!("Failed to load sheet {}", path.display()))?;
            library.insert(sheet);
        }

        if library.is_empty() {
            warn!("No sprite sheets found in {}", dir.display());
        } else {
            info!(
                "Loaded {} sprite sheets from {}: {}",
                library.len(),
                dir.display(),
                library.names().join(", ")
            );
        }

        Ok(library)
    }

    /// Add a sheet, replacing any sheet with the same name
    pub fn insert(&mut self, sheet: SpriteSheet) {
        self.sheets.insert(sheet.name().to_string(), sheet);
    }

    /// Get a sheet by name
    pub fn get(&self, name: &str) -> Result<&SpriteSheet, AssetError> {
        self.sheets
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    /// Names of all loaded sheets, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sheets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
