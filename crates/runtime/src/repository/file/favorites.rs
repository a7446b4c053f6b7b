//! File-based FavoritesRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use arena_core::Character;

use crate::repository::{FavoritesRepository, RepositoryError, Result};

/// Stores the favorites list as a single JSON array.
///
/// Writes go to a sibling temp file first and are then renamed over the
/// target, so a crash mid-write leaves the previous list intact.
pub struct FileFavoritesRepository {
    path: PathBuf,
}

impl FileFavoritesRepository {
    pub const FILE_NAME: &'static str = "favorites.json";

    /// Use `path` as the favorites file, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    /// Use `favorites.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesRepository for FileFavoritesRepository {
    fn load(&self) -> Result<Vec<Character>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let favorites: Vec<Character> = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            "Loaded {} favorites from {}",
            favorites.len(),
            self.path.display()
        );

        Ok(favorites)
    }

    fn save(&self, favorites: &[Character]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(favorites)?;
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved {} favorites to {}",
            favorites.len(),
            self.path.display()
        );

        Ok(())
    }
}
