//! In-memory FavoritesRepository implementation for tests and local runs.

use std::sync::RwLock;

use arena_core::Character;

use crate::repository::{FavoritesRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryFavoritesRepository {
    favorites: RwLock<Vec<Character>>,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved list.
    pub fn with_favorites(favorites: Vec<Character>) -> Self {
        Self {
            favorites: RwLock::new(favorites),
        }
    }
}

impl FavoritesRepository for InMemoryFavoritesRepository {
    fn load(&self) -> Result<Vec<Character>> {
        let favorites = self
            .favorites
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(favorites.clone())
    }

    fn save(&self, favorites: &[Character]) -> Result<()> {
        let mut current = self
            .favorites
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = favorites.to_vec();
        Ok(())
    }
}
