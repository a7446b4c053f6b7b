//! Repository contract for the favorites store.

use arena_core::Character;

use super::error::Result;

/// Persistent favorites list.
///
/// The whole list is read and written at once; order is preserved.
pub trait FavoritesRepository: Send + Sync {
    /// Load the saved list. A store that was never written yields an empty list.
    fn load(&self) -> Result<Vec<Character>>;

    /// Replace the saved list.
    fn save(&self, favorites: &[Character]) -> Result<()>;
}
