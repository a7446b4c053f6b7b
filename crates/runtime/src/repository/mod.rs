//! Repository layer for data that outlives a session.
//!
//! Only the favorites list is persisted. Round state is never saved; a new
//! session always starts from `loading`.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileFavoritesRepository;
pub use memory::InMemoryFavoritesRepository;
pub use traits::FavoritesRepository;
