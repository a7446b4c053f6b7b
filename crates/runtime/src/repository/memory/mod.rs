//! In-memory repository implementations for testing and development.

mod favorites;

pub use favorites::InMemoryFavoritesRepository;
