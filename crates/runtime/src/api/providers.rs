//! Asynchronous abstractions over the arena's external collaborators.
//!
//! Runtime users plug in implementations so the same worker and browser can
//! run against the live catalog service, canned fixtures in tests, or any
//! other identity backend.
use async_trait::async_trait;

use arena_core::{CatalogQuery, CharacterPage};

use super::errors::FetchError;
use crate::session::SessionError;

/// Source of catalog pages.
///
/// Implementations:
/// - [`crate::catalog::HttpCatalog`] for the public character service
/// - in-memory stubs for tests
#[async_trait]
pub trait CharacterCatalog: Send + Sync {
    /// Fetch one page of characters, optionally filtered by name.
    ///
    /// An empty result set is reported as [`FetchError::Empty`] rather than
    /// an empty page.
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CharacterPage, FetchError>;
}

/// Identity backend the client signs out of.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn sign_out(&self) -> Result<(), SessionError>;
}
