//! Catalog browsing with search, paging and favorites.
//!
//! [`CatalogBrowser`] keeps the visible page, the page cursor, the active
//! search term and the favorites list. Fetch failures clear the visible page
//! and are returned as non-fatal errors; the cursor stays where it was so the
//! user can retry or move on.

use std::sync::Arc;

use arena_core::{CatalogQuery, Character, CharacterId, Favorites, PageCursor};

use crate::api::{CharacterCatalog, Result, RuntimeError};
use crate::events::{CatalogEvent, EventBus};
use crate::repository::FavoritesRepository;

pub struct CatalogBrowser {
    catalog: Arc<dyn CharacterCatalog>,
    repository: Arc<dyn FavoritesRepository>,
    event_bus: EventBus,
    cursor: PageCursor,
    search: Option<String>,
    visible: Vec<Character>,
    favorites: Favorites,
}

impl CatalogBrowser {
    pub fn new(
        catalog: Arc<dyn CharacterCatalog>,
        repository: Arc<dyn FavoritesRepository>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            catalog,
            repository,
            event_bus,
            cursor: PageCursor::new(),
            search: None,
            visible: Vec::new(),
            favorites: Favorites::new(),
        }
    }

    /// Load saved favorites and show the first unfiltered page.
    ///
    /// An unreadable favorites store is logged and treated as empty.
    pub async fn open(&mut self) -> Result<&[Character]> {
        self.favorites = match self.repository.load() {
            Ok(saved) => Favorites::from_vec(saved),
            Err(error) => {
                tracing::warn!(%error, "Failed to load favorites");
                Favorites::new()
            }
        };

        self.search = None;
        self.cursor = PageCursor::new();
        self.fetch().await
    }

    /// Filter by name starting from page 1. A blank term clears the filter.
    pub async fn search(&mut self, term: &str) -> Result<&[Character]> {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self.cursor.search();
        self.fetch().await
    }

    /// Move to the next page. On the last page the current list is returned as is.
    pub async fn next_page(&mut self) -> Result<&[Character]> {
        if self.cursor.next().is_none() {
            return Ok(&self.visible);
        }
        self.fetch().await
    }

    /// Move to the previous page. On page 1 the current list is returned as is.
    pub async fn prev_page(&mut self) -> Result<&[Character]> {
        if self.cursor.prev().is_none() {
            return Ok(&self.visible);
        }
        self.fetch().await
    }

    /// Re-fetch the current page.
    pub async fn refresh(&mut self) -> Result<&[Character]> {
        self.fetch().await
    }

    async fn fetch(&mut self) -> Result<&[Character]> {
        let mut query = CatalogQuery::page(self.cursor.current());
        if let Some(term) = &self.search {
            query = query.with_name(term);
        }

        match self.catalog.fetch_page(&query).await {
            Ok(page) => {
                self.cursor.set_total(page.page_count);
                self.visible = page.results;
                tracing::debug!(
                    page = self.cursor.current(),
                    total = self.cursor.total(),
                    count = self.visible.len(),
                    "Catalog page loaded"
                );
                self.event_bus.publish(CatalogEvent::PageLoaded {
                    page: self.cursor.current(),
                    page_count: self.cursor.total(),
                    count: self.visible.len(),
                    search: self.search.clone(),
                });
                Ok(&self.visible)
            }
            Err(error) => {
                tracing::warn!(page = query.page, %error, "Catalog fetch failed");
                self.visible.clear();
                self.event_bus.publish(CatalogEvent::FetchFailed {
                    page: query.page,
                    reason: error.to_string(),
                });
                Err(error.into())
            }
        }
    }

    /// Add or remove `character` and persist the list.
    ///
    /// Returns `true` when the character is now a favorite. The in-memory
    /// list only changes once the save succeeds.
    pub fn toggle_favorite(&mut self, character: &Character) -> Result<bool> {
        let mut updated = self.favorites.clone();
        let favorite = updated.toggle(character);
        self.repository.save(updated.as_slice())?;
        self.favorites = updated;

        self.event_bus.publish(CatalogEvent::FavoriteToggled {
            id: character.id,
            favorite,
        });
        Ok(favorite)
    }

    /// Toggle a character from the visible page or the favorites list by id.
    pub fn toggle_favorite_by_id(&mut self, id: CharacterId) -> Result<bool> {
        let character = self
            .visible
            .iter()
            .chain(self.favorites.iter())
            .find(|character| character.id == id)
            .cloned()
            .ok_or(RuntimeError::UnknownCharacter(id))?;
        self.toggle_favorite(&character)
    }

    pub fn is_favorite(&self, id: CharacterId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn characters(&self) -> &[Character] {
        &self.visible
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }
}
