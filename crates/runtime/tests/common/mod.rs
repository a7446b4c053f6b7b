//! Catalog stubs shared by the integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arena_core::{CatalogQuery, Character, CharacterPage};
use arena_runtime::{ArenaEvent, CharacterCatalog, Event, FetchError};
use async_trait::async_trait;
use tokio::sync::broadcast;

pub type RequestLog = Arc<Mutex<Vec<CatalogQuery>>>;

pub fn character(id: u32) -> Character {
    let (name, species) = match id {
        1 => ("Rick Sanchez", "Human"),
        2 => ("Morty Smith", "Human"),
        3 => ("Evil Morty", "Human"),
        _ => ("Citizen", "Alien"),
    };
    let name = if name == "Citizen" {
        format!("Citizen {id}")
    } else {
        name.to_string()
    };
    Character::new(id, name, species)
}

pub fn characters(ids: impl IntoIterator<Item = u32>) -> Vec<Character> {
    ids.into_iter().map(character).collect()
}

/// Answers every query with the same page, or with a transport error while
/// `offline` is set.
pub struct FixedCatalog {
    page: Vec<Character>,
    offline: Arc<AtomicBool>,
    requests: RequestLog,
}

impl FixedCatalog {
    pub fn new(page: Vec<Character>) -> Self {
        Self {
            page,
            offline: Arc::new(AtomicBool::new(false)),
            requests: RequestLog::default(),
        }
    }

    pub fn offline_switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.offline)
    }

    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl CharacterCatalog for FixedCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CharacterPage, FetchError> {
        self.requests.lock().unwrap().push(query.clone());
        if self.offline.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("connection refused".into()));
        }
        if self.page.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(CharacterPage {
            results: self.page.clone(),
            page_count: 42,
        })
    }
}

/// Serves `characters` in pages of `page_size`, filtering by a
/// case-insensitive name match like the real service.
pub struct PagedCatalog {
    characters: Vec<Character>,
    page_size: usize,
    offline: Arc<AtomicBool>,
    requests: RequestLog,
}

impl PagedCatalog {
    pub fn new(characters: Vec<Character>, page_size: usize) -> Self {
        Self {
            characters,
            page_size,
            offline: Arc::new(AtomicBool::new(false)),
            requests: RequestLog::default(),
        }
    }

    pub fn offline_switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.offline)
    }

    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl CharacterCatalog for PagedCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CharacterPage, FetchError> {
        self.requests.lock().unwrap().push(query.clone());
        if self.offline.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("connection refused".into()));
        }

        let matching: Vec<&Character> = self
            .characters
            .iter()
            .filter(|character| match query.name() {
                Some(name) => character
                    .name
                    .to_lowercase()
                    .contains(&name.to_lowercase()),
                None => true,
            })
            .collect();
        if matching.is_empty() {
            return Err(FetchError::Status { status: 404 });
        }

        let page_count = matching.len().div_ceil(self.page_size) as u32;
        let start = (query.page as usize - 1) * self.page_size;
        let results: Vec<Character> = matching
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        if results.is_empty() {
            return Err(FetchError::Status { status: 404 });
        }

        Ok(CharacterPage {
            results,
            page_count,
        })
    }
}

/// Wait for the first round event matching `predicate`.
pub async fn next_round_event(
    rx: &mut broadcast::Receiver<Event>,
    predicate: impl Fn(&ArenaEvent) -> bool,
) -> ArenaEvent {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            match rx.recv().await {
                Ok(Event::Round(event)) if predicate(&event) => return event,
                Ok(_) => continue,
                Err(err) => panic!("event stream ended: {err}"),
            }
        }
    })
    .await
    .expect("timed out waiting for round event")
}
