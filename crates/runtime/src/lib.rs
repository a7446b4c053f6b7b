//! Runtime orchestration for the character arena.
//!
//! This crate wires the deterministic rules of `arena-core` to the outside
//! world: the character catalog service, the favorites store, the identity
//! backend and a clock for the post-battle reveal. Consumers build a
//! [`Runtime`], play rounds through [`ArenaHandle`] and browse the catalog
//! through [`CatalogBrowser`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`catalog`] and [`repository`] provide data adapters
//! - [`browser`] and [`session`] cover catalog browsing and sign-out
//! - `workers` keeps the round worker internal to the crate
pub mod api;
pub mod browser;
pub mod catalog;
pub mod config;
pub mod events;
pub mod repository;
pub mod runtime;
pub mod session;

mod workers;

pub use api::{ArenaHandle, CharacterCatalog, FetchError, Result, RuntimeError, SessionProvider};
pub use browser::CatalogBrowser;
pub use catalog::{DEFAULT_CATALOG_URL, HttpCatalog};
pub use config::{RuntimeConfig, default_favorites_path};
pub use events::{ArenaEvent, CatalogEvent, Event, EventBus, Topic};
pub use repository::{
    FavoritesRepository, FileFavoritesRepository, InMemoryFavoritesRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder};
pub use session::{LocalSession, SessionError, sign_out};
pub use workers::RoundTicket;
