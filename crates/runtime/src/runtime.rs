//! High-level runtime orchestrator.
//!
//! The runtime owns the round worker, wires up command/event channels, and
//! exposes a builder-based API for clients to play rounds and browse the
//! catalog.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use arena_core::{PcgRng, RngOracle};

use crate::api::{ArenaHandle, CharacterCatalog, Result, RuntimeError};
use crate::browser::CatalogBrowser;
use crate::catalog::HttpCatalog;
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::repository::{FavoritesRepository, FileFavoritesRepository};
use crate::workers::{Command, RoundWorker};

/// Main runtime that orchestrates rounds and catalog access
///
/// [`ArenaHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: ArenaHandle,
    catalog: Arc<dyn CharacterCatalog>,
    favorites: Arc<dyn FavoritesRepository>,
    event_bus: EventBus,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to the round worker
    pub fn handle(&self) -> ArenaHandle {
        self.handle.clone()
    }

    /// Create a catalog browser sharing this runtime's catalog, favorites
    /// store and event bus.
    pub fn browser(&self) -> CatalogBrowser {
        CatalogBrowser::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.favorites),
            self.event_bus.clone(),
        )
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to exit, which happens once every cloned
    /// [`ArenaHandle`] has been dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Arc<dyn CharacterCatalog>>,
    favorites: Option<Arc<dyn FavoritesRepository>>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            favorites: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the catalog (default: [`HttpCatalog`] at `catalog_base_url`)
    pub fn catalog(mut self, catalog: impl CharacterCatalog + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Set the favorites store (default: [`FileFavoritesRepository`] at
    /// `favorites_path`)
    pub fn favorites(mut self, favorites: impl FavoritesRepository + 'static) -> Self {
        self.favorites = Some(Arc::new(favorites));
        self
    }

    /// Replace the seeded [`PcgRng`] with another random source
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn the round worker
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(HttpCatalog::new(config.catalog_base_url.clone())),
        };

        let favorites = match self.favorites {
            Some(favorites) => favorites,
            None => Arc::new(FileFavoritesRepository::new(&config.favorites_path)?),
        };

        let rng = match self.rng {
            Some(rng) => rng,
            None => {
                let seed = config.seed.unwrap_or_else(rand::random);
                tracing::info!(seed, "Session seed");
                Box::new(PcgRng::new(seed))
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = ArenaHandle::new(command_tx, event_bus.clone(), Arc::clone(&catalog));

        let worker = RoundWorker::new(
            config.game_config,
            rng,
            config.reveal_delay.max(RuntimeConfig::MIN_REVEAL_DELAY),
            command_rx,
            event_bus.clone(),
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            catalog,
            favorites,
            event_bus,
            worker_handle,
        })
    }
}
