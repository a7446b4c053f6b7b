//! Cloneable façade for issuing commands to the round worker.
//!
//! [`ArenaHandle`] hides channel plumbing and offers async helpers for
//! playing a round or streaming events from specific topics.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use arena_core::{CatalogQuery, CharacterId, GameState};

use super::errors::{Result, RuntimeError};
use super::providers::CharacterCatalog;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the arena
#[derive(Clone)]
pub struct ArenaHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    catalog: Arc<dyn CharacterCatalog>,
}

impl ArenaHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        catalog: Arc<dyn CharacterCatalog>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            catalog,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start a new round: enter `loading`, fetch a random catalog page and
    /// sample the pool from it.
    ///
    /// The fetch runs on the caller's task, so the worker keeps serving
    /// queries meanwhile. If another round starts before the page arrives,
    /// this call fails with [`RuntimeError::StaleRound`].
    pub async fn start_round(&self) -> Result<GameState> {
        let ticket = self
            .request(|reply| Command::BeginRound { reply })
            .await??;

        let page = self
            .catalog
            .fetch_page(&CatalogQuery::page(ticket.page))
            .await;

        self.request(|reply| Command::LoadPool {
            round: ticket.round,
            page,
            reply,
        })
        .await?
    }

    /// Discard the current round and acquire a new pool.
    ///
    /// Rejected while the battle is being shown.
    pub async fn reset(&self) -> Result<GameState> {
        self.start_round().await
    }

    /// Add a pool member to the player's team. The third pick starts the battle.
    pub async fn select(&self, id: CharacterId) -> Result<GameState> {
        self.request(|reply| Command::Select { id, reply }).await?
    }

    pub async fn deselect(&self, id: CharacterId) -> Result<GameState> {
        self.request(|reply| Command::Deselect { id, reply })
            .await?
    }

    /// Query the current round state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use arena_runtime::{Event, Topic};
    ///
    /// let mut round_rx = handle.subscribe(Topic::Round);
    /// while let Ok(Event::Round(event)) = round_rx.recv().await {
    ///     // render the round
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
