//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{ArenaEvent, CatalogEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Round phase, pool, team and battle changes
    Round,
    /// Catalog pages and favorites
    Catalog,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Round(ArenaEvent),
    Catalog(CatalogEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Round(_) => Topic::Round,
            Event::Catalog(_) => Topic::Catalog,
        }
    }
}

impl From<ArenaEvent> for Event {
    fn from(event: ArenaEvent) -> Self {
        Event::Round(event)
    }
}

impl From<CatalogEvent> for Event {
    fn from(event: CatalogEvent) -> Self {
        Event::Catalog(event)
    }
}

/// Topic-based event bus
///
/// Consumers subscribe to the topics they render. Publishing never blocks
/// and is best-effort: with no subscribers the event is dropped.
#[derive(Clone)]
pub struct EventBus {
    round: broadcast::Sender<Event>,
    catalog: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            round: broadcast::channel(capacity).0,
            catalog: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Round => &self.round,
            Topic::Catalog => &self.catalog,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{CharacterId, GamePhase};

    #[tokio::test]
    async fn events_only_reach_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut round_rx = bus.subscribe(Topic::Round);
        let mut catalog_rx = bus.subscribe(Topic::Catalog);

        bus.publish(ArenaEvent::PhaseChanged {
            round: 1,
            phase: GamePhase::Loading,
        });
        bus.publish(CatalogEvent::FavoriteToggled {
            id: CharacterId(1),
            favorite: true,
        });

        assert_eq!(round_rx.recv().await.unwrap().topic(), Topic::Round);
        assert!(round_rx.try_recv().is_err());
        assert_eq!(catalog_rx.recv().await.unwrap().topic(), Topic::Catalog);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(ArenaEvent::PoolFailed {
            round: 0,
            reason: "offline".into(),
        });
    }
}
