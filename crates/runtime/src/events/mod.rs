//! Topic-based event bus for runtime events.
//!
//! Round and catalog notifications are published to separate topics so a
//! frontend can subscribe only to what it renders.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ArenaEvent, CatalogEvent};
