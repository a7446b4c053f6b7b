//! Event types for each topic.

use arena_core::{CharacterId, GamePhase, Winner};
use serde::{Deserialize, Serialize};

/// Round lifecycle notifications published by the round worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEvent {
    PhaseChanged {
        round: u64,
        phase: GamePhase,
    },

    /// Pool sampled and ready for picks.
    PoolReady {
        round: u64,
        pool: Vec<CharacterId>,
    },

    TeamChanged {
        round: u64,
        team: Vec<CharacterId>,
    },

    /// Opponent picked and totals computed. The winner is withheld until
    /// [`ArenaEvent::ResultRevealed`].
    BattleResolved {
        round: u64,
        computer_team: Vec<CharacterId>,
        player_total: u32,
        computer_total: u32,
    },

    ResultRevealed {
        round: u64,
        winner: Winner,
    },

    /// Pool acquisition failed; the round stays in `loading` ready to retry.
    PoolFailed {
        round: u64,
        reason: String,
    },
}

impl ArenaEvent {
    pub fn round(&self) -> u64 {
        match self {
            Self::PhaseChanged { round, .. }
            | Self::PoolReady { round, .. }
            | Self::TeamChanged { round, .. }
            | Self::BattleResolved { round, .. }
            | Self::ResultRevealed { round, .. }
            | Self::PoolFailed { round, .. } => *round,
        }
    }
}

/// Catalog browsing notifications published by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    PageLoaded {
        page: u32,
        page_count: u32,
        count: usize,
        search: Option<String>,
    },

    /// The visible list was cleared after a failed fetch.
    FetchFailed { page: u32, reason: String },

    FavoriteToggled { id: CharacterId, favorite: bool },
}
