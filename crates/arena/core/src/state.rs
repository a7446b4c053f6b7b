//! Authoritative round state.
//!
//! All round-scoped data lives in one [`GameState`] value. Runtime layers
//! clone or query it but mutate it exclusively through
//! [`crate::engine::GameEngine`].

use crate::battle::{BattleOutcome, Winner};
use crate::character::CharacterId;
use crate::fighter::BattleCharacter;
use crate::team::Team;

/// Stage of the round state machine.
///
/// ```text
/// loading ──pool loaded──▶ selecting ──3rd pick──▶ battle ──reveal──▶ result
///    ▲                                                                  │
///    └──────────────────────────── reset ───────────────────────────────┘
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Loading,
    Selecting,
    Battle,
    Result,
}

/// Per-team battle totals shown once the battle is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub phase: GamePhase,
    /// Incremented on every reset; lets deferred work detect stale rounds.
    pub round: u64,
    pub pool: Vec<BattleCharacter>,
    pub player_team: Team,
    pub computer_team: Team,
    /// Computed when the battle starts.
    pub outcome: Option<BattleOutcome>,
    /// Published only once the result is revealed.
    pub winner: Option<Winner>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool_member(&self, id: CharacterId) -> Option<&BattleCharacter> {
        self.pool.iter().find(|member| member.id() == id)
    }

    pub fn is_selected(&self, id: CharacterId) -> bool {
        self.player_team.contains(id)
    }

    /// Player totals once the battle has been computed.
    pub fn player_stats(&self) -> Option<TeamStats> {
        self.outcome.map(|outcome| TeamStats {
            total: outcome.player_total,
        })
    }

    /// Computer totals once the battle has been computed.
    pub fn computer_stats(&self) -> Option<TeamStats> {
        self.outcome.map(|outcome| TeamStats {
            total: outcome.computer_total,
        })
    }

    /// Discard every round-scoped field and return to `loading`.
    pub(crate) fn clear_round(&mut self) {
        self.phase = GamePhase::Loading;
        self.pool.clear();
        self.player_team.clear();
        self.computer_team.clear();
        self.outcome = None;
        self.winner = None;
    }
}
