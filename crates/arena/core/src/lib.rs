//! Deterministic rules for the character arena.
//!
//! `arena-core` owns the catalog model, stat and ability derivation, pool
//! sampling, opponent selection, battle resolution and the round state
//! machine. Everything here is synchronous and free of I/O; randomness is
//! injected through [`rng::RngOracle`] so the runtime and tests can replay a
//! round exactly. All round mutation flows through [`engine::GameEngine`].
pub mod abilities;
pub mod battle;
pub mod catalog;
pub mod character;
pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod fighter;
pub mod opponent;
pub mod pool;
pub mod rng;
pub mod state;
pub mod stats;
pub mod team;

pub use abilities::{Ability, AbilitySource, resolve_ability, resolve_ability_with_source};
pub use battle::{BattleOutcome, Winner, resolve_battle, roll_luck};
pub use catalog::{CatalogQuery, CharacterPage, PageCursor};
pub use character::{Character, CharacterId, CharacterStatus};
pub use config::GameConfig;
pub use engine::{GameEngine, RoundAction, Transition, TransitionError};
pub use error::{ErrorSeverity, GameError};
pub use favorites::Favorites;
pub use fighter::BattleCharacter;
pub use opponent::{partition_by_strength, select_opponent_team};
pub use pool::{PoolError, choose_page, sample_pool};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use state::{GamePhase, GameState, TeamStats};
pub use stats::{BaseStats, generate_stats};
pub use team::{SelectionError, Team};
