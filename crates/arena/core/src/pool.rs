//! Round pool acquisition rules.
//!
//! The runtime fetches one catalog page; this module decides which page to
//! ask for and which characters from it make the round's pool. An undersized
//! page is rejected rather than padded: sampling with replacement would put
//! duplicate ids into the pool and break team uniqueness.

use std::collections::HashSet;

use crate::GameConfig;
use crate::character::Character;
use crate::error::{ErrorSeverity, GameError};
use crate::fighter::BattleCharacter;
use crate::rng::{RngOracle, sample_indices};

/// Failures while building a round pool from a fetched page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("page has {available} distinct characters, {required} required")]
    Undersized { required: usize, available: usize },
}

impl GameError for PoolError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Undersized { .. } => "POOL_UNDERSIZED",
        }
    }
}

/// Pick the catalog page for the next pool, uniform over `1..=page_count`.
pub fn choose_page(rng: &mut dyn RngOracle, page_count: u32) -> u32 {
    rng.range(1, page_count.max(1))
}

/// Sample the round pool from a fetched page.
///
/// Characters are de-duplicated by id (first occurrence wins), then
/// `config.pool_size` of them are drawn uniformly without replacement and
/// wrapped as [`BattleCharacter`]s in draw order.
pub fn sample_pool(
    page: &[Character],
    config: &GameConfig,
    rng: &mut dyn RngOracle,
) -> Result<Vec<BattleCharacter>, PoolError> {
    let mut seen = HashSet::with_capacity(page.len());
    let distinct: Vec<&Character> = page
        .iter()
        .filter(|character| seen.insert(character.id))
        .collect();

    if distinct.len() < config.pool_size {
        return Err(PoolError::Undersized {
            required: config.pool_size,
            available: distinct.len(),
        });
    }

    Ok(sample_indices(rng, distinct.len(), config.pool_size)
        .into_iter()
        .map(|index| BattleCharacter::new(distinct[index].clone()))
        .collect())
}
