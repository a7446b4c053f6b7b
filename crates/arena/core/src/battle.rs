//! Battle resolution.
//!
//! A pure function of both teams and a single luck draw:
//!
//! ```text
//! player_total   = player_base + floor(player_base * 0.15) + luck
//! computer_total = computer_base - floor(computer_base * 0.10)
//! ```
//!
//! where each base is Σ(hp + attack + defense) over the team. The player
//! wins ties.

use crate::rng::RngOracle;
use crate::team::Team;

/// Player bonus, in percent of the player's base total.
pub const PLAYER_BONUS_PERCENT: u32 = 15;
/// Computer penalty, in percent of the computer's base total.
pub const COMPUTER_PENALTY_PERCENT: u32 = 10;

/// Side that won a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Winner {
    Player,
    Computer,
}

/// Full breakdown of one battle. Produced once per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub player_base: u32,
    pub computer_base: u32,
    pub player_bonus: u32,
    pub luck: u32,
    pub computer_penalty: u32,
    pub player_total: u32,
    pub computer_total: u32,
    pub winner: Winner,
}

impl BattleOutcome {
    /// Margin of victory, always non-negative.
    pub fn margin(&self) -> u32 {
        self.player_total.abs_diff(self.computer_total)
    }
}

/// `floor(value * percent / 100)` in integer arithmetic.
#[inline]
fn percent_of(value: u32, percent: u32) -> u32 {
    ((u64::from(value) * u64::from(percent)) / 100) as u32
}

/// Resolve a battle between two frozen teams with a given luck draw.
pub fn resolve_battle(player: &Team, computer: &Team, luck: u32) -> BattleOutcome {
    let player_base = player.base_total();
    let computer_base = computer.base_total();

    let player_bonus = percent_of(player_base, PLAYER_BONUS_PERCENT);
    let computer_penalty = percent_of(computer_base, COMPUTER_PENALTY_PERCENT);

    let player_total = player_base + player_bonus + luck;
    let computer_total = computer_base - computer_penalty;

    // Ties go to the player.
    let winner = if computer_total > player_total {
        Winner::Computer
    } else {
        Winner::Player
    };

    BattleOutcome {
        player_base,
        computer_base,
        player_bonus,
        luck,
        computer_penalty,
        player_total,
        computer_total,
        winner,
    }
}

/// Draw the luck term: a uniform integer in `[0, luck_range)`.
pub fn roll_luck(rng: &mut dyn RngOracle, luck_range: u32) -> u32 {
    rng.random_int(luck_range)
}
