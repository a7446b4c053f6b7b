//! Deterministic base stats derived from a character id.
//!
//! Stats are a pure function of the id, so the same character always fights
//! with the same numbers and tests can reproduce any round exactly:
//!
//! - `hp      = 100 + (id * 7)  mod 150`  → `[100, 249]`
//! - `attack  =  50 + (id * 11) mod 100`  → `[50, 149]`
//! - `defense =  30 + (id * 13) mod 70`   → `[30, 99]`
//! - `total   = hp + attack + defense`

use crate::character::CharacterId;

/// Base combat stats of a battle character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl BaseStats {
    pub const HP_BASE: u32 = 100;
    pub const HP_SPREAD: u64 = 150;
    pub const ATTACK_BASE: u32 = 50;
    pub const ATTACK_SPREAD: u64 = 100;
    pub const DEFENSE_BASE: u32 = 30;
    pub const DEFENSE_SPREAD: u64 = 70;

    /// Derive stats for the given id.
    ///
    /// Products are taken in `u64` so the full `u32` id range is accepted.
    pub fn from_id(id: CharacterId) -> Self {
        let id = u64::from(id.0);
        Self {
            hp: Self::HP_BASE + ((id * 7) % Self::HP_SPREAD) as u32,
            attack: Self::ATTACK_BASE + ((id * 11) % Self::ATTACK_SPREAD) as u32,
            defense: Self::DEFENSE_BASE + ((id * 13) % Self::DEFENSE_SPREAD) as u32,
        }
    }

    /// Sum of all three components.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.hp + self.attack + self.defense
    }
}

/// Shorthand for [`BaseStats::from_id`].
pub fn generate_stats(id: CharacterId) -> BaseStats {
    BaseStats::from_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_match_formula() {
        let stats = generate_stats(CharacterId(1));
        assert_eq!(stats, BaseStats { hp: 107, attack: 61, defense: 43 });
        assert_eq!(stats.total(), 211);

        let stats = generate_stats(CharacterId(5));
        assert_eq!(stats, BaseStats { hp: 135, attack: 105, defense: 95 });
        assert_eq!(stats.total(), 335);

        // 150 is a multiple of the hp spread; attack and defense still wrap.
        let stats = generate_stats(CharacterId(150));
        assert_eq!(stats, BaseStats { hp: 100, attack: 100, defense: 90 });
    }

    #[test]
    fn components_stay_within_documented_ranges() {
        let samples = (0..2_000u32).chain([u32::MAX - 1, u32::MAX]);
        for raw in samples {
            let stats = generate_stats(CharacterId(raw));
            assert!((100..=249).contains(&stats.hp), "hp out of range for {raw}");
            assert!((50..=149).contains(&stats.attack), "attack out of range for {raw}");
            assert!((30..=99).contains(&stats.defense), "defense out of range for {raw}");
            assert_eq!(stats.total(), stats.hp + stats.attack + stats.defense);
        }
    }

    #[test]
    fn same_id_yields_same_stats() {
        assert_eq!(
            generate_stats(CharacterId(361)),
            generate_stats(CharacterId(361))
        );
    }
}
