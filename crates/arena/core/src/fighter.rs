use crate::abilities::{Ability, resolve_ability};
use crate::character::{Character, CharacterId};
use crate::stats::BaseStats;

/// A catalog character augmented with combat stats and a resolved ability.
///
/// Created once per round from the fetched pool and never mutated after;
/// `total` is computed at construction so `total == hp + attack + defense`
/// holds for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BattleCharacter {
    character: Character,
    stats: BaseStats,
    total: u32,
    ability: Ability,
}

impl BattleCharacter {
    pub fn new(character: Character) -> Self {
        let stats = BaseStats::from_id(character.id);
        let ability = resolve_ability(&character.name, &character.species);
        Self {
            total: stats.total(),
            character,
            stats,
            ability,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.character.id
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn stats(&self) -> BaseStats {
        self.stats
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn ability(&self) -> Ability {
        self.ability
    }
}

impl From<Character> for BattleCharacter {
    fn from(character: Character) -> Self {
        Self::new(character)
    }
}
