//! Flavor abilities attached to battle characters.
//!
//! Abilities are cosmetic: they carry a name and a description but never
//! change the numbers used by [`crate::resolve_battle`]. Resolution order is
//! fixed: the character's name is looked up first, then its species, and
//! only when both miss does the default ability apply. A named character
//! therefore keeps its signature ability whatever its species.

/// A resolved ability: display name plus description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ability {
    pub name: &'static str,
    pub description: &'static str,
}

impl Ability {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Where an ability was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AbilitySource {
    Named,
    Species,
    Default,
}

/// Signature abilities, keyed by exact character name.
pub const NAMED_ABILITIES: [(&str, Ability); 10] = [
    (
        "Rick Sanchez",
        Ability::new(
            "Drunk Portal",
            "Escapes through a portal and comes back drunker (+50 ATK)",
        ),
    ),
    (
        "Morty Smith",
        Ability::new(
            "Extreme Anxiety",
            "Screams so loud the enemy is stunned (+30 DEF)",
        ),
    ),
    (
        "Summer Smith",
        Ability::new(
            "Influencer",
            "Distracts the enemy with selfies (-20 enemy ATK)",
        ),
    ),
    (
        "Beth Smith",
        Ability::new("Horse Surgery", "Patches up random wounds (+40 HP)"),
    ),
    (
        "Jerry Smith",
        Ability::new(
            "Being Pathetic",
            "So pathetic that attacking him feels bad (+60 DEF)",
        ),
    ),
    (
        "Birdperson",
        Ability::new("Majestic Flight", "Dodges everything by flying (+45 DEF)"),
    ),
    (
        "Squanchy",
        Ability::new("Squanchify", "Transforms and squanches everything (+70 ATK)"),
    ),
    (
        "Mr. Poopybutthole",
        Ability::new("Ooh-wee!", "Cheers the team so hard everyone improves (+25 ALL)"),
    ),
    (
        "Evil Morty",
        Ability::new("Manipulation", "Controls weak minds (+80 ATK)"),
    ),
    (
        "Mr. Meeseeks",
        Ability::new("Look at me!", "Fulfils one task and vanishes (+100 ATK, -100 HP)"),
    ),
];

/// Generic abilities, keyed by exact species.
pub const SPECIES_ABILITIES: [(&str, Ability); 6] = [
    (
        "Human",
        Ability::new("Existential Drama", "Human crisis (+45 ATK)"),
    ),
    (
        "Alien",
        Ability::new("Alien Technology", "Uses gadgets (+50 ATK)"),
    ),
    (
        "Humanoid",
        Ability::new("Powerful Hybrid", "The best of both worlds (+40 ATK)"),
    ),
    (
        "Robot",
        Ability::new("Upgrade 2.0", "Improves itself (+50 ATK)"),
    ),
    (
        "Animal",
        Ability::new("Wild Instinct", "Attacks in a frenzy (+45 ATK)"),
    ),
    (
        "Mythological Creature",
        Ability::new("Mythic Power", "Summons ancient powers (+65 ATK)"),
    ),
];

/// Fallback when neither table matches.
pub const DEFAULT_ABILITY: Ability = Ability::new("Special Ability", "Unique power (+35 ATK)");

fn lookup(table: &[(&str, Ability)], key: &str) -> Option<Ability> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, ability)| *ability)
}

/// Resolve an ability together with the table it came from.
pub fn resolve_ability_with_source(name: &str, species: &str) -> (Ability, AbilitySource) {
    if let Some(ability) = lookup(&NAMED_ABILITIES, name) {
        return (ability, AbilitySource::Named);
    }
    if let Some(ability) = lookup(&SPECIES_ABILITIES, species) {
        return (ability, AbilitySource::Species);
    }
    (DEFAULT_ABILITY, AbilitySource::Default)
}

/// Resolve the ability for a character: name, then species, then default.
pub fn resolve_ability(name: &str, species: &str) -> Ability {
    resolve_ability_with_source(name, species).0
}
