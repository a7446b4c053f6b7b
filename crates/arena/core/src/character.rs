//! Catalog characters as delivered by the external character service.
//!
//! A [`Character`] is immutable once fetched. Combat data is layered on top
//! by [`crate::BattleCharacter`]; the catalog record itself never changes.
use std::fmt;

/// Unique identifier of a catalog character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CharacterId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Life status reported by the catalog.
///
/// The catalog spells the third state in lowercase (`unknown`); any value
/// outside the known set is treated as unknown as well.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[default]
    #[strum(serialize = "unknown")]
    #[cfg_attr(feature = "serde", serde(rename = "unknown", other))]
    Unknown,
}

/// A single catalog record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub species: String,
    /// Image URL as provided by the catalog.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: CharacterStatus,
}

impl Character {
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        species: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            image: String::new(),
            status: CharacterStatus::default(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_status(mut self, status: CharacterStatus) -> Self {
        self.status = status;
        self
    }

    /// First word of the name, used for compact team listings.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_catalog_spelling() {
        assert_eq!("Alive".parse::<CharacterStatus>(), Ok(CharacterStatus::Alive));
        assert_eq!("dead".parse::<CharacterStatus>(), Ok(CharacterStatus::Dead));
        assert_eq!(
            "unknown".parse::<CharacterStatus>(),
            Ok(CharacterStatus::Unknown)
        );
        assert_eq!(CharacterStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn short_name_takes_first_word() {
        let rick = Character::new(1, "Rick Sanchez", "Human");
        assert_eq!(rick.short_name(), "Rick");

        let single = Character::new(2, "Squanchy", "Cat-Person");
        assert_eq!(single.short_name(), "Squanchy");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_catalog_record_and_ignores_extra_fields() {
        let json = r#"{
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "image": "https://example.invalid/2.jpeg",
            "episode": []
        }"#;

        let morty: Character = serde_json::from_str(json).unwrap();
        assert_eq!(morty.id, CharacterId(2));
        assert_eq!(morty.status, CharacterStatus::Alive);
        assert_eq!(morty.image, "https://example.invalid/2.jpeg");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unexpected_status_maps_to_unknown() {
        let json = r#"{"id": 9, "name": "X", "species": "Alien", "image": "", "status": "Zombified"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.status, CharacterStatus::Unknown);
    }
}
