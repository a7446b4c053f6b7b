//! Ordered favorites collection.
//!
//! Unique by character id. Removing keeps the relative order of the rest;
//! adding appends, so a character toggled off and on again moves to the end.

use crate::character::{Character, CharacterId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<Character>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted entries, keeping the first occurrence of each id.
    pub fn from_vec(entries: Vec<Character>) -> Self {
        let mut favorites = Self::new();
        for entry in entries {
            if !favorites.contains(entry.id) {
                favorites.entries.push(entry);
            }
        }
        favorites
    }

    /// Flip membership. Returns `true` when the character is now a favorite.
    pub fn toggle(&mut self, character: &Character) -> bool {
        if let Some(index) = self.position(character.id) {
            self.entries.remove(index);
            false
        } else {
            self.entries.push(character.clone());
            true
        }
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Character> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: u32) -> Character {
        Character::new(id, format!("C{id}"), "Human")
    }

    fn ids(favorites: &Favorites) -> Vec<u32> {
        favorites.iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(&character(1)));
        assert!(favorites.contains(CharacterId(1)));
        assert!(!favorites.toggle(&character(1)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggling_new_entry_twice_restores_original() {
        let mut favorites = Favorites::from_vec(vec![character(1), character(2), character(3)]);
        let original = favorites.clone();

        favorites.toggle(&character(9));
        favorites.toggle(&character(9));
        assert_eq!(favorites, original);
    }

    #[test]
    fn toggling_existing_entry_twice_moves_it_to_the_end() {
        let mut favorites = Favorites::from_vec(vec![character(1), character(2), character(3)]);

        favorites.toggle(&character(2));
        assert_eq!(ids(&favorites), vec![1, 3]);
        favorites.toggle(&character(2));
        assert_eq!(ids(&favorites), vec![1, 3, 2]);
    }

    #[test]
    fn from_vec_drops_duplicate_ids() {
        let favorites = Favorites::from_vec(vec![character(1), character(1), character(2)]);
        assert_eq!(ids(&favorites), vec![1, 2]);
    }
}
