//! Bounded, duplicate-free teams of battle characters.

use arrayvec::ArrayVec;

use crate::GameConfig;
use crate::character::CharacterId;
use crate::error::{ErrorSeverity, GameError};
use crate::fighter::BattleCharacter;

/// Rejected team edits.
///
/// Every variant is a no-op for the state: the team is left exactly as it
/// was before the request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("team already has {capacity} members")]
    TeamFull { capacity: usize },

    #[error("character {0} is already on the team")]
    AlreadySelected(CharacterId),

    #[error("character {0} is not in this round's pool")]
    NotInPool(CharacterId),

    #[error("character {0} is not on the team")]
    NotSelected(CharacterId),
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TeamFull { .. } => "SELECTION_TEAM_FULL",
            Self::AlreadySelected(_) => "SELECTION_ALREADY_SELECTED",
            Self::NotInPool(_) => "SELECTION_NOT_IN_POOL",
            Self::NotSelected(_) => "SELECTION_NOT_SELECTED",
        }
    }
}

/// Ordered team of at most [`GameConfig::TEAM_SIZE`] members, unique by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Team {
    members: ArrayVec<BattleCharacter, { GameConfig::TEAM_SIZE }>,
}

impl Team {
    pub const CAPACITY: usize = GameConfig::TEAM_SIZE;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member, rejecting duplicates and overflow.
    pub fn push(&mut self, member: BattleCharacter) -> Result<(), SelectionError> {
        if self.contains(member.id()) {
            return Err(SelectionError::AlreadySelected(member.id()));
        }
        self.members
            .try_push(member)
            .map_err(|_| SelectionError::TeamFull {
                capacity: Self::CAPACITY,
            })
    }

    /// Remove a member by id, preserving the order of the others.
    pub fn remove(&mut self, id: CharacterId) -> Result<BattleCharacter, SelectionError> {
        let index = self
            .members
            .iter()
            .position(|member| member.id() == id)
            .ok_or(SelectionError::NotSelected(id))?;
        Ok(self.members.remove(index))
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.members.iter().any(|member| member.id() == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.is_full()
    }

    pub fn members(&self) -> &[BattleCharacter] {
        &self.members
    }

    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.members.iter().map(BattleCharacter::id)
    }

    /// Σ(hp + attack + defense) over all members.
    pub fn base_total(&self) -> u32 {
        self.members.iter().map(BattleCharacter::total).sum()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = &'a BattleCharacter;
    type IntoIter = core::slice::Iter<'a, BattleCharacter>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;

    fn fighter(id: u32) -> BattleCharacter {
        BattleCharacter::new(Character::new(id, format!("Fighter {id}"), "Human"))
    }

    #[test]
    fn push_until_full() {
        let mut team = Team::new();
        team.push(fighter(1)).unwrap();
        team.push(fighter(2)).unwrap();
        team.push(fighter(3)).unwrap();
        assert!(team.is_full());

        let err = team.push(fighter(4)).unwrap_err();
        assert_eq!(err, SelectionError::TeamFull { capacity: 3 });
        assert_eq!(team.len(), 3);
        assert!(!team.contains(CharacterId(4)));
    }

    #[test]
    fn duplicate_is_rejected_without_change() {
        let mut team = Team::new();
        team.push(fighter(1)).unwrap();
        let before = team.clone();

        assert_eq!(
            team.push(fighter(1)),
            Err(SelectionError::AlreadySelected(CharacterId(1)))
        );
        assert_eq!(team, before);
    }

    #[test]
    fn remove_preserves_order() {
        let mut team = Team::new();
        for id in [1, 2, 3] {
            team.push(fighter(id)).unwrap();
        }

        let removed = team.remove(CharacterId(2)).unwrap();
        assert_eq!(removed.id(), CharacterId(2));
        assert_eq!(
            team.ids().collect::<Vec<_>>(),
            vec![CharacterId(1), CharacterId(3)]
        );

        assert_eq!(
            team.remove(CharacterId(2)).unwrap_err(),
            SelectionError::NotSelected(CharacterId(2))
        );
    }

    #[test]
    fn base_total_sums_members() {
        let mut team = Team::new();
        for id in [1, 2, 3] {
            team.push(fighter(id)).unwrap();
        }
        // 211 + 242 + 273
        assert_eq!(team.base_total(), 726);
        assert_eq!(SelectionError::NotInPool(CharacterId(9)).severity(), ErrorSeverity::Validation);
    }
}
