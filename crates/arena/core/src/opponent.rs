//! Scripted opponent team selection.
//!
//! The opponent runs once, when the player's team fills up, and draws from
//! the whole round pool (the player's picks are not excluded):
//!
//! 1. Partition the pool into weak (`total < weak_threshold`) and strong.
//! 2. With at least two weak members, shuffle them and take the first two.
//! 3. Fill the remaining slots uniformly from pool members the opponent has
//!    not picked yet, stopping at three members or an exhausted pool.
//!
//! When fewer than two weak members exist the weak step is skipped entirely
//! and all three slots are filled uniformly.

use crate::GameConfig;
use crate::fighter::BattleCharacter;
use crate::rng::{RngOracle, shuffle};
use crate::team::Team;

/// Splits a pool into (weak, strong) by the configured threshold.
pub fn partition_by_strength<'a>(
    pool: &'a [BattleCharacter],
    weak_threshold: u32,
) -> (Vec<&'a BattleCharacter>, Vec<&'a BattleCharacter>) {
    pool.iter()
        .partition(|member| member.total() < weak_threshold)
}

/// Select the opponent team from the round pool.
///
/// Yields exactly [`Team::CAPACITY`] distinct members whenever the pool has
/// at least that many distinct ids.
pub fn select_opponent_team(
    pool: &[BattleCharacter],
    config: &GameConfig,
    rng: &mut dyn RngOracle,
) -> Team {
    let mut team = Team::new();

    let (mut weak, _strong) = partition_by_strength(pool, config.weak_threshold);
    if weak.len() >= GameConfig::OPPONENT_WEAK_PICKS {
        shuffle(rng, &mut weak);
        for member in weak.into_iter().take(GameConfig::OPPONENT_WEAK_PICKS) {
            let pushed = team.push(member.clone());
            debug_assert!(pushed.is_ok(), "pool ids are unique");
        }
    }

    while !team.is_full() {
        let remaining: Vec<&BattleCharacter> = pool
            .iter()
            .filter(|member| !team.contains(member.id()))
            .collect();
        if remaining.is_empty() {
            break;
        }
        let pick = rng.random_int(remaining.len() as u32) as usize;
        let pushed = team.push(remaining[pick].clone());
        debug_assert!(pushed.is_ok(), "filtered picks are not on the team");
    }

    team
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, CharacterId};
    use crate::rng::{PcgRng, ScriptedRng};

    fn pool(ids: &[u32]) -> Vec<BattleCharacter> {
        ids.iter()
            .map(|&id| BattleCharacter::new(Character::new(id, format!("C{id}"), "Alien")))
            .collect()
    }

    fn ids(team: &Team) -> Vec<u32> {
        team.ids().map(|id| id.0).collect()
    }

    #[test]
    fn partition_uses_strict_threshold() {
        // totals: 1→211, 2→242, 3→273, 4→304, 5→335
        let pool = pool(&[1, 2, 3, 4, 5]);
        let (weak, strong) = partition_by_strength(&pool, 300);
        let weak_ids: Vec<_> = weak.iter().map(|m| m.id()).collect();
        let strong_ids: Vec<_> = strong.iter().map(|m| m.id()).collect();
        assert_eq!(weak_ids, vec![CharacterId(1), CharacterId(2), CharacterId(3)]);
        assert_eq!(strong_ids, vec![CharacterId(4), CharacterId(5)]);

        // A total of exactly the threshold counts as strong.
        let (weak, _) = partition_by_strength(&pool, 273);
        assert_eq!(weak.len(), 2);
    }

    #[test]
    fn takes_two_weak_then_fills_uniformly() {
        let pool = pool(&[1, 2, 3, 4, 5]);
        // Shuffle of 3 weak [1,2,3]: i=2 → j=0 gives [3,2,1]; i=1 → j=1 keeps it.
        // Weak picks: 3, 2. Fill: remaining [1,4,5], draw 7 % 3 = 1 → 4.
        let mut rng = ScriptedRng::new([0, 1, 7]);
        let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);

        assert_eq!(ids(&team), vec![3, 2, 4]);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn all_strong_pool_falls_through_to_uniform_fill() {
        // Every id here totals >= 300.
        let pool = pool(&[4, 5, 17, 18]);
        assert!(pool.iter().all(|m| m.total() >= 300));

        let mut rng = ScriptedRng::new([0, 0, 0]);
        let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);
        assert_eq!(ids(&team), vec![4, 5, 17]);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn single_weak_member_skips_weak_step() {
        let pool = pool(&[1, 4, 5, 17]);
        let (weak, _) = partition_by_strength(&pool, 300);
        assert_eq!(weak.len(), 1);

        let mut rng = ScriptedRng::new([3, 0, 0]);
        let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);
        // Uniform fill in pool order: [1,4,5,17][3] → 17, [1,4,5][0] → 1, [4,5][0] → 4.
        assert_eq!(ids(&team), vec![17, 1, 4]);
    }

    #[test]
    fn all_weak_pool_still_uses_weak_step() {
        let pool = pool(&[1, 2, 3]);
        let mut rng = ScriptedRng::new([0, 0, 0]);
        let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);
        // Shuffle: i=2,j=0 → [3,2,1]; i=1,j=0 → [2,3,1]. Picks 2,3; fill → 1.
        assert_eq!(ids(&team), vec![2, 3, 1]);
    }

    #[test]
    fn undersized_pool_stops_without_looping() {
        let pool = pool(&[4, 5]);
        let mut rng = PcgRng::new(1);
        let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);
        assert_eq!(team.len(), 2);
    }

    #[test]
    fn always_three_distinct_members_for_pools_of_three_or_more() {
        let mut rng = PcgRng::new(2024);
        for start in 1..200u32 {
            let pool = pool(&[start, start + 1, start + 2, start + 3, start + 4]);
            let team = select_opponent_team(&pool, &GameConfig::default(), &mut rng);
            let mut picked = ids(&team);
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|id| (start..start + 5).contains(id)));
        }
    }
}
