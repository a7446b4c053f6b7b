//! Plain-text rendering of catalog entries, rounds and events.

use arena_core::{BattleCharacter, Character, GamePhase, GameState, Winner};
use arena_runtime::ArenaEvent;

pub fn character_line(character: &Character, favorite: bool) -> String {
    let heart = if favorite { '♥' } else { ' ' };
    format!(
        "{heart} {:>5}  {:<32} {} · {}",
        character.id.to_string(),
        character.name,
        character.species,
        character.status
    )
}

pub fn fighter_line(member: &BattleCharacter, selected: bool) -> String {
    let mark = if selected { "[x]" } else { "[ ]" };
    format!(
        "{mark} {:>5}  {:<28} HP {:>3}  ATK {:>3}  DEF {:>3}  = {:>3}   {}: {}",
        member.id().to_string(),
        member.name(),
        member.hp(),
        member.attack(),
        member.defense(),
        member.total(),
        member.ability().name,
        member.ability().description
    )
}

fn team_names<'a>(members: impl IntoIterator<Item = &'a BattleCharacter>) -> String {
    let names: Vec<&str> = members
        .into_iter()
        .map(|member| member.character().short_name())
        .collect();
    if names.is_empty() {
        "(empty)".to_string()
    } else {
        names.join(", ")
    }
}

pub fn state_summary(state: &GameState) -> String {
    let mut lines = vec![format!("round {} · {}", state.round, state.phase)];

    match state.phase {
        GamePhase::Loading => lines.push("no pool yet; type `play`".to_string()),
        GamePhase::Selecting => {
            lines.push(format!(
                "pick {} of {}:",
                state.player_team.len(),
                arena_core::Team::CAPACITY
            ));
            lines.extend(
                state
                    .pool
                    .iter()
                    .map(|member| fighter_line(member, state.is_selected(member.id()))),
            );
        }
        GamePhase::Battle | GamePhase::Result => {
            lines.push(format!("you:      {}", team_names(&state.player_team)));
            lines.push(format!("computer: {}", team_names(&state.computer_team)));
            if let (Some(player), Some(computer)) = (state.player_stats(), state.computer_stats())
            {
                lines.push(format!("totals:   {} vs {}", player.total, computer.total));
            }
            if let Some(winner) = state.winner {
                lines.push(winner_line(winner));
            }
        }
    }

    lines.join("\n")
}

fn winner_line(winner: Winner) -> String {
    match winner {
        Winner::Player => "You win!".to_string(),
        Winner::Computer => "The computer wins.".to_string(),
    }
}

/// Text for events that arrive outside a command's reply.
pub fn round_event(event: &ArenaEvent) -> Option<String> {
    match event {
        ArenaEvent::BattleResolved {
            computer_team,
            player_total,
            computer_total,
            ..
        } => {
            let picks: Vec<String> = computer_team.iter().map(ToString::to_string).collect();
            Some(format!(
                "Battle! computer picked {} · {} vs {} ...",
                picks.join(" "),
                player_total,
                computer_total
            ))
        }
        ArenaEvent::ResultRevealed { winner, .. } => {
            Some(format!("{} (`again` for a new round)", winner_line(*winner)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::CharacterId;

    #[test]
    fn favorite_marker_is_shown() {
        let rick = Character::new(1, "Rick Sanchez", "Human");
        assert!(character_line(&rick, true).starts_with('♥'));
        assert!(character_line(&rick, false).contains("#1"));
    }

    #[test]
    fn only_async_events_are_rendered() {
        assert!(
            round_event(&ArenaEvent::TeamChanged {
                round: 1,
                team: vec![CharacterId(1)]
            })
            .is_none()
        );
        assert_eq!(
            round_event(&ArenaEvent::ResultRevealed {
                round: 1,
                winner: Winner::Player
            })
            .as_deref(),
            Some("You win! (`again` for a new round)")
        );
    }

    #[test]
    fn loading_state_prompts_to_play() {
        assert!(state_summary(&GameState::new()).contains("type `play`"));
    }
}
