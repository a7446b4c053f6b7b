//! Line commands accepted by the terminal client.

use anyhow::{Context, Result, anyhow, bail};
use arena_core::CharacterId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the current catalog page.
    List,
    Search(String),
    Next,
    Prev,
    Fav(CharacterId),
    Favs,
    /// Start a round.
    Play,
    Pick(CharacterId),
    Drop(CharacterId),
    State,
    /// Reset and start a new round.
    Again,
    Logout,
    Help,
    Quit,
}

pub const HELP: &str = "\
Catalog:
  list              show the current page
  search <name>     filter by name (empty clears the filter)
  next | prev       change page
  fav <id>          toggle a favorite
  favs              list favorites
Arena:
  play              start a round
  pick <id>         add a pool member to your team
  drop <id>         remove a member from your team
  state             show the round
  again             start over with a new pool
Session:
  logout            sign out and exit
  help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "search" | "s" => Self::Search(rest.to_string()),
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "fav" => Self::Fav(parse_id(rest)?),
            "favs" => Self::Favs,
            "play" => Self::Play,
            "pick" => Self::Pick(parse_id(rest)?),
            "drop" => Self::Drop(parse_id(rest)?),
            "state" => Self::State,
            "again" | "reset" => Self::Again,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command `{other}` (try `help`)"),
        };
        Ok(command)
    }
}

fn parse_id(arg: &str) -> Result<CharacterId> {
    if arg.is_empty() {
        return Err(anyhow!("missing character id"));
    }
    let id: u32 = arg
        .trim_start_matches('#')
        .parse()
        .with_context(|| format!("`{arg}` is not a character id"))?;
    Ok(CharacterId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("pick 12").unwrap(), Command::Pick(CharacterId(12)));
        assert_eq!(Command::parse("  DROP #3 ").unwrap(), Command::Drop(CharacterId(3)));
        assert_eq!(
            Command::parse("search  evil morty").unwrap(),
            Command::Search("evil morty".into())
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(Command::parse("again").unwrap(), Command::Again);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("pick").is_err());
        assert!(Command::parse("fav rick").is_err());
        assert!(Command::parse("teleport").is_err());
    }
}
