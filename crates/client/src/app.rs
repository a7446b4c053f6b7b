//! Line-oriented terminal frontend.
//!
//! Commands are read from stdin and answered on stdout. Round events that
//! arrive on their own (the battle and the delayed reveal) are printed by a
//! background task subscribed to the round topic.

use anyhow::Result;
use arena_core::GamePhase;
use arena_runtime::{
    ArenaHandle, CatalogBrowser, Event, LocalSession, Runtime, Topic, sign_out,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::command::{Command, HELP};
use crate::render;

/// Whether the loop keeps reading after a command.
enum Flow {
    Continue,
    Exit,
}

pub struct App {
    handle: ArenaHandle,
    browser: CatalogBrowser,
    session: LocalSession,
}

impl App {
    pub fn new(runtime: &Runtime) -> Self {
        Self {
            handle: runtime.handle(),
            browser: runtime.browser(),
            session: LocalSession::signed_in(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let printer = spawn_event_printer(self.handle.subscribe(Topic::Round));

        println!("Character arena. Type `help` for commands.");
        let opened = self.browser.open().await.map(|_| ());
        match opened {
            Ok(()) => print_page(&self.browser),
            Err(error) => println!("! {error}"),
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(error) => {
                    println!("! {error}");
                    continue;
                }
            };

            tracing::debug!(?command, "Command received");
            match self.execute(command).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(error) => println!("! {error}"),
            }
        }

        printer.abort();
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> arena_runtime::Result<Flow> {
        match command {
            Command::List => {
                self.browser.refresh().await?;
                print_page(&self.browser);
            }
            Command::Search(term) => {
                self.browser.search(&term).await?;
                print_page(&self.browser);
            }
            Command::Next => {
                self.browser.next_page().await?;
                print_page(&self.browser);
            }
            Command::Prev => {
                self.browser.prev_page().await?;
                print_page(&self.browser);
            }
            Command::Fav(id) => {
                let favorite = self.browser.toggle_favorite_by_id(id)?;
                let verb = if favorite { "added to" } else { "removed from" };
                println!("{id} {verb} favorites");
            }
            Command::Favs => {
                let favorites = self.browser.favorites();
                if favorites.is_empty() {
                    println!("no favorites yet");
                }
                for character in favorites.iter() {
                    println!("{}", render::character_line(character, true));
                }
            }
            Command::Play | Command::Again => {
                let state = self.handle.start_round().await?;
                println!("{}", render::state_summary(&state));
            }
            Command::Pick(id) => {
                let state = self.handle.select(id).await?;
                if state.phase == GamePhase::Selecting {
                    println!("{}", render::state_summary(&state));
                }
            }
            Command::Drop(id) => {
                let state = self.handle.deselect(id).await?;
                println!("{}", render::state_summary(&state));
            }
            Command::State => {
                let state = self.handle.query_state().await?;
                println!("{}", render::state_summary(&state));
            }
            Command::Logout => {
                println!("Signing out...");
                sign_out(&self.session).await;
                return Ok(Flow::Exit);
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

fn print_page(browser: &CatalogBrowser) {
    let cursor = browser.cursor();
    for character in browser.characters() {
        println!(
            "{}",
            render::character_line(character, browser.is_favorite(character.id))
        );
    }
    match browser.search_term() {
        Some(term) => println!("page {} of {} · \"{term}\"", cursor.current(), cursor.total()),
        None => println!("page {} of {}", cursor.current(), cursor.total()),
    }
}

fn spawn_event_printer(mut events: broadcast::Receiver<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(Event::Round(event)) => {
                    if let Some(text) = render::round_event(&event) {
                        println!("{text}");
                    }
                }
                Ok(Event::Catalog(_)) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Event printer lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
