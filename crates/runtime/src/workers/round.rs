//! Round worker that owns the authoritative [`arena_core::GameState`].
//!
//! Receives commands from [`crate::ArenaHandle`], applies them through
//! [`arena_core::GameEngine`], and publishes [`ArenaEvent`]s to the
//! [`EventBus`]. The post-battle reveal is a cancellable timer task that
//! reports back on an internal channel; a reveal for any round other than the
//! current one is dropped.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use arena_core::{
    CharacterId, CharacterPage, GameConfig, GameEngine, GameError, GamePhase, GameState,
    RngOracle, RoundAction, Transition, TransitionError, choose_page,
};
use tracing::{debug, error, info, warn};

use crate::api::{FetchError, Result, RuntimeError};
use crate::events::{ArenaEvent, EventBus};

/// A freshly reset round waiting for its catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTicket {
    pub round: u64,
    /// Catalog page to sample the pool from.
    pub page: u32,
}

/// Commands that can be sent to the round worker
pub enum Command {
    /// Discard the current round, enter `loading` and pick a catalog page.
    BeginRound {
        reply: oneshot::Sender<Result<RoundTicket>>,
    },
    /// Deliver the fetched page (or the fetch failure) for `round`.
    LoadPool {
        round: u64,
        page: std::result::Result<CharacterPage, FetchError>,
        reply: oneshot::Sender<Result<GameState>>,
    },
    Select {
        id: CharacterId,
        reply: oneshot::Sender<Result<GameState>>,
    },
    Deselect {
        id: CharacterId,
        reply: oneshot::Sender<Result<GameState>>,
    },
    /// Query the current round state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes round commands.
pub struct RoundWorker {
    state: GameState,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    reveal_delay: Duration,
    command_rx: mpsc::Receiver<Command>,
    reveal_tx: mpsc::Sender<u64>,
    reveal_rx: mpsc::Receiver<u64>,
    pending_reveal: Option<JoinHandle<()>>,
    event_bus: EventBus,
}

impl RoundWorker {
    pub fn new(
        config: GameConfig,
        rng: Box<dyn RngOracle>,
        reveal_delay: Duration,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        let (reveal_tx, reveal_rx) = mpsc::channel(4);
        Self {
            state: GameState::new(),
            config,
            rng,
            reveal_delay,
            command_rx,
            reveal_tx,
            reveal_rx,
            pending_reveal: None,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(round) = self.reveal_rx.recv() => self.reveal(round),
            }
        }

        self.cancel_reveal();
        debug!(target: "runtime::worker", "Round worker stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::BeginRound { reply } => {
                let _ = reply.send(self.begin_round());
            }
            Command::LoadPool { round, page, reply } => {
                let _ = reply.send(self.load_pool(round, page));
            }
            Command::Select { id, reply } => {
                let _ = reply.send(self.select(id));
            }
            Command::Deselect { id, reply } => {
                let result = self
                    .apply(RoundAction::Deselect(id))
                    .map(|_| self.state.clone());
                let _ = reply.send(result);
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    fn begin_round(&mut self) -> Result<RoundTicket> {
        self.apply(RoundAction::Reset)?;
        self.cancel_reveal();

        let ticket = RoundTicket {
            round: self.state.round,
            page: choose_page(self.rng.as_mut(), self.config.page_count),
        };
        info!(
            target: "runtime::worker",
            round = ticket.round,
            page = ticket.page,
            "Round started"
        );
        Ok(ticket)
    }

    fn load_pool(
        &mut self,
        round: u64,
        page: std::result::Result<CharacterPage, FetchError>,
    ) -> Result<GameState> {
        if round != self.state.round {
            return Err(RuntimeError::StaleRound {
                round,
                current: self.state.round,
            });
        }

        let characters = match page {
            Ok(page) => page.results,
            Err(error) => {
                warn!(target: "runtime::worker", round, %error, "Catalog fetch failed");
                self.event_bus.publish(ArenaEvent::PoolFailed {
                    round,
                    reason: error.to_string(),
                });
                return Err(error.into());
            }
        };

        match self.apply(RoundAction::LoadPool(characters)) {
            Ok(_) => Ok(self.state.clone()),
            Err(RuntimeError::Transition(TransitionError::Pool(error))) => {
                warn!(target: "runtime::worker", round, %error, "Pool sampling failed");
                self.event_bus.publish(ArenaEvent::PoolFailed {
                    round,
                    reason: error.to_string(),
                });
                Err(TransitionError::Pool(error).into())
            }
            Err(error) => Err(error),
        }
    }

    fn select(&mut self, id: CharacterId) -> Result<GameState> {
        let transition = self.apply(RoundAction::Select(id))?;
        if let Transition::BattleStarted { round, .. } = transition {
            self.schedule_reveal(round);
        }
        Ok(self.state.clone())
    }

    /// Run one action through the reducer and publish what changed.
    fn apply(&mut self, action: RoundAction) -> Result<Transition> {
        let label = action.as_str();
        let result =
            GameEngine::new(&mut self.state, &self.config).execute(action, self.rng.as_mut());

        match result {
            Ok(transition) => {
                debug!(
                    target: "runtime::worker",
                    action = label,
                    phase = %transition.phase(),
                    "Transition applied"
                );
                self.publish_transition(&transition);
                Ok(transition)
            }
            Err(error) => {
                if error.severity().is_internal() {
                    error!(
                        target: "runtime::worker",
                        action = label,
                        code = error.error_code(),
                        %error,
                        "Transition failed"
                    );
                } else {
                    debug!(
                        target: "runtime::worker",
                        action = label,
                        code = error.error_code(),
                        %error,
                        "Action rejected"
                    );
                }
                Err(error.into())
            }
        }
    }

    fn publish_transition(&self, transition: &Transition) {
        match transition {
            Transition::Reset { round } => {
                self.publish_phase(*round, GamePhase::Loading);
            }
            Transition::PoolLoaded { round, .. } => {
                self.event_bus.publish(ArenaEvent::PoolReady {
                    round: *round,
                    pool: self.state.pool.iter().map(|member| member.id()).collect(),
                });
                self.publish_phase(*round, GamePhase::Selecting);
            }
            Transition::TeamChanged { round, team } => {
                self.event_bus.publish(ArenaEvent::TeamChanged {
                    round: *round,
                    team: team.clone(),
                });
            }
            Transition::BattleStarted {
                round,
                computer_team,
                outcome,
            } => {
                self.event_bus.publish(ArenaEvent::TeamChanged {
                    round: *round,
                    team: self.state.player_team.ids().collect(),
                });
                self.event_bus.publish(ArenaEvent::BattleResolved {
                    round: *round,
                    computer_team: computer_team.clone(),
                    player_total: outcome.player_total,
                    computer_total: outcome.computer_total,
                });
                self.publish_phase(*round, GamePhase::Battle);
            }
            Transition::ResultRevealed { round, winner } => {
                self.event_bus.publish(ArenaEvent::ResultRevealed {
                    round: *round,
                    winner: *winner,
                });
                self.publish_phase(*round, GamePhase::Result);
            }
        }
    }

    fn publish_phase(&self, round: u64, phase: GamePhase) {
        self.event_bus
            .publish(ArenaEvent::PhaseChanged { round, phase });
    }

    fn schedule_reveal(&mut self, round: u64) {
        self.cancel_reveal();

        let reveal_tx = self.reveal_tx.clone();
        let delay = self.reveal_delay;
        self.pending_reveal = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = reveal_tx.send(round).await;
        }));

        debug!(
            target: "runtime::worker",
            round,
            delay_ms = delay.as_millis() as u64,
            "Reveal scheduled"
        );
    }

    fn cancel_reveal(&mut self) {
        if let Some(task) = self.pending_reveal.take() {
            task.abort();
        }
    }

    fn reveal(&mut self, round: u64) {
        if round != self.state.round || self.state.phase != GamePhase::Battle {
            debug!(
                target: "runtime::worker",
                round,
                current = self.state.round,
                "Ignoring stale reveal"
            );
            return;
        }

        self.pending_reveal = None;
        if let Ok(Transition::ResultRevealed { winner, .. }) =
            self.apply(RoundAction::RevealResult)
        {
            info!(target: "runtime::worker", round, %winner, "Result revealed");
        }
    }
}
