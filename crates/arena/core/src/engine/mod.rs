//! Round reducer.
//!
//! [`GameEngine`] is the only code path that mutates [`GameState`]. Each
//! [`RoundAction`] is checked against the current phase first; a rejected
//! action leaves the state untouched. Filling the player's team is an
//! edge-triggered guard inside `select`: the third pick runs the opponent
//! selection and battle resolution in the same transition and moves the
//! round to `battle`. Revealing the winner is a separate action so the
//! runtime can defer it behind a display delay.

mod errors;

pub use errors::TransitionError;

use crate::GameConfig;
use crate::battle::{BattleOutcome, Winner, resolve_battle, roll_luck};
use crate::character::{Character, CharacterId};
use crate::opponent::select_opponent_team;
use crate::pool::sample_pool;
use crate::rng::RngOracle;
use crate::state::{GamePhase, GameState};
use crate::team::SelectionError;

/// Inputs accepted by the round reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundAction {
    /// Discard the round and return to `loading`.
    Reset,
    /// A catalog page arrived; sample the pool from it.
    LoadPool(Vec<Character>),
    Select(CharacterId),
    Deselect(CharacterId),
    /// Display delay elapsed; publish the winner.
    RevealResult,
}

impl RoundAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::LoadPool(_) => "load_pool",
            Self::Select(_) => "select",
            Self::Deselect(_) => "deselect",
            Self::RevealResult => "reveal_result",
        }
    }
}

/// What a successful action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Reset { round: u64 },
    PoolLoaded { round: u64, size: usize },
    TeamChanged { round: u64, team: Vec<CharacterId> },
    /// Third pick landed: opponent chosen and battle computed.
    BattleStarted {
        round: u64,
        computer_team: Vec<CharacterId>,
        outcome: BattleOutcome,
    },
    ResultRevealed { round: u64, winner: Winner },
}

impl Transition {
    pub fn phase(&self) -> GamePhase {
        match self {
            Self::Reset { .. } => GamePhase::Loading,
            Self::PoolLoaded { .. } | Self::TeamChanged { .. } => GamePhase::Selecting,
            Self::BattleStarted { .. } => GamePhase::Battle,
            Self::ResultRevealed { .. } => GamePhase::Result,
        }
    }
}

/// Reducer over a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Apply one action, drawing any randomness it needs from `rng`.
    pub fn execute(
        &mut self,
        action: RoundAction,
        rng: &mut dyn RngOracle,
    ) -> Result<Transition, TransitionError> {
        match action {
            RoundAction::Reset => self.reset(),
            RoundAction::LoadPool(page) => self.load_pool(&page, rng),
            RoundAction::Select(id) => self.select(id, rng),
            RoundAction::Deselect(id) => self.deselect(id),
            RoundAction::RevealResult => self.reveal_result(),
        }
    }

    fn expect_phase(
        &self,
        action: &'static str,
        expected: GamePhase,
    ) -> Result<(), TransitionError> {
        let actual = self.state.phase;
        if actual != expected {
            return Err(TransitionError::WrongPhase {
                action,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<Transition, TransitionError> {
        if self.state.phase == GamePhase::Battle {
            return Err(TransitionError::ResetDuringBattle);
        }
        self.state.clear_round();
        self.state.round += 1;
        Ok(Transition::Reset {
            round: self.state.round,
        })
    }

    fn load_pool(
        &mut self,
        page: &[Character],
        rng: &mut dyn RngOracle,
    ) -> Result<Transition, TransitionError> {
        self.expect_phase("load_pool", GamePhase::Loading)?;

        let pool = sample_pool(page, self.config, rng)?;
        let size = pool.len();

        self.state.pool = pool;
        self.state.player_team.clear();
        self.state.computer_team.clear();
        self.state.outcome = None;
        self.state.winner = None;
        self.state.phase = GamePhase::Selecting;

        Ok(Transition::PoolLoaded {
            round: self.state.round,
            size,
        })
    }

    fn select(
        &mut self,
        id: CharacterId,
        rng: &mut dyn RngOracle,
    ) -> Result<Transition, TransitionError> {
        self.expect_phase("select", GamePhase::Selecting)?;

        let member = self
            .state
            .pool_member(id)
            .cloned()
            .ok_or(SelectionError::NotInPool(id))?;
        self.state.player_team.push(member)?;

        if self.state.player_team.is_full() {
            return Ok(self.begin_battle(rng));
        }

        Ok(Transition::TeamChanged {
            round: self.state.round,
            team: self.state.player_team.ids().collect(),
        })
    }

    fn deselect(&mut self, id: CharacterId) -> Result<Transition, TransitionError> {
        self.expect_phase("deselect", GamePhase::Selecting)?;

        self.state.player_team.remove(id)?;

        Ok(Transition::TeamChanged {
            round: self.state.round,
            team: self.state.player_team.ids().collect(),
        })
    }

    /// Runs when the player's team has just been filled.
    fn begin_battle(&mut self, rng: &mut dyn RngOracle) -> Transition {
        let computer_team = select_opponent_team(&self.state.pool, self.config, rng);
        let luck = roll_luck(rng, self.config.luck_range);
        let outcome = resolve_battle(&self.state.player_team, &computer_team, luck);

        let computer_ids = computer_team.ids().collect();
        self.state.computer_team = computer_team;
        self.state.outcome = Some(outcome);
        self.state.phase = GamePhase::Battle;

        Transition::BattleStarted {
            round: self.state.round,
            computer_team: computer_ids,
            outcome,
        }
    }

    fn reveal_result(&mut self) -> Result<Transition, TransitionError> {
        self.expect_phase("reveal_result", GamePhase::Battle)?;

        let outcome = self.state.outcome.ok_or(TransitionError::MissingOutcome)?;
        self.state.winner = Some(outcome.winner);
        self.state.phase = GamePhase::Result;

        Ok(Transition::ResultRevealed {
            round: self.state.round,
            winner: outcome.winner,
        })
    }
}
