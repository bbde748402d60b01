//! The `Game` aggregate and its staging/commit entry points
//!
//! One `Game` instance is the authoritative in-memory board for a
//! single match. Callers construct it per request or per replay loop;
//! the engine assumes single-threaded access and enforces only the
//! staged-then-committed turn discipline.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::moves::{calculate_available_cells, validate_action};
use crate::resolve::{resolve_turn, TurnOutput};
use crate::state::{Ball, GameState, Team, BALL_START, TEAM_SIZE};
use crate::types::{GameAction, GameStatus, MoveType, PlayerId, Position, StateType, TeamEnum};

/// A staged, not-yet-committed move plus the ball snapshot needed to
/// undo it.
#[derive(Debug, Clone)]
pub(crate) struct StagedMove {
    pub action: GameAction,
    /// Ball state before this move mutated it; `None` when the move
    /// did not touch the ball.
    pub prev_ball: Option<Ball>,
}

/// One team's progress through the current turn.
#[derive(Debug, Clone, Default)]
pub(crate) struct TeamTurn {
    pub staged: Vec<StagedMove>,
    pub committed: bool,
}

/// Aggregate root for one match. Owns both teams and the ball
/// exclusively; mutated only through the methods below.
#[derive(Debug, Clone)]
pub struct Game {
    game_id: u64,
    pub(crate) team1: Team,
    pub(crate) team2: Team,
    pub(crate) ball: Ball,
    pub(crate) history: Vec<GameState>,
    status: GameStatus,
    pub(crate) turn1: TeamTurn,
    pub(crate) turn2: TeamTurn,
}

impl Game {
    /// Create a game shell. The board is not playable until
    /// [`Game::new_game`] seeds the kickoff formation.
    pub fn new(game_id: u64) -> Self {
        Self {
            game_id,
            team1: Team::new(TeamEnum::Team1, String::from("Team 1"), false),
            team2: Team::new(TeamEnum::Team2, String::from("Team 2"), false),
            ball: Ball {
                position: BALL_START,
                owner: None,
            },
            history: Vec::new(),
            status: GameStatus::Waiting,
            turn1: TeamTurn::default(),
            turn2: TeamTurn::default(),
        }
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn team(&self, team: TeamEnum) -> &Team {
        match team {
            TeamEnum::Team1 => &self.team1,
            TeamEnum::Team2 => &self.team2,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Append-only sequence of resolved states, oldest first.
    pub fn history(&self) -> &[GameState] {
        &self.history
    }

    /// Seed the kickoff formation, reset scores and open play. The
    /// possessing team's striker starts on the ball at midfield.
    pub fn new_game(&mut self, team_with_ball: TeamEnum) {
        log::debug!(
            "game {}: new game, ball to {:?}",
            self.game_id,
            team_with_ball
        );
        self.team1.score = 0;
        self.team2.score = 0;
        self.reset_for_kickoff(team_with_ball);
        self.history.clear();
        self.history.push(GameState::capture(
            &self.team1,
            &self.team2,
            &self.ball,
            StateType::StartPositions,
            Vec::new(),
        ));
        self.status = GameStatus::Active;
    }

    /// Mark the match over. Win conditions live in the surrounding game
    /// server; the engine only gates further staging.
    pub fn finish(&mut self) {
        self.status = GameStatus::Finished;
    }

    /// Every cell `player_id` may target with `move_type` from the
    /// current board.
    pub fn calculate_available_cells(
        &self,
        team: TeamEnum,
        player_id: PlayerId,
        move_type: MoveType,
    ) -> GameResult<Vec<Position>> {
        calculate_available_cells(self.team(team), player_id, move_type)
    }

    /// Strict apply-and-validate staging for live play. Rejects any
    /// action that is illegal on the current board, which is how
    /// malformed or adversarial action logs are stopped before they can
    /// corrupt engine state.
    pub fn do_player_move(&mut self, action: &GameAction) -> GameResult<()> {
        self.ensure_active()?;
        if self.turn(action.team).committed {
            return Err(GameError::AlreadyCommitted { team: action.team });
        }
        validate_action(self.team(action.team), action)?;
        self.apply_action(action);
        Ok(())
    }

    /// Stage a move without legality checks, for replaying historical
    /// logs that were validated when first committed. Still refuses
    /// structurally impossible input (unknown player, inactive game).
    pub fn apply_trusted_move(&mut self, action: &GameAction) -> GameResult<()> {
        self.ensure_active()?;
        self.team(action.team).player(action.player_id)?;
        self.apply_action(action);
        Ok(())
    }

    /// Revert a staged move, restoring the player's position and any
    /// ball change. No-op if the player has nothing staged.
    pub fn undo_player_move(&mut self, team: TeamEnum, player_id: PlayerId) -> GameResult<()> {
        self.ensure_active()?;
        if self.turn(team).committed {
            return Err(GameError::AlreadyCommitted { team });
        }
        self.team(team).player(player_id)?;
        let turn = self.turn_mut(team);
        let Some(index) = turn
            .staged
            .iter()
            .position(|m| m.action.player_id == player_id)
        else {
            return Ok(());
        };
        let staged = turn.staged.remove(index);
        self.revert_staged(team, &staged);
        Ok(())
    }

    /// Freeze this team's staged actions for the turn. Idempotency
    /// guard: a second commit before resolution is an error.
    pub fn commit_move(&mut self, team: TeamEnum) -> GameResult<()> {
        self.ensure_active()?;
        let turn = self.turn_mut(team);
        if turn.committed {
            return Err(GameError::AlreadyCommitted { team });
        }
        turn.committed = true;
        log::debug!("game {}: {:?} committed", self.game_id, team);
        Ok(())
    }

    /// Resolve both teams' committed actions into the next state(s).
    /// Requires both commits; consumes `clash_randoms` entries in a
    /// fixed, reproducible order.
    pub fn calculate_new_state(&mut self, clash_randoms: &[u64]) -> GameResult<TurnOutput> {
        self.ensure_active()?;
        resolve_turn(self, clash_randoms)
    }

    /// Seed positions and ball directly from a persisted snapshot,
    /// bypassing the staging/commit machinery. Used when resuming from
    /// storage instead of replaying from turn 1.
    pub fn save_state(&mut self, state: &GameState) -> GameResult<()> {
        if state.team1_positions.len() != TEAM_SIZE || state.team2_positions.len() != TEAM_SIZE {
            return Err(GameError::MalformedState);
        }
        for (player, &pos) in self
            .team1
            .players
            .iter_mut()
            .chain(self.team2.players.iter_mut())
            .zip(state.team1_positions.iter().chain(&state.team2_positions))
        {
            player.position = pos;
            player.old_position = None;
            player.has_ball = false;
        }
        self.ball.position = state.ball_position;
        self.ball.owner = state.ball_owner;
        if let Some(owner) = state.ball_owner {
            let ball_position = state.ball_position;
            let roster = match owner {
                TeamEnum::Team1 => &mut self.team1,
                TeamEnum::Team2 => &mut self.team2,
            };
            let carrier = roster
                .players
                .iter_mut()
                .find(|p| p.position == ball_position)
                .ok_or(GameError::MalformedState)?;
            carrier.has_ball = true;
        }
        self.turn1 = TeamTurn::default();
        self.turn2 = TeamTurn::default();
        self.status = GameStatus::Active;
        Ok(())
    }
}

// Private implementation methods
impl Game {
    fn ensure_active(&self) -> GameResult<()> {
        if self.status != GameStatus::Active {
            return Err(GameError::GameNotActive);
        }
        Ok(())
    }

    pub(crate) fn turn(&self, team: TeamEnum) -> &TeamTurn {
        match team {
            TeamEnum::Team1 => &self.turn1,
            TeamEnum::Team2 => &self.turn2,
        }
    }

    pub(crate) fn turn_mut(&mut self, team: TeamEnum) -> &mut TeamTurn {
        match team {
            TeamEnum::Team1 => &mut self.turn1,
            TeamEnum::Team2 => &mut self.turn2,
        }
    }

    fn team_mut(&mut self, team: TeamEnum) -> &mut Team {
        match team {
            TeamEnum::Team1 => &mut self.team1,
            TeamEnum::Team2 => &mut self.team2,
        }
    }

    /// Mutate the board for a validated (or trusted) action and record
    /// the staged move for undo.
    fn apply_action(&mut self, action: &GameAction) {
        log::trace!(
            "game {}: stage {:?} {:?} #{} -> {:?}",
            self.game_id,
            action.team,
            action.move_type,
            action.player_id,
            action.new_position
        );
        let prev_ball;
        {
            let ball = self.ball.clone();
            let player = self
                .team_mut(action.team)
                .player_mut(action.player_id)
                .expect("player checked by caller");
            // A second trusted move for the same player must not
            // overwrite the turn's true starting cell.
            if player.old_position.is_none() {
                player.old_position = Some(player.position);
            }
            if action.move_type.moves_ball() {
                // The player stays; the ball travels. Ownership is
                // settled at resolution (interception, pickup, goal).
                player.has_ball = false;
                prev_ball = Some(ball);
            } else {
                prev_ball = player.has_ball.then(|| ball);
                player.position = action.new_position;
            }
        }
        if action.move_type.moves_ball() {
            self.ball.position = action.new_position;
            self.ball.owner = None;
        } else if prev_ball.is_some() {
            // Carried ball moves in lock-step, ownership preserved.
            self.ball.position = action.new_position;
        }
        self.turn_mut(action.team).staged.push(StagedMove {
            action: *action,
            prev_ball,
        });
    }

    fn revert_staged(&mut self, team: TeamEnum, staged: &StagedMove) {
        let restored_ball = staged.prev_ball.clone();
        let player = self
            .team_mut(team)
            .player_mut(staged.action.player_id)
            .expect("staged move refers to existing player");
        if let Some(old) = player.old_position.take() {
            player.position = old;
        }
        if let Some(prev) = restored_ball {
            if prev.owner == Some(team) && prev.position == player.position {
                player.has_ball = true;
            }
            self.ball = prev;
        }
    }

    /// Undo every staged move and clear both commit flags. Used by the
    /// replay driver to discard a turn that failed validation.
    pub(crate) fn reset_turn(&mut self) {
        for team in [TeamEnum::Team2, TeamEnum::Team1] {
            while let Some(staged) = self.turn_mut(team).staged.pop() {
                self.revert_staged(team, &staged);
            }
            self.turn_mut(team).committed = false;
        }
    }

    /// Place both rosters in kickoff formation with possession for
    /// `team_with_ball`. Scores and history are untouched; goal resets
    /// and `new_game` share this.
    pub(crate) fn reset_for_kickoff(&mut self, team_with_ball: TeamEnum) {
        self.team1
            .reset_to_kickoff(team_with_ball == TeamEnum::Team1);
        self.team2
            .reset_to_kickoff(team_with_ball == TeamEnum::Team2);
        let striker = (TEAM_SIZE - 1) as PlayerId;
        let carrier = self
            .team_mut(team_with_ball)
            .player_mut(striker)
            .expect("roster always has a striker");
        carrier.has_ball = true;
        self.ball.position = BALL_START;
        self.ball.owner = Some(team_with_ball);
        self.turn1 = TeamTurn::default();
        self.turn2 = TeamTurn::default();
    }
}
