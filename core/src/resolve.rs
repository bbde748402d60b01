//! Turn resolution: clashes, ball flight, goals
//!
//! Once both teams have committed, their simultaneous actions collapse
//! into the next history entry here. Every random outcome is consumed
//! from the caller-supplied sequence in a fixed order (team 1 roster
//! order, then team 2), so replaying the same inputs reproduces the
//! same states bit-for-bit.

use alloc::vec;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::engine::Game;
use crate::error::{GameError, GameResult};
use crate::field::{calculate_path, gate_owner};
use crate::state::{GameState, TeamPlayer, TEAM_SIZE};
use crate::types::{GameAction, MoveType, Position, StateType, TeamEnum};

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// The outcome of one resolved turn: the committed state plus the
/// ordered snapshots (goal states first, then the move state) that the
/// broadcast layer pushes to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TurnOutput {
    pub new_state: GameState,
    pub renderer_states: Vec<GameState>,
}

/// Externally supplied randomness, consumed one value per clash.
/// Running out is a fatal configuration error: determinism must come
/// from the caller's random source, never from the engine inventing
/// values.
struct RandomTape<'a> {
    values: &'a [u64],
    cursor: usize,
}

impl<'a> RandomTape<'a> {
    fn new(values: &'a [u64]) -> Self {
        Self { values, cursor: 0 }
    }

    fn next(&mut self) -> GameResult<u64> {
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(GameError::RandomnessExhausted {
                needed: self.cursor as u32 + 1,
                provided: self.values.len() as u32,
            })?;
        self.cursor += 1;
        Ok(value)
    }

    /// Every value consumed so far, in consumption order.
    fn consumed(&self) -> Vec<u64> {
        self.values[..self.cursor].to_vec()
    }

    /// Even favors team 1 in any contested outcome; odd favors team 2.
    fn team1_prevails(value: u64) -> bool {
        value % 2 == 0
    }
}

pub(crate) fn resolve_turn(game: &mut Game, clash_randoms: &[u64]) -> GameResult<TurnOutput> {
    if !game.turn1.committed || !game.turn2.committed {
        return Err(GameError::TeamsNotCommitted);
    }

    // A zero-action commit is only legal at game start (the history
    // holds at most the kickoff snapshot). Later it means missing turn
    // data upstream and must fail loudly.
    let game_start = game.history.len() <= 1;
    if !game_start {
        if game.turn1.staged.is_empty() {
            return Err(GameError::MissingActions {
                team: TeamEnum::Team1,
            });
        }
        if game.turn2.staged.is_empty() {
            return Err(GameError::MissingActions {
                team: TeamEnum::Team2,
            });
        }
    }

    let mut tape = RandomTape::new(clash_randoms);

    resolve_position_clashes(game, &mut tape)?;
    resolve_ball_flight(game, &mut tape)?;
    resolve_loose_ball(game);

    let consumed = tape.consumed();
    log::debug!(
        "game {}: turn resolved, {} random(s) consumed",
        game.game_id(),
        consumed.len()
    );

    if let Some(defending) = gate_owner(game.ball.position) {
        return Ok(finish_goal(game, defending, consumed));
    }

    clear_turn(game);
    let new_state = GameState::capture(
        &game.team1,
        &game.team2,
        &game.ball,
        StateType::Move,
        consumed,
    );
    game.history.push(new_state.clone());
    Ok(TurnOutput {
        renderer_states: vec![new_state.clone()],
        new_state,
    })
}

/// Every cell a player occupied during this turn: the pre-move cell
/// plus each cell of the movement path for a player who ran or tackled,
/// just the current cell otherwise (PASS/SHOT stagers do not move).
fn turn_footprint(player: &TeamPlayer) -> Vec<Position> {
    match player.old_position {
        Some(old) if old != player.position => {
            let mut cells = vec![old];
            cells.extend(calculate_path(old, player.position, MoveType::Run));
            cells
        }
        _ => vec![player.position],
    }
}

/// Resolve every clash between opposing players: a pair clashes when
/// one lands on or passes through a cell the other occupied this turn,
/// so crossing runs contest just like same-destination landings. Pairs
/// are enumerated in team1-roster-major order so the random sequence
/// maps onto clashes reproducibly.
///
/// A carried ball always ends up with the winner. When both landed on
/// the same cell, the board is disentangled: a loser who moved is
/// pushed back to their pre-move cell, and against a standing loser the
/// winning mover retreats to their own pre-move cell with the spoils.
/// No resolved state leaves two players on one cell.
fn resolve_position_clashes(game: &mut Game, tape: &mut RandomTape<'_>) -> GameResult<()> {
    for i in 0..TEAM_SIZE {
        for j in 0..TEAM_SIZE {
            let footprint1 = turn_footprint(&game.team1.players[i]);
            let footprint2 = turn_footprint(&game.team2.players[j]);
            if !footprint1.iter().any(|cell| footprint2.contains(cell)) {
                continue;
            }
            let team1_wins = RandomTape::team1_prevails(tape.next()?);
            log::trace!(
                "game {}: clash #{}v#{} at ({},{}) -> {:?}",
                game.game_id(),
                i,
                j,
                game.team1.players[i].position.x,
                game.team1.players[i].position.y,
                if team1_wins {
                    TeamEnum::Team1
                } else {
                    TeamEnum::Team2
                }
            );
            let ball_contested =
                game.team1.players[i].has_ball || game.team2.players[j].has_ball;
            let same_destination =
                game.team1.players[i].position == game.team2.players[j].position;

            let loser_moved;
            {
                let loser = if team1_wins {
                    &mut game.team2.players[j]
                } else {
                    &mut game.team1.players[i]
                };
                loser_moved = loser.old_position.is_some() && loser.old_position != Some(loser.position);
                if same_destination && loser_moved {
                    if let Some(old) = loser.old_position {
                        loser.position = old;
                    }
                }
                if ball_contested {
                    loser.has_ball = false;
                }
            }

            let (winner, winner_team) = if team1_wins {
                (&mut game.team1.players[i], TeamEnum::Team1)
            } else {
                (&mut game.team2.players[j], TeamEnum::Team2)
            };
            if same_destination && !loser_moved {
                if let Some(old) = winner.old_position {
                    winner.position = old;
                }
            }
            if ball_contested {
                winner.has_ball = true;
                game.ball.position = winner.position;
                game.ball.owner = Some(winner_team);
            }
        }
    }
    Ok(())
}

/// Walk every staged PASS/SHOT along its path and let opposing players
/// standing on it contest the ball, nearest cell first. One random per
/// contesting player; an interception stops the flight at that cell.
fn resolve_ball_flight(game: &mut Game, tape: &mut RandomTape<'_>) -> GameResult<()> {
    for team in [TeamEnum::Team1, TeamEnum::Team2] {
        let mut actions: Vec<GameAction> = game
            .turn(team)
            .staged
            .iter()
            .map(|m| m.action)
            .filter(|a| a.move_type.moves_ball())
            .collect();
        actions.sort_unstable_by_key(|a| a.player_id);

        for action in actions {
            let opponent_team = team.opponent();
            let mut intercepted = false;
            for cell in calculate_path(action.old_position, action.new_position, action.move_type)
            {
                for j in 0..TEAM_SIZE {
                    if game.team(opponent_team).players[j].position != cell {
                        continue;
                    }
                    let team1_wins = RandomTape::team1_prevails(tape.next()?);
                    let interceptor_wins = match opponent_team {
                        TeamEnum::Team1 => team1_wins,
                        TeamEnum::Team2 => !team1_wins,
                    };
                    if interceptor_wins {
                        let interceptor = match opponent_team {
                            TeamEnum::Team1 => &mut game.team1.players[j],
                            TeamEnum::Team2 => &mut game.team2.players[j],
                        };
                        interceptor.has_ball = true;
                        game.ball.position = cell;
                        game.ball.owner = Some(opponent_team);
                        intercepted = true;
                        break;
                    }
                }
                if intercepted {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// A loose ball is controlled by whoever stands on its cell, team 1
/// roster first. Covers a pass landing on a teammate who ran there
/// this turn, and a stray ball from an earlier turn.
fn resolve_loose_ball(game: &mut Game) {
    if game.ball.owner.is_some() {
        return;
    }
    let ball_position = game.ball.position;
    for team in [TeamEnum::Team1, TeamEnum::Team2] {
        let roster = match team {
            TeamEnum::Team1 => &mut game.team1,
            TeamEnum::Team2 => &mut game.team2,
        };
        if let Some(player) = roster
            .players
            .iter_mut()
            .find(|p| p.position == ball_position)
        {
            player.has_ball = true;
            game.ball.owner = Some(team);
            return;
        }
    }
}

/// Emit the goal state, credit the scorer and reset the field for a
/// kickoff with the conceding side in possession. The reset snapshot
/// is the turn's regular move state.
fn finish_goal(game: &mut Game, defending: TeamEnum, consumed: Vec<u64>) -> TurnOutput {
    let scorer = defending.opponent();
    let state_type = match scorer {
        TeamEnum::Team1 => {
            game.team1.score += 1;
            StateType::GoalTeam1
        }
        TeamEnum::Team2 => {
            game.team2.score += 1;
            StateType::GoalTeam2
        }
    };
    log::info!(
        "game {}: goal for {:?} ({}:{})",
        game.game_id(),
        scorer,
        game.team1.score,
        game.team2.score
    );

    clear_turn(game);
    let goal_state = GameState::capture(&game.team1, &game.team2, &game.ball, state_type, consumed);
    game.reset_for_kickoff(defending);
    let move_state = GameState::capture(
        &game.team1,
        &game.team2,
        &game.ball,
        StateType::Move,
        Vec::new(),
    );

    game.history.push(goal_state.clone());
    game.history.push(move_state.clone());
    TurnOutput {
        renderer_states: vec![goal_state, move_state.clone()],
        new_state: move_state,
    }
}

/// Drop staged markers and commit flags without reverting the board.
fn clear_turn(game: &mut Game) {
    for player in game
        .team1
        .players
        .iter_mut()
        .chain(game.team2.players.iter_mut())
    {
        player.old_position = None;
    }
    game.turn1 = Default::default();
    game.turn2 = Default::default();
}
