//! Reconstruction driver
//!
//! Rebuilds full game history from sparse event logs by replaying
//! historical action pairs through the live engine. Historical data may
//! predate stricter validation rules, so a turn that fails validation
//! is rolled back, flagged and skipped rather than crashing the replay.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::codec::deserialize_moves;
use crate::engine::Game;
use crate::error::{GameError, GameResult};
use crate::resolve::TurnOutput;
use crate::types::{GameAction, TeamEnum};

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// One historical turn as pulled from event logs: both teams' decoded
/// action sets plus the verifiable randomness the contract consumed.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TurnRecord {
    pub team1_moves: Vec<GameAction>,
    pub team2_moves: Vec<GameAction>,
    pub clash_randoms: Vec<u64>,
}

impl TurnRecord {
    /// Decode a turn straight from the packed on-chain integers.
    pub fn from_packed(team1: u128, team2: u128, clash_randoms: Vec<u64>) -> GameResult<Self> {
        Ok(Self {
            team1_moves: deserialize_moves(team1, TeamEnum::Team1)?,
            team2_moves: deserialize_moves(team2, TeamEnum::Team2)?,
            clash_randoms,
        })
    }
}

/// One historical turn still in its packed on-chain form.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct PackedTurnRecord {
    pub team1_moves: u128,
    pub team2_moves: u128,
    pub clash_randoms: Vec<u64>,
}

/// A turn the driver could not apply, with the error that rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct SkippedTurn {
    pub index: u32,
    pub error: GameError,
}

/// Outcome summary of a replay run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct ReplayReport {
    pub applied: u32,
    pub skipped: Vec<SkippedTurn>,
}

/// Replay an ordered list of historical turns against a fresh game,
/// producing the same history the live engine would have. Validation
/// failures skip the turn and are flagged in the report; structural
/// errors (randomness exhaustion, inactive game) abort the replay.
pub fn replay_game(
    game_id: u64,
    team_with_ball: TeamEnum,
    turns: &[TurnRecord],
) -> GameResult<(Game, ReplayReport)> {
    drive_replay(game_id, team_with_ball, turns.iter().cloned().map(Ok))
}

/// [`replay_game`] over still-packed turns. A turn whose integers do
/// not decode is skipped and flagged in the report exactly like a turn
/// that fails action validation.
pub fn replay_packed_game(
    game_id: u64,
    team_with_ball: TeamEnum,
    turns: &[PackedTurnRecord],
) -> GameResult<(Game, ReplayReport)> {
    drive_replay(
        game_id,
        team_with_ball,
        turns.iter().map(|packed| {
            TurnRecord::from_packed(
                packed.team1_moves,
                packed.team2_moves,
                packed.clash_randoms.clone(),
            )
        }),
    )
}

fn drive_replay(
    game_id: u64,
    team_with_ball: TeamEnum,
    turns: impl Iterator<Item = GameResult<TurnRecord>>,
) -> GameResult<(Game, ReplayReport)> {
    let mut game = Game::new(game_id);
    game.new_game(team_with_ball);
    let mut report = ReplayReport::default();

    for (index, turn) in turns.enumerate() {
        match turn.and_then(|turn| apply_turn(&mut game, &turn)) {
            Ok(_) => report.applied += 1,
            Err(error) if error.is_validation() => {
                log::warn!(
                    "game {}: skipping malformed historical turn {}: {:?}",
                    game_id,
                    index,
                    error
                );
                game.reset_turn();
                report.skipped.push(SkippedTurn {
                    index: index as u32,
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    Ok((game, report))
}

fn apply_turn(game: &mut Game, turn: &TurnRecord) -> GameResult<TurnOutput> {
    for action in turn.team1_moves.iter().chain(&turn.team2_moves) {
        game.do_player_move(action)?;
    }
    game.commit_move(TeamEnum::Team1)?;
    game.commit_move(TeamEnum::Team2)?;
    game.calculate_new_state(&turn.clash_randoms)
}
