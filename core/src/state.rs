//! Entity model: teams, players, ball and history snapshots

use alloc::string::String;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::error::{GameError, GameResult};
use crate::types::{PlayerId, Position, StateType, TeamEnum};

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Players per team. Contract constant.
pub const TEAM_SIZE: usize = 6;
/// Roster id of the goalkeeper.
pub const GOALKEEPER_ID: PlayerId = 0;
/// Kickoff cell for the ball and the attacking striker.
pub const BALL_START: Position = Position::new(8, 5);

/// Kickoff layout (2-2-1) for one side, attacking rightward. Team 2
/// mirrors it with `x' = 16 - x`. The striker (id 5) starts on the
/// ball at midfield when their team has possession, one rank back
/// otherwise.
const FORMATION: [Position; TEAM_SIZE] = [
    Position::new(1, 5),
    Position::new(3, 3),
    Position::new(3, 7),
    Position::new(6, 3),
    Position::new(6, 7),
    Position::new(6, 5),
];

/// Kickoff positions for a side. `has_ball` places the striker on the
/// ball at midfield.
pub fn formation_positions(team: TeamEnum, has_ball: bool) -> [Position; TEAM_SIZE] {
    let mut positions = FORMATION;
    if has_ball {
        positions[TEAM_SIZE - 1] = BALL_START;
    }
    if team == TeamEnum::Team2 {
        for pos in &mut positions {
            pos.x = 16 - pos.x;
        }
    }
    positions
}

/// One player on a team's roster.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TeamPlayer {
    pub id: PlayerId,
    pub position: Position,
    /// Pre-move position, present only while a move is staged and not
    /// yet committed. Doubles as the "acted this turn" marker.
    pub old_position: Option<Position>,
    /// True only if this player currently carries the ball.
    pub has_ball: bool,
}

impl TeamPlayer {
    pub fn new(id: PlayerId, position: Position) -> Self {
        Self {
            id,
            position,
            old_position: None,
            has_ball: false,
        }
    }

    /// Whether this player has a staged, uncommitted move.
    pub fn is_staged(&self) -> bool {
        self.old_position.is_some()
    }
}

/// The match ball. Singleton per game; `owner` is `Some` exactly when
/// one player's `has_ball` flag is set, and the teams must agree.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Ball {
    pub position: Position,
    pub owner: Option<TeamEnum>,
}

/// One side's roster and score. Roster order is player-id order and is
/// meaningful: resolution and the move codec both index by it.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Team {
    pub team: TeamEnum,
    pub name: String,
    pub score: u32,
    pub players: Vec<TeamPlayer>,
}

impl Team {
    /// Create a roster in kickoff formation.
    pub fn new(team: TeamEnum, name: String, has_ball: bool) -> Self {
        let players = formation_positions(team, has_ball)
            .iter()
            .enumerate()
            .map(|(id, &pos)| TeamPlayer::new(id as PlayerId, pos))
            .collect();
        Self {
            team,
            name,
            score: 0,
            players,
        }
    }

    pub fn player(&self, id: PlayerId) -> GameResult<&TeamPlayer> {
        self.players
            .get(id as usize)
            .ok_or(GameError::UnknownPlayer {
                team: self.team,
                player_id: id,
            })
    }

    pub fn player_mut(&mut self, id: PlayerId) -> GameResult<&mut TeamPlayer> {
        let team = self.team;
        self.players
            .get_mut(id as usize)
            .ok_or(GameError::UnknownPlayer {
                team,
                player_id: id,
            })
    }

    /// Current positions in roster order.
    pub fn positions(&self) -> Vec<Position> {
        self.players.iter().map(|p| p.position).collect()
    }

    /// Whether any player of this team stands on `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.players.iter().any(|p| p.position == pos)
    }

    /// The player carrying the ball, if on this team.
    pub fn ball_carrier(&self) -> Option<&TeamPlayer> {
        self.players.iter().find(|p| p.has_ball)
    }

    /// Reset the roster to kickoff formation and clear staging.
    pub fn reset_to_kickoff(&mut self, has_ball: bool) {
        let positions = formation_positions(self.team, has_ball);
        for (player, &pos) in self.players.iter_mut().zip(positions.iter()) {
            player.position = pos;
            player.old_position = None;
            player.has_ball = false;
        }
    }
}

/// An immutable snapshot of the board, appended to history once per
/// resolved turn (plus one at game start and one per goal). Suitable
/// for direct persistence and for re-seeding an engine via
/// `Game::save_state`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameState {
    /// Team 1 player positions, index-aligned with roster order.
    pub team1_positions: Vec<Position>,
    /// Team 2 player positions, index-aligned with roster order.
    pub team2_positions: Vec<Position>,
    pub ball_position: Position,
    pub ball_owner: Option<TeamEnum>,
    pub state_type: StateType,
    /// The random outcomes consumed while resolving this turn, in
    /// consumption order. Kept for deterministic replay and audit.
    pub clash_random_results: Vec<u64>,
}

impl GameState {
    /// Capture the current board as a snapshot.
    pub fn capture(
        team1: &Team,
        team2: &Team,
        ball: &Ball,
        state_type: StateType,
        clash_random_results: Vec<u64>,
    ) -> Self {
        Self {
            team1_positions: team1.positions(),
            team2_positions: team2.positions(),
            ball_position: ball.position,
            ball_owner: ball.owner,
            state_type,
            clash_random_results,
        }
    }
}
