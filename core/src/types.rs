//! Shared game types
//!
//! The enums and small value types that every other module builds on.
//! All of them mirror the on-chain contract's representation, so they
//! carry SCALE codecs alongside the serde derives used by API callers.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Stable per-team player identifier. 0 is the goalkeeper, 1-5 are
/// field players, matching roster order.
pub type PlayerId = u8;

/// The two sides of a match. Ball ownership uses `Option<TeamEnum>`,
/// never a magic numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum TeamEnum {
    Team1,
    Team2,
}

impl TeamEnum {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            TeamEnum::Team1 => TeamEnum::Team2,
            TeamEnum::Team2 => TeamEnum::Team1,
        }
    }
}

/// The four kinds of player action, each with a fixed maximum travel
/// distance shared with the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum MoveType {
    Run,
    Tackle,
    Pass,
    Shot,
}

impl MoveType {
    /// Maximum travel distance in the chessboard (king-move) metric.
    pub const fn max_distance(self) -> u8 {
        match self {
            MoveType::Run => 2,
            MoveType::Tackle => 1,
            MoveType::Pass => 3,
            MoveType::Shot => 4,
        }
    }

    /// Whether the action moves the ball rather than the player.
    pub const fn moves_ball(self) -> bool {
        matches!(self, MoveType::Pass | MoveType::Shot)
    }
}

/// A grid cell. The playable field and the goal-mouth margins are both
/// addressed in this coordinate space; see the `field` module for bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Chessboard (king-move) distance: `max(|dx|, |dy|)`. This is the
    /// reachability metric, deliberately not Euclidean.
    pub fn distance(self, other: Position) -> u8 {
        let dx = (self.x as i16 - other.x as i16).unsigned_abs();
        let dy = (self.y as i16 - other.y as i16).unsigned_abs();
        dx.max(dy) as u8
    }
}

/// One player's staged move for a turn. Produced by the move codec or
/// staged directly by a caller; consumed by resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameAction {
    pub player_id: PlayerId,
    pub move_type: MoveType,
    /// For RUN/TACKLE: the player's pre-move cell. For PASS/SHOT: the
    /// ball's cell (the carrier's position).
    pub old_position: Position,
    /// For RUN/TACKLE: the player's destination. For PASS/SHOT: the
    /// ball's destination.
    pub new_position: Position,
    pub team: TeamEnum,
}

/// What kind of snapshot a history entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum StateType {
    StartPositions,
    Move,
    GoalTeam1,
    GoalTeam2,
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum GameStatus {
    Waiting,
    Active,
    Finished,
}
