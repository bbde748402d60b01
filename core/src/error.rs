//! Error types for engine operations
//!
//! This module provides no_std compatible error types using enums
//! instead of String-based errors, so the same values can surface
//! through API handlers and on-chain error reporting alike.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::types::{MoveType, PlayerId, Position, TeamEnum};

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while staging, committing or resolving moves.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum GameError {
    /// The referenced player id does not exist on the roster
    UnknownPlayer { team: TeamEnum, player_id: PlayerId },
    /// The player already has a staged move this turn
    PlayerAlreadyMoved { team: TeamEnum, player_id: PlayerId },
    /// The action's old position does not match the current board
    StalePosition {
        team: TeamEnum,
        player_id: PlayerId,
        action: MoveType,
    },
    /// The target cell is not reachable for this move type
    OutOfReach {
        team: TeamEnum,
        player_id: PlayerId,
        action: MoveType,
        target: Position,
    },
    /// PASS/SHOT attempted by a player who does not hold the ball
    NotBallCarrier {
        team: TeamEnum,
        player_id: PlayerId,
        action: MoveType,
    },
    /// The team already committed its moves for this turn
    AlreadyCommitted { team: TeamEnum },
    /// A team committed zero actions on a turn that is not game start
    MissingActions { team: TeamEnum },
    /// The game is not in the Active status
    GameNotActive,
    /// Resolution requested before both teams committed
    TeamsNotCommitted,
    /// The supplied randomness ran out before all clashes were resolved
    RandomnessExhausted { needed: u32, provided: u32 },
    /// A packed move integer does not decode to a legal action set
    MalformedMoves { slot: u8 },
    /// An externally supplied snapshot has the wrong shape
    MalformedState,
}

impl GameError {
    /// True for errors caused by an illegal action set (the replay
    /// driver skips such turns); false for structural errors that must
    /// abort the caller.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            GameError::TeamsNotCommitted
                | GameError::RandomnessExhausted { .. }
                | GameError::GameNotActive
                | GameError::MalformedState
        )
    }
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
