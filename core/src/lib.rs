//! Deterministic ChessBall move-resolution engine
//!
//! The single authoritative implementation of the turn-based grid
//! soccer rules that the on-chain contract enforces. API handlers, the
//! event-relay worker and the reconciliation job all import this crate
//! instead of carrying their own copy; every operation is pure,
//! synchronous computation with no I/O, so the same code runs natively,
//! in browser WASM and inside a runtime (`no_std` + `alloc`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod codec;
mod engine;
mod error;
mod field;
mod moves;
mod replay;
mod resolve;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use codec::{deserialize_moves, serialize_moves};
pub use engine::Game;
pub use error::{GameError, GameResult};
pub use field::{
    calculate_path, gate_owner, is_on_field, is_position_in_gates, PathIter, FIELD_HEIGHT,
    FIELD_WIDTH, GATE_Y_MAX, GATE_Y_MIN, PLAY_MAX_X, PLAY_MIN_X,
};
pub use moves::calculate_available_cells;
pub use replay::{
    replay_game, replay_packed_game, PackedTurnRecord, ReplayReport, SkippedTurn, TurnRecord,
};
pub use resolve::TurnOutput;
pub use state::{
    formation_positions, Ball, GameState, Team, TeamPlayer, BALL_START, GOALKEEPER_ID, TEAM_SIZE,
};
pub use types::{
    GameAction, GameStatus, MoveType, PlayerId, Position, StateType, TeamEnum,
};
