//! Bit-packed move-set encoding
//!
//! One team's full action set for a turn packs into a single `u128`
//! (one on-chain storage slot / one symmetric-encryption payload).
//! Exactly 6 player slots in roster order, 21 bits each, player 0 at
//! the least significant end:
//!
//! ```text
//! bits 0..3   move type  (0 = empty sentinel, 1=RUN, 2=TACKLE, 3=PASS, 4=SHOT)
//! bits 3..8   old x      bits 8..12  old y
//! bits 12..17 new x      bits 17..21 new y
//! ```
//!
//! The layout is shared with the contract; deserialization is the
//! exact inverse of serialization, and both directions reject any
//! integer that does not describe a legal action set.

use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::field::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::state::TEAM_SIZE;
use crate::types::{GameAction, MoveType, Position, TeamEnum};

const SLOT_BITS: u32 = 21;
const MOVE_TYPE_BITS: u32 = 3;
const X_BITS: u32 = 5;
const Y_BITS: u32 = 4;
const SLOT_MASK: u128 = (1 << SLOT_BITS) - 1;

const RUN_CODE: u128 = 1;
const TACKLE_CODE: u128 = 2;
const PASS_CODE: u128 = 3;
const SHOT_CODE: u128 = 4;

fn move_type_code(move_type: MoveType) -> u128 {
    match move_type {
        MoveType::Run => RUN_CODE,
        MoveType::Tackle => TACKLE_CODE,
        MoveType::Pass => PASS_CODE,
        MoveType::Shot => SHOT_CODE,
    }
}

fn pack_slot(action: &GameAction) -> GameResult<u128> {
    let slot = action.player_id;
    for pos in [action.old_position, action.new_position] {
        if pos.x >= FIELD_WIDTH || pos.y >= FIELD_HEIGHT {
            return Err(GameError::MalformedMoves { slot });
        }
    }
    let mut bits = move_type_code(action.move_type);
    bits |= (action.old_position.x as u128) << MOVE_TYPE_BITS;
    bits |= (action.old_position.y as u128) << (MOVE_TYPE_BITS + X_BITS);
    bits |= (action.new_position.x as u128) << (MOVE_TYPE_BITS + X_BITS + Y_BITS);
    bits |= (action.new_position.y as u128) << (MOVE_TYPE_BITS + X_BITS + Y_BITS + X_BITS);
    Ok(bits)
}

fn unpack_slot(bits: u128, slot: u8, team: TeamEnum) -> GameResult<Option<GameAction>> {
    if bits == 0 {
        return Ok(None);
    }
    let move_type = match bits & ((1 << MOVE_TYPE_BITS) - 1) {
        RUN_CODE => MoveType::Run,
        TACKLE_CODE => MoveType::Tackle,
        PASS_CODE => MoveType::Pass,
        SHOT_CODE => MoveType::Shot,
        _ => return Err(GameError::MalformedMoves { slot }),
    };
    let old_x = ((bits >> MOVE_TYPE_BITS) & ((1 << X_BITS) - 1)) as u8;
    let old_y = ((bits >> (MOVE_TYPE_BITS + X_BITS)) & ((1 << Y_BITS) - 1)) as u8;
    let new_x = ((bits >> (MOVE_TYPE_BITS + X_BITS + Y_BITS)) & ((1 << X_BITS) - 1)) as u8;
    let new_y = ((bits >> (MOVE_TYPE_BITS + X_BITS + Y_BITS + X_BITS)) & ((1 << Y_BITS) - 1)) as u8;
    let action = GameAction {
        player_id: slot,
        move_type,
        old_position: Position::new(old_x, old_y),
        new_position: Position::new(new_x, new_y),
        team,
    };
    for pos in [action.old_position, action.new_position] {
        if pos.x >= FIELD_WIDTH || pos.y >= FIELD_HEIGHT {
            return Err(GameError::MalformedMoves { slot });
        }
    }
    Ok(Some(action))
}

/// Pack a team's action set into the contract slot format. Actions may
/// arrive in any order; slots are keyed by player id. A player id
/// outside the roster, a duplicate, a wrong-team action or an
/// out-of-grid coordinate is malformed.
pub fn serialize_moves(actions: &[GameAction], team: TeamEnum) -> GameResult<u128> {
    let mut encoded: u128 = 0;
    let mut seen = [false; TEAM_SIZE];
    for action in actions {
        let slot = action.player_id;
        if action.team != team || slot as usize >= TEAM_SIZE {
            return Err(GameError::MalformedMoves { slot });
        }
        if seen[slot as usize] {
            return Err(GameError::MalformedMoves { slot });
        }
        seen[slot as usize] = true;
        encoded |= pack_slot(action)? << (slot as u32 * SLOT_BITS);
    }
    Ok(encoded)
}

/// Unpack a contract slot integer into actions, roster order, sentinel
/// (all-zero) slots skipped. Exact inverse of [`serialize_moves`]: any
/// bit pattern it would not produce is rejected, including set bits
/// above the 126 used ones.
pub fn deserialize_moves(encoded: u128, team: TeamEnum) -> GameResult<Vec<GameAction>> {
    if encoded >> (TEAM_SIZE as u32 * SLOT_BITS) != 0 {
        return Err(GameError::MalformedMoves {
            slot: TEAM_SIZE as u8,
        });
    }
    let mut actions = Vec::new();
    for slot in 0..TEAM_SIZE as u8 {
        let bits = (encoded >> (slot as u32 * SLOT_BITS)) & SLOT_MASK;
        if let Some(action) = unpack_slot(bits, slot, team)? {
            actions.push(action);
        }
    }
    Ok(actions)
}
