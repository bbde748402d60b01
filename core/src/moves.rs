//! Move legality: reachable cells and action validation
//!
//! Both the strict live-play path and the on-chain verifier agree on
//! this logic, so it is kept as pure functions over the roster.

use alloc::vec::Vec;

use crate::error::{GameError, GameResult};
use crate::field::{is_on_field, is_position_in_gates};
use crate::state::Team;
use crate::types::{GameAction, MoveType, PlayerId, Position};

/// The 8 compass/diagonal directions, in fixed enumeration order.
/// Order matters: it fixes the ordering of `calculate_available_cells`
/// output across implementations.
const DIRECTIONS: [(i16, i16); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Every cell the player may legally target with `move_type`.
///
/// Each direction is traced independently out to the move's maximum
/// distance and truncates at the field boundary (goal mouths count as
/// in-bounds for PASS/SHOT only). A cell occupied by a player of the
/// mover's own team is excluded; a cell occupied by an opposing player
/// is included — it is a contested destination, resolved as a clash at
/// commit time, not rejected at staging time. Opposing occupancy
/// therefore never truncates a direction either.
pub fn calculate_available_cells(
    mover: &Team,
    player_id: PlayerId,
    move_type: MoveType,
) -> GameResult<Vec<Position>> {
    let origin = mover.player(player_id)?.position;
    let allow_gates = move_type.moves_ball();
    let mut cells = Vec::new();

    for &(dx, dy) in &DIRECTIONS {
        for step in 1..=move_type.max_distance() as i16 {
            let x = origin.x as i16 + dx * step;
            let y = origin.y as i16 + dy * step;
            if x < 0 || y < 0 {
                break;
            }
            let pos = Position::new(x as u8, y as u8);
            if !is_on_field(pos) && !(allow_gates && is_position_in_gates(pos)) {
                break;
            }
            if mover.occupies(pos) {
                continue;
            }
            cells.push(pos);
        }
    }

    Ok(cells)
}

/// Validate a staged action against the current board. Used by the
/// strict live-play entry point; replay of already-verified logs goes
/// through the trusted path instead.
pub fn validate_action(mover: &Team, action: &GameAction) -> GameResult<()> {
    let player = mover.player(action.player_id)?;

    if player.is_staged() {
        return Err(GameError::PlayerAlreadyMoved {
            team: mover.team,
            player_id: action.player_id,
        });
    }

    if player.position != action.old_position {
        return Err(GameError::StalePosition {
            team: mover.team,
            player_id: action.player_id,
            action: action.move_type,
        });
    }

    if action.move_type.moves_ball() && !player.has_ball {
        return Err(GameError::NotBallCarrier {
            team: mover.team,
            player_id: action.player_id,
            action: action.move_type,
        });
    }

    let available = calculate_available_cells(mover, action.player_id, action.move_type)?;
    if !available.contains(&action.new_position) {
        return Err(GameError::OutOfReach {
            team: mover.team,
            player_id: action.player_id,
            action: action.move_type,
            target: action.new_position,
        });
    }

    Ok(())
}
