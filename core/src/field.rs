//! Field geometry and path tracing
//!
//! Grid bounds, goal-mouth checks and the straight/diagonal path
//! iterator used for reachability. All constants here must match the
//! on-chain contract exactly; any divergence breaks the off-chain /
//! on-chain agreement this engine exists to preserve.

use crate::types::{MoveType, Position, TeamEnum};

/// Total grid width including the two goal-mouth margin columns.
pub const FIELD_WIDTH: u8 = 17;
/// Total grid height.
pub const FIELD_HEIGHT: u8 = 11;
/// Leftmost column a player may occupy.
pub const PLAY_MIN_X: u8 = 1;
/// Rightmost column a player may occupy.
pub const PLAY_MAX_X: u8 = 15;
/// Lowest row of the goal-mouth band.
pub const GATE_Y_MIN: u8 = 3;
/// Highest row of the goal-mouth band.
pub const GATE_Y_MAX: u8 = 7;

/// Whether a player may occupy this cell. Goal-mouth columns are
/// excluded: only the ball can enter a gate, via PASS or SHOT.
pub fn is_on_field(pos: Position) -> bool {
    pos.x >= PLAY_MIN_X && pos.x <= PLAY_MAX_X && pos.y < FIELD_HEIGHT
}

/// Whether this cell lies inside one of the two goal mouths.
pub fn is_position_in_gates(pos: Position) -> bool {
    (pos.x == 0 || pos.x == FIELD_WIDTH - 1) && pos.y >= GATE_Y_MIN && pos.y <= GATE_Y_MAX
}

/// The team defending the gate this cell belongs to, if any. Team 1
/// defends the `x == 0` gate, team 2 the far one.
pub fn gate_owner(pos: Position) -> Option<TeamEnum> {
    if !is_position_in_gates(pos) {
        return None;
    }
    if pos.x == 0 {
        Some(TeamEnum::Team1)
    } else {
        Some(TeamEnum::Team2)
    }
}

/// Trace the path from `from` toward `to`, one cell per step, in the
/// chessboard metric: each step moves one unit along every axis that
/// has not yet reached its target, so a diagonal "distance 2" move
/// covers 2 cells in both axes.
///
/// The path is inclusive of `to` and truncates the instant a step
/// leaves the bounds valid for `move_type` (PASS and SHOT may enter
/// the goal mouths, RUN and TACKLE may not). `from == to` yields an
/// empty path. The iterator is cheap to clone and restart.
pub fn calculate_path(from: Position, to: Position, move_type: MoveType) -> PathIter {
    let dx = to.x as i16 - from.x as i16;
    let dy = to.y as i16 - from.y as i16;
    PathIter {
        x: from.x as i16,
        y: from.y as i16,
        step_x: dx.signum(),
        step_y: dy.signum(),
        remaining: dx.unsigned_abs().max(dy.unsigned_abs()) as u8,
        target_x: to.x as i16,
        target_y: to.y as i16,
        allow_gates: move_type.moves_ball(),
    }
}

/// Lazy path iterator produced by [`calculate_path`]. Emits cells from
/// nearest to farthest.
#[derive(Debug, Clone)]
pub struct PathIter {
    x: i16,
    y: i16,
    step_x: i16,
    step_y: i16,
    remaining: u8,
    target_x: i16,
    target_y: i16,
    allow_gates: bool,
}

impl Iterator for PathIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }
        if self.x != self.target_x {
            self.x += self.step_x;
        }
        if self.y != self.target_y {
            self.y += self.step_y;
        }
        if self.x < 0 || self.y < 0 {
            self.remaining = 0;
            return None;
        }
        let pos = Position::new(self.x as u8, self.y as u8);
        if !is_on_field(pos) && !(self.allow_gates && is_position_in_gates(pos)) {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;
        Some(pos)
    }
}
