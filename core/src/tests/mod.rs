mod available_cells;
mod commit;
mod json;

use crate::state::TEAM_SIZE;
use crate::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn pos(x: u8, y: u8) -> Position {
    Position::new(x, y)
}

fn action(
    team: TeamEnum,
    player_id: PlayerId,
    move_type: MoveType,
    old: (u8, u8),
    new: (u8, u8),
) -> GameAction {
    GameAction {
        player_id,
        move_type,
        old_position: pos(old.0, old.1),
        new_position: pos(new.0, new.1),
        team,
    }
}

/// A game at kickoff with team 1 in possession.
fn fresh_game() -> Game {
    let mut game = Game::new(1);
    game.new_game(TeamEnum::Team1);
    game
}

/// Snapshot builder for seeding arbitrary board layouts via save_state.
fn custom_state(
    team1: [(u8, u8); TEAM_SIZE],
    team2: [(u8, u8); TEAM_SIZE],
    ball: (u8, u8),
    ball_owner: Option<TeamEnum>,
) -> GameState {
    GameState {
        team1_positions: team1.iter().map(|&(x, y)| pos(x, y)).collect(),
        team2_positions: team2.iter().map(|&(x, y)| pos(x, y)).collect(),
        ball_position: pos(ball.0, ball.1),
        ball_owner,
        state_type: StateType::Move,
        clash_random_results: Vec::new(),
    }
}

/// Kickoff game re-seeded to the given layout. History keeps only the
/// start snapshot, so zero-action commits stay legal in tests.
fn seeded_game(state: &GameState) -> Game {
    let mut game = fresh_game();
    game.save_state(state).expect("seed snapshot is well formed");
    game
}

/// Default team 2 kickoff layout (no possession), handy as a base for
/// custom_state calls that only care about team 1.
fn team2_default() -> [(u8, u8); TEAM_SIZE] {
    [(15, 5), (13, 3), (13, 7), (10, 3), (10, 7), (10, 5)]
}

fn team1_default() -> [(u8, u8); TEAM_SIZE] {
    [(1, 5), (3, 3), (3, 7), (6, 3), (6, 7), (6, 5)]
}
