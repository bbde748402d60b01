use super::*;

#[test]
fn test_own_team_occupancy_excludes_cell_but_does_not_truncate() {
    let game = fresh_game();
    // Team 1 striker at (8,5); teammate #3 sits at (6,3) on the
    // (-1,-1) ray. The occupied cell is excluded, the cell before it
    // is not.
    let cells = game
        .calculate_available_cells(TeamEnum::Team1, 5, MoveType::Run)
        .unwrap();
    assert!(cells.contains(&pos(7, 4)));
    assert!(!cells.contains(&pos(6, 3)));
}

#[test]
fn test_opposing_occupancy_is_a_legal_contested_target() {
    let game = fresh_game();
    // Team 2 striker stands at (10,5), two cells from the ball carrier.
    let cells = game
        .calculate_available_cells(TeamEnum::Team1, 5, MoveType::Run)
        .unwrap();
    assert!(cells.contains(&pos(10, 5)));
}

#[test]
fn test_run_cells_stop_at_field_edge() {
    let game = fresh_game();
    // Goalkeeper at (1,5): one more step left is the gate column,
    // which players may not enter.
    let cells = game
        .calculate_available_cells(TeamEnum::Team1, 0, MoveType::Run)
        .unwrap();
    assert!(!cells.contains(&pos(0, 5)));
    assert!(cells.contains(&pos(2, 5)));
}

#[test]
fn test_pass_may_target_gate_cell_but_run_may_not() {
    let mut team1 = team1_default();
    team1[5] = (2, 5);
    let game = seeded_game(&custom_state(
        team1,
        team2_default(),
        (2, 5),
        Some(TeamEnum::Team1),
    ));

    let pass = game
        .calculate_available_cells(TeamEnum::Team1, 5, MoveType::Pass)
        .unwrap();
    assert!(pass.contains(&pos(0, 5)));

    let run = game
        .calculate_available_cells(TeamEnum::Team1, 5, MoveType::Run)
        .unwrap();
    assert!(!run.contains(&pos(0, 5)));
}

#[test]
fn test_distances_per_move_type() {
    let game = fresh_game();
    // Striker at (8,5), open cells to the right until (10,5) which is
    // contested; check reach along the clear upward ray instead.
    for (move_type, reach) in [
        (MoveType::Tackle, 1u8),
        (MoveType::Run, 2),
        (MoveType::Pass, 3),
        (MoveType::Shot, 4),
    ] {
        let cells = game
            .calculate_available_cells(TeamEnum::Team1, 5, move_type)
            .unwrap();
        assert!(cells.contains(&pos(8, 5 - reach)), "{:?}", move_type);
        if reach < 5 {
            assert!(!cells.contains(&pos(8, 5 - reach - 1)), "{:?}", move_type);
        }
    }
}

#[test]
fn test_unknown_player_is_rejected() {
    let game = fresh_game();
    assert_eq!(
        game.calculate_available_cells(TeamEnum::Team1, 9, MoveType::Run),
        Err(GameError::UnknownPlayer {
            team: TeamEnum::Team1,
            player_id: 9
        })
    );
}
