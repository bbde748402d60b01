use super::*;

#[test]
fn test_double_commit_is_rejected() {
    let mut game = fresh_game();
    game.commit_move(TeamEnum::Team1).unwrap();
    assert_eq!(
        game.commit_move(TeamEnum::Team1),
        Err(GameError::AlreadyCommitted {
            team: TeamEnum::Team1
        })
    );
}

#[test]
fn test_resolution_requires_both_commits() {
    let mut game = fresh_game();
    assert_eq!(
        game.calculate_new_state(&[]),
        Err(GameError::TeamsNotCommitted)
    );

    game.commit_move(TeamEnum::Team1).unwrap();
    assert_eq!(
        game.calculate_new_state(&[]),
        Err(GameError::TeamsNotCommitted)
    );
    assert_eq!(game.history().len(), 1, "no state before both commits");
}

#[test]
fn test_zero_action_commit_is_legal_only_at_game_start() {
    let mut game = fresh_game();
    game.commit_move(TeamEnum::Team1).unwrap();
    game.commit_move(TeamEnum::Team2).unwrap();
    let output = game.calculate_new_state(&[]).unwrap();

    assert_eq!(output.new_state.state_type, StateType::Move);
    assert_eq!(game.history().len(), 2);

    // The same zero-action commit on a later turn is missing turn data.
    game.commit_move(TeamEnum::Team1).unwrap();
    game.commit_move(TeamEnum::Team2).unwrap();
    assert_eq!(
        game.calculate_new_state(&[]),
        Err(GameError::MissingActions {
            team: TeamEnum::Team1
        })
    );
}

#[test]
fn test_commit_flags_clear_after_resolution() {
    let mut game = fresh_game();
    game.commit_move(TeamEnum::Team1).unwrap();
    game.commit_move(TeamEnum::Team2).unwrap();
    game.calculate_new_state(&[]).unwrap();

    // Both teams can commit again for the next turn.
    game.do_player_move(&action(TeamEnum::Team1, 3, MoveType::Run, (6, 3), (8, 3)))
        .unwrap();
    game.commit_move(TeamEnum::Team1).unwrap();
    game.do_player_move(&action(TeamEnum::Team2, 3, MoveType::Run, (10, 3), (9, 3)))
        .unwrap();
    game.commit_move(TeamEnum::Team2).unwrap();
    assert!(game.calculate_new_state(&[]).is_ok());
}

#[test]
fn test_save_state_seeds_board_and_clears_staging() {
    let mut game = fresh_game();
    game.do_player_move(&action(TeamEnum::Team1, 3, MoveType::Run, (6, 3), (8, 3)))
        .unwrap();

    let mut team1 = team1_default();
    team1[5] = (9, 4);
    let snapshot = custom_state(team1, team2_default(), (9, 4), Some(TeamEnum::Team1));
    game.save_state(&snapshot).unwrap();

    assert_eq!(game.team(TeamEnum::Team1).player(5).unwrap().position, pos(9, 4));
    assert!(game.team(TeamEnum::Team1).player(5).unwrap().has_ball);
    assert_eq!(game.team(TeamEnum::Team1).player(3).unwrap().old_position, None);
    assert_eq!(game.ball().owner, Some(TeamEnum::Team1));
}

#[test]
fn test_save_state_rejects_wrong_roster_size() {
    let mut game = fresh_game();
    let mut snapshot = custom_state(
        team1_default(),
        team2_default(),
        (8, 5),
        Some(TeamEnum::Team1),
    );
    snapshot.team1_positions.pop();
    assert_eq!(game.save_state(&snapshot), Err(GameError::MalformedState));
}

#[test]
fn test_save_state_rejects_ownerless_carrier() {
    let mut game = fresh_game();
    // Ball owned by team 1 but no team 1 player stands on its cell.
    let snapshot = custom_state(
        team1_default(),
        team2_default(),
        (12, 9),
        Some(TeamEnum::Team1),
    );
    assert_eq!(game.save_state(&snapshot), Err(GameError::MalformedState));
}
