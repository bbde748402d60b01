use super::*;

use serde_json::json;

#[test]
fn test_game_action_uses_camel_case_keys() {
    let value =
        serde_json::to_value(action(TeamEnum::Team1, 3, MoveType::Run, (6, 3), (8, 3))).unwrap();
    assert_eq!(
        value,
        json!({
            "playerId": 3,
            "moveType": "run",
            "oldPosition": {"x": 6, "y": 3},
            "newPosition": {"x": 8, "y": 3},
            "team": "team1",
        })
    );
}

#[test]
fn test_errors_are_tagged_for_api_clients() {
    let error = GameError::OutOfReach {
        team: TeamEnum::Team2,
        player_id: 5,
        action: MoveType::Shot,
        target: pos(16, 2),
    };
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "type": "outOfReach",
            "team": "team2",
            "playerId": 5,
            "action": "shot",
            "target": {"x": 16, "y": 2},
        })
    );

    assert_eq!(
        serde_json::to_value(GameError::GameNotActive).unwrap(),
        json!({"type": "gameNotActive"})
    );
}

#[test]
fn test_game_state_round_trips_through_json() {
    let game = fresh_game();
    let start = &game.history()[0];
    let text = serde_json::to_string(start).unwrap();
    let back: GameState = serde_json::from_str(&text).unwrap();
    assert_eq!(&back, start);
}

#[test]
fn test_state_type_spellings() {
    assert_eq!(
        serde_json::to_value([
            StateType::StartPositions,
            StateType::Move,
            StateType::GoalTeam1,
            StateType::GoalTeam2,
        ])
        .unwrap(),
        json!(["startPositions", "move", "goalTeam1", "goalTeam2"])
    );
}

#[test]
fn test_turn_record_deserializes_from_api_payload() {
    let record: TurnRecord = serde_json::from_value(json!({
        "team1Moves": [{
            "playerId": 3,
            "moveType": "run",
            "oldPosition": {"x": 6, "y": 3},
            "newPosition": {"x": 8, "y": 3},
            "team": "team1",
        }],
        "team2Moves": [],
        "clashRandoms": [42],
    }))
    .unwrap();

    assert_eq!(
        record,
        TurnRecord {
            team1_moves: vec![action(TeamEnum::Team1, 3, MoveType::Run, (6, 3), (8, 3))],
            team2_moves: Vec::new(),
            clash_randoms: vec![42],
        }
    );
}
