use super::*;

fn snapshot_json() -> serde_json::Value {
    serde_json::json!({
        "field": [[null, "p1"], ["", "p2"]],
        "possibleCoords": [{"x": 0, "y": 0}, {"x": 1, "y": 1}],
        "currentPlayer": "p1",
        "playerOneName": "p1",
        "playerTwoName": "p2",
        "gameType": "classic"
    })
}

// =============================================================
// GameResponse deserialization
// =============================================================

#[test]
fn snapshot_deserializes_from_camel_case() {
    let game: GameResponse = serde_json::from_value(snapshot_json()).expect("snapshot");
    assert_eq!(game.current_player, "p1");
    assert_eq!(game.player_one_name, "p1");
    assert_eq!(game.player_two_name, "p2");
    assert_eq!(game.game_type, "classic");
    assert_eq!(game.possible_coords, vec![Coord { x: 0, y: 0 }, Coord { x: 1, y: 1 }]);
}

#[test]
fn missing_winner_is_none() {
    let game: GameResponse = serde_json::from_value(snapshot_json()).expect("snapshot");
    assert!(game.winner.is_none());
}

#[test]
fn winner_field_is_parsed_when_present() {
    let mut json = snapshot_json();
    json["winner"] = serde_json::json!("p2");
    let game: GameResponse = serde_json::from_value(json).expect("snapshot");
    assert_eq!(game.winner.as_deref(), Some("p2"));
}

// =============================================================
// Occupant lookup
// =============================================================

#[test]
fn occupant_normalizes_null_and_empty_string() {
    let game: GameResponse = serde_json::from_value(snapshot_json()).expect("snapshot");
    assert_eq!(game.occupant(0, 0), None);
    assert_eq!(game.occupant(0, 1), None);
    assert_eq!(game.occupant(1, 0), Some("p1"));
    assert_eq!(game.occupant(1, 1), Some("p2"));
}

#[test]
fn occupant_out_of_range_is_none() {
    let game: GameResponse = serde_json::from_value(snapshot_json()).expect("snapshot");
    assert_eq!(game.occupant(9, 0), None);
    assert_eq!(game.occupant(0, 9), None);
}

// =============================================================
// Dimensions
// =============================================================

#[test]
fn dimensions_come_from_field_and_row_zero() {
    let game: GameResponse = serde_json::from_value(snapshot_json()).expect("snapshot");
    assert_eq!(game.rows(), 2);
    assert_eq!(game.cols(), 2);
}

#[test]
fn empty_field_has_zero_dimensions() {
    let mut json = snapshot_json();
    json["field"] = serde_json::json!([]);
    let game: GameResponse = serde_json::from_value(json).expect("snapshot");
    assert_eq!(game.rows(), 0);
    assert_eq!(game.cols(), 0);
}

// =============================================================
// MoveRequest serialization
// =============================================================

#[test]
fn move_request_serializes_to_camel_case() {
    let request = MoveRequest {
        x: 0,
        y: 1,
        player: "p1".to_owned(),
        game_type: "classic".to_owned(),
    };
    let json = serde_json::to_value(&request).expect("serialize");
    assert_eq!(json["x"], 0);
    assert_eq!(json["y"], 1);
    assert_eq!(json["player"], "p1");
    assert_eq!(json["gameType"], "classic");
}
